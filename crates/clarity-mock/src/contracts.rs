//! The contracts and functions the harness knows how to stub.

use crate::error::LookupError;
use std::fmt;
use std::str::FromStr;

pub const DATA_SHARING: &str = "data-sharing";
pub const PATIENT_INCENTIVES: &str = "patient-incentives";
pub const RESEARCH_PROPOSALS: &str = "research-proposals";

/// Name of the global holding the transaction sender.
pub const TX_SENDER: &str = "tx-sender";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KnownFunction {
    ShareData,
    GrantAccess,
    GetData,
    RegisterStudy,
    ParticipateInStudy,
    GetParticipation,
    GetTokenBalance,
    GetResearcher,
}

impl KnownFunction {
    pub const ALL: [KnownFunction; 8] = [
        KnownFunction::ShareData,
        KnownFunction::GrantAccess,
        KnownFunction::GetData,
        KnownFunction::RegisterStudy,
        KnownFunction::ParticipateInStudy,
        KnownFunction::GetParticipation,
        KnownFunction::GetTokenBalance,
        KnownFunction::GetResearcher,
    ];

    pub fn contract(self) -> &'static str {
        match self {
            Self::ShareData | Self::GrantAccess | Self::GetData => DATA_SHARING,
            Self::RegisterStudy
            | Self::ParticipateInStudy
            | Self::GetParticipation
            | Self::GetTokenBalance => PATIENT_INCENTIVES,
            Self::GetResearcher => RESEARCH_PROPOSALS,
        }
    }

    pub fn function(self) -> &'static str {
        match self {
            Self::ShareData => "share-data",
            Self::GrantAccess => "grant-access",
            Self::GetData => "get-data",
            Self::RegisterStudy => "register-study",
            Self::ParticipateInStudy => "participate-in-study",
            Self::GetParticipation => "get-participation",
            Self::GetTokenBalance => "get-token-balance",
            Self::GetResearcher => "get-researcher",
        }
    }

    /// Positional argument names, for listings and diagnostics only.
    pub fn parameters(self) -> &'static [&'static str] {
        match self {
            Self::ShareData => &["data-hash", "encrypted-data"],
            Self::GrantAccess => &["data-hash", "researcher"],
            Self::GetData => &["patient", "data-hash"],
            Self::RegisterStudy => &["study-id", "total-tokens"],
            Self::ParticipateInStudy => &["study-id"],
            Self::GetParticipation => &["patient", "study-id"],
            Self::GetTokenBalance => &["account"],
            Self::GetResearcher => &["study-id"],
        }
    }

    pub fn resolve(contract: &str, function: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.contract() == contract && f.function() == function)
    }

    pub fn for_contract(contract: &str) -> impl Iterator<Item = KnownFunction> + '_ {
        Self::ALL.into_iter().filter(move |f| f.contract() == contract)
    }

    /// Known contract names in declaration order.
    pub fn contracts() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for f in Self::ALL {
            if !names.contains(&f.contract()) {
                names.push(f.contract());
            }
        }
        names
    }
}

impl fmt::Display for KnownFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.contract(), self.function())
    }
}

impl FromStr for KnownFunction {
    type Err = LookupError;

    /// Parses `contract.function`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (contract, function) = s.rsplit_once('.').unwrap_or((s, ""));
        if !Self::contracts().contains(&contract) {
            return Err(LookupError::UnknownContract {
                contract: contract.to_string(),
            });
        }
        Self::resolve(contract, function).ok_or_else(|| LookupError::UnknownFunction {
            contract: contract.to_string(),
            function: function.to_string(),
        })
    }
}

/// Identities and payloads shared by the contract test suites.
pub mod fixtures {
    use crate::value::ClarityValue;

    /// The data owner; also the default `tx-sender`.
    pub const PATIENT: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
    /// A second principal with no rights over the patient's data.
    pub const OTHER_PARTY: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";

    pub const DATA_HASH_HEX: &str = "0123456789abcdef0123456789abcdef";
    pub const ENCRYPTED_DATA: &str = "encrypted data";

    /// 16-byte record hash.
    pub fn data_hash() -> ClarityValue {
        ClarityValue::Buffer(vec![
            0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab,
            0xcd, 0xef,
        ])
    }

    pub fn encrypted_data() -> ClarityValue {
        ClarityValue::buffer(ENCRYPTED_DATA)
    }

    pub fn patient() -> ClarityValue {
        ClarityValue::principal(PATIENT)
    }

    pub fn other_party() -> ClarityValue {
        ClarityValue::principal(OTHER_PARTY)
    }
}
