//! Stubbed contract calls for testing code that talks to Clarity contracts.
//!
//! A [`MockRegistry`] holds one stub per `(contract, function)` pair. Tests
//! configure the value a stub returns, dispatch calls through
//! [`dispatcher::call`], and assert on the returned [`CallEnvelope`].
//!
//! ```
//! use clarity_mock::{dispatcher, CallEnvelope, ClarityValue, MockEnvBuilder};
//!
//! let mut registry = MockEnvBuilder::new()
//!     .with_mock_call("data-sharing", "share-data", CallEnvelope::ok().into())
//!     .build();
//!
//! let result = dispatcher::call(
//!     &mut registry,
//!     "data-sharing",
//!     "share-data",
//!     &[ClarityValue::buffer(vec![0u8; 16]), ClarityValue::buffer("encrypted data")],
//! )
//! .unwrap();
//!
//! assert!(result.unwrap().as_envelope().unwrap().success);
//! ```

pub mod assertions;
pub mod builder;
pub mod contracts;
pub mod dispatcher;
pub mod envelope;
pub mod error;
pub mod mock;
pub mod value;

pub use builder::MockEnvBuilder;
pub use contracts::KnownFunction;
pub use envelope::{CallEnvelope, ERR_NOT_FOUND, ERR_UNAUTHORIZED};
pub use error::{LookupError, MockError};
pub use mock::{Invocation, MockCallLogEntry, MockKey, MockRegistry, Stub};
pub use value::{ClarityValue, ValueError};
