pub mod cli;
pub mod config;
pub mod logging;
pub mod scenario;
pub mod ui;
pub mod utils;

use miette::Diagnostic;

pub use clarity_mock;

/// Result type alias for the harness
pub type Result<T> = miette::Result<T>;

/// Error types for the harness
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum HarnessError {
    #[error("Lookup failed: {0}")]
    #[diagnostic(
        code(harness::lookup_failed),
        help("Run `clarity-harness list` to see the known contracts and functions, or declare extra ones under [[contracts]] in .clarity-harness.toml.")
    )]
    LookupError(String),

    #[error("Invalid arguments: {0}")]
    #[diagnostic(
        code(harness::invalid_arguments),
        help("Arguments are a JSON array. Example: --args '[\"0x0123456789abcdef\", \"ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM\"]'. Use {{\"type\": \"uint\", \"value\": 1}} to force a type.")
    )]
    InvalidArguments(String),

    #[error("Invalid mock: {0}")]
    #[diagnostic(
        code(harness::invalid_mock),
        help("Mocks are written CONTRACT.function=JSON, e.g. --mock 'data-sharing.share-data={{\"success\": true}}'. Use `undefined` for an absent result.")
    )]
    InvalidMock(String),

    #[error("Scenario failed: {0}")]
    #[diagnostic(
        code(harness::scenario_failed),
        help("Re-run with -v to log every configure and call the scenario performs.")
    )]
    ScenarioFailed(String),

    #[error("File operation failed: {0}")]
    #[diagnostic(
        code(harness::file_error),
        help("Check if you have necessary permissions and that the path exists.")
    )]
    FileError(String),
}
