use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clarity-harness")]
#[command(
    about = "Call stubbed Clarity contract functions and run mock scenarios",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            return Verbosity::Quiet;
        }
        match self.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Trace,
}

impl Verbosity {
    pub fn to_log_level(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "debug",
            Verbosity::Trace => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dispatch one call against the stub registry
    Call(CallArgs),

    /// Run a TOML scenario of configure, call and expect steps
    Scenario(ScenarioArgs),

    /// List the known contracts and their functions
    List(ListArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
pub struct CallArgs {
    /// Contract name (e.g. data-sharing)
    #[arg(short, long)]
    pub contract: String,

    /// Function name (e.g. share-data)
    #[arg(short, long)]
    pub function: String,

    /// Function arguments as JSON array (e.g. '["0x0123abcd", "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM"]')
    #[arg(short, long)]
    pub args: Option<String>,

    /// Stub a return value as CONTRACT.function=JSON (repeatable).
    /// Use `undefined` as the JSON to stub an absent result.
    #[arg(short, long = "mock", value_name = "SPEC")]
    pub mocks: Vec<String>,

    /// Override a chain global as NAME=VALUE (repeatable)
    #[arg(long = "global", value_name = "NAME=VALUE")]
    pub globals: Vec<String>,

    /// Output format (defaults to the config file, then text)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Parser)]
pub struct ScenarioArgs {
    /// Path to the scenario TOML file
    pub scenario: PathBuf,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Only list functions of this contract
    #[arg(short, long)]
    pub contract: Option<String>,

    /// Output format (defaults to the config file, then text)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
