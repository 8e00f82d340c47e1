pub mod args;
pub mod commands;

pub use args::{
    CallArgs, Cli, Commands, CompletionsArgs, ListArgs, OutputFormat, ScenarioArgs, Verbosity,
};
