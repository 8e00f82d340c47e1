pub mod arguments;

pub use arguments::{parse_global, parse_return_value, ArgumentParseError, ArgumentParser};
