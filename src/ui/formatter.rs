use clarity_mock::{ClarityValue, KnownFunction};
use crossterm::style::Stylize;
use std::sync::atomic::{AtomicBool, Ordering};

/// Pretty printing utilities for harness output
pub struct Formatter;

impl Formatter {
    /// Format a call as `contract.function(arg, ...)`.
    pub fn format_call(contract: &str, function: &str, args: &[ClarityValue]) -> String {
        let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
        format!("{}.{}({})", contract, function, rendered.join(", "))
    }

    /// Format a call result; absent results render as `undefined`.
    pub fn format_result(result: Option<&ClarityValue>) -> String {
        match result {
            Some(value) => value.to_string(),
            None => "undefined".to_string(),
        }
    }

    /// Format one known function with its parameter names.
    pub fn format_known_function(function: KnownFunction) -> String {
        format!(
            "  {} ({})",
            function.function(),
            function.parameters().join(", ")
        )
    }

    /// Format an informational message in blue.
    pub fn info(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Info)
    }

    /// Format a success message in green.
    pub fn success(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Success)
    }

    /// Format a warning message in yellow.
    pub fn warning(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Warning)
    }

    /// Format an error message in red.
    pub fn error(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Error)
    }

    /// Configure whether ANSI colors are enabled.
    pub fn configure_colors(enable: bool) {
        COLOR_ENABLED.store(enable, Ordering::Relaxed);
    }

    /// Auto-configure color output based on environment.
    pub fn configure_colors_from_env() {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self::configure_colors(!no_color);
    }

    fn apply_color(message: &str, kind: ColorKind) -> String {
        if !COLOR_ENABLED.load(Ordering::Relaxed) {
            return message.to_string();
        }

        match kind {
            ColorKind::Info => format!("{}", message.blue()),
            ColorKind::Success => format!("{}", message.green()),
            ColorKind::Warning => format!("{}", message.yellow()),
            ColorKind::Error => format!("{}", message.red()),
        }
    }
}

#[derive(Copy, Clone)]
enum ColorKind {
    Info,
    Success,
    Warning,
    Error,
}

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);
