//! Structured logging helpers for the harness.
//!
//! Thin wrappers over `tracing` so commands and the scenario runner emit
//! events with consistent field names.

pub fn log_mocks_applied(count: usize) {
    tracing::debug!(count, "Applied mock specs");
}

pub fn log_call_start(contract: &str, function: &str, args_count: usize) {
    tracing::info!(contract, function, args = args_count, "Dispatching call");
}

pub fn log_call_complete(contract: &str, function: &str, result: Option<&str>) {
    match result {
        Some(result) => tracing::info!(contract, function, result, "Call returned"),
        None => tracing::info!(contract, function, "Call returned nothing"),
    }
}

pub fn log_lookup_failure(contract: &str, function: &str) {
    tracing::error!(contract, function, "No stub registered");
}

pub fn log_loading_scenario(path: &str) {
    tracing::info!(scenario = path, "Loading scenario");
}

pub fn log_scenario_step(index: usize, label: &str) {
    tracing::info!(step = index, label, "Running scenario step");
}

pub fn log_scenario_complete(passed: usize, total: usize) {
    if passed == total {
        tracing::info!(passed, total, "Scenario completed");
    } else {
        tracing::warn!(passed, total, "Scenario stopped at failing step");
    }
}
