use crate::cli::args::ScenarioArgs;
use crate::config::Config;
use crate::logging;
use crate::ui::formatter::Formatter;
use crate::utils::{parse_return_value, ArgumentParser};
use crate::{HarnessError, Result};
use clarity_mock::{dispatcher, ClarityValue, MockRegistry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize)]
pub struct Scenario {
    #[serde(default)]
    pub globals: BTreeMap<String, String>,
    pub steps: Vec<ScenarioStep>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ScenarioStep {
    pub name: Option<String>,
    pub contract: String,
    pub function: String,
    /// JSON return value to configure before the call; `undefined` for absent
    pub mock: Option<String>,
    /// JSON array of call arguments
    pub args: Option<String>,
    /// Exact expected result as JSON; `undefined` for absent
    pub expect: Option<String>,
    pub expect_success: Option<bool>,
    pub expect_error: Option<u32>,
    /// Reset every stub before this step
    #[serde(default)]
    pub reset: bool,
}

impl ScenarioStep {
    pub fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("{}.{}", self.contract, self.function))
    }
}

/// What happened when one step ran.
#[derive(Debug, Default)]
pub struct StepOutcome {
    pub result: Option<ClarityValue>,
    pub passed: Vec<String>,
    pub failed: Vec<String>,
}

impl StepOutcome {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    fn check(&mut self, ok: bool, pass: String, fail: String) {
        if ok {
            self.passed.push(pass);
        } else {
            self.failed.push(fail);
        }
    }
}

pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let scenario_content = fs::read_to_string(path).map_err(|e| {
        HarnessError::FileError(format!("Failed to read scenario file {:?}: {}", path, e))
    })?;

    let scenario: Scenario = toml::from_str(&scenario_content)
        .map_err(|e| HarnessError::FileError(format!("Failed to parse scenario TOML: {}", e)))?;
    Ok(scenario)
}

/// Configure, call and check one step.
///
/// Unknown contracts or functions and malformed JSON are harness errors;
/// failed expectations are reported in the returned outcome.
pub fn execute_step(registry: &mut MockRegistry, step: &ScenarioStep) -> Result<StepOutcome> {
    if step.reset {
        registry.reset();
    }

    if let Some(mock) = &step.mock {
        let value = parse_return_value(mock)
            .map_err(|e| HarnessError::InvalidMock(format!("{}: {}", step.label(), e)))?;
        let configured = match value {
            Some(value) => registry.configure(&step.contract, &step.function, value),
            None => registry.configure_absent(&step.contract, &step.function),
        };
        configured.map_err(|e| HarnessError::LookupError(e.to_string()))?;
    }

    let args = match &step.args {
        Some(args_json) => ArgumentParser::new()
            .parse_args_string(args_json)
            .map_err(|e| HarnessError::InvalidArguments(e.to_string()))?,
        None => Vec::new(),
    };

    let result = dispatcher::call(registry, &step.contract, &step.function, &args).map_err(|e| {
        logging::log_lookup_failure(&step.contract, &step.function);
        HarnessError::LookupError(e.to_string())
    })?;

    let mut outcome = StepOutcome::default();
    let rendered = Formatter::format_result(result.as_ref());

    if let Some(expected_raw) = &step.expect {
        let expected = parse_return_value(expected_raw)
            .map_err(|e| HarnessError::InvalidArguments(format!("expect: {}", e)))?;
        let matched = match (&expected, &result) {
            (Some(expected), Some(actual)) => expected.matches(actual),
            (None, None) => true,
            _ => false,
        };
        outcome.check(
            matched,
            "Return value assertion passed".to_string(),
            format!(
                "Return value assertion failed! Expected '{}', got '{}'",
                Formatter::format_result(expected.as_ref()),
                rendered
            ),
        );
    }

    let envelope = result.as_ref().and_then(ClarityValue::as_envelope);

    if let Some(expected_success) = step.expect_success {
        outcome.check(
            envelope.map(|e| e.success) == Some(expected_success),
            format!("success == {}", expected_success),
            format!(
                "Expected success == {}, got '{}'",
                expected_success, rendered
            ),
        );
    }

    if let Some(expected_code) = step.expect_error {
        outcome.check(
            envelope.and_then(|e| e.error) == Some(expected_code),
            format!("error == {}", expected_code),
            format!("Expected error {}, got '{}'", expected_code, rendered),
        );
    }

    outcome.result = result;
    Ok(outcome)
}

/// Result of running a scenario up to its first failing step.
#[derive(Debug, Default)]
pub struct ScenarioReport {
    /// Steps whose expectations all held
    pub passed: usize,
    pub outcomes: Vec<StepOutcome>,
    /// Harness error that halted the run, raised by step `outcomes.len() + 1`
    pub error: Option<miette::Report>,
}

impl ScenarioReport {
    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.outcomes.iter().all(StepOutcome::is_success)
    }
}

/// Run every step against one registry, stopping at the first failed
/// expectation or harness error.
pub fn execute_scenario(registry: &mut MockRegistry, scenario: &Scenario) -> ScenarioReport {
    for (name, value) in &scenario.globals {
        registry.set_global(name, value);
    }

    let mut report = ScenarioReport {
        outcomes: Vec::with_capacity(scenario.steps.len()),
        ..ScenarioReport::default()
    };
    for (i, step) in scenario.steps.iter().enumerate() {
        logging::log_scenario_step(i + 1, &step.label());
        let outcome = match execute_step(registry, step) {
            Ok(outcome) => outcome,
            Err(err) => {
                report.error = Some(err);
                break;
            }
        };
        let ok = outcome.is_success();
        report.outcomes.push(outcome);
        if !ok {
            break;
        }
        report.passed += 1;
    }
    report
}

pub fn run_scenario(args: ScenarioArgs, config: &Config) -> Result<()> {
    println!(
        "{}",
        Formatter::info(format!("Loading scenario file: {:?}", args.scenario))
    );
    logging::log_loading_scenario(&args.scenario.to_string_lossy());
    let scenario = load_scenario(&args.scenario)?;

    let mut registry = MockRegistry::with_known_contracts();
    config.apply_to(&mut registry);

    println!(
        "{}",
        Formatter::success(format!(
            "Running {} scenario steps...\n",
            scenario.steps.len()
        ))
    );

    let report = execute_scenario(&mut registry, &scenario);

    for (i, (step, outcome)) in scenario.steps.iter().zip(&report.outcomes).enumerate() {
        println!(
            "{}",
            Formatter::info(format!("Step {}: {}", i + 1, step.label()))
        );
        println!(
            "  Result: {}",
            Formatter::format_result(outcome.result.as_ref())
        );
        for pass in &outcome.passed {
            println!("  {}", Formatter::success(format!("✓ {}", pass)));
        }
        for fail in &outcome.failed {
            println!("  {}", Formatter::error(format!("✗ {}", fail)));
        }
        if outcome.is_success() {
            println!("{}", Formatter::success(format!("Step {} passed.\n", i + 1)));
        } else {
            println!("{}", Formatter::warning(format!("Step {} failed.\n", i + 1)));
        }
    }

    let passed = report.passed;
    logging::log_scenario_complete(passed, scenario.steps.len());
    if let Some(err) = report.error {
        let halted = report.outcomes.len();
        if let Some(step) = scenario.steps.get(halted) {
            let message = format!("Step {}: {} could not run.\n", halted + 1, step.label());
            println!("{}", Formatter::error(message));
        }
        return Err(err);
    }
    if passed == scenario.steps.len() {
        println!(
            "{}",
            Formatter::success("All scenario steps passed successfully!")
        );
        Ok(())
    } else {
        Err(HarnessError::ScenarioFailed(format!(
            "step {} of {} failed",
            passed + 1,
            scenario.steps.len()
        ))
        .into())
    }
}
