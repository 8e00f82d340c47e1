use crate::cli::args::{CallArgs, ListArgs, OutputFormat, ScenarioArgs};
use crate::config::Config;
use crate::logging;
use crate::ui::formatter::Formatter;
use crate::utils::{parse_global, ArgumentParser};
use crate::{HarnessError, Result};
use clarity_mock::{dispatcher, KnownFunction, MockError, MockRegistry};
use serde_json::json;

fn print_info(message: impl AsRef<str>) {
    println!("{}", Formatter::info(message));
}

fn print_success(message: impl AsRef<str>) {
    println!("{}", Formatter::success(message));
}

fn print_warning(message: impl AsRef<str>) {
    println!("{}", Formatter::warning(message));
}

fn resolve_format(requested: Option<OutputFormat>, config: &Config) -> OutputFormat {
    requested
        .or_else(|| config.output_format())
        .unwrap_or(OutputFormat::Text)
}

/// Build the registry a single command works against: known contracts,
/// then config declarations and globals, then command-line mocks.
pub fn build_registry(
    config: &Config,
    mocks: &[String],
    globals: &[String],
) -> Result<MockRegistry> {
    let mut registry = MockRegistry::with_known_contracts();
    config.apply_to(&mut registry);

    registry.apply_specs(mocks).map_err(|e| match e {
        MockError::Lookup(e) => HarnessError::LookupError(e.to_string()),
        other => HarnessError::InvalidMock(other.to_string()),
    })?;
    logging::log_mocks_applied(mocks.len());

    for spec in globals {
        let (name, value) =
            parse_global(spec).map_err(|e| HarnessError::InvalidArguments(e.to_string()))?;
        registry.set_global(&name, &value);
    }
    Ok(registry)
}

/// Execute the call command
pub fn call(args: CallArgs, config: &Config) -> Result<()> {
    let format = resolve_format(args.format, config);
    let mut registry = build_registry(config, &args.mocks, &args.globals)?;

    let call_args = match &args.args {
        Some(args_json) => ArgumentParser::new()
            .parse_args_string(args_json)
            .map_err(|e| HarnessError::InvalidArguments(e.to_string()))?,
        None => Vec::new(),
    };

    logging::log_call_start(&args.contract, &args.function, call_args.len());
    let result = dispatcher::call(&mut registry, &args.contract, &args.function, &call_args)
        .map_err(|e| {
            logging::log_lookup_failure(&args.contract, &args.function);
            HarnessError::LookupError(e.to_string())
        })?;
    let rendered = result.as_ref().map(ToString::to_string);
    logging::log_call_complete(&args.contract, &args.function, rendered.as_deref());

    match format {
        OutputFormat::Json => {
            let mut output = json!({
                "contract": args.contract,
                "function": args.function,
                "args": call_args.iter().map(|a| a.to_json()).collect::<Vec<_>>(),
                "defined": result.is_some(),
            });
            if let Some(value) = &result {
                output["result"] = value.to_json();
            }
            println!("{}", output);
        }
        OutputFormat::Text => {
            print_info(Formatter::format_call(
                &args.contract,
                &args.function,
                &call_args,
            ));
            if let Some(sender) = registry.tx_sender() {
                print_info(format!("tx-sender: {}", sender));
            }
            match &result {
                Some(value) => print_success(format!("Result: {}", value)),
                None => print_warning("Result: undefined"),
            }
        }
    }
    Ok(())
}

/// Execute the scenario command
pub fn scenario(args: ScenarioArgs, config: &Config) -> Result<()> {
    crate::scenario::run_scenario(args, config)
}

/// Execute the list command
pub fn list(args: ListArgs, config: &Config) -> Result<()> {
    let format = resolve_format(args.format, config);
    let mut registry = MockRegistry::with_known_contracts();
    config.apply_to(&mut registry);

    let contracts: Vec<String> = match &args.contract {
        Some(contract) => {
            if !registry.contract_names().any(|name| name == contract.as_str()) {
                return Err(HarnessError::LookupError(format!(
                    "Unknown contract '{}'",
                    contract
                ))
                .into());
            }
            vec![contract.clone()]
        }
        None => registry.contract_names().map(str::to_string).collect(),
    };

    match format {
        OutputFormat::Json => {
            let mut listing = serde_json::Map::new();
            for contract in &contracts {
                let functions: Vec<&str> = registry
                    .functions(contract)
                    .map_err(|e| HarnessError::LookupError(e.to_string()))?
                    .collect();
                listing.insert(contract.clone(), json!(functions));
            }
            println!("{}", serde_json::Value::Object(listing));
        }
        OutputFormat::Text => {
            for contract in &contracts {
                print_info(contract);
                let functions = registry
                    .functions(contract)
                    .map_err(|e| HarnessError::LookupError(e.to_string()))?;
                for function in functions {
                    match KnownFunction::resolve(contract, function) {
                        Some(known) => println!("{}", Formatter::format_known_function(known)),
                        None => println!("  {}", function),
                    }
                }
            }
        }
    }
    Ok(())
}
