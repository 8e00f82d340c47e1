//! `clarity-harness scenario` end to end.

use super::common::TestContext;
use predicates::prelude::*;

const PASSING: &str = r#"
[[steps]]
name = "Register study as researcher"
contract = "research-proposals"
function = "get-researcher"
mock = '"ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM"'
args = '[1]'
expect = '"ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM"'

[[steps]]
contract = "patient-incentives"
function = "register-study"
mock = '{"success": true}'
args = '[1, 1000]'
expect_success = true

[[steps]]
contract = "patient-incentives"
function = "participate-in-study"
mock = '{"success": false, "error": 404}'
args = '[999]'
expect_success = false
expect_error = 404

[[steps]]
contract = "patient-incentives"
function = "get-participation"
mock = '{"tokensEarned": 10}'
args = '["ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM", 1]'
expect = '{"tokensEarned": 10}'
"#;

#[test]
fn passing_scenario_succeeds() {
    let ctx = TestContext::default();
    let path = ctx
        .create_file("incentives.toml", PASSING)
        .expect("Failed to write scenario");

    ctx.cmd()
        .arg("scenario")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 4 passed."))
        .stdout(predicate::str::contains("All scenario steps passed successfully!"));
}

#[test]
fn failing_step_stops_the_scenario() {
    let ctx = TestContext::default();
    let path = ctx
        .create_file(
            "failing.toml",
            r#"
[[steps]]
contract = "data-sharing"
function = "get-data"
mock = '{"success": false, "error": 403}'
expect_success = true

[[steps]]
contract = "data-sharing"
function = "share-data"
"#,
        )
        .expect("Failed to write scenario");

    ctx.cmd()
        .arg("scenario")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Step 1 failed."))
        .stdout(predicate::str::contains("Step 2").not())
        .stderr(predicate::str::contains("Scenario failed"));
}

#[test]
fn lookup_error_mid_scenario_still_reports_earlier_steps() {
    let ctx = TestContext::default();
    let path = ctx
        .create_file(
            "halting.toml",
            r#"
[[steps]]
contract = "patient-incentives"
function = "get-token-balance"
mock = '{"type": "uint", "value": 0}'
expect = "0"

[[steps]]
contract = "patient-incentives"
function = "burn-tokens"
"#,
        )
        .expect("Failed to write scenario");

    ctx.cmd()
        .arg("scenario")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Step 1 passed."))
        .stdout(predicate::str::contains(
            "Step 2: patient-incentives.burn-tokens could not run.",
        ))
        .stderr(predicate::str::contains("burn-tokens"));
}

#[test]
fn missing_scenario_file_is_reported() {
    let ctx = TestContext::default();
    ctx.cmd()
        .args(["scenario", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read scenario file"));
}
