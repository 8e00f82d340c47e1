//! `clarity-harness call` against stubbed contract functions.

use super::common::{stdout_json, TestContext, DATA_HASH, OTHER_PARTY, PATIENT};
use predicates::prelude::*;

#[test]
fn share_data_returns_configured_success() {
    let ctx = TestContext::default();
    ctx.cmd()
        .args([
            "call",
            "--contract",
            "data-sharing",
            "--function",
            "share-data",
            "--args",
            &format!(r#"["{DATA_HASH}", {{"type": "buff", "value": "encrypted data"}}]"#),
            "--mock",
            r#"data-sharing.share-data={"success": true}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"Result: {"success":true}"#));
}

#[test]
fn grant_access_reports_not_found_in_json() {
    let ctx = TestContext::default();
    let output = ctx
        .cmd()
        .args([
            "call",
            "-c",
            "data-sharing",
            "-f",
            "grant-access",
            "-a",
            &format!(r#"["{DATA_HASH}", "{OTHER_PARTY}"]"#),
            "-m",
            r#"data-sharing.grant-access={"success": false, "error": 404}"#,
            "--format",
            "json",
        ])
        .output()
        .expect("Failed to run call");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["defined"], true);
    assert_eq!(json["result"]["success"], false);
    assert_eq!(json["result"]["error"], 404);
    assert_eq!(json["args"][1], OTHER_PARTY);
}

#[test]
fn get_data_returns_configured_bytes() {
    let ctx = TestContext::default();
    let output = ctx
        .cmd()
        .args([
            "call",
            "-c",
            "data-sharing",
            "-f",
            "get-data",
            "-a",
            &format!(r#"["{PATIENT}", "{DATA_HASH}"]"#),
            "-m",
            r#"data-sharing.get-data={"success": true, "value": "0x656e637279707465642064617461"}"#,
            "--format",
            "json",
        ])
        .output()
        .expect("Failed to run call");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["result"]["value"], "0x656e637279707465642064617461");
}

#[test]
fn undefined_mock_yields_absent_result() {
    let ctx = TestContext::default();
    ctx.cmd()
        .args([
            "call",
            "-c",
            "patient-incentives",
            "-f",
            "get-participation",
            "-a",
            &format!(r#"["{OTHER_PARTY}", 999]"#),
            "-m",
            "patient-incentives.get-participation=undefined",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: undefined"));
}

#[test]
fn token_balance_of_zero_is_defined() {
    let ctx = TestContext::default();
    let output = ctx
        .cmd()
        .args([
            "call",
            "-c",
            "patient-incentives",
            "-f",
            "get-token-balance",
            "-a",
            &format!(r#"["{OTHER_PARTY}"]"#),
            "-m",
            "patient-incentives.get-token-balance=0",
            "--format",
            "json",
        ])
        .output()
        .expect("Failed to run call");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["defined"], true);
    assert_eq!(json["result"], 0);
}

#[test]
fn unconfigured_known_function_is_undefined() {
    let ctx = TestContext::default();
    let output = ctx
        .cmd()
        .args([
            "call",
            "-c",
            "patient-incentives",
            "-f",
            "participate-in-study",
            "-a",
            "[1]",
            "--format",
            "json",
        ])
        .output()
        .expect("Failed to run call");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["defined"], false);
    assert!(json.get("result").is_none());
}

#[test]
fn unknown_function_is_a_lookup_error() {
    let ctx = TestContext::default();
    ctx.cmd()
        .args(["call", "-c", "data-sharing", "-f", "delete-data"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown function 'delete-data'"));
}

#[test]
fn unknown_contract_is_a_lookup_error() {
    let ctx = TestContext::default();
    ctx.cmd()
        .args(["call", "-c", "billing", "-f", "charge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown contract 'billing'"));
}

#[test]
fn malformed_mock_is_rejected() {
    let ctx = TestContext::default();
    ctx.cmd()
        .args([
            "call",
            "-c",
            "data-sharing",
            "-f",
            "share-data",
            "-m",
            "data-sharing.share-data",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid mock"));
}

#[test]
fn malformed_arguments_are_rejected() {
    let ctx = TestContext::default();
    ctx.cmd()
        .args(["call", "-c", "data-sharing", "-f", "share-data", "-a", "[1.5]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid arguments"));
}

#[test]
fn config_file_declares_extra_contracts_and_globals() {
    let ctx = TestContext::default();
    ctx.create_file(
        ".clarity-harness.toml",
        &format!(
            r#"
[globals]
tx-sender = "{OTHER_PARTY}"

[[contracts]]
name = "research-proposals"
functions = ["get-proposal"]
"#
        ),
    )
    .expect("Failed to write config");

    ctx.cmd()
        .args([
            "call",
            "-c",
            "research-proposals",
            "-f",
            "get-proposal",
            "-a",
            "[1]",
            "-m",
            r#"research-proposals.get-proposal={"title": "Sleep study"}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("tx-sender: {OTHER_PARTY}")))
        .stdout(predicate::str::contains("Sleep study"));
}

#[test]
fn global_flag_overrides_tx_sender() {
    let ctx = TestContext::default();
    ctx.cmd()
        .args([
            "call",
            "-c",
            "data-sharing",
            "-f",
            "share-data",
            "--global",
            &format!("tx-sender={OTHER_PARTY}"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("tx-sender: {OTHER_PARTY}")));
}
