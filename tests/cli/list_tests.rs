//! `clarity-harness list` and `completions`.

use super::common::{stdout_json, TestContext};
use predicates::prelude::*;

#[test]
fn lists_every_known_function() {
    let ctx = TestContext::default();
    ctx.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("share-data (data-hash, encrypted-data)"))
        .stdout(predicate::str::contains("get-token-balance (account)"))
        .stdout(predicate::str::contains("get-researcher (study-id)"));
}

#[test]
fn lists_one_contract_as_json() {
    let ctx = TestContext::default();
    let output = ctx
        .cmd()
        .args(["list", "--contract", "data-sharing", "--format", "json"])
        .output()
        .expect("Failed to run list");

    assert!(output.status.success());
    let json = stdout_json(&output);
    let functions = json["data-sharing"].as_array().expect("function array");
    assert_eq!(functions.len(), 3);
    assert!(json.get("patient-incentives").is_none());
}

#[test]
fn unknown_contract_cannot_be_listed() {
    let ctx = TestContext::default();
    ctx.cmd()
        .args(["list", "--contract", "billing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown contract 'billing'"));
}

#[test]
fn generates_bash_completions() {
    let ctx = TestContext::default();
    ctx.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clarity-harness"));
}
