//! Integration tests for the doccheck CLI binary
//!
//! These tests execute the compiled binary with `assert_cmd` against
//! synthetic projects and verify exit codes, the human report and the JSON
//! contract.
//!
//! Every project has a `.git` marker so configuration discovery never walks
//! out of the temporary directory.

use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;
use serde_json::Value;
use std::process::Command;

use doccheck_utils::test_support::ContentTree;

/// Project with `content/` laid out like the canonical scenario
fn scenario_project() -> ContentTree {
    ContentTree::new()
        .dir(".git")
        .doc("content/3.4", "en-US", "intro.md")
        .doc("content/3.5", "en-US", "intro.md")
        .doc("content/3.5", "es-ES", "intro.md")
}

fn doccheck(project: &ContentTree) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("doccheck"));
    cmd.current_dir(project.root());
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd
}

const VERSIONS: [&str; 4] = ["--supported-version", "3.4", "--supported-version", "3.5"];

#[test]
fn scenario_conforms() {
    let project = scenario_project();

    doccheck(&project)
        .arg("check")
        .args(VERSIONS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Documentation Layout Check"))
        .stdout(predicate::str::contains("✓ CONFORMS"))
        .stdout(predicate::str::contains("[SKIP]"));
}

#[test]
fn missing_english_source_is_layout_violation() {
    let project = scenario_project().remove("content/3.5/en-US");

    doccheck(&project)
        .arg("check")
        .args(VERSIONS)
        .assert()
        .code(3)
        .stdout(predicate::str::contains("✗ LAYOUT VIOLATIONS"))
        .stdout(predicate::str::contains("en-US missing from: 3.5"));
}

#[test]
fn stray_version_reported_in_json() {
    let project = scenario_project().doc("content/3.6", "en-US", "intro.md");

    let output = doccheck(&project)
        .args(["check", "--json"])
        .args(VERSIONS)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["ok"], false);
    assert_eq!(report["schema_version"], "1");

    let checks = report["checks"].as_array().unwrap();
    let versions = checks
        .iter()
        .find(|c| c["name"] == "supported_versions")
        .unwrap();
    assert_eq!(versions["status"], "fail");
    assert_eq!(versions["conditions"][0]["actual"], "[3.4, 3.5, 3.6]");
}

#[test]
fn versions_from_package_manifest() {
    let project = scenario_project().file(
        "package.json",
        r#"{"name": "docs", "supportedVersions": ["3.4", "3.5"]}"#,
    );

    doccheck(&project).arg("check").assert().success();
}

#[test]
fn versions_from_config_file() {
    let project = scenario_project().file(
        ".doccheck/config.toml",
        "[versions]\nsupported = [\"3.5\", \"3.4\"]\n",
    );

    doccheck(&project).arg("check").assert().success();
}

#[test]
fn no_version_list_is_config_error() {
    let project = scenario_project();

    doccheck(&project)
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("versions.supported"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn duplicate_versions_rejected() {
    let project = scenario_project();

    doccheck(&project)
        .arg("check")
        .args(VERSIONS)
        .args(["--supported-version", "3.4"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("duplicate entry '3.4'"));
}

#[test]
fn unknown_extension_policy_rejected() {
    let project = scenario_project();

    doccheck(&project)
        .args(["check", "--extension-policy", "strict"])
        .args(VERSIONS)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("extension_policy"));
}

#[test]
fn warn_policy_respects_strict_exit() {
    let project = scenario_project().file("content/3.4/en-US/doc/img/diagram.png", "png");

    doccheck(&project)
        .args(["check", "--extension-policy", "warn"])
        .args(VERSIONS)
        .assert()
        .success()
        .stdout(predicate::str::contains("[WARN]"));

    doccheck(&project)
        .args(["check", "--extension-policy", "warn", "--strict-exit"])
        .args(VERSIONS)
        .assert()
        .code(3)
        .stdout(predicate::str::contains("strict mode"));
}

#[test]
fn non_markdown_file_fails_by_default() {
    let project = scenario_project().file("content/3.4/en-US/doc/img/diagram.png", "png");

    doccheck(&project)
        .arg("check")
        .args(VERSIONS)
        .assert()
        .code(3)
        .stdout(predicate::str::contains("img/diagram.png"));
}

#[test]
fn missing_content_root_fails_checks() {
    let project = ContentTree::new().dir(".git");

    doccheck(&project)
        .arg("check")
        .args(VERSIONS)
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Check aborted"));
}

#[test]
fn config_command_shows_sources() {
    let project = scenario_project().file(
        ".doccheck/config.toml",
        "[content]\nsource_locale = \"en-GB\"\n",
    );

    doccheck(&project)
        .args(["config", "--doc-dir", "docs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source_locale = en-GB (from config)"))
        .stdout(predicate::str::contains("doc_dir = docs (from cli)"))
        .stdout(predicate::str::contains("extension = md (from default)"));
}

#[test]
fn config_command_json() {
    let project = scenario_project();

    let output = doccheck(&project)
        .args(["config", "--json"])
        .args(VERSIONS)
        .output()
        .unwrap();

    assert!(output.status.success());
    let config: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["schema_version"], "1");
    assert_eq!(config["config_path"], Value::Null);
    assert_eq!(config["values"]["supported_versions"]["value"], "3.4, 3.5");
    assert_eq!(config["values"]["supported_versions"]["source"], "cli");
}

#[test]
fn subcommand_is_required() {
    let project = scenario_project();

    doccheck(&project).assert().code(2);
}
