//! Smoke tests for the command-line binary.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[allow(clippy::expect_used)]
fn bin() -> Command {
    Command::cargo_bin("contract-auditor").expect("binary builds")
}

#[test]
fn test_segment_command_lists_clauses() {
    bin()
        .arg("segment")
        .arg(fixture_path("service_agreement.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("10 clause(s)"))
        .stdout(predicate::str::contains("1. Definitions"))
        .stdout(predicate::str::contains("Recital (Background)"));
}

#[test]
fn test_segment_command_missing_file() {
    bin()
        .arg("segment")
        .arg("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_audit_command_requires_api_key() {
    bin()
        .env_remove("GROQ_API_KEY")
        .arg("audit")
        .arg(fixture_path("service_agreement.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("GROQ_API_KEY"));
}

#[test]
fn test_audit_command_rejects_unknown_format() {
    bin()
        .env("GROQ_API_KEY", "test-key")
        .arg("audit")
        .arg("contract.odt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported document format"));
}

#[test]
fn test_help_lists_subcommands() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("audit"))
        .stdout(predicate::str::contains("segment"))
        .stdout(predicate::str::contains("ask"));
}
