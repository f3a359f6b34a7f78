#![allow(clippy::unwrap_used)]
//! CLI smoke tests.
//!
//! None of these reach the real inference service: every run either stops at
//! validation or points the endpoint at a closed local port.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// An `ask` command isolated from the user's config, `.env` and API key.
#[allow(deprecated)]
fn ask(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ask").unwrap();
    cmd.current_dir(home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("GROQ_API_KEY")
        .env_remove("ASK_LOG");
    cmd
}

fn write_config(home: &TempDir, contents: &str) {
    let dir = home.path().join("ask");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), contents).unwrap();
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    ask(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("get the answer in another"))
        .stdout(predicate::str::contains("--from"))
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("multi-line question"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    ask(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_languages_list() {
    let home = TempDir::new().unwrap();
    ask(&home)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("English"))
        .stdout(predicate::str::contains("Hindi"))
        .stdout(predicate::str::contains("Marathi"));
}

#[test]
fn test_missing_credential_is_reported_before_any_call() {
    let home = TempDir::new().unwrap();
    ask(&home)
        .args(["--from", "en", "--to", "hi", "test"])
        .assert()
        .code(exitcode::CONFIG)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "GROQ_API_KEY is not set. Please add it to your .env file.",
        ));
}

#[test]
fn test_missing_credential_wins_over_empty_question() {
    let home = TempDir::new().unwrap();
    ask(&home)
        .write_stdin("")
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("GROQ_API_KEY is not set"));
}

#[test]
fn test_custom_key_variable_named_in_error() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[service]\napi_key_env = \"ASK_SMOKE_TEST_KEY\"\n");
    ask(&home)
        .env_remove("ASK_SMOKE_TEST_KEY")
        .arg("test")
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("ASK_SMOKE_TEST_KEY is not set"));
}

#[test]
fn test_empty_question_warns() {
    let home = TempDir::new().unwrap();
    ask(&home)
        .env("GROQ_API_KEY", "gsk_smoke_test")
        .write_stdin("   \n\t\n")
        .assert()
        .code(exitcode::DATAERR)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Please enter a question first."));
}

#[test]
fn test_credential_loaded_from_dotenv() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join(".env"), "GROQ_API_KEY=gsk_from_dotenv\n").unwrap();
    // Getting past the credential check shows the .env file was read.
    ask(&home)
        .write_stdin("")
        .assert()
        .code(exitcode::DATAERR)
        .stderr(predicate::str::contains("Please enter a question first."));
}

#[test]
fn test_unreachable_service_is_reported() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[service]\nendpoint = \"http://127.0.0.1:9\"\n");
    ask(&home)
        .env("GROQ_API_KEY", "gsk_smoke_test")
        .arg("What causes rain?")
        .assert()
        .code(exitcode::UNAVAILABLE)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "The assistant service failed to respond",
        ))
        .stderr(predicate::str::contains("WARN").not())
        .stderr(predicate::str::contains("inference call failed").not());
}

#[test]
fn test_unsupported_language() {
    let home = TempDir::new().unwrap();
    ask(&home)
        .args(["--to", "fr", "test"])
        .assert()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("Unsupported language"));
}

#[test]
fn test_broken_config_file_is_an_error() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[service\nendpoint = ");
    ask(&home)
        .arg("test")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_config_never_prints_key() {
    let home = TempDir::new().unwrap();
    ask(&home)
        .env("GROQ_API_KEY", "gsk_very_secret")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("GROQ_API_KEY"))
        .stdout(predicate::str::contains("(set)"))
        .stdout(predicate::str::contains("llama3-70b-8192"))
        .stdout(predicate::str::contains("gsk_very_secret").not());
}
