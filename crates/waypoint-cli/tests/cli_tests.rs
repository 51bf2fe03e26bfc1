use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Command with --no-color, run from `dir` so no stray `.env` is picked up
fn waypoint_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("waypoint").expect("Failed to find waypoint binary");
    cmd.current_dir(dir.path())
        .env_remove("GROQ_API_KEY")
        .arg("--no-color");
    cmd
}

#[test]
fn test_cli_help_lists_server_flags() {
    let temp_dir = create_cli_test_environment();

    waypoint_cmd(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--groq-api-key"))
        .stdout(predicate::str::contains("--history-limit"));
}

#[test]
fn test_cli_requires_api_key() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    waypoint_cmd(&temp_dir)
        .args(["--database-file", db_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GROQ_API_KEY"));

    // Nothing is opened before the configuration is valid
    assert!(!db_path.exists());
}

#[test]
fn test_cli_api_key_from_env_file() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    std::fs::write(temp_dir.path().join(".env"), "GROQ_API_KEY=from-dotenv\n")
        .expect("Failed to write .env");

    // Key is found, so the run gets as far as parsing the bind address
    waypoint_cmd(&temp_dir)
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "--bind",
            "not an address",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid bind address"));
}

#[test]
fn test_cli_rejects_bad_bind_address() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    waypoint_cmd(&temp_dir)
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "--groq-api-key",
            "test-key",
            "--bind",
            "not an address",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid bind address"));

    // The store was opened and its schema created before binding
    assert!(db_path.exists());
}

#[test]
fn test_cli_rejects_subcommands() {
    let temp_dir = create_cli_test_environment();

    waypoint_cmd(&temp_dir)
        .args(["--groq-api-key", "test-key", "history"])
        .assert()
        .failure();
}
