use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BROWSER_EXPORT: &str = r#"[
  {
    "id": "1717171717171",
    "goal": "Write a novel",
    "result": {
      "shortDescription": "Finish a first draft",
      "motivation": "Words add up.",
      "steps": [
        {"title": "Outline", "description": "Sketch the plot"},
        {"title": "Draft", "description": "Write daily"},
        {"title": "Revise", "description": "Edit ruthlessly"}
      ]
    },
    "stepSolutions": {"0": "Use index cards."},
    "settings": {"model": "gemini-3-flash-preview", "language": "English", "customInstructions": ""},
    "createdAt": 1717171717171
  }
]"#;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Command with --no-color, a private database and no API credentials
fn waypoint_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("waypoint").expect("Failed to find waypoint binary");
    cmd.env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY")
        .arg("--no-color")
        .args(["--database-file", db_path.to_str().unwrap()]);
    cmd
}

/// Imports [`BROWSER_EXPORT`] into the database at `db_path`.
fn import_browser_export(temp_dir: &TempDir, db_path: &Path) {
    let file = temp_dir.path().join("export.json");
    fs::write(&file, BROWSER_EXPORT).unwrap();

    waypoint_cmd(db_path)
        .args(["history", "import", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 history records"));
}

#[test]
fn test_cli_default_lists_empty_history() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    waypoint_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("# History"))
        .stdout(predicate::str::contains("No history yet."));
}

#[test]
fn test_cli_settings_defaults() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    waypoint_cmd(&db_path)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flash (Fast)"))
        .stdout(predicate::str::contains("- Language: English"))
        .stdout(predicate::str::contains("- Persona: (none)"));
}

#[test]
fn test_cli_settings_set_persists() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    waypoint_cmd(&db_path)
        .args([
            "settings",
            "set",
            "--model",
            "complex",
            "--language",
            "spanish",
            "--instructions",
            "Be brief",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Settings saved"));

    waypoint_cmd(&db_path)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pro (Complex)"))
        .stdout(predicate::str::contains("- Language: Spanish"))
        .stdout(predicate::str::contains("- Persona: Be brief"));
}

#[test]
fn test_cli_settings_set_requires_a_change() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    waypoint_cmd(&db_path)
        .args(["settings", "set"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change"));
}

#[test]
fn test_cli_import_list_and_show() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    import_browser_export(&temp_dir, &db_path);

    waypoint_cmd(&db_path)
        .args(["history", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Write a novel (ID: 1717171717171)"))
        .stdout(predicate::str::contains("1/3 steps solved"));

    waypoint_cmd(&db_path)
        .args(["history", "show", "1717171717171"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Finish a first draft"))
        .stdout(predicate::str::contains("### 1. Outline"))
        .stdout(predicate::str::contains("Use index cards."));
}

#[test]
fn test_cli_export_round_trip() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    import_browser_export(&temp_dir, &db_path);

    let output = temp_dir.path().join("backup.json");
    waypoint_cmd(&db_path)
        .args(["history", "export", "--output", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 history records"));

    let exported: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let original: serde_json::Value = serde_json::from_str(BROWSER_EXPORT).unwrap();
    assert_eq!(exported, original);
}

#[test]
fn test_cli_import_rejects_non_array() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let file = temp_dir.path().join("bad.json");
    fs::write(&file, r#"{"id": "1"}"#).unwrap();

    waypoint_cmd(&db_path)
        .args(["history", "import", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import error"));

    waypoint_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No history yet."));
}

#[test]
fn test_cli_show_unknown_record_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    waypoint_cmd(&db_path)
        .args(["history", "show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No history record with ID 42"));
}

#[test]
fn test_cli_goal_requires_api_key() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    waypoint_cmd(&db_path)
        .args(["goal", "Learn piano"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn test_cli_step_without_history_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    waypoint_cmd(&db_path)
        .env("GEMINI_API_KEY", "test-key")
        .args(["step", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No history yet"));
}

#[test]
fn test_cli_step_number_starts_at_one() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    waypoint_cmd(&db_path)
        .env("GEMINI_API_KEY", "test-key")
        .args(["step", "0"])
        .assert()
        .failure();
}

#[test]
fn test_cli_solved_step_is_served_from_history() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    import_browser_export(&temp_dir, &db_path);

    // The base URL points nowhere; a remote call would fail the command.
    waypoint_cmd(&db_path)
        .env("GEMINI_API_KEY", "test-key")
        .env("WAYPOINT_API_BASE_URL", "http://127.0.0.1:9")
        .args(["step", "1", "--record", "1717171717171"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Step 1: Outline"))
        .stdout(predicate::str::contains("Use index cards."));
}

#[test]
fn test_cli_step_out_of_range_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    import_browser_export(&temp_dir, &db_path);

    waypoint_cmd(&db_path)
        .env("GEMINI_API_KEY", "test-key")
        .args(["s", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("step 4 does not exist"));
}

#[test]
fn test_cli_unreachable_model_reports_step_failure() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    import_browser_export(&temp_dir, &db_path);

    waypoint_cmd(&db_path)
        .env("GEMINI_API_KEY", "test-key")
        .env("WAYPOINT_API_BASE_URL", "http://127.0.0.1:9")
        .args(["step", "2", "--record", "1717171717171"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Error: Could not get a guide for step 2. Please try again",
        ))
        .stderr(predicate::str::contains("Step 2 was not solved"));
}
