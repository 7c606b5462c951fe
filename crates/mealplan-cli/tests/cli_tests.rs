use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FULL_PLAN: &str = "Mardi\nJeudi\nnext\nnext\nEpitech\nnext\n13:00 - 14:00\nnext\nnext\n";

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with plain output and no submit delay
fn mealplan_cmd(db_path: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("mealplan").expect("Failed to find mealplan binary");
    cmd.arg("--no-color")
        .arg("--submit-delay-ms")
        .arg("0")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

#[test]
fn test_cli_full_wizard_submits_plan() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    mealplan_cmd(&db_path)
        .arg("plan")
        .write_stdin(FULL_PLAN)
        .assert()
        .success()
        .stdout(predicate::str::contains("## Étape 1/5"))
        .stdout(predicate::str::contains("## Étape 5/5"))
        .stdout(predicate::str::contains("Submitted plan with ID: 1"))
        .stdout(predicate::str::contains("- **Days**: Mardi, Jeudi"))
        .stdout(predicate::str::contains("- **Time slot**: 13:00 - 14:00"));
}

#[test]
fn test_cli_restart_after_submission_plans_again() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let input = format!("{FULL_PLAN}restart\n{FULL_PLAN}quit\n");

    mealplan_cmd(&db_path)
        .arg("plan")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Submitted plan with ID: 1"))
        .stdout(predicate::str::contains("Submitted plan with ID: 2"))
        .stdout(predicate::str::contains("Plan discarded.").not());

    mealplan_cmd(&db_path)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Plan 2"))
        .stdout(predicate::str::contains("## Plan 1"));
}

#[test]
fn test_cli_confirm_twice_is_rejected() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let input = format!("{FULL_PLAN}next\n");

    mealplan_cmd(&db_path)
        .arg("plan")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Plan already submitted"))
        .stdout(predicate::str::contains("Submitted plan with ID: 2").not());
}

#[test]
fn test_cli_wizard_is_default_command() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    mealplan_cmd(&db_path)
        .write_stdin(FULL_PLAN)
        .assert()
        .success()
        .stdout(predicate::str::contains("Submitted plan with ID: 1"));
}

#[test]
fn test_cli_submit_blocked_without_days() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    mealplan_cmd(&db_path)
        .arg("plan")
        .write_stdin("next\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("select at least one day"))
        .stdout(predicate::str::contains("Plan discarded."))
        .stdout(predicate::str::contains("Étape 2/5").not());
}

#[test]
fn test_cli_unknown_option_reports_error() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    mealplan_cmd(&db_path)
        .arg("plan")
        .write_stdin("Samedi\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Unknown weekday option 'Samedi'",
        ));
}

#[test]
fn test_cli_back_returns_to_previous_step() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    mealplan_cmd(&db_path)
        .arg("plan")
        .write_stdin("1\nnext\nnext\nback\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Étape 3/5"))
        .stdout(predicate::str::contains("Étape 2/5"));
}

#[test]
fn test_cli_history_after_submission() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    mealplan_cmd(&db_path)
        .write_stdin(FULL_PLAN)
        .assert()
        .success();

    mealplan_cmd(&db_path)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Submitted Plans"))
        .stdout(predicate::str::contains("## Plan 1"))
        .stdout(predicate::str::contains("Epitech"));

    mealplan_cmd(&db_path)
        .args(["history", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Days**: Mardi, Jeudi"));
}

#[test]
fn test_cli_history_empty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    mealplan_cmd(&db_path)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_dry_run_does_not_record() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    mealplan_cmd(&db_path)
        .args(["plan", "--dry-run"])
        .write_stdin(FULL_PLAN)
        .assert()
        .success()
        .stdout(predicate::str::contains("Submitted plan with ID: 1"));

    mealplan_cmd(&db_path)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_show_missing_plan_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    mealplan_cmd(&db_path)
        .args(["history", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan with ID 99 not found"));
}

#[test]
fn test_cli_delete_requires_confirm() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    mealplan_cmd(&db_path)
        .write_stdin(FULL_PLAN)
        .assert()
        .success();

    mealplan_cmd(&db_path)
        .args(["history", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("explicit confirmation"));

    mealplan_cmd(&db_path)
        .args(["history", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted plan with ID: 1"))
        .stdout(predicate::str::contains("- **Days**: Mardi, Jeudi"));
}

#[test]
fn test_cli_catalog() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    mealplan_cmd(&db_path)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Lundi (`monday`)"))
        .stdout(predicate::str::contains("- 14:00 - 15:00"));
}

#[test]
fn test_cli_custom_catalog() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let catalog_path = temp_dir.path().join("catalog.json");
    std::fs::write(
        &catalog_path,
        r#"{
            "weekdays": [{"id": "monday", "label": "Monday"}],
            "locations": [{"id": "station-f", "label": "Station F"}],
            "time_slots": [{"id": "noon", "label": "12:00 - 13:00"}]
        }"#,
    )
    .expect("Failed to write catalog");

    mealplan_cmd(&db_path)
        .arg("--catalog")
        .arg(&catalog_path)
        .write_stdin("1\nnext\nnext\n1\nnext\n1\nnext\nnext\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Location**: Station F"));
}

#[test]
fn test_cli_invalid_catalog_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let catalog_path = temp_dir.path().join("catalog.json");
    std::fs::write(
        &catalog_path,
        r#"{"weekdays": [], "locations": [], "time_slots": []}"#,
    )
    .expect("Failed to write catalog");

    mealplan_cmd(&db_path)
        .arg("--catalog")
        .arg(&catalog_path)
        .arg("catalog")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}
