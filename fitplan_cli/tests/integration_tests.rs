//! Integration tests for the fitplan binary.
//!
//! These tests verify end-to-end behavior including:
//! - Profile setup workflow
//! - Routine generation and persistence
//! - Health metrics output
//! - Favorites and progress logging

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fitplan"))
}

/// Store a reference profile: 30y male, 180cm / 80kg, fat loss
fn set_profile(data_dir: &std::path::Path, training_days: &str, level: &str) {
    cli()
        .arg("profile")
        .arg("set")
        .arg("--data-dir")
        .arg(data_dir)
        .arg("--name")
        .arg("Test")
        .arg("--age")
        .arg("30")
        .arg("--gender")
        .arg("male")
        .arg("--height")
        .arg("180")
        .arg("--weight")
        .arg("80")
        .arg("--training-days")
        .arg(training_days)
        .arg("--goal")
        .arg("fat-loss")
        .arg("--level")
        .arg(level)
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile saved"));
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Personalized fitness planning system",
        ));
}

#[test]
fn test_profile_set_and_show() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    set_profile(&data_dir, "3", "beginner");

    // Profile lands under users/default
    assert!(data_dir.join("users/default/profile.json").exists());

    cli()
        .arg("profile")
        .arg("show")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Name:          Test"))
        .stdout(predicate::str::contains("Goal:          fat loss"))
        .stdout(predicate::str::contains("Level:         beginner"));
}

#[test]
fn test_generate_requires_profile() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("generate")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no profile for user 'default'"));
}

#[test]
fn test_generate_saves_routine() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    set_profile(&data_dir, "3", "beginner");

    cli()
        .arg("generate")
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--seed")
        .arg("7")
        .assert()
        .success()
        .stdout(predicate::str::contains("Routine generated and saved"));

    let routine_path = data_dir.join("users/default/routine.json");
    assert!(routine_path.exists());

    let content = fs::read_to_string(&routine_path).expect("Failed to read routine");
    assert!(content.contains("exercise_id"));
}

#[test]
fn test_three_day_routine_has_abc_focus() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    set_profile(&data_dir, "3", "beginner");

    cli()
        .arg("generate")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Chest, Shoulders and Triceps"))
        .stdout(predicate::str::contains("Back and Biceps"))
        .stdout(predicate::str::contains("Legs, Glutes and Abdomen"));
}

#[test]
fn test_routine_before_generate() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("routine")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No routine yet"));
}

#[test]
fn test_metrics_output() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    set_profile(&data_dir, "3", "beginner");

    // 80kg at 180cm -> BMI 24.7; Harris-Benedict at moderate activity
    // minus the fat-loss deficit lands at 2373 kcal
    cli()
        .arg("metrics")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("24.7 (normal)"))
        .stdout(predicate::str::contains("2373 kcal"));
}

#[test]
fn test_meals_filtered_by_goal() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    set_profile(&data_dir, "3", "beginner");

    cli()
        .arg("meals")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Meals for goal 'fat loss'"))
        .stdout(predicate::str::contains("meal-1"));
}

#[test]
fn test_favorites_workflow() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .arg("favorites")
        .arg("add-exercise")
        .arg("ex-1")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added exercise ex-1"));

    cli()
        .arg("favorites")
        .arg("add-meal")
        .arg("meal-1")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    cli()
        .arg("favorites")
        .arg("list")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("[ex-1]"))
        .stdout(predicate::str::contains("[meal-1]"));

    cli()
        .arg("favorites")
        .arg("remove-exercise")
        .arg("ex-1")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    cli()
        .arg("favorites")
        .arg("list")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("[ex-1]").not());
}

#[test]
fn test_favorites_rejects_unknown_exercise() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("favorites")
        .arg("add-exercise")
        .arg("ex-999")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown exercise id"));
}

#[test]
fn test_progress_log_and_history() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .arg("progress")
        .arg("log")
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--weight")
        .arg("79.5")
        .arg("--exercise")
        .arg("ex-1")
        .arg("--exercise")
        .arg("ex-2")
        .arg("--notes")
        .arg("felt strong")
        .assert()
        .success()
        .stdout(predicate::str::contains("Progress entry logged"));

    assert!(data_dir.join("users/default/progress.jsonl").exists());

    cli()
        .arg("progress")
        .arg("history")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("weight: 79.5 kg"))
        .stdout(predicate::str::contains("exercises: 2"))
        .stdout(predicate::str::contains("(felt strong)"));
}

#[test]
fn test_progress_export_creates_csv() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    for _ in 0..3 {
        cli()
            .arg("progress")
            .arg("log")
            .arg("--data-dir")
            .arg(&data_dir)
            .arg("--weight")
            .arg("80")
            .assert()
            .success();
    }

    let csv_path = data_dir.join("export.csv");

    cli()
        .arg("progress")
        .arg("export")
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--output")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 progress entries"));

    let csv_content = fs::read_to_string(&csv_path).expect("Failed to read CSV");
    assert!(csv_content.contains("id,recorded_at"));

    // Export leaves the log itself untouched
    assert!(data_dir.join("users/default/progress.jsonl").exists());
}

#[test]
fn test_separate_users_have_separate_data() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    set_profile(&data_dir, "3", "beginner");

    cli()
        .arg("profile")
        .arg("show")
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--user")
        .arg("alice")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no profile for user 'alice'"));
}

#[test]
fn test_invalid_goal_rejected() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("profile")
        .arg("set")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--name")
        .arg("Test")
        .arg("--age")
        .arg("30")
        .arg("--gender")
        .arg("male")
        .arg("--height")
        .arg("180")
        .arg("--weight")
        .arg("80")
        .arg("--training-days")
        .arg("3")
        .arg("--goal")
        .arg("get-huge")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown goal"));
}

#[test]
fn test_nonpositive_height_rejected() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("profile")
        .arg("set")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--name")
        .arg("Test")
        .arg("--age")
        .arg("30")
        .arg("--gender")
        .arg("male")
        .arg("--height")
        .arg("0")
        .arg("--weight")
        .arg("80")
        .arg("--training-days")
        .arg("3")
        .arg("--goal")
        .arg("fat-loss")
        .assert()
        .failure();
}
