use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn goalflow(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("goalflow").unwrap();
    cmd.env("GOALFLOW_DB_PATH", dir.path().join("data").join("goalflow.db"));
    cmd
}

fn run_json(dir: &TempDir, args: &[&str]) -> Value {
    let output = goalflow(dir).args(args).assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("goalflow").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Local-first goal tracker"));
}

#[test]
fn test_cli_goal_help() {
    let mut cmd = Command::cargo_bin("goalflow").unwrap();
    cmd.args(["goal", "add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("target-date"));
}

#[test]
fn test_goal_with_subtasks_tracks_progress() {
    let dir = TempDir::new().unwrap();
    let goal = run_json(&dir, &["goal", "add", "Run 10k", "-t", "2030-05-01", "-p", "high"]);
    let goal_id = goal["id"].as_str().unwrap();
    assert_eq!(goal["progress"], 0);
    assert_eq!(goal["priority"], "high");

    let first = run_json(&dir, &["subtask", "add", goal_id, "5k", "-t", "2030-03-01"]);
    run_json(&dir, &["subtask", "add", goal_id, "8k", "-t", "2030-04-01"]);
    run_json(&dir, &["subtask", "done", first["id"].as_str().unwrap()]);

    let detail = run_json(&dir, &["goal", "show", goal_id]);
    assert_eq!(detail["goal"]["progress"], 50);
    assert_eq!(detail["subtasks"][0]["title"], "8k");
}

#[test]
fn test_missing_goal_fails() {
    let dir = TempDir::new().unwrap();
    goalflow(&dir)
        .args(["goal", "show", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_invalid_priority_rejected() {
    let dir = TempDir::new().unwrap();
    goalflow(&dir)
        .args(["goal", "add", "Bad", "-t", "2030-01-01", "-p", "urgent"])
        .assert()
        .failure();
}

#[test]
fn test_idea_conversion_once() {
    let dir = TempDir::new().unwrap();
    let idea = run_json(&dir, &["idea", "add", "Learn the cello", "--impact", "high"]);
    let idea_id = idea["id"].as_str().unwrap();

    let converted = run_json(&dir, &["idea", "convert", idea_id]);
    assert_eq!(converted["idea"]["isConverted"], true);
    assert_eq!(converted["goal"]["title"], "Learn the cello");
    assert_eq!(converted["goal"]["icon"], "Lightbulb");

    goalflow(&dir).args(["idea", "convert", idea_id]).assert().failure();
    let goals = run_json(&dir, &["goal", "list"]);
    assert_eq!(goals.as_array().unwrap().len(), 1);
}

#[test]
fn test_quote_of_the_day() {
    let dir = TempDir::new().unwrap();
    let quote = run_json(&dir, &["quote"]);
    assert!(quote["text"].is_string());
    let all = run_json(&dir, &["quote", "--all"]);
    assert_eq!(all.as_array().unwrap().len(), 40);
}

#[test]
fn test_export_then_import_round_trip() {
    let source = TempDir::new().unwrap();
    let goal = run_json(&source, &["goal", "add", "Portable", "-t", "2031-01-01"]);
    run_json(&source, &["journal", "add", goal["id"].as_str().unwrap(), "<p>note</p>"]);

    let out_dir = source.path().join("exports");
    let exported = run_json(&source, &["export", "--dir", out_dir.to_str().unwrap()]);
    let file = exported["exported"].as_str().unwrap().to_owned();
    assert!(file.contains("goalflow_data_export_"));

    let target = TempDir::new().unwrap();
    let imported = run_json(&target, &["import", &file]);
    assert_eq!(imported["imported"]["goals"], 1);
    assert_eq!(imported["imported"]["journalEntries"], 1);

    let detail = run_json(&target, &["goal", "show", goal["id"].as_str().unwrap()]);
    assert_eq!(detail["goal"]["title"], "Portable");
    assert_eq!(detail["journalEntries"][0]["content"], "<p>note</p>");
}

#[test]
fn test_import_rejects_goal_without_title() {
    let dir = TempDir::new().unwrap();
    run_json(&dir, &["goal", "add", "Keep", "-t", "2030-01-01"]);
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, r#"{"goals":[{"id":"x","targetDate":"2030-01-01"}],"subtasks":[]}"#)
        .unwrap();

    goalflow(&dir).args(["import", bad.to_str().unwrap()]).assert().failure();
    let goals = run_json(&dir, &["goal", "list"]);
    assert_eq!(goals[0]["goal"]["title"], "Keep");
}
