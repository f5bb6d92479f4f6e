mod support;

use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;

use support::TestHome;

fn tdl_cmd(home: &TestHome) -> Command {
    support::tdl_cmd(home)
}

#[test]
fn store_survives_across_invocations() {
    let home = TestHome::new();
    let milk = support::add_task(&home, "Buy milk");
    support::add_task(&home, "Walk dog");
    tdl_cmd(&home).args(["toggle", &milk]).assert().success();

    // Each CLI invocation is a fresh process; state must come from disk
    let output = tdl_cmd(&home).args(["list", "--json"]).output().unwrap();
    let envelope: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(envelope["data"]["total"], 2);
    assert_eq!(envelope["data"]["completed"][0]["title"], "Buy milk");
}

#[test]
fn reads_a_store_written_in_compact_form() {
    // The serialized contract is the plain JSON array, whatever the
    // whitespace: a store written by another producer must load as-is.
    let home = TestHome::new();
    home.write_tasks_raw(
        r#"[{"id":"aaaa-1111","title":"From elsewhere","completed":true}]"#,
    )
    .unwrap();

    tdl_cmd(&home)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("Completed: 1"))
        .stdout(contains("From elsewhere"));
}

#[test]
fn records_missing_fields_are_unreadable() {
    // Field names are fixed: id, title, completed. A record missing one of
    // them is not a task list.
    let home = TestHome::new();
    home.write_tasks_raw(r#"[{"name":"wrong shape"}]"#).unwrap();

    tdl_cmd(&home)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("Total: 0"))
        .stdout(contains("task store was unreadable"));

    assert_eq!(home.quarantine_files().len(), 1);
}

#[test]
fn corrupt_store_is_quarantined_and_list_starts_empty() {
    let home = TestHome::new();
    home.write_tasks_raw("{definitely not json").unwrap();

    tdl_cmd(&home)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("Total: 0"))
        .stdout(contains("task store was unreadable"));

    // Original bytes preserved in the quarantine file
    let quarantined = home.quarantine_files();
    assert_eq!(quarantined.len(), 1);
    let saved = std::fs::read_to_string(&quarantined[0]).unwrap();
    assert_eq!(saved, "{definitely not json");
    assert!(!home.tasks_file().exists());
}

#[test]
fn corrupt_store_warning_survives_json_output() {
    let home = TestHome::new();
    home.write_tasks_raw("[[[").unwrap();

    let output = tdl_cmd(&home).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let envelope: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(envelope["data"]["total"], 0);
    let warnings = envelope["warnings"].as_array().unwrap();
    assert!(warnings
        .iter()
        .any(|w| w.as_str().unwrap().contains("task store was unreadable")));
}

#[test]
fn mutations_after_quarantine_start_a_fresh_store() {
    let home = TestHome::new();
    home.write_tasks_raw("oops").unwrap();

    tdl_cmd(&home)
        .args(["add", "Fresh start"])
        .assert()
        .success();

    let tasks = home.read_tasks_json();
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Fresh start");
}

#[test]
fn fail_policy_refuses_to_start_on_corrupt_store() {
    let home = TestHome::with_fail_policy();
    home.write_tasks_raw("not json").unwrap();

    tdl_cmd(&home)
        .args(["list"])
        .assert()
        .failure()
        .code(4)
        .stderr(contains("Task store is unreadable"));

    // Nothing was quarantined or lost
    assert!(home.tasks_file().exists());
    assert!(home.quarantine_files().is_empty());
}

#[test]
fn duplicate_ids_are_treated_as_corruption() {
    let home = TestHome::new();
    home.write_tasks_raw(
        r#"[
  {"id": "same", "title": "One", "completed": false},
  {"id": "same", "title": "Two", "completed": false}
]"#,
    )
    .unwrap();

    tdl_cmd(&home)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("Total: 0"))
        .stdout(contains("task store was unreadable"));
}
