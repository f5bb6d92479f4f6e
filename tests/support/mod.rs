#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated home for one test: a temp data dir plus a pinned config file
/// so the suite never touches the user's real store or config.
pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        fs::create_dir_all(dir.path().join("data")).expect("failed to create data dir");
        fs::write(dir.path().join("tdl.toml"), "[storage]\n").expect("failed to write config");
        Self { dir }
    }

    /// Create a home whose config sets the fail-fast corruption policy
    pub fn with_fail_policy() -> Self {
        let home = Self::new();
        fs::write(
            home.config_file(),
            "[storage]\non_corrupt = \"fail\"\n",
        )
        .expect("failed to write config");
        home
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    pub fn config_file(&self) -> PathBuf {
        self.dir.path().join("tdl.toml")
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.data_dir().join("tasks.json")
    }

    pub fn write_tasks_raw(&self, contents: &str) -> std::io::Result<()> {
        fs::write(self.tasks_file(), contents)
    }

    pub fn read_tasks_json(&self) -> serde_json::Value {
        let raw = fs::read_to_string(self.tasks_file()).expect("tasks.json missing");
        serde_json::from_str(&raw).expect("tasks.json unreadable")
    }

    /// Files in the data dir whose names mark a quarantined store
    pub fn quarantine_files(&self) -> Vec<PathBuf> {
        let mut found = Vec::new();
        if let Ok(entries) = fs::read_dir(self.data_dir()) {
            for entry in entries.flatten() {
                let name = entry.file_name();
                if name.to_string_lossy().starts_with("tasks.json.corrupt-") {
                    found.push(entry.path());
                }
            }
        }
        found
    }
}

pub fn tdl_cmd(home: &TestHome) -> Command {
    let mut cmd = Command::cargo_bin("tdl").expect("tdl binary");
    cmd.env("TDL_DATA_DIR", home.data_dir());
    cmd.env("TDL_CONFIG", home.config_file());
    cmd
}

/// Run `tdl add --json` and return the new task's id
pub fn add_task(home: &TestHome, title: &str) -> String {
    let output = tdl_cmd(home)
        .args(["add", title, "--json"])
        .output()
        .expect("failed to run tdl add");
    assert!(output.status.success(), "tdl add failed: {output:?}");

    let envelope: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("add output is not JSON");
    envelope["data"]["id"]
        .as_str()
        .expect("add output missing id")
        .to_string()
}

