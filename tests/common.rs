#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated home for one test: config dir plus data file.
pub struct Sandbox {
    pub home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn data_file(&self) -> PathBuf {
        self.home.path().join("shifts.json")
    }

    pub fn data_arg(&self) -> String {
        self.data_file().to_string_lossy().to_string()
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.path().join("shiftclock.conf")
    }

    pub fn write_config(&self, yaml: &str) {
        fs::write(self.config_file(), yaml).expect("write config");
    }

    pub fn read_data(&self) -> String {
        fs::read_to_string(self.data_file()).unwrap_or_default()
    }

    /// Command with the sandbox as config home and data file.
    pub fn cmd(&self) -> Command {
        let mut cmd = sc();
        cmd.env("SHIFTCLOCK_HOME", self.home.path())
            .env_remove("SHIFTCLOCK_USER")
            .env_remove("SHIFTCLOCK_PASSWORD")
            .env_remove("RUST_LOG")
            .args(["--data", &self.data_arg()]);
        cmd
    }

    /// Add a closed shift through the CLI.
    pub fn add(&self, start: &str, end: &str, notes: &str) {
        self.cmd()
            .args(["add", "--in", start, "--out", end, "--notes", notes])
            .assert()
            .success();
    }

    /// Shift ids in file order.
    pub fn ids(&self) -> Vec<String> {
        let value: serde_json::Value =
            serde_json::from_str(&self.read_data()).expect("valid shift data");
        value
            .as_array()
            .expect("shift array")
            .iter()
            .map(|s| s["id"].as_str().expect("id").to_string())
            .collect()
    }
}

pub fn sc() -> Command {
    cargo_bin_cmd!("shiftclock")
}
