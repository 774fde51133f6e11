#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use taskdue_core::task::Task;
use tempfile::TempDir;

pub struct TestStore {
    pub dir: TempDir,
    pub file: PathBuf,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp directory");
        let file = dir.path().join("tasks.json");
        TestStore { dir, file }
    }

    /// Writes tasks straight into the store file, bypassing the binary
    pub fn seed(&self, tasks: &[Task]) {
        let data = serde_json::to_string_pretty(tasks).expect("failed to serialize seed tasks");
        std::fs::write(&self.file, data).expect("failed to write store file");
    }

    /// Reads the persisted collection back out of the store file
    pub fn tasks(&self) -> Vec<Task> {
        if !self.file.exists() {
            return Vec::new();
        }
        let data = std::fs::read_to_string(&self.file).expect("failed to read store file");
        serde_json::from_str(&data).expect("failed to parse store file")
    }

    pub fn raw(&self) -> String {
        std::fs::read_to_string(&self.file).expect("failed to read store file")
    }
}

pub struct TestSession {
    store_file: PathBuf,
    binary_path: PathBuf,
    fake_pty: bool,
}

impl TestSession {
    pub fn new(store: &TestStore) -> Self {
        let binary_path = std::env::current_exe()
            .expect("failed to get test executable path")
            .parent()
            .expect("failed to get parent directory")
            .parent()
            .expect("failed to get parent directory")
            .join("taskdue");

        TestSession {
            store_file: store.file.clone(),
            binary_path,
            fake_pty: false,
        }
    }

    /// Forces table output even though the test harness pipes stdout
    pub fn with_fake_pty(mut self) -> Self {
        self.fake_pty = true;
        self
    }

    /// Feeds a scripted session to the binary's stdin and captures the output
    pub fn run(&self, script: &str) -> TestResult {
        let mut cmd = Command::new(&self.binary_path);
        cmd.env("TASKDUE_FILE", &self.store_file)
            .env_remove("TASKDUE_FAKE_PTY")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if self.fake_pty {
            cmd.env("TASKDUE_FAKE_PTY", "1");
        }

        let mut child = cmd.spawn().expect("failed to spawn taskdue");
        let mut stdin = child.stdin.take().expect("no stdin handle");
        stdin
            .write_all(script.as_bytes())
            .expect("failed to write script");
        drop(stdin);

        let output = child.wait_with_output().expect("failed to wait for taskdue");
        TestResult { output }
    }
}

pub struct TestResult {
    output: Output,
}

impl TestResult {
    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }

    pub fn assert_success(&self) {
        if !self.success() {
            panic!(
                "Session failed with status: {:?}\nstdout: {}\nstderr: {}",
                self.output.status,
                self.stdout(),
                self.stderr()
            );
        }
    }

    /// Extracts the JSON array a non-TTY `print` wrote between the prompts
    pub fn parse_tasks(&self) -> Vec<Task> {
        let stdout = self.stdout();
        let start = stdout.find('[').expect("no JSON array in stdout");
        let end = stdout.rfind(']').expect("no JSON array in stdout");
        serde_json::from_str(&stdout[start..=end]).expect("failed to parse tasks from JSON")
    }
}

#[macro_export]
macro_rules! session_setup {
    () => {{
        let store = $crate::common::TestStore::new();
        let session = $crate::common::TestSession::new(&store);
        (store, session)
    }};
}
