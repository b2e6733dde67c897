use std::fs;
use std::path::PathBuf;
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// Scratch working directory for one `icache` test.
pub struct CacheWorkspace {
    _dir: TempDir,
    pub root: PathBuf,
}

impl CacheWorkspace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let root = dir.path().to_path_buf();
        Self { _dir: dir, root }
    }

    /// Write `contents` to `name` inside the workspace.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root.join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }
}

pub struct CmdOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CmdOutput {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).expect("stdout is JSON")
    }
}

pub fn icache(workspace: &CacheWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("icache").expect("icache binary");
    cmd.current_dir(&workspace.root)
        .env_remove("ICACHE_ISSUES_FILE")
        .env_remove("ICACHE_PRETTY")
        .env_remove("RUST_LOG");
    cmd
}

pub fn run_icache<I, S>(workspace: &CacheWorkspace, args: I, label: &str) -> CmdOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let output = icache(workspace)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run icache: {e}"));
    CmdOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

pub const SAMPLE_ISSUES: &str = r#"[
  {"number": 1, "title": "Bootstrap project", "state": "closed"},
  {"number": 2, "title": "Add /health endpoint", "state": "open"},
  {"number": 3, "title": "Persist game state", "status": "in_progress"},
  {"id": 4, "title": "Add achievements", "closed": false}
]"#;
