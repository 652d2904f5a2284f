#![allow(dead_code)]

//! Shared fixtures for the integration tests.
//!
//! Tests run against throwaway workspaces under a tempdir with a hermetic
//! git environment, so a developer's global git or workfleet config cannot
//! leak into assertions.

use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::cargo::cargo_bin;
use tempfile::TempDir;

/// Pin the environment shared by every git and wf invocation.
fn isolate(cmd: &mut Command) {
    cmd.env("GIT_CONFIG_GLOBAL", "/dev/null")
        .env("GIT_CONFIG_SYSTEM", "/dev/null")
        .env("GIT_AUTHOR_DATE", "2025-01-01T00:00:00Z")
        .env("GIT_COMMITTER_DATE", "2025-01-01T00:00:00Z")
        .env("LC_ALL", "C")
        .env("LANG", "C")
        .env_remove("RUST_LOG");
}

/// Run git in `current_dir`, panicking loudly on failure.
pub fn git(current_dir: &Path, args: &[&str]) -> String {
    let mut cmd = Command::new("git");
    isolate(&mut cmd);
    let output = cmd
        .args(args)
        .current_dir(current_dir)
        .output()
        .unwrap_or_else(|e| panic!("failed to run git {args:?}: {e}"));

    if !output.status.success() {
        panic!(
            "git {args:?} failed\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }

    String::from_utf8_lossy(&output.stdout).to_string()
}

/// The wf binary pointed at `root`, isolated from the user's config.
pub fn wf(root: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin!("wf"));
    isolate(&mut cmd);
    cmd.current_dir(root);
    cmd.env("WORKFLEET_CONFIG_PATH", root.join("missing-config.toml"));
    cmd
}

/// Run the command, asserting success; returns (stdout, stderr).
pub fn run_ok(cmd: &mut Command) -> (String, String) {
    let output = cmd.output().expect("failed to run wf");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    assert!(
        output.status.success(),
        "wf failed\nstdout:\n{stdout}\nstderr:\n{stderr}"
    );
    (stdout, stderr)
}

/// The report line mentioning `name`, panicking when absent.
pub fn line_for<'a>(stdout: &'a str, name: &str) -> &'a str {
    stdout
        .lines()
        .find(|line| line.contains(name))
        .unwrap_or_else(|| panic!("no line for {name} in:\n{stdout}"))
}

/// A workspace root whose subdirectories are the repositories under test.
pub struct Workspace {
    temp_dir: TempDir,
    root: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp directory");
        let root = temp_dir.path().join("workspace");
        std::fs::create_dir(&root).expect("failed to create workspace root");
        Workspace { temp_dir, root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// A scratch path outside the workspace root (for origins and configs).
    pub fn outside(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Plain directory inside the workspace; not a repository.
    pub fn add_plain_dir(&self, name: &str) -> PathBuf {
        let dir = self.root.join(name);
        std::fs::create_dir(&dir).expect("failed to create directory");
        dir
    }

    /// Repository with one commit and no remote.
    pub fn add_repo(&self, name: &str) -> PathBuf {
        let dir = self.add_plain_dir(name);
        init_repo(&dir);
        dir
    }

    /// Bare origin outside the workspace plus a clone inside it.
    ///
    /// The clone has one pushed commit on `main`, so it starts in sync with
    /// its upstream. Returns (clone, origin).
    pub fn add_cloned_repo(&self, name: &str) -> (PathBuf, PathBuf) {
        let origin = self.bare_origin(name);
        let repo = self.clone_into(name, &origin);
        commit_file(&repo, "README.md", "hello\n", "initial");
        git(&repo, &["push", "-u", "origin", "main"]);
        (repo, origin)
    }

    /// Empty bare repository outside the workspace.
    pub fn bare_origin(&self, name: &str) -> PathBuf {
        let origin = self.temp_dir.path().join(format!("{name}-origin.git"));
        std::fs::create_dir(&origin).expect("failed to create origin directory");
        git(&origin, &["init", "--bare", "-b", "main"]);
        origin
    }

    /// Clone `origin` into the workspace under `name`.
    pub fn clone_into(&self, name: &str, origin: &Path) -> PathBuf {
        git(&self.root, &["clone", origin.to_str().unwrap(), name]);
        let repo = self.root.join(name);
        configure_user(&repo);
        repo
    }

    /// Clone `origin` outside the workspace, for driving the origin forward
    /// behind the workspace's back.
    pub fn clone_outside(&self, name: &str, origin: &Path) -> PathBuf {
        git(
            self.temp_dir.path(),
            &["clone", origin.to_str().unwrap(), name],
        );
        let repo = self.temp_dir.path().join(name);
        configure_user(&repo);
        repo
    }
}

pub fn init_repo(repo_dir: &Path) {
    git(repo_dir, &["init", "-b", "main"]);
    configure_user(repo_dir);
    commit_file(repo_dir, "README.md", "hello\n", "initial");
}

pub fn configure_user(repo_dir: &Path) {
    git(repo_dir, &["config", "user.name", "Test User"]);
    git(repo_dir, &["config", "user.email", "test@example.com"]);
}

pub fn commit_file(repo_dir: &Path, file: &str, contents: &str, message: &str) {
    std::fs::write(repo_dir.join(file), contents).expect("failed to write file");
    git(repo_dir, &["add", file]);
    git(repo_dir, &["commit", "-m", message]);
}
