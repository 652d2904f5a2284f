use std::path::{Path, PathBuf};
use std::process::Command;

pub mod branch;
pub mod purge;
pub mod remote;
pub mod status;

#[derive(Debug)]
pub enum GitError {
    CommandFailed(String),
    ParseError(String),
}

impl std::fmt::Display for GitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GitError::CommandFailed(msg) => write!(f, "{}", msg),
            GitError::ParseError(msg) => write!(f, "unexpected git output: {}", msg),
        }
    }
}

impl std::error::Error for GitError {}

/// Repository context for git operations.
///
/// Encapsulates the repository path; every git invocation runs with the
/// repository as its working directory.
///
/// # Examples
///
/// ```no_run
/// use workfleet::git::Repository;
///
/// let repo = Repository::at("/path/to/repo");
/// let status = repo.status(false)?;
/// # Ok::<(), workfleet::git::GitError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    /// Create a repository context at the specified path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path this repository context operates on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Download objects and refs from the default remote.
    pub fn fetch(&self) -> Result<(), GitError> {
        self.run_command(&["fetch"])?;
        Ok(())
    }

    /// Fetch and prune remote-tracking refs that no longer exist upstream.
    ///
    /// Purge planning relies on this running first so `branch -r` reflects
    /// the live remote state.
    pub fn fetch_prune(&self) -> Result<(), GitError> {
        self.run_command(&["fetch", "-p"])?;
        Ok(())
    }

    /// Fetch from and integrate with the tracked upstream branch.
    pub fn pull(&self) -> Result<(), GitError> {
        self.run_command(&["pull"])?;
        Ok(())
    }

    /// Run a git command in this repository, capturing stdout.
    ///
    /// Non-zero exit or spawn failure maps to `GitError::CommandFailed`
    /// carrying the stderr text. The command and its output are echoed at
    /// debug level (`--verbose` / `RUST_LOG=debug`).
    pub fn run_command(&self, args: &[&str]) -> Result<String, GitError> {
        log::debug!("$ git {} [{}]", args.join(" "), self.path.display());

        let mut cmd = Command::new("git");
        cmd.args(args);
        cmd.current_dir(&self.path);

        let output = cmd
            .output()
            .map_err(|e| GitError::CommandFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::CommandFailed(stderr.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        for line in stdout.lines().filter(|line| !line.is_empty()) {
            log::debug!("{}", line);
        }

        Ok(stdout)
    }
}
