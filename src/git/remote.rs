//! Parsing for `git remote -v` output.

use super::{GitError, Repository};

/// Fetch/push URL pair for a repository's first remote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryRemote {
    pub fetch_url: String,
    pub push_url: String,
}

impl Repository {
    /// Read the fetch/push URLs of this repository's first remote.
    pub fn remotes(&self) -> Result<RepositoryRemote, GitError> {
        let output = self.run_command(&["remote", "-v"])?;
        Ok(parse_remote_output(&output))
    }
}

/// Parse `remote -v` output.
///
/// Git prints each remote's fetch line then its push line, so the first two
/// lines are the first remote's pair; additional remotes are not captured.
/// Missing lines produce empty URLs, meaning no remote is configured.
pub fn parse_remote_output(output: &str) -> RepositoryRemote {
    let mut lines = output.lines();
    let fetch_url = parse_remote_line(lines.next().unwrap_or(""));
    let push_url = parse_remote_line(lines.next().unwrap_or(""));

    RepositoryRemote {
        fetch_url,
        push_url,
    }
}

/// Extract the URL from one `<name>\t<url> (fetch|push)` line.
fn parse_remote_line(line: &str) -> String {
    line.split_whitespace()
        .nth(1)
        .unwrap_or_default()
        .to_string()
}
