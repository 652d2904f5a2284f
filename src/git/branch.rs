//! Parsing for `git branch -vv` and `git branch -r` output.

use super::{GitError, Repository};

/// One local branch as reported by `branch -vv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBranch {
    pub name: String,
    /// Upstream this branch tracks (e.g. `origin/main`); empty when none.
    pub tracked_remote: String,
    pub is_current: bool,
}

impl Repository {
    /// List local branches with their tracked upstreams.
    pub fn local_branches(&self) -> Result<Vec<LocalBranch>, GitError> {
        let output = self.run_command(&["branch", "-vv"])?;
        Ok(parse_branch_list(&output))
    }

    /// List remote-tracking branch names.
    pub fn remote_branches(&self) -> Result<Vec<String>, GitError> {
        let output = self.run_command(&["branch", "-r"])?;
        Ok(parse_remote_branch_list(&output))
    }

    /// Force-delete a local branch.
    pub fn delete_branch(&self, name: &str) -> Result<(), GitError> {
        self.run_command(&["branch", "-D", name])?;
        Ok(())
    }
}

/// Parse full `branch -vv` output, one record per non-blank line.
pub fn parse_branch_list(output: &str) -> Vec<LocalBranch> {
    output
        .lines()
        .filter(|line| !line.is_empty())
        .map(parse_tracking_line)
        .collect()
}

/// Parse one `branch -vv` line.
///
/// Format: a one-column marker (`*` for the checked-out branch, `+` for a
/// branch checked out in a linked worktree, space otherwise), the branch
/// name, the commit hash, an optional bracketed upstream descriptor, then
/// the commit subject. The marker column is dropped whatever it holds. The
/// upstream descriptor is the bracket content up to the first `:`
/// (`[origin/main: ahead 1]` tracks `origin/main`); a branch with no
/// bracket tracks nothing, which callers treat as "no upstream", not as
/// an error.
pub fn parse_tracking_line(line: &str) -> LocalBranch {
    let is_current = line.starts_with('*');
    let rest = line.get(1..).unwrap_or("");
    let name = rest
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();

    LocalBranch {
        name,
        tracked_remote: bracketed_upstream(line),
        is_current,
    }
}

fn bracketed_upstream(line: &str) -> String {
    let Some(start) = line.find('[') else {
        return String::new();
    };
    let Some(len) = line[start..].find(']') else {
        return String::new();
    };

    let content = &line[start + 1..start + len];
    match content.split_once(':') {
        Some((upstream, _)) => upstream.to_string(),
        None => content.to_string(),
    }
}

/// Parse full `branch -r` output into remote-tracking branch names.
///
/// Each line is leading whitespace then the name; the name is the first
/// whitespace-delimited token.
pub fn parse_remote_branch_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}
