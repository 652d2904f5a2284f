//! `wf fetch`: run `git fetch` in every repository.

use std::path::Path;

use crate::git::status::StatusKind;
use crate::git::{GitError, Repository};
use crate::report::{Severity, repo_line, status_label};
use crate::styling::{INFO, StyledLine, StyledString};
use crate::workspace::{self, RepoDir};

pub fn run(root: &Path) -> anyhow::Result<()> {
    let dirs = workspace::repository_directories(root)?;
    super::print_reports(&dirs, fetch_report)?;
    Ok(())
}

fn fetch_report(dir: &RepoDir) -> Result<Vec<StyledLine>, GitError> {
    if !workspace::is_git_repository(&dir.path) {
        return Ok(vec![repo_line(
            Severity::Success,
            &dir.name,
            status_label(StatusKind::NotVersioned),
        )]);
    }

    let line = match Repository::at(&dir.path).fetch() {
        Ok(()) => repo_line(
            Severity::Success,
            &dir.name,
            StyledString::styled("Fetch complete", INFO),
        ),
        Err(GitError::CommandFailed(err)) => repo_line(
            Severity::Error,
            &dir.name,
            StyledString::raw(format!("Unable to fetch git repository: {err}")),
        ),
        Err(err) => return Err(err),
    };
    Ok(vec![line])
}
