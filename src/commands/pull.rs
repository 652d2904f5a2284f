//! `wf pull`: run `git pull` in every repository that is safe to update.
//!
//! A repository with staged or unstaged changes is skipped so the pull can
//! never conflict with local work; untracked files do not block it.

use std::path::Path;

use crate::git::status::StatusKind;
use crate::git::{GitError, Repository};
use crate::report::{Severity, repo_line};
use crate::styling::{ERROR, INFO, SUCCESS, StyledLine, StyledString};
use crate::workspace::{self, RepoDir};

pub fn run(root: &Path) -> anyhow::Result<()> {
    let dirs = workspace::repository_directories(root)?;
    super::print_reports(&dirs, pull_report)?;
    Ok(())
}

fn pull_report(dir: &RepoDir) -> Result<Vec<StyledLine>, GitError> {
    if !workspace::is_git_repository(&dir.path) {
        return Ok(vec![repo_line(
            Severity::Success,
            &dir.name,
            StyledString::styled("Directory is not versioned", SUCCESS),
        )]);
    }

    let repo = Repository::at(&dir.path);
    let status = match repo.status(false) {
        Ok(status) => status,
        Err(GitError::CommandFailed(err)) => return Ok(vec![pull_error(dir, &err)]),
        Err(err) => return Err(err),
    };

    let line = if status.local_status == StatusKind::UncommittedChanges {
        repo_line(
            Severity::Success,
            &dir.name,
            StyledString::styled("Uncommitted changes prevent pull being done", ERROR),
        )
    } else if status.remote_status == StatusKind::UpToDate {
        repo_line(
            Severity::Success,
            &dir.name,
            StyledString::styled("No changes to pull", SUCCESS),
        )
    } else {
        match repo.pull() {
            Ok(()) => repo_line(
                Severity::Success,
                &dir.name,
                StyledString::styled("Pull complete", INFO),
            ),
            Err(GitError::CommandFailed(err)) => pull_error(dir, &err),
            Err(err) => return Err(err),
        }
    };
    Ok(vec![line])
}

fn pull_error(dir: &RepoDir, err: &str) -> StyledLine {
    repo_line(
        Severity::Error,
        &dir.name,
        StyledString::raw(format!("Unable to pull git repository: {err}")),
    )
}
