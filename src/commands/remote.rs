//! `wf remote`: show the first configured remote for every repository.

use std::path::Path;

use crate::git::remote::RepositoryRemote;
use crate::git::status::StatusKind;
use crate::git::{GitError, Repository};
use crate::report::{Severity, repo_line, status_label};
use crate::styling::{INFO, StyledLine, StyledString, WARNING};
use crate::workspace::{self, RepoDir};

pub fn run(root: &Path) -> anyhow::Result<()> {
    let dirs = workspace::repository_directories(root)?;
    super::print_reports(&dirs, remote_report)?;
    Ok(())
}

fn remote_report(dir: &RepoDir) -> Result<Vec<StyledLine>, GitError> {
    if !workspace::is_git_repository(&dir.path) {
        return Ok(vec![repo_line(
            Severity::Success,
            &dir.name,
            status_label(StatusKind::NotVersioned),
        )]);
    }

    let line = match Repository::at(&dir.path).remotes() {
        Ok(remote) => repo_line(Severity::Success, &dir.name, remote_message(remote)),
        Err(GitError::CommandFailed(err)) => repo_line(
            Severity::Error,
            &dir.name,
            StyledString::raw(format!("Unable to read git remotes: {err}")),
        ),
        Err(err) => return Err(err),
    };
    Ok(vec![line])
}

fn remote_message(remote: RepositoryRemote) -> StyledString {
    let RepositoryRemote {
        fetch_url,
        push_url,
    } = remote;

    if fetch_url.is_empty() {
        StyledString::styled("No remote", INFO)
    } else if fetch_url != push_url {
        StyledString::styled(
            format!("Remotes mismatch: {fetch_url} (fetch) {push_url} (push)"),
            WARNING,
        )
    } else {
        StyledString::raw(fetch_url)
    }
}
