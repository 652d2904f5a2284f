//! `wf purge [--dry-run]`: delete local branches whose upstream is gone.
//!
//! Each repository is pruned (`git fetch -p`) before planning so the live
//! remote set reflects the remote's current branches.

use std::collections::HashSet;
use std::path::Path;

use crate::git::purge::{PurgeDecision, plan_purge};
use crate::git::{GitError, Repository};
use crate::report::{Severity, repo_line};
use crate::styling::{INFO, StyledLine, StyledString};
use crate::workspace::{self, RepoDir};

pub fn run(root: &Path, dry_run: bool) -> anyhow::Result<()> {
    let dirs = workspace::repository_directories(root)?;
    super::print_reports(&dirs, |dir| purge_report(dir, dry_run))?;
    Ok(())
}

fn purge_report(dir: &RepoDir, dry_run: bool) -> Result<Vec<StyledLine>, GitError> {
    if !workspace::is_git_repository(&dir.path) {
        return Ok(Vec::new());
    }

    let repo = Repository::at(&dir.path);

    if let Err(err) = repo.fetch_prune() {
        return recoverable(err, |err| {
            vec![purge_error(
                dir,
                format!("Unable to fetch git repository: {err}"),
            )]
        });
    }

    let remote_branches = match repo.remote_branches() {
        Ok(branches) => branches,
        Err(err) => {
            return recoverable(err, |err| {
                vec![purge_error(
                    dir,
                    format!("Unable to retrieve remote branches for repository: {err}"),
                )]
            });
        }
    };

    let local_branches = match repo.local_branches() {
        Ok(branches) => branches,
        Err(err) => {
            return recoverable(err, |err| {
                vec![purge_error(
                    dir,
                    format!("Unable to retrieve branches for repository: {err}"),
                )]
            });
        }
    };

    let live: HashSet<String> = remote_branches.iter().cloned().collect();
    let decisions = plan_purge(&local_branches, &live, dry_run);

    let mut lines = Vec::new();
    for (branch, decision) in local_branches.iter().zip(decisions) {
        match decision {
            PurgeDecision::Keep => {}
            PurgeDecision::DeleteBlocked(_) => lines.push(purge_error(
                dir,
                format!("Unable to delete current branch '{}'", branch.name),
            )),
            PurgeDecision::DeleteDeferred => lines.push(repo_line(
                Severity::Warn,
                &dir.name,
                StyledString::raw(format!("Dry Run: {} branch will be deleted", branch.name)),
            )),
            PurgeDecision::Delete => match repo.delete_branch(&branch.name) {
                Ok(()) => lines.push(repo_line(
                    Severity::Success,
                    &dir.name,
                    StyledString::raw(format!("{} branch deleted", branch.name)),
                )),
                Err(GitError::CommandFailed(err)) => lines.push(purge_error(
                    dir,
                    format!("Unable to delete local branch '{}': {err}", branch.name),
                )),
                Err(err) => return Err(err),
            },
        }
    }

    lines.push(repo_line(
        Severity::Success,
        &dir.name,
        StyledString::styled(summary(remote_branches.is_empty(), dry_run), INFO),
    ));
    Ok(lines)
}

fn recoverable(
    err: GitError,
    render: impl FnOnce(String) -> Vec<StyledLine>,
) -> Result<Vec<StyledLine>, GitError> {
    match err {
        GitError::CommandFailed(message) => Ok(render(message)),
        err => Err(err),
    }
}

fn purge_error(dir: &RepoDir, message: String) -> StyledLine {
    repo_line(Severity::Error, &dir.name, StyledString::raw(message))
}

fn summary(no_remote_branches: bool, dry_run: bool) -> &'static str {
    if no_remote_branches {
        "No remote"
    } else if dry_run {
        "Purge Dry Run"
    } else {
        "Purged"
    }
}
