//! `wf status [--strict] [--format text|json]`: the workspace status board.

use std::path::Path;

use clap::ValueEnum;
use rayon::prelude::*;
use serde::Serialize;

use crate::git::status::{RepositoryStatus, StatusKind};
use crate::git::{GitError, Repository};
use crate::report::{self, Severity};
use crate::styling::{StyledLine, StyledString, println};
use crate::workspace::{self, RepoDir};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One repository's entry in `--format json` output.
///
/// Status fields are present only when the read succeeded; a failed read
/// contributes just the directory name and an `error` message, which the
/// text board renders as an `ERROR` row.
#[derive(Debug, Serialize)]
pub struct StatusRecord {
    name: String,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    status: Option<StatusFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct StatusFields {
    versioned: bool,
    local_branch: String,
    remote_branch: String,
    commits_ahead: usize,
    commits_behind: usize,
    staged: usize,
    unstaged: usize,
    untracked: usize,
    ignored: usize,
    local_status: StatusKind,
    remote_status: StatusKind,
}

impl StatusRecord {
    fn new(name: &str, status: &RepositoryStatus) -> Self {
        StatusRecord {
            name: name.to_string(),
            status: Some(StatusFields {
                versioned: status.versioned,
                local_branch: status.local_branch.clone(),
                remote_branch: status.remote_branch.clone(),
                commits_ahead: status.commits_ahead,
                commits_behind: status.commits_behind,
                staged: status.totals.staged,
                unstaged: status.totals.unstaged,
                untracked: status.totals.untracked,
                ignored: status.totals.ignored,
                local_status: status.local_status,
                remote_status: status.remote_status,
            }),
            error: None,
        }
    }

    fn failed(name: &str, err: String) -> Self {
        StatusRecord {
            name: name.to_string(),
            status: None,
            error: Some(err),
        }
    }
}

pub fn run(root: &Path, strict: bool, format: OutputFormat) -> anyhow::Result<()> {
    let dirs = workspace::repository_directories(root)?;

    match format {
        OutputFormat::Text => {
            println!("{}", report::board_header().render());
            super::print_reports(&dirs, |dir| Ok(vec![board_line(dir, strict)?]))?;
        }
        OutputFormat::Json => {
            let records: Vec<StatusRecord> = dirs
                .par_iter()
                .map(|dir| status_record(dir, strict))
                .collect::<Result<_, _>>()?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }
    Ok(())
}

fn board_line(dir: &RepoDir, strict: bool) -> Result<StyledLine, GitError> {
    if !workspace::is_git_repository(&dir.path) {
        return Ok(report::board_row(&dir.name, &RepositoryStatus::not_versioned()));
    }

    match Repository::at(&dir.path).status(strict) {
        Ok(status) => Ok(report::board_row(&dir.name, &status)),
        Err(GitError::CommandFailed(err)) => Ok(report::repo_line(
            Severity::Error,
            &dir.name,
            StyledString::raw(format!("Unable to read git repository status: {err}")),
        )),
        Err(err) => Err(err),
    }
}

fn status_record(dir: &RepoDir, strict: bool) -> Result<StatusRecord, GitError> {
    if !workspace::is_git_repository(&dir.path) {
        return Ok(StatusRecord::new(
            &dir.name,
            &RepositoryStatus::not_versioned(),
        ));
    }

    match Repository::at(&dir.path).status(strict) {
        Ok(status) => Ok(StatusRecord::new(&dir.name, &status)),
        Err(GitError::CommandFailed(err)) => Ok(StatusRecord::failed(&dir.name, err)),
        Err(err) => Err(err),
    }
}
