//! Parsing for `git status -s -b --porcelain` output.

use serde::{Serialize, Serializer};

use super::{GitError, Repository};

/// One repository state relative to its working tree or its upstream.
///
/// Presentation owns the mapping from kind to colored text; the parsing
/// layer only produces and compares kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    UpToDate,
    UncommittedChanges,
    UntrackedChanges,
    AheadOfRemote,
    BehindRemote,
    NotVersioned,
}

impl StatusKind {
    /// Upstream relationship from the header's ahead/behind counts.
    ///
    /// The header always reports ahead before behind; ahead wins when both
    /// are nonzero.
    pub fn from_sync_counts(ahead: usize, behind: usize) -> Self {
        match (ahead, behind) {
            (0, 0) => StatusKind::UpToDate,
            (0, _) => StatusKind::BehindRemote,
            (_, _) => StatusKind::AheadOfRemote,
        }
    }

    /// Working-tree state from the file-change totals.
    ///
    /// Untracked files only count as changes in strict mode.
    pub fn from_change_totals(totals: &ChangeTotals, strict: bool) -> Self {
        if totals.staged + totals.unstaged > 0 {
            StatusKind::UncommittedChanges
        } else if strict && totals.untracked > 0 {
            StatusKind::UntrackedChanges
        } else {
            StatusKind::UpToDate
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StatusKind::UpToDate => "Up to date",
            StatusKind::UncommittedChanges => "Changes to commit",
            StatusKind::UntrackedChanges => "Untracked changes",
            StatusKind::AheadOfRemote => "Changes to push",
            StatusKind::BehindRemote => "Changes to pull",
            StatusKind::NotVersioned => "Not versioned",
        };
        f.write_str(label)
    }
}

impl Serialize for StatusKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// One changed path as reported by porcelain status.
///
/// The flags derive solely from the two leading status-code characters of
/// `raw_line` and never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub raw_line: String,
    pub staged: bool,
    pub unstaged: bool,
    pub untracked: bool,
    pub ignored: bool,
}

/// Counts over a repository's file changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeTotals {
    pub staged: usize,
    pub unstaged: usize,
    pub untracked: usize,
    pub ignored: usize,
}

impl ChangeTotals {
    fn tally(changes: &[FileChange]) -> Self {
        let mut totals = ChangeTotals::default();
        for change in changes {
            if change.staged {
                totals.staged += 1;
            }
            if change.unstaged {
                totals.unstaged += 1;
            }
            if change.untracked {
                totals.untracked += 1;
            }
            if change.ignored {
                totals.ignored += 1;
            }
        }
        totals
    }
}

/// Full parsed state of one repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryStatus {
    pub versioned: bool,
    pub local_branch: String,
    /// Upstream branch name; empty when the local branch tracks nothing.
    pub remote_branch: String,
    pub commits_ahead: usize,
    pub commits_behind: usize,
    /// File changes in porcelain output order.
    pub file_changes: Vec<FileChange>,
    pub totals: ChangeTotals,
    pub local_status: StatusKind,
    pub remote_status: StatusKind,
}

impl RepositoryStatus {
    /// Placeholder state for a directory that is not under version control.
    pub fn not_versioned() -> Self {
        RepositoryStatus {
            versioned: false,
            local_status: StatusKind::NotVersioned,
            remote_status: StatusKind::NotVersioned,
            ..Default::default()
        }
    }
}

impl Repository {
    /// Read and parse the porcelain status of this repository.
    pub fn status(&self, strict: bool) -> Result<RepositoryStatus, GitError> {
        let output = self.run_command(&["status", "-s", "-b", "--porcelain"])?;
        parse_status_output(&output, strict)
    }
}

/// Classify one porcelain status line by its two leading status codes.
///
/// Callers filter blank lines first; a truncated line classifies as clean.
pub fn classify(line: &str) -> FileChange {
    let bytes = line.as_bytes();
    let index_code = bytes.first().copied().unwrap_or(b' ');
    let worktree_code = bytes.get(1).copied().unwrap_or(b' ');

    FileChange {
        raw_line: line.to_string(),
        staged: is_change_marker(index_code),
        unstaged: is_change_marker(worktree_code),
        untracked: line.starts_with("??"),
        ignored: line.starts_with("!!"),
    }
}

fn is_change_marker(code: u8) -> bool {
    code != b' ' && code != b'?' && code != b'!'
}

/// Parse the full output of `git status -s -b --porcelain`.
///
/// The first non-blank line is consumed as the branch header whether or not
/// it carries one (repositories without commits print none in some git
/// versions); the remaining non-blank lines are file changes.
pub fn parse_status_output(output: &str, strict: bool) -> Result<RepositoryStatus, GitError> {
    let mut lines = output.lines().filter(|line| !line.is_empty());

    let header = lines.next().unwrap_or("");
    let (local_branch, remote_branch, ahead, behind) = parse_branch_header(header)?;

    let file_changes: Vec<FileChange> = lines.map(classify).collect();
    let totals = ChangeTotals::tally(&file_changes);

    Ok(RepositoryStatus {
        versioned: true,
        local_branch,
        remote_branch,
        commits_ahead: ahead,
        commits_behind: behind,
        local_status: StatusKind::from_change_totals(&totals, strict),
        remote_status: StatusKind::from_sync_counts(ahead, behind),
        file_changes,
        totals,
    })
}

/// Parse a `## <local>...<remote> [ahead N, behind M]` header line.
///
/// A line that does not open with the `##` token yields empty branch names
/// and zero counts; both the upstream suffix and the bracket are optional.
fn parse_branch_header(line: &str) -> Result<(String, String, usize, usize), GitError> {
    let mut words = line.split_whitespace();

    if words.next() != Some("##") {
        return Ok((String::new(), String::new(), 0, 0));
    }

    let field = words.next().unwrap_or("");
    let (local_branch, remote_branch) = match field.split_once("...") {
        Some((local, remote)) => (local.to_string(), remote.to_string()),
        None => (field.to_string(), String::new()),
    };

    let ahead = scan_count(line, "ahead ")?;
    let behind = scan_count(line, "behind ")?;

    Ok((local_branch, remote_branch, ahead, behind))
}

/// Extract the count that follows a fixed keyword in the header line.
///
/// A missing keyword means zero. A keyword with nothing numeric after it is
/// a hard error: the output format is no longer the one this parser was
/// written against, and a silently wrong count would mis-report state.
fn scan_count(header: &str, keyword: &str) -> Result<usize, GitError> {
    let Some(at) = header.find(keyword) else {
        return Ok(0);
    };

    let rest = &header[at + keyword.len()..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    digits.parse::<usize>().map_err(|_| {
        GitError::ParseError(format!("expected a count after '{keyword}' in: {header}"))
    })
}
