//! Purge planning: which local branches are safe to delete.

use std::collections::HashSet;

use super::branch::LocalBranch;

/// What to do with one local branch during a purge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeDecision {
    /// Upstream still exists, or the branch never had one.
    Keep,
    /// Upstream is gone; the branch should be deleted.
    Delete,
    /// Upstream is gone but the branch cannot be deleted.
    DeleteBlocked(&'static str),
    /// Upstream is gone; deletion withheld by dry-run.
    DeleteDeferred,
}

/// Decide the fate of one local branch.
///
/// A branch with no upstream is always kept since there is nothing to
/// validate it against, and the checked-out branch is never deleted. The
/// planner does no I/O; executing `Delete` decisions is the caller's job.
pub fn plan_branch(
    branch: &LocalBranch,
    live_remotes: &HashSet<String>,
    dry_run: bool,
) -> PurgeDecision {
    if branch.tracked_remote.is_empty() {
        return PurgeDecision::Keep;
    }
    if live_remotes.contains(&branch.tracked_remote) {
        return PurgeDecision::Keep;
    }
    if branch.is_current {
        return PurgeDecision::DeleteBlocked("cannot delete current branch");
    }
    if dry_run {
        return PurgeDecision::DeleteDeferred;
    }
    PurgeDecision::Delete
}

/// Plan a whole repository's purge; decisions align with the input order.
pub fn plan_purge(
    branches: &[LocalBranch],
    live_remotes: &HashSet<String>,
    dry_run: bool,
) -> Vec<PurgeDecision> {
    branches
        .iter()
        .map(|branch| plan_branch(branch, live_remotes, dry_run))
        .collect()
}
