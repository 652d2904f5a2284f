mod common;

use std::path::{Path, PathBuf};

use common::{Workspace, commit_file, git, line_for, run_ok, wf};

/// Clone `name` into the workspace with a `feature` branch whose upstream
/// has been deleted on the origin. When `on_feature` is set the branch is
/// left checked out.
fn repo_with_gone_upstream(ws: &Workspace, name: &str, on_feature: bool) -> PathBuf {
    let (repo, _) = ws.add_cloned_repo(name);
    git(&repo, &["checkout", "-b", "feature"]);
    commit_file(&repo, "feature.txt", "wip\n", "feature work");
    git(&repo, &["push", "-u", "origin", "feature"]);
    if !on_feature {
        git(&repo, &["checkout", "main"]);
    }
    git(&repo, &["push", "origin", "--delete", "feature"]);
    repo
}

fn local_branches(repo: &Path) -> String {
    git(repo, &["branch", "--format=%(refname:short)"])
}

#[test]
fn purge_deletes_branches_whose_upstream_is_gone() {
    let ws = Workspace::new();
    let repo = repo_with_gone_upstream(&ws, "app", false);

    let (stdout, _) = run_ok(wf(ws.root()).arg("purge"));

    let deleted = line_for(&stdout, "feature branch deleted");
    assert!(deleted.starts_with("SUCCESS"));
    assert!(deleted.contains("app"));
    assert!(line_for(&stdout, "Purged").starts_with("SUCCESS"));

    let branches = local_branches(&repo);
    assert!(!branches.contains("feature"));
    assert!(branches.contains("main"));
}

#[test]
fn purge_dry_run_defers_deletion() {
    let ws = Workspace::new();
    let repo = repo_with_gone_upstream(&ws, "app", false);

    let (stdout, _) = run_ok(wf(ws.root()).args(["purge", "--dry-run"]));

    let deferred = line_for(&stdout, "Dry Run: feature branch will be deleted");
    assert!(deferred.starts_with("WARN"));
    assert!(stdout.contains("Purge Dry Run"));
    assert!(!stdout.contains("feature branch deleted"));

    assert!(local_branches(&repo).contains("feature"));
}

#[test]
fn purge_names_branches_checked_out_in_linked_worktrees() {
    let ws = Workspace::new();
    let repo = repo_with_gone_upstream(&ws, "app", false);
    // `branch -vv` marks a branch held by a linked worktree with `+`.
    let worktree = ws.outside("app-feature");
    git(&repo, &["worktree", "add", worktree.to_str().unwrap(), "feature"]);

    let (stdout, _) = run_ok(wf(ws.root()).args(["purge", "--dry-run"]));

    let deferred = line_for(&stdout, "Dry Run: feature branch will be deleted");
    assert!(deferred.starts_with("WARN"));
    assert!(local_branches(&repo).contains("feature"));
}

#[test]
fn purge_never_deletes_the_current_branch() {
    let ws = Workspace::new();
    let repo = repo_with_gone_upstream(&ws, "app", true);

    let (stdout, _) = run_ok(wf(ws.root()).arg("purge"));

    let blocked = line_for(&stdout, "Unable to delete current branch 'feature'");
    assert!(blocked.starts_with("ERROR"));
    assert!(local_branches(&repo).contains("feature"));
}

#[test]
fn purge_keeps_branches_with_live_or_no_upstream() {
    let ws = Workspace::new();
    let (repo, _) = ws.add_cloned_repo("app");
    git(&repo, &["branch", "local-only"]);

    let (stdout, _) = run_ok(wf(ws.root()).arg("purge"));

    // Nothing to delete: the only output for the repo is its summary.
    let app_lines: Vec<&str> = stdout.lines().filter(|l| l.contains("app")).collect();
    assert_eq!(app_lines.len(), 1, "unexpected output:\n{stdout}");
    assert!(app_lines[0].contains("Purged"));

    let branches = local_branches(&repo);
    assert!(branches.contains("main"));
    assert!(branches.contains("local-only"));
}

#[test]
fn purge_skips_unversioned_directories_silently() {
    let ws = Workspace::new();
    ws.add_plain_dir("docs");
    ws.add_cloned_repo("app");

    let (stdout, _) = run_ok(wf(ws.root()).arg("purge"));
    assert!(!stdout.contains("docs"));
}

#[test]
fn purge_reports_no_remote_for_branchless_origins() {
    let ws = Workspace::new();
    let repo = ws.add_repo("solo");
    let origin = ws.bare_origin("solo");
    git(&repo, &["remote", "add", "origin", origin.to_str().unwrap()]);

    let (stdout, _) = run_ok(wf(ws.root()).arg("purge"));

    let solo = line_for(&stdout, "solo");
    assert!(solo.starts_with("SUCCESS"));
    assert!(solo.contains("No remote"));
}

#[test]
fn purge_dry_run_short_flag() {
    let ws = Workspace::new();
    repo_with_gone_upstream(&ws, "app", false);

    let (stdout, _) = run_ok(wf(ws.root()).args(["purge", "-d"]));
    assert!(stdout.contains("Dry Run: feature branch will be deleted"));
}
