mod common;

use std::path::{Path, PathBuf};

use common::{Workspace, commit_file, git, line_for, run_ok, wf};

/// Clone `name` into the workspace, then advance its origin from a second
/// clone and fetch, leaving the workspace copy one commit behind.
fn repo_behind_origin(ws: &Workspace, name: &str) -> PathBuf {
    let (repo, origin) = ws.add_cloned_repo(name);
    let seed = ws.clone_outside(&format!("{name}-seed"), &origin);
    commit_file(&seed, "upstream.txt", "new\n", "upstream change");
    git(&seed, &["push", "origin", "main"]);
    git(&repo, &["fetch"]);
    repo
}

fn has_upstream_file(repo: &Path) -> bool {
    repo.join("upstream.txt").exists()
}

#[test]
fn pull_updates_repositories_behind_upstream() {
    let ws = Workspace::new();
    let repo = repo_behind_origin(&ws, "alpha");

    let (stdout, _) = run_ok(wf(ws.root()).arg("pull"));

    let alpha = line_for(&stdout, "alpha");
    assert!(alpha.starts_with("SUCCESS"));
    assert!(alpha.contains("Pull complete"));
    assert!(has_upstream_file(&repo));
}

#[test]
fn pull_skips_repositories_with_uncommitted_changes() {
    let ws = Workspace::new();
    let repo = repo_behind_origin(&ws, "alpha");
    std::fs::write(repo.join("README.md"), "local edit\n").unwrap();

    let (stdout, _) = run_ok(wf(ws.root()).arg("pull"));

    let alpha = line_for(&stdout, "alpha");
    assert!(alpha.starts_with("SUCCESS"));
    assert!(alpha.contains("Uncommitted changes prevent pull being done"));
    assert!(!has_upstream_file(&repo));
}

#[test]
fn pull_ignores_untracked_files() {
    let ws = Workspace::new();
    let repo = repo_behind_origin(&ws, "alpha");
    std::fs::write(repo.join("scratch.txt"), "untracked\n").unwrap();

    let (stdout, _) = run_ok(wf(ws.root()).arg("pull"));

    assert!(line_for(&stdout, "alpha").contains("Pull complete"));
    assert!(has_upstream_file(&repo));
}

#[test]
fn pull_reports_in_sync_and_unversioned_directories() {
    let ws = Workspace::new();
    ws.add_cloned_repo("alpha");
    ws.add_plain_dir("docs");

    let (stdout, _) = run_ok(wf(ws.root()).arg("pull"));

    let alpha = line_for(&stdout, "alpha");
    assert!(alpha.starts_with("SUCCESS"));
    assert!(alpha.contains("No changes to pull"));

    let docs = line_for(&stdout, "docs");
    assert!(docs.starts_with("SUCCESS"));
    assert!(docs.contains("Directory is not versioned"));
}
