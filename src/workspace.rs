//! Workspace enumeration: the sibling repository directories under a root.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// One directory entry under the workspace root.
#[derive(Debug, Clone)]
pub struct RepoDir {
    pub name: String,
    pub path: PathBuf,
}

/// Resolve the workspace root, in precedence order: the `--dir` flag, the
/// configured `root-dir`, the current directory.
pub fn resolve_root(flag: Option<PathBuf>, config_root: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(root) = flag {
        return Ok(root);
    }
    if let Some(root) = config_root {
        return Ok(PathBuf::from(root));
    }
    std::env::current_dir().context("failed to determine current directory")
}

/// List the sub-directories of `root` in name order.
///
/// Files are skipped. Whether an entry is actually a git repository is a
/// separate question; see [`is_git_repository`].
pub fn repository_directories(root: &Path) -> anyhow::Result<Vec<RepoDir>> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("failed to read workspace root {}", root.display()))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        dirs.push(RepoDir {
            name: entry.file_name().to_string_lossy().to_string(),
            path: entry.path(),
        });
    }

    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(dirs)
}

/// Whether `dir` holds a git repository: `<dir>/.git` must be a readable
/// directory. A worktree or submodule checkout whose `.git` is a file does
/// not count.
pub fn is_git_repository(dir: &Path) -> bool {
    fs::read_dir(dir.join(".git")).is_ok()
}
