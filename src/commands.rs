//! Batch command implementations.
//!
//! Each command walks the workspace root, visits every immediate
//! subdirectory in parallel, and prints one report per directory in
//! directory order.

pub mod fetch;
pub mod pull;
pub mod purge;
pub mod remote;
pub mod status;

use rayon::prelude::*;

use crate::git::GitError;
use crate::styling::{StyledLine, println};
use crate::workspace::RepoDir;

/// Run `per_dir` over every directory in parallel and print the collected
/// report lines in directory order.
///
/// Recoverable failures are rendered into the report by `per_dir` itself;
/// an `Err` aborts the whole run.
fn print_reports<F>(dirs: &[RepoDir], per_dir: F) -> Result<(), GitError>
where
    F: Fn(&RepoDir) -> Result<Vec<StyledLine>, GitError> + Sync + Send,
{
    let reports: Vec<Vec<StyledLine>> =
        dirs.par_iter().map(per_dir).collect::<Result<_, _>>()?;

    for line in reports.iter().flatten() {
        println!("{}", line.render());
    }
    Ok(())
}
