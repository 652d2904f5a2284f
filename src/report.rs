//! Report rendering: severity gutters, the status board, and message cells.
//!
//! Every command prints one line per repository. Lines open with a colored
//! severity tag, then fixed-width columns; widths are visual widths, so
//! colored and plain cells align.

use anstyle::Style;

use crate::git::status::{RepositoryStatus, StatusKind};
use crate::styling::{ERROR, INFO, SUCCESS, StyledLine, StyledString, WARNING};

const GUTTER_WIDTH: usize = 7;
const NAME_WIDTH: usize = 50;
const BRANCH_WIDTH: usize = 30;
const VERSION_WIDTH: usize = 30;

/// Severity tag opening every report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warn,
    Info,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Success => "SUCCESS",
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
        }
    }

    fn style(self) -> Style {
        match self {
            Severity::Success => SUCCESS,
            Severity::Error => ERROR,
            Severity::Warn => WARNING,
            Severity::Info => INFO,
        }
    }
}

/// One `<severity> <name> <message>` report line.
pub fn repo_line(severity: Severity, name: &str, message: StyledString) -> StyledLine {
    let mut line = StyledLine::new();
    line.push_styled(severity.label(), severity.style());
    line.pad_to(GUTTER_WIDTH);
    line.push_raw(" ");
    line.push_raw(name);
    line.pad_to(GUTTER_WIDTH + 1 + NAME_WIDTH);
    line.push_raw(" ");
    line.push(message);
    line
}

/// Column header for the status board.
pub fn board_header() -> StyledLine {
    let mut line = StyledLine::new();
    line.push_raw("STATUS");
    line.pad_to(GUTTER_WIDTH);
    line.push_raw(" ");
    line.push_raw("REPOSITORY NAME");
    line.pad_to(GUTTER_WIDTH + 1 + NAME_WIDTH);
    line.push_raw(" ");
    line.push_raw("BRANCH");
    line.pad_to(GUTTER_WIDTH + 1 + NAME_WIDTH + 1 + BRANCH_WIDTH);
    line.push_raw(" ");
    line.push_raw("VERSION");
    line.pad_to(GUTTER_WIDTH + 1 + NAME_WIDTH + 1 + BRANCH_WIDTH + 1 + VERSION_WIDTH);
    line.push_raw(" ");
    line.push_raw("MESSAGE");
    line
}

/// One status-board row.
///
/// The VERSION cell is a placeholder: nothing populates it yet, matching
/// the board layout this tool always printed.
pub fn board_row(name: &str, status: &RepositoryStatus) -> StyledLine {
    let mut line = StyledLine::new();
    line.push_styled(Severity::Success.label(), Severity::Success.style());
    line.pad_to(GUTTER_WIDTH);
    line.push_raw(" ");
    line.push_raw(name);
    line.pad_to(GUTTER_WIDTH + 1 + NAME_WIDTH);
    line.push_raw(" ");
    line.push_raw(&status.local_branch);
    line.pad_to(GUTTER_WIDTH + 1 + NAME_WIDTH + 1 + BRANCH_WIDTH);
    line.push_raw(" ");
    line.push_raw(if status.versioned { "Unknown" } else { "" });
    line.pad_to(GUTTER_WIDTH + 1 + NAME_WIDTH + 1 + BRANCH_WIDTH + 1 + VERSION_WIDTH);
    line.push_raw(" ");

    let message = status_message(status.local_status, status.remote_status);
    line.segments.extend(message.segments);
    line
}

/// Compose the message cell from the local and remote status.
///
/// Identical local and remote state (or an unversioned directory) renders a
/// single label; otherwise each side that is not clean contributes its
/// label, local first, comma-separated.
pub fn status_message(local: StatusKind, remote: StatusKind) -> StyledLine {
    let mut line = StyledLine::new();

    if local == StatusKind::NotVersioned || local == remote {
        line.push_styled(local.to_string(), kind_style(local));
        return line;
    }

    for kind in [local, remote] {
        if kind == StatusKind::UpToDate {
            continue;
        }
        if !line.segments.is_empty() {
            line.push_raw(", ");
        }
        line.push_styled(kind.to_string(), kind_style(kind));
    }

    line
}

/// Message text styled by its status kind.
pub fn status_label(kind: StatusKind) -> StyledString {
    StyledString::styled(kind.to_string(), kind_style(kind))
}

fn kind_style(kind: StatusKind) -> Style {
    match kind {
        StatusKind::UpToDate => SUCCESS,
        StatusKind::NotVersioned => ERROR,
        _ => WARNING,
    }
}
