//! Per-file decisions and run summaries shared by rename and revert.

use std::fmt;

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Logged and renamed on disk
    Applied,
    /// Would be renamed; dry run
    Planned,
    /// The new name equals the current name; nothing to do
    Unchanged,
    /// Something already exists at the destination
    Collision,
    /// The new name isn't a usable file name
    InvalidTarget(String),
    /// The file a ledger entry refers to is no longer in the directory
    Missing,
    /// The rename was logged but the filesystem refused it
    Failed(String),
}

impl FileOutcome {
    /// Outcomes the user should be warned about.
    pub fn is_problem(&self) -> bool {
        matches!(
            self,
            FileOutcome::Collision
                | FileOutcome::InvalidTarget(_)
                | FileOutcome::Missing
                | FileOutcome::Failed(_)
        )
    }
}

/// One line of output: a file, where it goes, and what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Current name of the file.
    pub source: String,
    /// Name it is (or would be) renamed to.
    pub target: String,
    pub outcome: FileOutcome,
    /// Annotated template and captured groups, when verbose output is on.
    pub detail: Option<String>,
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            FileOutcome::Applied | FileOutcome::Planned => {
                write!(f, "\"{}\" > \"{}\"", self.source, self.target)
            }
            FileOutcome::Unchanged => write!(f, "\"{}\" already has that name", self.source),
            FileOutcome::Collision => write!(
                f,
                "Cannot rename \"{}\", a file named \"{}\" already exists",
                self.source, self.target
            ),
            FileOutcome::InvalidTarget(reason) => {
                write!(f, "Cannot rename \"{}\": {}", self.source, reason)
            }
            FileOutcome::Missing => write!(
                f,
                "\"{}\" not found, cannot restore \"{}\"",
                self.source, self.target
            ),
            FileOutcome::Failed(err) => write!(
                f,
                "Failed to rename \"{}\" -> \"{}\" (already logged): {}",
                self.source, self.target, err
            ),
        }
    }
}

/// Totals for a finished run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub applied: usize,
    pub planned: usize,
    pub unchanged: usize,
    /// Files the pattern didn't match (rename runs only).
    pub unmatched: usize,
    /// Collisions, invalid targets, missing files and failed renames.
    pub problems: Vec<String>,
    /// Every report, in the order it was produced.
    pub reports: Vec<FileReport>,
}

impl RunSummary {
    pub(crate) fn record(&mut self, report: FileReport) {
        match &report.outcome {
            FileOutcome::Applied => self.applied += 1,
            FileOutcome::Planned => self.planned += 1,
            FileOutcome::Unchanged => self.unchanged += 1,
            _ => self.problems.push(report.to_string()),
        }
        self.reports.push(report);
    }

    pub fn has_problems(&self) -> bool {
        !self.problems.is_empty()
    }
}
