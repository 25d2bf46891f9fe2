//! Undo a rename run from its ledger.

use std::fs;
use std::path::PathBuf;

use crate::candidate::{Directory, check_file_name, is_occupied};
use crate::error::RenexError;
use crate::ledger::{LedgerEntry, RenameLedger};
use crate::report::{FileOutcome, FileReport, RunSummary};

/// Settings for one revert run.
#[derive(Debug, Clone, Default)]
pub struct RevertConfig {
    pub directory: PathBuf,
    /// Ledger written by the rename run. Must exist.
    pub ledger: PathBuf,
    /// Actually rename. Without this the run only reports.
    pub apply: bool,
}

impl RevertConfig {
    pub fn validate(&self) -> Result<(), RenexError> {
        if self.directory.as_os_str().is_empty() {
            return Err(RenexError::config("missing directory"));
        }
        if self.ledger.as_os_str().is_empty() {
            return Err(RenexError::config("missing restore file"));
        }
        Ok(())
    }
}

/// Restore the original names recorded in `entries`.
///
/// Entries are undone newest first, so a file renamed twice within the same
/// ledger walks back to its first name. Entries whose file can't be found,
/// is already back under its original name, or whose original name is taken
/// are reported and skipped.
pub fn revert_entries(
    dir: &mut Directory,
    entries: &[LedgerEntry],
    apply: bool,
    on_file: &dyn Fn(&FileReport),
) -> RunSummary {
    let mut summary = RunSummary::default();

    for entry in entries.iter().rev() {
        let outcome = revert_one(dir, entry, apply);
        let report = FileReport {
            source: entry.renamed.clone(),
            target: entry.original.clone(),
            outcome,
            detail: None,
        };
        on_file(&report);
        summary.record(report);
    }

    summary
}

fn revert_one(dir: &mut Directory, entry: &LedgerEntry, apply: bool) -> FileOutcome {
    let Some(position) = dir.position(&entry.renamed) else {
        return FileOutcome::Missing;
    };
    if !dir.set_pending_name(position, entry.original.as_str()) {
        return FileOutcome::Unchanged;
    }

    let outcome = if let Err(reason) = check_file_name(&entry.original) {
        FileOutcome::InvalidTarget(reason)
    } else if is_occupied(&dir.join(&entry.original)) {
        FileOutcome::Collision
    } else if !apply {
        FileOutcome::Planned
    } else {
        match fs::rename(dir.join(&entry.renamed), dir.join(&entry.original)) {
            Ok(()) => {
                dir.commit_pending(position);
                return FileOutcome::Applied;
            }
            Err(e) => FileOutcome::Failed(e.to_string()),
        }
    };

    dir.clear_pending(position);
    outcome
}

/// Read the ledger, scan the directory and revert every entry.
pub fn run_revert(
    config: &RevertConfig,
    on_file: &dyn Fn(&FileReport),
) -> Result<RunSummary, RenexError> {
    config.validate()?;
    let ledger = RenameLedger::open_existing(&config.ledger)?;
    let entries = ledger.read_all()?;
    log::debug!(
        "Read {} entries from {}",
        entries.len(),
        config.ledger.display()
    );

    let mut dir = Directory::scan(&config.directory)?;
    Ok(revert_entries(&mut dir, &entries, config.apply, on_file))
}
