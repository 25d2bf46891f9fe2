//! Batch renaming driven by named regex groups, with an undo ledger.
//!
//! [`rename::run_rename`] and [`revert::run_revert`] are the entry points;
//! both stream one [`FileReport`] per file through a callback and return a
//! [`RunSummary`].

pub mod candidate;
pub mod error;
pub mod ledger;
pub mod rename;
pub mod report;
pub mod revert;
pub mod settings;

pub use candidate::{Candidate, Directory};
pub use error::RenexError;
pub use ledger::{LedgerEntry, RenameLedger};
pub use rename::{
    PlannedRename, RenameConfig, RenamePlan, RenameRule, execute_renames, plan_renames,
    run_rename,
};
pub use renex_core::{GroupValues, NamePattern, PatternError, TemplateResolver};
pub use report::{FileOutcome, FileReport, RunSummary};
pub use revert::{RevertConfig, revert_entries, run_revert};
