use std::path::PathBuf;

use renex_core::PatternError;
use thiserror::Error;

/// Run-level errors. Any of these aborts a rename or revert run.
///
/// Problems with a single file (collisions, failed renames) are not errors;
/// they are reported as [`crate::FileOutcome`]s and the batch continues.
#[derive(Debug, Error)]
pub enum RenexError {
    /// A required setting is missing or malformed
    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    /// The target directory is missing, unreadable, or not a directory
    #[error("Directory {} is not accessible: {reason}", path.display())]
    DirectoryInaccessible { path: PathBuf, reason: String },

    /// The rename pattern did not compile
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// A fresh ledger was requested but the file already exists
    #[error("Backup file {} already exists, please specify a non-existing file", .0.display())]
    LedgerAlreadyExists(PathBuf),

    /// An existing ledger was requested but the file is missing
    #[error("Backup file {} doesn't exist", .0.display())]
    LedgerNotFound(PathBuf),

    /// Writing a ledger entry failed; no further renames are attempted
    #[error("Unable to write to backup file {}, aborting: {source}", path.display())]
    LedgerWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The ledger could not be read back in full
    #[error("Unable to read backup file {}: {reason}", path.display())]
    LedgerReadCorrupt { path: PathBuf, reason: String },
}

impl RenexError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigInvalid(msg.into())
    }

    pub fn directory(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::DirectoryInaccessible {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn ledger_corrupt(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::LedgerReadCorrupt {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
