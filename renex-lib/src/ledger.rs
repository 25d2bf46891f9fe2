//! Append-only record of performed renames, used to revert them.
//!
//! One `;`-delimited record per rename, `original;new`, no header row. Fields
//! containing the delimiter, quotes or newlines are quoted the usual CSV way.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::candidate::is_file;
use crate::error::RenexError;

const DELIMITER: u8 = b';';

/// One recorded rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub original: String,
    pub renamed: String,
}

impl LedgerEntry {
    pub fn new(original: impl Into<String>, renamed: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            renamed: renamed.into(),
        }
    }
}

/// Handle to a ledger file.
///
/// A fresh ledger creates its file on the first [`append`](Self::append) and
/// keeps it open until dropped.
#[derive(Debug)]
pub struct RenameLedger {
    path: PathBuf,
    fresh: bool,
    writer: Option<csv::Writer<File>>,
}

impl RenameLedger {
    /// Start a new ledger at `path`. Fails if a file is already there.
    pub fn create_fresh(path: impl Into<PathBuf>) -> Result<Self, RenexError> {
        let path = path.into();
        if is_file(&path) {
            return Err(RenexError::LedgerAlreadyExists(path));
        }
        Ok(Self {
            path,
            fresh: true,
            writer: None,
        })
    }

    /// Use the existing ledger at `path`. Fails if there is none.
    pub fn open_existing(path: impl Into<PathBuf>) -> Result<Self, RenexError> {
        let path = path.into();
        if !is_file(&path) {
            return Err(RenexError::LedgerNotFound(path));
        }
        Ok(Self {
            path,
            fresh: false,
            writer: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if `path` names this ledger's file, whether or not it exists yet.
    ///
    /// Parent directories are compared canonically, so `dir/log` and
    /// `dir/../dir/log` match.
    pub fn is_at(&self, path: &Path) -> bool {
        if self.path == path {
            return true;
        }
        match (self.path.file_name(), path.file_name()) {
            (Some(ours), Some(theirs)) if ours == theirs => {
                match (canonical_parent(&self.path), canonical_parent(path)) {
                    (Some(ours), Some(theirs)) => ours == theirs,
                    _ => false,
                }
            }
            _ => false,
        }
    }

    /// Record one rename and sync it to disk before returning.
    ///
    /// The caller must not perform the rename unless this succeeds.
    pub fn append(&mut self, original: &str, renamed: &str) -> Result<(), RenexError> {
        self.write_record(original, renamed)
            .map_err(|source| match source.kind() {
                io::ErrorKind::AlreadyExists => RenexError::LedgerAlreadyExists(self.path.clone()),
                _ => RenexError::LedgerWriteFailed {
                    path: self.path.clone(),
                    source,
                },
            })?;
        log::trace!("Logged {original:?} -> {renamed:?} to {}", self.path.display());
        Ok(())
    }

    fn write_record(&mut self, original: &str, renamed: &str) -> io::Result<()> {
        let writer = match self.writer.take() {
            Some(writer) => writer,
            None => self.open_writer()?,
        };
        let writer = self.writer.insert(writer);
        writer.write_record([original, renamed])?;
        writer.flush()?;
        writer.get_ref().sync_data()
    }

    /// Open the ledger file for appending.
    ///
    /// A fresh ledger is created with `create_new`, so a file that appeared
    /// since [`create_fresh`](Self::create_fresh) is never truncated or
    /// merged into.
    fn open_writer(&self) -> io::Result<csv::Writer<File>> {
        let file = OpenOptions::new()
            .append(true)
            .create_new(self.fresh)
            .open(&self.path)?;
        Ok(csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .from_writer(file))
    }

    /// Read every entry, in the order they were written.
    ///
    /// Any malformed record fails the whole read.
    pub fn read_all(&self) -> Result<Vec<LedgerEntry>, RenexError> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => RenexError::LedgerNotFound(self.path.clone()),
            _ => RenexError::ledger_corrupt(&self.path, e),
        })?;
        read_entries(file).map_err(|reason| RenexError::ledger_corrupt(&self.path, reason))
    }
}

fn canonical_parent(path: &Path) -> Option<PathBuf> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::canonicalize(parent).ok()
}

fn read_entries<R: io::Read>(reader: R) -> Result<Vec<LedgerEntry>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| e.to_string())?;
        if record.len() != 2 {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(format!(
                "line {line}: expected 2 fields, found {}",
                record.len()
            ));
        }
        entries.push(LedgerEntry::new(&record[0], &record[1]));
    }
    Ok(entries)
}

#[cfg(test)]
#[path = "tests/ledger_tests.rs"]
mod tests;
