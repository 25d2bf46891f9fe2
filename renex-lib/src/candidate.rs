//! Files under consideration for one rename or revert run.
//!
//! A [`Directory`] owns its [`Candidate`]s in scan order and keeps a
//! name → position index next to them. The index is only touched through
//! [`Directory::commit_pending`], so it always agrees with the candidates'
//! current names.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RenexError;

/// A file discovered in the target directory at scan time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    original_name: String,
    current_name: String,
    pending_name: Option<String>,
}

impl Candidate {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            original_name: name.clone(),
            current_name: name,
            pending_name: None,
        }
    }

    /// The name the file had when it was discovered. Never changes.
    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn current_name(&self) -> &str {
        &self.current_name
    }

    pub fn pending_name(&self) -> Option<&str> {
        self.pending_name.as_deref()
    }

    /// Propose a new name for this file.
    ///
    /// Returns `false` and leaves nothing pending when `name` is the current
    /// name: there is nothing to do.
    pub fn set_pending_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name == self.current_name {
            self.pending_name = None;
            return false;
        }
        self.pending_name = Some(name);
        true
    }

    pub fn clear_pending(&mut self) {
        self.pending_name = None;
    }
}

/// The candidates of one directory, in scan order, with lookup by current name.
#[derive(Debug, Clone)]
pub struct Directory {
    path: PathBuf,
    candidates: Vec<Candidate>,
    index: HashMap<String, usize>,
}

impl Directory {
    /// List the regular files in `path`, sorted by name.
    ///
    /// Entries whose names aren't valid UTF-8 are skipped with a warning;
    /// they can't be matched against a pattern or written to a ledger.
    pub fn scan(path: impl AsRef<Path>) -> Result<Self, RenexError> {
        let path = path.as_ref();
        let meta = fs::metadata(path).map_err(|e| RenexError::directory(path, e))?;
        if !meta.is_dir() {
            return Err(RenexError::directory(path, "not a directory"));
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| RenexError::directory(path, e))? {
            let entry = entry.map_err(|e| RenexError::directory(path, e))?;
            if !entry.path().is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => {
                    log::warn!("Skipping non UTF-8 file name: {}", raw.to_string_lossy());
                }
            }
        }
        names.sort();

        log::debug!("Found {} files in {}", names.len(), path.display());
        Ok(Self::from_names(path, names))
    }

    /// Build a directory from an already-known list of names, kept in the
    /// given order.
    pub fn from_names<I, S>(path: impl Into<PathBuf>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidates: Vec<Candidate> = names.into_iter().map(Candidate::new).collect();
        let index = candidates
            .iter()
            .enumerate()
            .map(|(i, c)| (c.current_name.clone(), i))
            .collect();
        Self {
            path: path.into(),
            candidates,
            index,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Candidate> {
        self.candidates.get(position)
    }

    /// Position of the candidate currently called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// See [`Candidate::set_pending_name`]. Out-of-range positions return `false`.
    pub fn set_pending_name(&mut self, position: usize, name: impl Into<String>) -> bool {
        match self.candidates.get_mut(position) {
            Some(candidate) => candidate.set_pending_name(name),
            None => false,
        }
    }

    pub fn clear_pending(&mut self, position: usize) {
        if let Some(candidate) = self.candidates.get_mut(position) {
            candidate.clear_pending();
        }
    }

    /// Record that the pending rename of `position` happened on disk.
    pub fn commit_pending(&mut self, position: usize) {
        let Some(candidate) = self.candidates.get_mut(position) else {
            return;
        };
        let Some(new_name) = candidate.pending_name.take() else {
            return;
        };
        let old_name = std::mem::replace(&mut candidate.current_name, new_name.clone());
        self.index.remove(&old_name);
        self.index.insert(new_name, position);
    }

    /// Full path of `name` inside this directory.
    pub fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

/// True if `path` exists and is a regular file (following symlinks).
pub fn is_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// True if anything at all sits at `path`, dangling symlinks included.
pub fn is_occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Check that `name` is a bare file name that stays inside its directory.
pub fn check_file_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("new name is empty".to_string());
    }
    if name == "." || name == ".." {
        return Err(format!("\"{name}\" is not a file name"));
    }
    if name.contains(['/', std::path::MAIN_SEPARATOR, '\0']) {
        return Err(format!("\"{name}\" contains a path separator"));
    }
    Ok(())
}
