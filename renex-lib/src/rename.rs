//! Pattern-driven batch rename with a ledger for undo.
//!
//! A run goes scan → [`plan_renames`] → [`execute_renames`]. Planning only
//! matches and resolves names. Execution walks the plan in scan order and,
//! per file, checks the destination, writes the ledger entry, and only then
//! renames. If the process dies between the two, the ledger holds an entry
//! for a rename that never happened, which revert reports as missing.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use renex_core::{GroupValues, NamePattern, TemplateResolver, describe_groups};

use crate::candidate::{Directory, check_file_name, is_occupied};
use crate::error::RenexError;
use crate::ledger::RenameLedger;
use crate::report::{FileOutcome, FileReport, RunSummary};

/// Everything one rename run needs. Built once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct RenameConfig {
    pub directory: PathBuf,
    pub pattern: String,
    pub template: String,
    pub separator: String,
    pub trim_prefix: String,
    pub trim_suffix: String,
    /// Actually rename. Without this the run only reports.
    pub apply: bool,
    /// Attach the annotated template and group values to each report.
    pub verbose: bool,
    /// Ledger to create. Required when `apply` is set.
    pub ledger: Option<PathBuf>,
}

impl RenameConfig {
    /// Check for missing settings before anything touches the filesystem.
    pub fn validate(&self) -> Result<(), RenexError> {
        if self.directory.as_os_str().is_empty() {
            return Err(RenexError::config("missing directory"));
        }
        if self.pattern.is_empty() {
            return Err(RenexError::config("missing regex pattern"));
        }
        if self.template.is_empty() {
            return Err(RenexError::config("missing new name pattern"));
        }
        if self.apply && self.ledger.is_none() {
            return Err(RenexError::config(
                "a backup file is required to rename files",
            ));
        }
        Ok(())
    }

    pub fn rule(&self) -> Result<RenameRule, RenexError> {
        let pattern = NamePattern::new(&self.pattern)?;
        let resolver = TemplateResolver::new(&self.template)
            .with_separator(&self.separator)
            .with_trim_prefix(&self.trim_prefix)
            .with_trim_suffix(&self.trim_suffix);
        Ok(RenameRule { pattern, resolver })
    }
}

/// A compiled pattern plus the template it feeds.
#[derive(Debug, Clone)]
pub struct RenameRule {
    pub pattern: NamePattern,
    pub resolver: TemplateResolver,
}

impl RenameRule {
    /// Resolve the new name for `filename`, or `None` if the pattern misses.
    pub fn apply(&self, filename: &str) -> Option<ResolvedRename> {
        let groups = self.pattern.captures(filename)?;
        let resolved = self.resolver.resolve(&groups);
        Some(ResolvedRename {
            name: resolved.name,
            annotated: resolved.annotated,
            groups,
        })
    }
}

/// Result of applying a [`RenameRule`] to one filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRename {
    pub name: String,
    pub annotated: String,
    pub groups: GroupValues,
}

/// One matched file and its resolved name.
#[derive(Debug, Clone)]
pub struct PlannedRename {
    /// Position of the candidate in the [`Directory`].
    pub position: usize,
    pub source: String,
    pub target: String,
    pub detail: Option<String>,
}

impl PlannedRename {
    pub fn is_unchanged(&self) -> bool {
        self.source == self.target
    }
}

/// Decisions for a directory, in scan order.
#[derive(Debug, Default)]
pub struct RenamePlan {
    pub renames: Vec<PlannedRename>,
    /// Names the pattern did not match.
    pub unmatched: Vec<String>,
}

/// Match every candidate against `rule` and set pending names.
///
/// Touches neither the filesystem nor any ledger.
pub fn plan_renames(dir: &mut Directory, rule: &RenameRule, verbose: bool) -> RenamePlan {
    let mut plan = RenamePlan::default();

    for position in 0..dir.len() {
        let Some(source) = dir.get(position).map(|c| c.current_name().to_string()) else {
            continue;
        };
        let Some(resolved) = rule.apply(&source) else {
            log::trace!("No match: {source}");
            plan.unmatched.push(source);
            continue;
        };

        dir.set_pending_name(position, resolved.name.as_str());
        let detail = verbose.then(|| {
            format!(
                "\"{}\" {}",
                resolved.annotated,
                describe_groups(&resolved.groups)
            )
        });
        plan.renames.push(PlannedRename {
            position,
            source,
            target: resolved.name,
            detail,
        });
    }

    log::debug!(
        "Planned {} renames, {} unmatched",
        plan.renames.len(),
        plan.unmatched.len()
    );
    plan
}

/// Carry out (or, without a ledger, only report) a [`RenamePlan`].
///
/// With `ledger` set, each rename is logged before it is performed; a ledger
/// write failure aborts the whole run before that file is touched. Without
/// one, the directory is simulated so a dry run reports the same collisions
/// a real run would hit. Per-file problems are reported through `on_file` and
/// don't stop the batch.
pub fn execute_renames(
    dir: &mut Directory,
    plan: &RenamePlan,
    mut ledger: Option<&mut RenameLedger>,
    on_file: &dyn Fn(&FileReport),
) -> Result<RunSummary, RenexError> {
    let mut summary = RunSummary {
        unmatched: plan.unmatched.len(),
        ..Default::default()
    };

    let mut simulated = SimulatedNames::default();
    for planned in &plan.renames {
        let outcome = match ledger.as_deref_mut() {
            Some(ledger) => rename_one(dir, planned, ledger)?,
            None => simulate_one(dir, planned, &mut simulated),
        };
        if outcome != FileOutcome::Applied {
            dir.clear_pending(planned.position);
        }
        let report = FileReport {
            source: planned.source.clone(),
            target: planned.target.clone(),
            outcome,
            detail: planned.detail.clone(),
        };
        on_file(&report);
        summary.record(report);
    }

    Ok(summary)
}

/// Names a dry run has handed out or freed so far.
#[derive(Debug, Default)]
struct SimulatedNames {
    claimed: HashSet<String>,
    vacated: HashSet<String>,
}

impl SimulatedNames {
    fn is_occupied(&self, dir: &Directory, name: &str) -> bool {
        self.claimed.contains(name)
            || (!self.vacated.contains(name) && is_occupied(&dir.join(name)))
    }

    fn record(&mut self, source: &str, target: &str) {
        self.claimed.remove(source);
        self.vacated.insert(source.to_string());
        self.vacated.remove(target);
        self.claimed.insert(target.to_string());
    }
}

/// Checks that come before any write, shared by real and dry runs.
fn precheck(planned: &PlannedRename) -> Option<FileOutcome> {
    if planned.is_unchanged() {
        return Some(FileOutcome::Unchanged);
    }
    check_file_name(&planned.target)
        .err()
        .map(FileOutcome::InvalidTarget)
}

fn simulate_one(
    dir: &Directory,
    planned: &PlannedRename,
    simulated: &mut SimulatedNames,
) -> FileOutcome {
    if let Some(outcome) = precheck(planned) {
        return outcome;
    }
    if simulated.is_occupied(dir, &planned.target) {
        return FileOutcome::Collision;
    }
    simulated.record(&planned.source, &planned.target);
    FileOutcome::Planned
}

fn rename_one(
    dir: &mut Directory,
    planned: &PlannedRename,
    ledger: &mut RenameLedger,
) -> Result<FileOutcome, RenexError> {
    if let Some(outcome) = precheck(planned) {
        return Ok(outcome);
    }
    let destination = dir.join(&planned.target);
    // The ledger may not exist yet, so its path is checked on its own
    if is_occupied(&destination) || ledger.is_at(&destination) {
        return Ok(FileOutcome::Collision);
    }

    let original = dir
        .get(planned.position)
        .map(|c| c.original_name().to_string())
        .unwrap_or_else(|| planned.source.clone());
    ledger.append(&original, &planned.target)?;

    match fs::rename(dir.join(&planned.source), &destination) {
        Ok(()) => {
            dir.commit_pending(planned.position);
            Ok(FileOutcome::Applied)
        }
        Err(e) => {
            log::debug!("rename {} failed: {e}", planned.source);
            Ok(FileOutcome::Failed(e.to_string()))
        }
    }
}

/// Scan, plan and execute one rename run.
///
/// All run-level preconditions (settings, pattern, directory, ledger) are
/// checked before the first file is considered.
pub fn run_rename(
    config: &RenameConfig,
    on_file: &dyn Fn(&FileReport),
) -> Result<RunSummary, RenexError> {
    config.validate()?;
    let rule = config.rule()?;
    let mut dir = Directory::scan(&config.directory)?;

    let mut ledger = match (&config.ledger, config.apply) {
        (Some(path), true) => Some(RenameLedger::create_fresh(path)?),
        _ => None,
    };

    let plan = plan_renames(&mut dir, &rule, config.verbose);
    execute_renames(&mut dir, &plan, ledger.as_mut(), on_file)
}

#[cfg(test)]
#[path = "tests/rename_tests.rs"]
mod tests;
