pub(crate) mod config;
pub(crate) mod rename;
pub(crate) mod revert;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use renex_lib::{FileOutcome, FileReport, RunSummary};

/// Print one per-file line as it is decided.
pub(crate) fn print_report(report: &FileReport, verbose: bool) {
    match &report.outcome {
        FileOutcome::Applied | FileOutcome::Planned => {
            let mark = if report.outcome == FileOutcome::Applied {
                "\u{2714}"
            } else {
                "\u{2192}"
            };
            log::info!(
                "  {} {} {} {}",
                mark.if_supports_color(Stdout, |t| t.green()),
                report.source.if_supports_color(Stdout, |t| t.dimmed()),
                "\u{2192}".if_supports_color(Stdout, |t| t.green()),
                report.target.if_supports_color(Stdout, |t| t.bold()),
            );
        }
        FileOutcome::Unchanged => {
            log::warn!(
                "  {} {} {}",
                "=".if_supports_color(Stdout, |t| t.yellow()),
                report.source.if_supports_color(Stdout, |t| t.dimmed()),
                "(name unchanged, skipped)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        FileOutcome::Collision | FileOutcome::InvalidTarget(_) => {
            log::warn!(
                "  {} {}",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                report,
            );
        }
        FileOutcome::Missing => {
            log::warn!(
                "  {} {}",
                "?".if_supports_color(Stdout, |t| t.yellow()),
                report,
            );
        }
        FileOutcome::Failed(_) => {
            log::warn!(
                "  {} {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                report,
            );
        }
    }

    if verbose && let Some(detail) = &report.detail {
        log::info!(
            "      {}",
            format!("Verbose info: {detail}").if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

/// Print totals at the end of a run.
pub(crate) fn print_summary(summary: &RunSummary, applied: bool) {
    log::info!("");
    log::info!("{}", "Summary:".if_supports_color(Stdout, |t| t.bold()));
    if applied {
        log::info!(
            "  {} {} files renamed",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            summary.applied,
        );
    } else {
        log::info!(
            "  {} {} files would be renamed",
            "\u{2192}".if_supports_color(Stdout, |t| t.green()),
            summary.planned,
        );
    }
    if summary.unchanged > 0 {
        log::info!(
            "  {} {} already named correctly",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            summary.unchanged,
        );
    }
    if summary.unmatched > 0 {
        log::info!(
            "  {} {} not matching the pattern",
            "-".if_supports_color(Stdout, |t| t.dimmed()),
            summary.unmatched,
        );
    }
    if summary.has_problems() {
        log::warn!(
            "  {} {} problems",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            summary.problems.len(),
        );
    }
}
