use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use renex_lib::settings::{load_settings, resolve_value};
use renex_lib::{FileOutcome, RenameConfig};

use crate::cli_types::RenameArgs;
use crate::commands::{print_report, print_summary};
use crate::error::CliError;

pub(crate) fn run_rename(args: RenameArgs, verbose: bool) -> Result<(), CliError> {
    let settings = load_settings()?;
    let defaults = settings.defaults;

    let config = RenameConfig {
        directory: args.directory,
        pattern: args.regex,
        template: args.new_name,
        separator: resolve_value(args.separator, defaults.separator.as_ref()),
        trim_prefix: resolve_value(args.trim_prefix, defaults.trim_prefix.as_ref()),
        trim_suffix: resolve_value(args.trim_suffix, defaults.trim_suffix.as_ref()),
        apply: args.rename,
        verbose,
        ledger: args.backup_file,
    };

    log::info!(
        "Renaming files in: {}",
        config
            .directory
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    if config.apply {
        if let Some(ledger) = &config.ledger {
            log::info!(
                "{}",
                format!("Backup file: {}", ledger.display())
                    .if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    } else {
        log::warn!(
            "{}",
            "Dry run: not renaming files, just printing what would be done (add --rename)"
                .if_supports_color(Stdout, |t| t.yellow()),
        );
    }
    log::info!("");

    let summary = renex_lib::run_rename(&config, &|report| print_report(report, verbose))?;

    if summary
        .reports
        .iter()
        .any(|r| matches!(r.outcome, FileOutcome::Failed(_)))
    {
        log::warn!(
            "{}",
            "Some renames were logged to the backup file but failed on disk; \
             reverting will report them as missing"
                .if_supports_color(Stdout, |t| t.yellow()),
        );
    }
    print_summary(&summary, config.apply);
    Ok(())
}
