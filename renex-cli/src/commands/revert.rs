use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use renex_lib::RevertConfig;

use crate::cli_types::RevertArgs;
use crate::commands::{print_report, print_summary};
use crate::error::CliError;

pub(crate) fn run_revert(args: RevertArgs, verbose: bool) -> Result<(), CliError> {
    let config = RevertConfig {
        directory: args.directory,
        ledger: args.restore,
        apply: args.rename,
    };

    log::info!(
        "Reverting files in: {} from {}",
        config
            .directory
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
        config.ledger.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    if !config.apply {
        log::warn!(
            "{}",
            "Dry run: not reverting files, just printing what would be done (add --rename)"
                .if_supports_color(Stdout, |t| t.yellow()),
        );
    }
    log::info!("");

    let summary = renex_lib::run_revert(&config, &|report| print_report(report, verbose))?;
    print_summary(&summary, config.apply);
    Ok(())
}
