use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use renex_lib::settings::{load_settings, load_settings_string, settings_path};

use crate::error::CliError;

/// Show the settings file and the defaults it provides.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "renex Settings".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let defaults = load_settings()?.defaults;
    let fields = [
        ("separator", defaults.separator),
        ("trim_prefix", defaults.trim_prefix),
        ("trim_suffix", defaults.trim_suffix),
    ];
    for (name, value) in fields {
        match value {
            Some(v) => log::info!("  {:<12} {:?}", name, v),
            None => log::info!(
                "  {:<12} {}",
                name,
                "(not set)".if_supports_color(Stdout, |t| t.dimmed()),
            ),
        }
    }

    if let Some(contents) = load_settings_string() {
        log::debug!("Raw settings:\n{contents}");
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    // Raw print so the path can be used in scripts
    println!("{}", settings_path().display());
}
