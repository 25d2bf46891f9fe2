//! Optional user settings file.
//!
//! `~/.config/renex/settings.toml` can hold defaults for the values users
//! tend to repeat on every invocation:
//!
//! ```toml
//! [defaults]
//! separator = " - "
//! trim_prefix = "0"
//! ```
//!
//! Command-line flags always win over the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::RenexError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub defaults: RuleDefaults,
}

/// Fallback values for the rename flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleDefaults {
    pub separator: Option<String>,
    pub trim_prefix: Option<String>,
    pub trim_suffix: Option<String>,
}

/// Canonical path to the settings file: `~/.config/renex/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("renex").join("settings.toml")
}

/// Load settings from the canonical path. A missing file yields defaults.
pub fn load_settings() -> Result<Settings, RenexError> {
    load_settings_from(&settings_path())
}

/// Load settings from `path`. A missing file yields defaults; a file that
/// exists but doesn't parse is a configuration error.
pub fn load_settings_from(path: &Path) -> Result<Settings, RenexError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::trace!("No settings file at {}", path.display());
            return Ok(Settings::default());
        }
        Err(e) => {
            return Err(RenexError::config(format!(
                "cannot read {}: {e}",
                path.display()
            )));
        }
    };
    parse_settings(&contents)
        .map_err(|e| RenexError::config(format!("{}: {e}", path.display())))
}

fn parse_settings(contents: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(contents)
}

/// Load the settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

/// Pick the first value that is set: flag, then settings file, then empty.
pub fn resolve_value(flag: Option<String>, fallback: Option<&String>) -> String {
    flag.or_else(|| fallback.cloned()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let settings = parse_settings(
            r#"
[defaults]
separator = " - "
trim_prefix = "0"
"#,
        )
        .unwrap();
        assert_eq!(settings.defaults.separator.as_deref(), Some(" - "));
        assert_eq!(settings.defaults.trim_prefix.as_deref(), Some("0"));
        assert_eq!(settings.defaults.trim_suffix, None);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(parse_settings("").unwrap(), Settings::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(parse_settings("[defaults]\nseperator = \"-\"\n").is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&tmp.path().join("settings.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "[defaults\n").unwrap();
        let err = load_settings_from(&path).unwrap_err();
        assert!(matches!(err, RenexError::ConfigInvalid(_)));
    }

    #[test]
    fn test_resolve_value_priority() {
        let file = Some("-".to_string());
        assert_eq!(resolve_value(Some("_".into()), file.as_ref()), "_");
        assert_eq!(resolve_value(None, file.as_ref()), "-");
        assert_eq!(resolve_value(None, None), "");
    }
}
