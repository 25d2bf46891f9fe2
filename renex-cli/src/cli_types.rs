//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "renex")]
#[command(about = "Rename files using regex named groups, with a backup file for reverting", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps, debug-level messages and
    /// the annotated new-name pattern for each file)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for renaming files matching a regex.
#[derive(Args, Clone)]
pub(crate) struct RenameArgs {
    /// The directory which contains files to rename
    #[arg(short, long)]
    pub directory: PathBuf,

    /// The regex pattern to match file names against, with named groups
    /// such as (?P<episode>\d+)
    #[arg(short, long)]
    pub regex: String,

    /// The pattern to use for the new name. Use a group name inside <>
    /// brackets, e.g. <episode>. Add # at the start or end of the tag to
    /// insert the separator there, e.g. <#episode#>
    #[arg(short, long)]
    pub new_name: String,

    /// Separator used by #-marked tags in --new-name
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Trim this prefix from every group match
    #[arg(long)]
    pub trim_prefix: Option<String>,

    /// Trim this suffix from every group match
    #[arg(long)]
    pub trim_suffix: Option<String>,

    /// Backup file to write, for reverting the rename. Must not exist yet.
    /// Required with --rename
    #[arg(short, long)]
    pub backup_file: Option<PathBuf>,

    /// Actually rename files instead of just printing what would be done
    #[arg(long)]
    pub rename: bool,
}

/// Arguments for reverting a previous rename.
#[derive(Args, Clone)]
pub(crate) struct RevertArgs {
    /// The directory which contains the renamed files
    #[arg(short, long)]
    pub directory: PathBuf,

    /// The backup file written by the rename
    #[arg(long)]
    pub restore: PathBuf,

    /// Actually revert file names instead of just printing what would be done
    #[arg(long)]
    pub rename: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Rename files matching a regex
    Rename(RenameArgs),

    /// Revert a rename using its backup file
    Revert(RevertArgs),

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the defaults it provides
    Show,

    /// Print the settings file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rename() {
        let cli = Cli::try_parse_from([
            "renex",
            "rename",
            "--directory",
            "tv",
            "--regex",
            r"^(?P<n>\d+)$",
            "--new-name",
            "E<n>",
            "--separator",
            "-",
            "--backup-file",
            "backup.log",
            "--rename",
        ])
        .unwrap();
        match cli.command {
            Commands::Rename(args) => {
                assert_eq!(args.directory, PathBuf::from("tv"));
                assert_eq!(args.separator.as_deref(), Some("-"));
                assert_eq!(args.trim_prefix, None);
                assert_eq!(args.backup_file, Some(PathBuf::from("backup.log")));
                assert!(args.rename);
            }
            _ => panic!("expected rename"),
        }
    }

    #[test]
    fn test_revert_requires_restore_file() {
        assert!(Cli::try_parse_from(["renex", "revert", "--directory", "tv"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "renex", "revert", "-d", "tv", "--restore", "b.log", "--verbose",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }
}
