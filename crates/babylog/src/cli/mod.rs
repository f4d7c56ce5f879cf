//! Command-line interface for babylog.
//!
//! This module provides the CLI structure for the `babylog` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, EntryCommand, ExportCommand, MigrateCommand, MilestoneCommand, OnboardCommand,
    PhotoCommand, StatusCommand, VaccineCommand,
};

/// babylog - A local-first baby development diary
///
/// Keeps daily entries, vaccinations, milestones and photos in a local
/// database, and imports the data of older versions on first launch.
#[derive(Debug, Parser)]
#[command(name = "babylog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show a summary of the diary
    Status(StatusCommand),

    /// Import data written by an older version
    Migrate(MigrateCommand),

    /// Create the baby's profile
    Onboard(OnboardCommand),

    /// Read and write diary entries
    #[command(subcommand)]
    Entry(EntryCommand),

    /// Track vaccinations
    #[command(subcommand)]
    Vaccine(VaccineCommand),

    /// Track developmental milestones
    #[command(subcommand)]
    Milestone(MilestoneCommand),

    /// Manage entry photos
    #[command(subcommand)]
    Photo(PhotoCommand),

    /// Export the milestone catalog as CSV
    Export(ExportCommand),

    /// View or modify configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.quiet, self.verbose)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use clap::CommandFactory;

    use super::*;
    use crate::model::Mood;
    use crate::MilestoneCategory;

    fn status_cli(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: Command::Status(StatusCommand { json: false }),
        }
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "babylog");
    }

    #[test]
    fn test_verbosity() {
        use crate::logging::Verbosity;

        assert_eq!(status_cli(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(status_cli(3, true).verbosity(), Verbosity::Quiet);
        assert_eq!(status_cli(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(status_cli(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(status_cli(2, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_status() {
        let cli = Cli::try_parse_from(["babylog", "status", "--json"]).unwrap();
        assert!(matches!(cli.command, Command::Status(StatusCommand { json: true })));
    }

    #[test]
    fn test_parse_onboard() {
        let cli = Cli::try_parse_from([
            "babylog",
            "onboard",
            "--name",
            "Hana",
            "--birth-date",
            "2024-01-10",
            "--check",
            "nb_fist",
            "--check",
            "nb_cooing",
        ])
        .unwrap();
        let Command::Onboard(cmd) = cli.command else {
            panic!("expected onboard");
        };
        assert_eq!(cmd.name, "Hana");
        assert_eq!(cmd.birth_date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(cmd.reminder, "20:00");
        assert!(!cmd.no_reminder);
        assert_eq!(cmd.checked, vec!["nb_fist", "nb_cooing"]);
    }

    #[test]
    fn test_reminder_conflicts_with_no_reminder() {
        let result = Cli::try_parse_from([
            "babylog",
            "onboard",
            "-n",
            "Hana",
            "-b",
            "2024-01-10",
            "--reminder",
            "07:30",
            "--no-reminder",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_entry_write() {
        let cli = Cli::try_parse_from([
            "babylog", "entry", "write", "2024-05-01", "--mood", "fussy", "-s", "rolled over",
            "-s", "laughed", "--weight", "7.2", "--remove-skill", "Sits with support",
        ])
        .unwrap();
        let Command::Entry(EntryCommand::Write {
            mood,
            skills,
            removed_skills,
            weight,
            text,
            ..
        }) = cli.command
        else {
            panic!("expected entry write");
        };
        assert_eq!(mood, Some(Mood::Fussy));
        assert_eq!(skills, vec!["rolled over", "laughed"]);
        assert_eq!(removed_skills, vec!["Sits with support"]);
        assert_eq!(weight, Some(7.2));
        assert!(text.is_none());
    }

    #[test]
    fn test_parse_bad_date() {
        assert!(Cli::try_parse_from(["babylog", "entry", "show", "2024-13-01"]).is_err());
        assert!(Cli::try_parse_from(["babylog", "entry", "write", "2024-05-01", "-m", "grumpy"]).is_err());
    }

    #[test]
    fn test_parse_milestone_list_category() {
        let cli =
            Cli::try_parse_from(["babylog", "milestone", "list", "--category", "language"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Milestone(MilestoneCommand::List {
                category: Some(MilestoneCategory::Language)
            })
        ));
    }

    #[test]
    fn test_photo_add_requires_files() {
        assert!(Cli::try_parse_from(["babylog", "photo", "add", "2024-05-01"]).is_err());
        let cli = Cli::try_parse_from(["babylog", "photo", "add", "2024-05-01", "a.jpg", "b.png"])
            .unwrap();
        let Command::Photo(PhotoCommand::Add { files, .. }) = cli.command else {
            panic!("expected photo add");
        };
        assert_eq!(files, vec![PathBuf::from("a.jpg"), PathBuf::from("b.png")]);
    }

    #[test]
    fn test_parse_with_global_flags() {
        let cli =
            Cli::try_parse_from(["babylog", "vaccine", "list", "-c", "/custom/config.toml", "-vv"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Command::Vaccine(VaccineCommand::List { todo: false })
        ));
    }
}
