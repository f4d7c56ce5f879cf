//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use babylog_catalog::MilestoneCategory;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::model::Mood;

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Migrate command arguments.
#[derive(Debug, Args)]
pub struct MigrateCommand {
    /// Legacy JSON document to import instead of the configured one
    #[arg(short, long, value_name = "FILE")]
    pub legacy: Option<PathBuf>,
}

/// Onboard command arguments.
#[derive(Debug, Args)]
pub struct OnboardCommand {
    /// The baby's name
    #[arg(short, long)]
    pub name: String,

    /// Birth date (YYYY-MM-DD)
    #[arg(short, long, value_name = "DATE")]
    pub birth_date: NaiveDate,

    /// Daily reminder time (HH:MM)
    #[arg(long, value_name = "HH:MM", default_value = "20:00", conflicts_with = "no_reminder")]
    pub reminder: String,

    /// Disable the daily reminder
    #[arg(long)]
    pub no_reminder: bool,

    /// Milestone already achieved (repeatable)
    #[arg(long = "check", value_name = "ID")]
    pub checked: Vec<String>,
}

/// Diary entry commands.
#[derive(Debug, Subcommand)]
pub enum EntryCommand {
    /// List all entries
    List,

    /// Show one day's entry
    Show {
        /// Day of the entry (YYYY-MM-DD)
        date: NaiveDate,
    },

    /// Create or update one day's entry
    Write {
        /// Day of the entry (YYYY-MM-DD)
        date: NaiveDate,

        /// Mood of the day (excellent, good, fussy, bad, sick)
        #[arg(short, long)]
        mood: Option<Mood>,

        /// Entry text, replacing any existing text
        #[arg(short, long)]
        text: Option<String>,

        /// Skill achieved this day (repeatable)
        #[arg(short, long = "skill", value_name = "SKILL")]
        skills: Vec<String>,

        /// Skill to take off this day (repeatable)
        #[arg(long = "remove-skill", value_name = "SKILL")]
        removed_skills: Vec<String>,

        /// Height in centimetres
        #[arg(long)]
        height: Option<f64>,

        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,
    },
}

/// Vaccination commands.
#[derive(Debug, Subcommand)]
pub enum VaccineCommand {
    /// Show the vaccination schedule
    List {
        /// Only show vaccinations not yet given
        #[arg(long)]
        todo: bool,
    },

    /// Record a vaccination as given
    Done {
        /// Vaccination id
        id: String,

        /// Day it was given (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Remove a vaccination record
    Undo {
        /// Vaccination id
        id: String,
    },
}

/// Milestone commands.
#[derive(Debug, Subcommand)]
pub enum MilestoneCommand {
    /// List milestones and their status
    List {
        /// Only show one category
        #[arg(long)]
        category: Option<MilestoneCategory>,
    },

    /// Record a milestone as achieved
    Record {
        /// Milestone id
        id: String,

        /// Day it was achieved (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Remove a manual milestone record
    Clear {
        /// Milestone id
        id: String,
    },

    /// Show developmental levels per category
    Levels,
}

/// Photo commands.
#[derive(Debug, Subcommand)]
pub enum PhotoCommand {
    /// Attach photos to a day's entry
    Add {
        /// Day of the entry (YYYY-MM-DD)
        date: NaiveDate,

        /// Image files to attach
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// List the photos of a day
    List {
        /// Day of the entry (YYYY-MM-DD)
        date: NaiveDate,
    },

    /// Delete a photo
    Delete {
        /// Day of the entry (YYYY-MM-DD)
        date: NaiveDate,

        /// Photo id
        id: String,
    },
}

/// Export command arguments.
#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Output file (defaults to babylog_milestones_<today>.csv)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_command_debug() {
        let cmd = StatusCommand { json: true };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("json"));
    }

    #[test]
    fn test_entry_write_debug() {
        let cmd = EntryCommand::Write {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            mood: Some(Mood::Fussy),
            text: None,
            skills: vec![],
            removed_skills: vec!["rolled over".to_string()],
            height: None,
            weight: Some(7.2),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Fussy"));
        assert!(debug_str.contains("7.2"));
        assert!(debug_str.contains("rolled over"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
