//! `babylog` - A local-first baby development diary
//!
//! This library keeps a caregiver's diary entries, vaccination records,
//! milestone records and photos in an embedded `SQLite` store, imports the
//! flat JSON document written by older versions once, and derives the
//! achievement, schedule and developmental-level views from that data.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod achievements;
pub mod autosave;
pub mod cli;
pub mod config;
pub mod diary;
pub mod error;
pub mod export;
pub mod legacy;
pub mod logging;
pub mod model;
pub mod notify;
pub mod onboarding;
pub mod persistence;
pub mod photos;
pub mod storage;
pub mod vaccinations;

pub use babylog_catalog::{Catalog, Milestone, MilestoneCategory, Vaccination};

pub use achievements::{Achievement, AchievementSource};
pub use autosave::AutoSaver;
pub use config::Config;
pub use diary::Diary;
pub use error::{Error, Result};
pub use legacy::{migrate_legacy_file, migrate_legacy_once, MigrationOutcome, MigrationReport};
pub use logging::init_logging;
pub use model::{
    AppState, CompletedMilestone, CompletedVaccination, DiaryEntry, Mood, StoredPhoto, UserProfile,
};
pub use notify::{LogNotifier, Notice, Notifier};
pub use photos::{CompressOptions, CompressedImage, PhotoService};
pub use storage::{DiaryStore, MemoryStore, SqliteStore, StorageStats};
