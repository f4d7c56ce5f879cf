//! `SQLite` schema definitions for babylog.
//!
//! This module contains the SQL statements for creating and managing
//! the database schema. Dates are stored as `YYYY-MM-DD` text, string lists
//! as JSON arrays.

/// SQL statement to create the singleton profile table.
pub const CREATE_PROFILE_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS profile (
    key INTEGER PRIMARY KEY CHECK (key = 1),
    name TEXT NOT NULL,
    birth_date TEXT NOT NULL,
    notification_time TEXT NOT NULL DEFAULT ''
)
";

/// SQL statement to create the diary entries table, one row per day.
pub const CREATE_ENTRIES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS entries (
    date TEXT PRIMARY KEY,
    id TEXT NOT NULL,
    content TEXT NOT NULL DEFAULT '',
    images TEXT NOT NULL DEFAULT '[]',
    mood TEXT NOT NULL,
    skills TEXT NOT NULL DEFAULT '[]',
    height REAL,
    weight REAL
)
";

/// SQL statement to create the completed vaccinations table.
pub const CREATE_VACCINATIONS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS vaccinations (
    id TEXT PRIMARY KEY,
    date TEXT NOT NULL
)
";

/// SQL statement to create the manually recorded milestones table.
pub const CREATE_MILESTONES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS milestones (
    id TEXT PRIMARY KEY,
    date TEXT
)
";

/// SQL statement to create the photos table.
pub const CREATE_PHOTOS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS photos (
    id TEXT PRIMARY KEY,
    entry_date TEXT NOT NULL,
    blob BLOB NOT NULL,
    mime TEXT NOT NULL,
    width INTEGER NOT NULL DEFAULT 0,
    height INTEGER NOT NULL DEFAULT 0,
    created_at INTEGER NOT NULL
)
";

/// SQL statement to create an index for listing the photos of one day.
pub const CREATE_PHOTO_DATE_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_photos_entry_date ON photos(entry_date, created_at)
";

/// SQL statement to create the user settings table.
pub const CREATE_SETTINGS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS settings (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// SQL statement to create the application meta table (one-shot flags).
pub const CREATE_META_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// SQL statement to create the metadata table holding the schema version.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    CREATE_PROFILE_TABLE,
    CREATE_ENTRIES_TABLE,
    CREATE_VACCINATIONS_TABLE,
    CREATE_MILESTONES_TABLE,
    CREATE_PHOTOS_TABLE,
    CREATE_PHOTO_DATE_INDEX,
    CREATE_SETTINGS_TABLE,
    CREATE_META_TABLE,
    CREATE_METADATA_TABLE,
];
