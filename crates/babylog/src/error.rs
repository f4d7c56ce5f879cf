//! Error types for babylog.
//!
//! This module defines all error types used throughout the babylog crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for babylog operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// Failed to open or create the database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// Failed to run database migrations.
    #[error("database migration failed: {message}")]
    DatabaseMigration {
        /// Description of what went wrong.
        message: String,
    },

    /// The store refused a write (full disk, read-only medium, ...).
    #[error("storage unavailable: {message}")]
    StorageUnavailable {
        /// Description of what went wrong.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Photo Errors ===
    /// An uploaded file could not be decoded as an image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[source] image::ImageError),

    /// A decoded image could not be re-encoded.
    #[error("failed to encode image: {0}")]
    ImageEncode(#[source] image::ImageError),

    /// Attaching the photos would exceed the per-entry limit.
    #[error("an entry can hold at most {limit} photos ({existing} attached, {requested} requested)")]
    PhotoLimit {
        /// Maximum number of photos per entry.
        limit: usize,
        /// Photos already attached to the entry.
        existing: usize,
        /// Photos in the rejected request.
        requested: usize,
    },

    // === Legacy Data Errors ===
    /// A legacy inline image could not be converted.
    #[error("invalid legacy image: {message}")]
    LegacyImage {
        /// Description of what went wrong.
        message: String,
    },

    // === Diary Rule Errors ===
    /// The milestone's prerequisite has not been achieved yet.
    #[error("milestone '{milestone}' requires '{prerequisite}' to be achieved first")]
    PrerequisiteMissing {
        /// Title of the milestone being recorded.
        milestone: String,
        /// Title of the missing prerequisite.
        prerequisite: String,
    },

    /// The milestone was recorded through a diary entry and must be edited there.
    #[error("milestone '{milestone}' was recorded in the diary entry of {date}; edit that entry instead")]
    DiarySourced {
        /// Title of the milestone.
        milestone: String,
        /// Date of the diary entry that records it.
        date: NaiveDate,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for babylog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create a storage unavailable error.
    #[must_use]
    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            message: message.into(),
        }
    }

    /// Create a legacy image error.
    #[must_use]
    pub fn legacy_image(message: impl Into<String>) -> Self {
        Self::LegacyImage {
            message: message.into(),
        }
    }

    /// Check if this error comes from the persistence layer.
    #[must_use]
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            Self::DatabaseOpen { .. }
                | Self::DatabaseQuery(_)
                | Self::DatabaseMigration { .. }
                | Self::StorageUnavailable { .. }
        )
    }

    /// Check if this error comes from decoding or encoding an image.
    #[must_use]
    pub fn is_image_failure(&self) -> bool {
        matches!(self, Self::ImageDecode(_) | Self::ImageEncode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::storage_unavailable("disk full");
        assert_eq!(err.to_string(), "storage unavailable: disk full");

        let err = Error::internal("test error");
        assert_eq!(err.to_string(), "internal error: test error");
    }

    #[test]
    fn test_is_storage_failure() {
        assert!(Error::storage_unavailable("quota").is_storage_failure());
        assert!(Error::DatabaseMigration {
            message: "bad".to_string()
        }
        .is_storage_failure());
        assert!(!Error::internal("x").is_storage_failure());
    }

    #[test]
    fn test_is_image_failure() {
        let decode = image::load_from_memory(b"definitely not an image").unwrap_err();
        assert!(Error::ImageDecode(decode).is_image_failure());
        assert!(!Error::legacy_image("bad").is_image_failure());
    }

    #[test]
    fn test_photo_limit_display() {
        let err = Error::PhotoLimit {
            limit: 3,
            existing: 2,
            requested: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("at most 3"));
        assert!(msg.contains("2 attached"));
    }

    #[test]
    fn test_prerequisite_missing_display() {
        let err = Error::PrerequisiteMissing {
            milestone: "Sitting".to_string(),
            prerequisite: "Neck control".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Sitting"));
        assert!(msg.contains("Neck control"));
    }

    #[test]
    fn test_diary_sourced_display() {
        let err = Error::DiarySourced {
            milestone: "Crawling".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        assert!(err.to_string().contains("2024-03-01"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_rusqlite_error() {
        let result = rusqlite::Connection::open_with_flags(
            "/nonexistent/path/db.sqlite",
            rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY,
        );
        if let Err(sqlite_err) = result {
            let err: Error = sqlite_err.into();
            assert!(matches!(err, Error::DatabaseQuery(_)));
            assert!(err.is_storage_failure());
        }
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "quality out of range".to_string(),
        };
        assert!(err.to_string().contains("quality out of range"));
    }
}
