//! User-facing notices for failures that do not stop the diary.

use std::sync::Mutex;

use tracing::{error, warn};

/// Something the user should be told about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Writing the diary to storage failed.
    SaveFailed,
    /// One uploaded photo could not be processed.
    PhotoFailed {
        /// Name of the file that failed.
        file: String,
        /// Why it failed.
        reason: String,
    },
}

impl Notice {
    /// The message shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::SaveFailed => {
                "Saving failed. Device storage may be full; free up space and try again.".to_string()
            }
            Self::PhotoFailed { file, reason } => {
                format!("Could not add photo {file}: {reason}")
            }
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// Receives notices for the user.
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Deliver a notice.
    fn notify(&self, notice: Notice);
}

/// Notifier that writes notices to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice {
            Notice::SaveFailed => error!("{}", notice),
            Notice::PhotoFailed { .. } => warn!("{}", notice),
        }
    }
}

/// Notifier that keeps every notice, for inspection.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}
