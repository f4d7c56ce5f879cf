//! Preview handles for displayed photos.
//!
//! A preview shares the photo bytes and counts as live until it is released
//! or dropped, so callers that forget to let go of previews show up in
//! [`PreviewTracker::live`].

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;

use crate::model::StoredPhoto;

/// Counts the previews currently alive.
#[derive(Debug, Clone, Default)]
pub struct PreviewTracker {
    live: Arc<AtomicUsize>,
}

impl PreviewTracker {
    /// Create a tracker with no live previews.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of previews not yet released.
    #[must_use]
    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Turn a stored photo into a tracked preview.
    #[must_use]
    pub fn issue(&self, photo: StoredPhoto) -> PhotoPreview {
        self.live.fetch_add(1, Ordering::SeqCst);
        PhotoPreview {
            id: photo.id,
            mime: photo.mime,
            width: photo.width,
            height: photo.height,
            blob: Arc::from(photo.blob),
            _live: LiveGuard(Arc::clone(&self.live)),
        }
    }
}

#[derive(Debug)]
struct LiveGuard(Arc<AtomicUsize>);

impl Drop for LiveGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// A displayable handle on one photo.
#[derive(Debug)]
pub struct PhotoPreview {
    /// Photo id.
    pub id: String,
    /// MIME type of the bytes.
    pub mime: String,
    /// Width in pixels, 0 when unknown.
    pub width: u32,
    /// Height in pixels, 0 when unknown.
    pub height: u32,
    blob: Arc<[u8]>,
    _live: LiveGuard,
}

impl PhotoPreview {
    /// The encoded image bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.blob
    }
}

/// The previews of one diary day, oldest photo first.
#[derive(Debug)]
pub struct PreviewSet {
    date: NaiveDate,
    previews: Vec<PhotoPreview>,
}

impl PreviewSet {
    pub(crate) fn new(date: NaiveDate, previews: Vec<PhotoPreview>) -> Self {
        Self { date, previews }
    }

    /// The day these previews belong to.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Number of previews still held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.previews.len()
    }

    /// Whether every preview has been released.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }

    /// The preview for a photo id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PhotoPreview> {
        self.previews.iter().find(|p| p.id == id)
    }

    /// Iterate over the held previews.
    pub fn iter(&self) -> impl Iterator<Item = &PhotoPreview> {
        self.previews.iter()
    }

    /// Release one preview. Returns `false` if it was not held.
    pub fn release(&mut self, id: &str) -> bool {
        let before = self.previews.len();
        self.previews.retain(|p| p.id != id);
        self.previews.len() != before
    }
}
