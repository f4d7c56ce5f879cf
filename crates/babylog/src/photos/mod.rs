//! Photo storage for diary entries.
//!
//! Uploads are compressed before they are stored and are keyed by a generated
//! id; the owning entry lists those ids in display order.

mod compress;
mod preview;

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::Result;
use crate::model::StoredPhoto;
use crate::storage::DiaryStore;

pub use compress::{compress, compress_blocking, target_size, CompressOptions, CompressedImage, OUTPUT_MIME};
pub use preview::{PhotoPreview, PreviewSet, PreviewTracker};

#[cfg(test)]
pub(crate) use compress::tests::png;

/// Compresses, stores and retrieves photos.
#[derive(Debug, Clone)]
pub struct PhotoService {
    store: Arc<dyn DiaryStore>,
    options: CompressOptions,
    tracker: PreviewTracker,
}

impl PhotoService {
    /// Create a service over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn DiaryStore>, options: CompressOptions) -> Self {
        Self {
            store,
            options,
            tracker: PreviewTracker::new(),
        }
    }

    /// Compress `bytes` and store the result for `date`.
    ///
    /// Returns the new photo id.
    ///
    /// # Errors
    ///
    /// Returns an image error if the upload cannot be decoded or encoded, or a
    /// storage error if the photo cannot be written.
    pub async fn add_photo(&self, date: NaiveDate, bytes: Vec<u8>) -> Result<String> {
        let compressed = compress(bytes, self.options).await?;
        let photo = StoredPhoto {
            id: Uuid::new_v4().to_string(),
            entry_date: date,
            blob: compressed.blob,
            mime: compressed.mime,
            width: compressed.width,
            height: compressed.height,
            created_at: Utc::now().timestamp_millis(),
        };
        self.store.put_photo(&photo).await?;
        info!(
            "Stored photo {} for {} ({}x{})",
            photo.id, date, photo.width, photo.height
        );
        Ok(photo.id)
    }

    /// The photos of `date`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub async fn list_photos(&self, date: NaiveDate) -> Result<Vec<StoredPhoto>> {
        self.store.photos_for(date).await
    }

    /// Delete a photo. Returns `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub async fn delete_photo(&self, id: &str) -> Result<bool> {
        let deleted = self.store.delete_photo(id).await?;
        debug!("Delete photo {}: {}", id, if deleted { "removed" } else { "not found" });
        Ok(deleted)
    }

    /// Preview handles for the photos of `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub async fn previews(&self, date: NaiveDate) -> Result<PreviewSet> {
        let photos = self.list_photos(date).await?;
        let previews = photos.into_iter().map(|p| self.tracker.issue(p)).collect();
        Ok(PreviewSet::new(date, previews))
    }

    /// Number of previews handed out and not yet released.
    #[must_use]
    pub fn live_previews(&self) -> usize {
        self.tracker.live()
    }

    /// The compression settings in use.
    #[must_use]
    pub fn options(&self) -> CompressOptions {
        self.options
    }
}
