//! The diary application controller.
//!
//! [`Diary`] owns the in-memory [`AppState`] snapshot, applies the mutation
//! rules to it and hands every new snapshot to the [`AutoSaver`]. Storage and
//! notification sinks are injected, so the same controller runs against the
//! `SQLite` store in the binary and the in-memory store in tests.

use std::sync::Arc;
use std::time::Duration;

use babylog_catalog::Catalog;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::achievements::{achievement_map, check_recordable, AchievementMap, AchievementSource};
use crate::autosave::AutoSaver;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{AppState, DiaryEntry, UserProfile};
use crate::notify::{Notice, Notifier};
use crate::onboarding::{infer, OnboardingPlan, OnboardingResult};
use crate::persistence;
use crate::photos::{CompressOptions, PhotoService, PreviewSet};
use crate::storage::DiaryStore;

/// Tunables for a [`Diary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiaryOptions {
    /// Quiet period before a change is written.
    pub debounce: Duration,
    /// Photo compression settings.
    pub compress: CompressOptions,
    /// Maximum photos attached to one entry.
    pub max_photos_per_entry: usize,
}

impl Default for DiaryOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
            compress: CompressOptions::default(),
            max_photos_per_entry: 3,
        }
    }
}

impl From<&Config> for DiaryOptions {
    fn from(config: &Config) -> Self {
        Self {
            debounce: config.debounce(),
            compress: config.compress_options(),
            max_photos_per_entry: config.photos.max_per_entry,
        }
    }
}

/// An uploaded file waiting to be attached.
#[derive(Clone, PartialEq, Eq)]
pub struct Upload {
    /// Display name, used in notices.
    pub name: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for Upload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Upload")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// The baby diary.
#[derive(Debug)]
pub struct Diary {
    catalog: Catalog,
    state: AppState,
    notifier: Arc<dyn Notifier>,
    saver: AutoSaver,
    photos: PhotoService,
    max_photos_per_entry: usize,
}

impl Diary {
    /// Open the diary: import legacy data once, then load the stored snapshot.
    ///
    /// `legacy` is the legacy document text, if one exists.
    pub async fn open(
        store: Arc<dyn DiaryStore>,
        notifier: Arc<dyn Notifier>,
        catalog: Catalog,
        options: DiaryOptions,
        legacy: Option<&str>,
        today: NaiveDate,
    ) -> Self {
        let state = persistence::load(store.as_ref(), legacy, &catalog, today).await;
        info!(
            "Opened diary: {} entries, onboarded: {}",
            state.entries.len(),
            state.is_onboarded()
        );

        Self {
            catalog,
            state,
            saver: AutoSaver::new(Arc::clone(&store), Arc::clone(&notifier), options.debounce),
            photos: PhotoService::new(store, options.compress),
            notifier,
            max_photos_per_entry: options.max_photos_per_entry,
        }
    }

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The reference catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The photo service.
    #[must_use]
    pub fn photos(&self) -> &PhotoService {
        &self.photos
    }

    /// Achievements derived from the current snapshot.
    #[must_use]
    pub fn achievements(&self) -> AchievementMap {
        achievement_map(&self.state, &self.catalog)
    }

    /// The onboarding proposal for a baby born on `birth`.
    #[must_use]
    pub fn onboarding_plan(&self, birth: NaiveDate, today: NaiveDate) -> OnboardingPlan {
        infer(birth, today, &self.catalog)
    }

    /// Apply the outcome of onboarding.
    pub fn complete_onboarding(&mut self, result: OnboardingResult) {
        info!(
            "Onboarding complete for {}: {} milestones, {} vaccinations",
            result.profile.name,
            result.milestones.len(),
            result.vaccinations.len()
        );
        self.state
            .apply_onboarding(result.profile, result.milestones, result.vaccinations);
        self.changed();
    }

    /// Replace the profile.
    pub fn update_profile(&mut self, profile: UserProfile) {
        self.state.profile = Some(profile);
        self.changed();
    }

    /// Store an entry, replacing the one recorded for its day.
    pub fn save_entry(&mut self, entry: DiaryEntry) {
        debug!("Saving entry for {}", entry.date);
        self.state.upsert_entry(entry);
        self.changed();
    }

    /// Mark a vaccination as given on `date`, or unmark it if already given.
    ///
    /// Returns whether it is given afterwards, or `None` without changing
    /// anything when `id` is not in the catalog.
    pub fn toggle_vaccination(&mut self, id: &str, date: NaiveDate) -> Option<bool> {
        self.catalog.vaccination(id)?;
        let done = self.state.toggle_vaccination(id, date);
        self.changed();
        Some(done)
    }

    /// Record a milestone as achieved on `date`, or move it to `date`.
    ///
    /// Returns `false` when `id` is not in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PrerequisiteMissing`] or [`Error::DiarySourced`] when
    /// the milestone can't be recorded from the milestone list.
    pub fn record_milestone(&mut self, id: &str, date: NaiveDate) -> Result<bool> {
        check_recordable(&self.achievements(), &self.catalog, id)?;
        let changed = self.state.set_milestone(&self.catalog, id, Some(date));
        if changed {
            self.changed();
        }
        Ok(changed)
    }

    /// Remove a manually recorded milestone.
    ///
    /// Returns `false` when nothing was recorded for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DiarySourced`] if the milestone comes from a diary entry.
    pub fn clear_milestone(&mut self, id: &str) -> Result<bool> {
        let Some(milestone) = self.catalog.milestone(id) else {
            return Ok(false);
        };
        match self.achievements().get(id) {
            None => return Ok(false),
            Some(a) if a.source == AchievementSource::Diary => {
                return Err(Error::DiarySourced {
                    milestone: milestone.title.to_string(),
                    date: a.date.unwrap_or_default(),
                });
            }
            Some(_) => {}
        }

        let changed = self.state.set_milestone(&self.catalog, id, None);
        if changed {
            self.changed();
        }
        Ok(changed)
    }

    /// Compress and attach photos to the entry of `date`.
    ///
    /// Files that fail are reported to the notifier and skipped. Returns the
    /// ids of the photos attached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PhotoLimit`] without attaching anything if the entry
    /// would end up with more photos than allowed.
    pub async fn attach_photos(&mut self, date: NaiveDate, uploads: Vec<Upload>) -> Result<Vec<String>> {
        let existing = self.state.entry(date).map_or(0, |e| e.images.len());
        if existing + uploads.len() > self.max_photos_per_entry {
            return Err(Error::PhotoLimit {
                limit: self.max_photos_per_entry,
                existing,
                requested: uploads.len(),
            });
        }

        let mut ids = Vec::with_capacity(uploads.len());
        for upload in uploads {
            match self.photos.add_photo(date, upload.bytes).await {
                Ok(id) => ids.push(id),
                Err(e) => {
                    warn!("Skipping photo {}: {}", upload.name, e);
                    self.notifier.notify(Notice::PhotoFailed {
                        file: upload.name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        if !ids.is_empty() {
            let mut entry = self
                .state
                .entry(date)
                .cloned()
                .unwrap_or_else(|| DiaryEntry::new(date));
            entry.images.extend(ids.iter().cloned());
            self.state.upsert_entry(entry);
            self.changed();
        }
        Ok(ids)
    }

    /// Delete a photo and detach it from the entry of `date`.
    ///
    /// Returns `false` if the photo was neither stored nor attached.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the photo cannot be deleted.
    pub async fn remove_photo(&mut self, date: NaiveDate, id: &str) -> Result<bool> {
        let deleted = self.photos.delete_photo(id).await?;

        let mut detached = false;
        if let Some(entry) = self.state.entry(date) {
            if entry.images.iter().any(|i| i == id) {
                let mut entry = entry.clone();
                entry.images.retain(|i| i != id);
                self.state.upsert_entry(entry);
                detached = true;
            }
        }
        if detached {
            self.changed();
        }
        Ok(deleted || detached)
    }

    /// Preview handles for the photos of `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub async fn previews(&self, date: NaiveDate) -> Result<PreviewSet> {
        self.photos.previews(date).await
    }

    /// Number of previews handed out and not yet released.
    #[must_use]
    pub fn live_previews(&self) -> usize {
        self.photos.live_previews()
    }

    /// Write any pending change now.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the write fails.
    pub async fn flush(&self) -> Result<()> {
        self.saver.flush().await
    }

    /// Number of snapshots written so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.saver.writes()
    }

    fn changed(&self) {
        self.saver.schedule(self.state.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mood;
    use crate::notify::RecordingNotifier;
    use crate::photos::png;
    use crate::storage::MemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn profile() -> UserProfile {
        UserProfile {
            name: "Hana".to_string(),
            birth_date: date(2024, 1, 10),
            notification_time: "20:00".to_string(),
        }
    }

    async fn open(store: &Arc<MemoryStore>, notifier: &Arc<RecordingNotifier>) -> Diary {
        Diary::open(
            store.clone(),
            notifier.clone(),
            Catalog::builtin(),
            DiaryOptions {
                compress: CompressOptions {
                    max_long_side: 16,
                    quality: 82,
                },
                ..DiaryOptions::default()
            },
            None,
            date(2024, 6, 1),
        )
        .await
    }

    fn upload(name: &str, bytes: Vec<u8>) -> Upload {
        Upload {
            name: name.to_string(),
            bytes,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_changes_persist_across_reopen() {
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());

        let mut diary = open(&store, &notifier).await;
        assert!(!diary.state().is_onboarded());
        let plan = diary.onboarding_plan(date(2024, 1, 10), date(2024, 6, 1));
        let result = plan.complete(diary.catalog(), profile(), &[], true);
        diary.complete_onboarding(result);

        let mut entry = DiaryEntry::new(date(2024, 5, 31));
        entry.mood = Mood::Good;
        entry.content = "rolled over".to_string();
        diary.save_entry(entry);
        assert_eq!(diary.toggle_vaccination("mmr1", date(2024, 5, 30)), Some(true));
        assert_eq!(diary.toggle_vaccination("no_such_vaccine", date(2024, 1, 12)), None);
        diary.flush().await.unwrap();
        assert_eq!(diary.writes(), 1);

        let reopened = open(&store, &notifier).await;
        assert_eq!(reopened.state(), diary.state());
    }

    #[tokio::test(start_paused = true)]
    async fn test_record_and_clear_milestone() {
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let mut diary = open(&store, &notifier).await;

        let err = diary
            .record_milestone("kdst_6_sit_support", date(2024, 5, 1))
            .unwrap_err();
        assert!(matches!(err, Error::PrerequisiteMissing { .. }));

        diary.state.past_milestones.push(crate::model::CompletedMilestone {
            id: "kdst_4_neck_control".to_string(),
            date: None,
        });
        assert!(diary.record_milestone("kdst_6_sit_support", date(2024, 5, 1)).unwrap());

        // Recording adds the title to that day's entry, which then owns it.
        let achievements = diary.achievements();
        assert_eq!(achievements["kdst_6_sit_support"].source, AchievementSource::Diary);
        let err = diary.clear_milestone("kdst_6_sit_support").unwrap_err();
        assert!(matches!(err, Error::DiarySourced { .. }));

        assert!(diary.clear_milestone("kdst_4_neck_control").unwrap());
        assert!(!diary.clear_milestone("kdst_4_neck_control").unwrap());
        assert!(!diary.record_milestone("no_such_milestone", date(2024, 5, 1)).unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unrecord_milestone_through_entry() {
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let mut diary = open(&store, &notifier).await;
        let day = date(2024, 5, 1);
        let title = diary.catalog().milestone("nb_fist").unwrap().title;

        assert!(diary.record_milestone("nb_fist", day).unwrap());
        assert!(matches!(
            diary.clear_milestone("nb_fist").unwrap_err(),
            Error::DiarySourced { .. }
        ));

        let mut entry = diary.state().entry(day).unwrap().clone();
        assert!(entry.remove_skill(title));
        diary.save_entry(entry);

        // The manual record is left and can now be cleared from the milestone list.
        let achievements = diary.achievements();
        assert_eq!(achievements["nb_fist"].source, AchievementSource::Manual);
        assert!(diary.clear_milestone("nb_fist").unwrap());
        assert!(!diary.achievements().contains_key("nb_fist"));
        assert!(!diary.state().entry(day).unwrap().has_skill(title));

        diary.flush().await.unwrap();
        let reopened = open(&store, &notifier).await;
        assert!(!reopened.achievements().contains_key("nb_fist"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_attach_photos_skips_bad_files() {
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let mut diary = open(&store, &notifier).await;
        let day = date(2024, 5, 1);

        let ids = diary
            .attach_photos(
                day,
                vec![upload("a.png", png(32, 32)), upload("notes.txt", b"hello".to_vec())],
            )
            .await
            .unwrap();
        assert_eq!(ids.len(), 1);
        assert_eq!(diary.state().entry(day).unwrap().images, ids);
        assert!(matches!(
            notifier.notices().as_slice(),
            [Notice::PhotoFailed { file, .. }] if file == "notes.txt"
        ));

        let err = diary
            .attach_photos(
                day,
                vec![upload("b.png", png(8, 8)), upload("c.png", png(8, 8)), upload("d.png", png(8, 8))],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::PhotoLimit { limit: 3, existing: 1, requested: 3 }));
        assert_eq!(store.photo_count().await.unwrap(), 1);

        let mut previews = diary.previews(day).await.unwrap();
        assert_eq!(diary.live_previews(), 1);
        assert!(previews.release(&ids[0]));
        assert_eq!(diary.live_previews(), 0);

        assert!(diary.remove_photo(day, &ids[0]).await.unwrap());
        assert!(diary.state().entry(day).unwrap().images.is_empty());
        assert_eq!(store.photo_count().await.unwrap(), 0);
        assert!(!diary.remove_photo(day, &ids[0]).await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_failure_notifies() {
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let mut diary = open(&store, &notifier).await;
        store.set_fail_writes(true);

        diary.update_profile(profile());
        assert!(diary.flush().await.is_err());
        assert_eq!(notifier.notices(), vec![Notice::SaveFailed]);
        assert!(diary.state().is_onboarded());
    }
}
