//! Core data types for babylog.
//!
//! This module defines the records kept in the store and the in-memory
//! application snapshot, together with the state transitions the diary
//! applies to that snapshot.

use std::collections::{BTreeMap, BTreeSet};

use babylog_catalog::Catalog;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// How the baby was doing on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mood {
    /// Best day.
    #[default]
    Excellent,
    /// Good day.
    Good,
    /// Fussy day.
    Fussy,
    /// Bad day.
    Bad,
    /// Sick day.
    Sick,
}

impl Mood {
    /// All moods, best first.
    pub const ALL: [Self; 5] = [
        Self::Excellent,
        Self::Good,
        Self::Fussy,
        Self::Bad,
        Self::Sick,
    ];

    /// The stored name of this mood.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::Fussy => "FUSSY",
            Self::Bad => "BAD",
            Self::Sick => "SICK",
        }
    }

    /// Map a mood written by an older version to the current vocabulary.
    ///
    /// The old names `HAPPY`, `CALM`, `TIRED` and `SAD` are translated, current
    /// names are kept, and anything unrecognized becomes [`Mood::Good`].
    #[must_use]
    pub fn from_legacy(value: &str) -> Self {
        match value {
            "HAPPY" => Self::Excellent,
            "CALM" => Self::Good,
            "TIRED" => Self::Fussy,
            "SAD" => Self::Bad,
            other => other.parse().unwrap_or(Self::Good),
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown mood: {s}"))
    }
}

/// The child the diary is about. One per installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// The child's name.
    pub name: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Daily reminder time as `HH:MM`, empty when reminders are off.
    #[serde(default)]
    pub notification_time: String,
}

impl UserProfile {
    /// Whether a daily reminder is configured.
    #[must_use]
    pub fn reminders_enabled(&self) -> bool {
        !self.notification_time.is_empty()
    }
}

/// One calendar day's diary record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    /// Identifier assigned when the entry was first created.
    pub id: String,
    /// The day this entry describes. Unique across entries.
    pub date: NaiveDate,
    /// Free text.
    #[serde(default)]
    pub content: String,
    /// Ids of the photos attached to this day, in display order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Mood of the day.
    #[serde(default)]
    pub mood: Mood,
    /// Skill labels achieved on this day; catalog milestone titles where they match.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Height in centimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Weight in kilograms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl DiaryEntry {
    /// Create an empty entry for the given day.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: Utc::now().timestamp_millis().to_string(),
            date,
            content: String::new(),
            images: Vec::new(),
            mood: Mood::default(),
            skills: Vec::new(),
            height: None,
            weight: None,
        }
    }

    /// Whether `title` is listed among this day's skills.
    #[must_use]
    pub fn has_skill(&self, title: &str) -> bool {
        self.skills.iter().any(|s| s == title)
    }

    /// Append `title` unless already listed. Returns whether it was added.
    pub fn add_skill(&mut self, title: impl Into<String>) -> bool {
        let title = title.into();
        if self.has_skill(&title) {
            return false;
        }
        self.skills.push(title);
        true
    }

    /// Drop `title` from this day's skills. Returns whether it was listed.
    pub fn remove_skill(&mut self, title: &str) -> bool {
        let before = self.skills.len();
        self.skills.retain(|s| s != title);
        self.skills.len() != before
    }
}

/// A vaccination dose that has been given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedVaccination {
    /// Vaccination catalog id.
    pub id: String,
    /// Day the dose was given.
    pub date: NaiveDate,
}

/// A milestone recorded outside of a diary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedMilestone {
    /// Milestone catalog id.
    pub id: String,
    /// Day it was achieved, `None` when unknown.
    pub date: Option<NaiveDate>,
}

/// A compressed photo and its metadata.
#[derive(Clone, PartialEq, Eq)]
pub struct StoredPhoto {
    /// Generated identifier.
    pub id: String,
    /// The diary day owning this photo.
    pub entry_date: NaiveDate,
    /// Encoded image bytes.
    pub blob: Vec<u8>,
    /// MIME type of `blob`.
    pub mime: String,
    /// Width in pixels, 0 when unknown.
    pub width: u32,
    /// Height in pixels, 0 when unknown.
    pub height: u32,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl std::fmt::Debug for StoredPhoto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredPhoto")
            .field("id", &self.id)
            .field("entry_date", &self.entry_date)
            .field("blob_len", &self.blob.len())
            .field("mime", &self.mime)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// The in-memory snapshot of everything the diary knows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    /// The child's profile, `None` until onboarding completes.
    pub profile: Option<UserProfile>,
    /// Diary entries keyed by day.
    pub entries: BTreeMap<NaiveDate, DiaryEntry>,
    /// Vaccination doses given.
    pub completed_vaccinations: Vec<CompletedVaccination>,
    /// Milestones recorded outside of diary entries.
    pub past_milestones: Vec<CompletedMilestone>,
}

impl AppState {
    /// Whether onboarding has been completed.
    #[must_use]
    pub fn is_onboarded(&self) -> bool {
        self.profile.is_some()
    }

    /// The entry for a given day.
    #[must_use]
    pub fn entry(&self, date: NaiveDate) -> Option<&DiaryEntry> {
        self.entries.get(&date)
    }

    /// Store an entry, replacing whatever was recorded for its day.
    pub fn upsert_entry(&mut self, entry: DiaryEntry) {
        self.entries.insert(entry.date, entry);
    }

    /// The completion record of a vaccination, if any.
    #[must_use]
    pub fn vaccination(&self, id: &str) -> Option<&CompletedVaccination> {
        self.completed_vaccinations.iter().find(|v| v.id == id)
    }

    /// The manual record of a milestone, if any.
    #[must_use]
    pub fn milestone_record(&self, id: &str) -> Option<&CompletedMilestone> {
        self.past_milestones.iter().find(|m| m.id == id)
    }

    /// Mark a vaccination as given on `date`, or unmark it when already given.
    ///
    /// Returns `true` when the vaccination is completed afterwards.
    pub fn toggle_vaccination(&mut self, id: &str, date: NaiveDate) -> bool {
        if self.vaccination(id).is_some() {
            self.completed_vaccinations.retain(|v| v.id != id);
            false
        } else {
            self.completed_vaccinations.push(CompletedVaccination {
                id: id.to_string(),
                date,
            });
            true
        }
    }

    /// Record, re-date or remove a milestone.
    ///
    /// The milestone title is removed from the diary entry of the previously
    /// recorded date. With `Some(date)` the title is added to that day's entry,
    /// creating an empty entry when the day has none, and the manual record is
    /// replaced; `None` removes the manual record.
    ///
    /// Returns `false` without touching anything when `id` is not in the catalog.
    pub fn set_milestone(&mut self, catalog: &Catalog, id: &str, date: Option<NaiveDate>) -> bool {
        let Some(milestone) = catalog.milestone(id) else {
            return false;
        };

        if let Some(old) = self.milestone_record(id).and_then(|m| m.date) {
            if let Some(entry) = self.entries.get_mut(&old) {
                entry.skills.retain(|s| s != milestone.title);
            }
        }

        if let Some(date) = date {
            let entry = self
                .entries
                .entry(date)
                .or_insert_with(|| DiaryEntry::new(date));
            if !entry.has_skill(milestone.title) {
                entry.skills.push(milestone.title.to_string());
            }
        }

        self.past_milestones.retain(|m| m.id != id);
        if date.is_some() {
            self.past_milestones.push(CompletedMilestone {
                id: id.to_string(),
                date,
            });
        }
        true
    }

    /// Apply the result of onboarding: set the profile and append the inferred records.
    pub fn apply_onboarding(
        &mut self,
        profile: UserProfile,
        milestones: Vec<CompletedMilestone>,
        vaccinations: Vec<CompletedVaccination>,
    ) {
        self.profile = Some(profile);
        self.past_milestones.extend(milestones);
        self.completed_vaccinations.extend(vaccinations);
    }

    /// Every skill label already recorded somewhere.
    ///
    /// Includes the skills of all entries except the one dated `exclude`, plus
    /// the titles of manually recorded milestones that resolve in `catalog`.
    #[must_use]
    pub fn recorded_skills(&self, catalog: &Catalog, exclude: Option<NaiveDate>) -> BTreeSet<String> {
        let mut skills: BTreeSet<String> = self
            .entries
            .values()
            .filter(|e| Some(e.date) != exclude)
            .flat_map(|e| e.skills.iter().cloned())
            .collect();

        skills.extend(
            self.past_milestones
                .iter()
                .filter_map(|m| catalog.milestone(&m.id))
                .map(|m| m.title.to_string()),
        );
        skills
    }
}
