//! Shapes of the flat JSON document written by older versions.
//!
//! Each section is kept as raw JSON and converted on its own, element by
//! element, so one malformed fragment never prevents the rest from importing.
//! Sections that went through several historical shapes are modelled as
//! untagged unions with one converter per shape.

use babylog_catalog::Catalog;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{CompletedMilestone, CompletedVaccination, DiaryEntry, Mood, UserProfile};

/// Prefix identifying an inline image payload.
pub const INLINE_IMAGE_PREFIX: &str = "data:image/";

/// MIME type recorded when a data URL does not name one.
const FALLBACK_MIME: &str = "image/*";

/// The legacy document with its four sections left unparsed.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyDocument {
    /// The child's profile.
    #[serde(default)]
    pub profile: Value,
    /// Diary entries keyed by `YYYY-MM-DD`.
    #[serde(default)]
    pub entries: Value,
    /// Completed vaccinations, as bare ids or `{id, date}` objects.
    #[serde(default)]
    pub completed_vaccinations: Value,
    /// Milestone history, as bare titles or `{id, date}` objects.
    #[serde(default)]
    pub past_milestones: Value,
}

impl LegacyDocument {
    /// Parse a legacy document.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not a JSON object.
    pub fn parse(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        if !value.is_object() {
            return Err(Error::internal("legacy document is not a JSON object"));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// The profile, if present and well formed.
    #[must_use]
    pub fn profile(&self) -> Option<UserProfile> {
        if self.profile.is_null() {
            return None;
        }
        serde_json::from_value(self.profile.clone()).ok()
    }

    /// The elements of a list section; anything that is not an array is empty.
    #[must_use]
    pub fn list(section: &Value) -> &[Value] {
        section.as_array().map_or(&[][..], Vec::as_slice)
    }

    /// The `(date key, raw entry)` pairs of the entries section.
    pub fn raw_entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .as_object()
            .into_iter()
            .flat_map(|map| map.iter().map(|(k, v)| (k.as_str(), v)))
    }
}

/// A completed vaccination in any historical shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LegacyVaccination {
    /// Oldest shape: just the catalog id.
    Id(String),
    /// Current shape.
    Dated {
        /// Catalog id.
        id: String,
        /// Day the dose was given.
        date: NaiveDate,
    },
}

impl LegacyVaccination {
    /// Convert to the current record; bare ids are dated `today`.
    #[must_use]
    pub fn normalize(self, today: NaiveDate) -> CompletedVaccination {
        match self {
            Self::Id(id) => CompletedVaccination { id, date: today },
            Self::Dated { id, date } => CompletedVaccination { id, date },
        }
    }
}

/// A milestone record in any historical shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LegacyMilestone {
    /// Oldest shape: the milestone title.
    Title(String),
    /// Current shape.
    Dated {
        /// Catalog id.
        id: String,
        /// Day achieved, `null` when unknown.
        #[serde(default)]
        date: Option<NaiveDate>,
    },
}

impl LegacyMilestone {
    /// Convert to the current record.
    ///
    /// Titles are resolved against `catalog` and dated `today`; a title that
    /// matches no milestone yields `None`.
    #[must_use]
    pub fn normalize(self, catalog: &Catalog, today: NaiveDate) -> Option<CompletedMilestone> {
        match self {
            Self::Title(title) => catalog.milestone_by_title(&title).map(|m| CompletedMilestone {
                id: m.id.to_string(),
                date: Some(today),
            }),
            Self::Dated { id, date } => Some(CompletedMilestone { id, date }),
        }
    }
}

/// One element of a legacy entry's image list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegacyImage {
    /// An inline `data:image/...` payload.
    Inline(String),
    /// Anything else, typically already a photo id.
    Reference(String),
}

impl LegacyImage {
    /// Classify an image string.
    #[must_use]
    pub fn classify(value: String) -> Self {
        if value.starts_with(INLINE_IMAGE_PREFIX) {
            Self::Inline(value)
        } else {
            Self::Reference(value)
        }
    }

    /// Whether this is an inline payload.
    #[must_use]
    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Inline(_))
    }
}

/// A diary entry as older versions stored it. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct LegacyEntry {
    /// Entry id, a string or a millisecond timestamp.
    #[serde(default)]
    pub id: Value,
    /// Free text.
    #[serde(default)]
    pub content: Option<String>,
    /// Images: inline payloads or photo ids.
    #[serde(default)]
    pub images: Option<Vec<Value>>,
    /// Mood in the old or the current vocabulary.
    #[serde(default)]
    pub mood: Option<String>,
    /// Skill labels.
    #[serde(default)]
    pub skills: Option<Vec<Value>>,
    /// Height in centimetres.
    #[serde(default)]
    pub height: Option<f64>,
    /// Weight in kilograms.
    #[serde(default)]
    pub weight: Option<f64>,
}

impl LegacyEntry {
    /// The image list, classified. Non-string elements are skipped.
    #[must_use]
    pub fn images(&self) -> Vec<LegacyImage> {
        self.images
            .iter()
            .flatten()
            .filter_map(|v| v.as_str())
            .map(|s| LegacyImage::classify(s.to_string()))
            .collect()
    }

    /// Convert to a current entry for `date`, keeping the image list as-is.
    ///
    /// A missing mood becomes [`Mood::Good`], like an unrecognized one.
    #[must_use]
    pub fn normalize(self, date: NaiveDate) -> DiaryEntry {
        let images = self
            .images()
            .into_iter()
            .map(|image| match image {
                LegacyImage::Inline(s) | LegacyImage::Reference(s) => s,
            })
            .collect();

        let id = match self.id {
            Value::String(s) if !s.is_empty() => s,
            Value::Number(n) => n.to_string(),
            _ => DiaryEntry::new(date).id,
        };

        DiaryEntry {
            id,
            date,
            content: self.content.unwrap_or_default(),
            images,
            mood: self.mood.as_deref().map_or(Mood::Good, Mood::from_legacy),
            skills: self
                .skills
                .into_iter()
                .flatten()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            height: self.height,
            weight: self.weight,
        }
    }
}

/// Bytes and MIME type carried by a data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    /// MIME type, `image/*` when the URL names none.
    pub mime: String,
    /// Decoded payload.
    pub data: Vec<u8>,
}

/// Parser for `data:` URLs.
#[derive(Debug)]
pub struct DataUrlParser {
    pattern: Regex,
}

impl DataUrlParser {
    /// Build the parser.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL pattern fails to compile.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"(?s)^data:(?P<mime>[^;,]*)(?P<params>(?:;[^;,]*)*),(?P<data>.*)$")
            .map_err(|e| Error::internal(format!("invalid data URL pattern: {e}")))?;
        Ok(Self { pattern })
    }

    /// Decode a data URL.
    ///
    /// Base64 payloads are decoded; other payloads are taken verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LegacyImage`] if the URL is malformed, the base64
    /// payload is invalid, or the payload is empty.
    pub fn parse(&self, url: &str) -> Result<DataUrl> {
        let caps = self
            .pattern
            .captures(url)
            .ok_or_else(|| Error::legacy_image("not a data URL"))?;

        let mime = caps.name("mime").map_or("", |m| m.as_str()).trim();
        let is_base64 = caps
            .name("params")
            .is_some_and(|p| p.as_str().split(';').any(|param| param.eq_ignore_ascii_case("base64")));
        let payload = caps.name("data").map_or("", |m| m.as_str());

        let data = if is_base64 {
            let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
            STANDARD
                .decode(compact)
                .map_err(|e| Error::legacy_image(format!("invalid base64 payload: {e}")))?
        } else {
            payload.as_bytes().to_vec()
        };

        if data.is_empty() {
            return Err(Error::legacy_image("empty payload"));
        }

        Ok(DataUrl {
            mime: if mime.is_empty() {
                FALLBACK_MIME.to_string()
            } else {
                mime.to_string()
            },
            data,
        })
    }
}
