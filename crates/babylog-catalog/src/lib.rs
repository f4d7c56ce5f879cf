//! Static reference data for babylog.
//!
//! The milestone catalog and the vaccination schedule are fixed configuration
//! data: they are compiled into the binary and never edited by the user.
//! Diary entries and completion records refer to them by id (or, for diary
//! skills, by milestone title).

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

mod data;

use serde::Serialize;

pub use data::{MILESTONES, VACCINATIONS};

/// Developmental domain a milestone belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneCategory {
    /// Large movements: rolling, sitting, walking.
    GrossMotor,
    /// Hand and finger control.
    FineMotor,
    /// Perception, problem solving, object permanence.
    Cognitive,
    /// Sounds, words and sentences.
    Language,
    /// Interaction with other people.
    Social,
    /// Eating, dressing, toileting.
    SelfHelp,
}

impl MilestoneCategory {
    /// All categories in display order.
    pub const ALL: [Self; 6] = [
        Self::GrossMotor,
        Self::FineMotor,
        Self::Language,
        Self::Social,
        Self::SelfHelp,
        Self::Cognitive,
    ];

    /// The wire name of this category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GrossMotor => "gross_motor",
            Self::FineMotor => "fine_motor",
            Self::Cognitive => "cognitive",
            Self::Language => "language",
            Self::Social => "social",
            Self::SelfHelp => "self_help",
        }
    }
}

impl std::fmt::Display for MilestoneCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for MilestoneCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown milestone category: {s}"))
    }
}

/// A catalog-defined developmental task with an age window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Stable identifier, referenced by completion records.
    pub id: &'static str,
    /// Display title; diary entries store this as a skill label.
    pub title: &'static str,
    /// Longer description of what the child does.
    pub detail: &'static str,
    /// First month of the typical age window.
    pub month_from: u32,
    /// Last month of the typical age window.
    pub month_to: u32,
    /// Developmental domain.
    pub category: MilestoneCategory,
    /// Whether the milestone is part of the core screening set.
    pub is_core: bool,
    /// Milestone that has to be achieved before this one can be recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite_id: Option<&'static str>,
}

/// One dose of the vaccination schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vaccination {
    /// Stable identifier, referenced by completion records.
    pub id: &'static str,
    /// Disease the vaccine protects against.
    pub disease: &'static str,
    /// Dose number within the series.
    pub dose_number: u32,
    /// Recommended age in months (0 = at birth).
    pub recommended_month: u32,
    /// Free-form note shown next to the dose.
    pub description: &'static str,
}

/// A view over a milestone catalog and a vaccination schedule.
///
/// The builtin datasets are available through [`Catalog::builtin`]; tests and
/// tools can assemble their own from static slices.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    milestones: &'static [Milestone],
    vaccinations: &'static [Vaccination],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Create a catalog over the given datasets.
    #[must_use]
    pub const fn new(
        milestones: &'static [Milestone],
        vaccinations: &'static [Vaccination],
    ) -> Self {
        Self {
            milestones,
            vaccinations,
        }
    }

    /// The datasets shipped with the application.
    #[must_use]
    pub const fn builtin() -> Self {
        Self::new(MILESTONES, VACCINATIONS)
    }

    /// All milestones in catalog order.
    #[must_use]
    pub fn milestones(&self) -> &'static [Milestone] {
        self.milestones
    }

    /// All vaccinations in schedule order.
    #[must_use]
    pub fn vaccinations(&self) -> &'static [Vaccination] {
        self.vaccinations
    }

    /// Look up a milestone by id.
    #[must_use]
    pub fn milestone(&self, id: &str) -> Option<&'static Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }

    /// Look up a milestone by its title, as stored in diary skill lists.
    #[must_use]
    pub fn milestone_by_title(&self, title: &str) -> Option<&'static Milestone> {
        self.milestones.iter().find(|m| m.title == title)
    }

    /// Look up a vaccination by id.
    #[must_use]
    pub fn vaccination(&self, id: &str) -> Option<&'static Vaccination> {
        self.vaccinations.iter().find(|v| v.id == id)
    }

    /// Milestones of one category, in catalog order.
    pub fn milestones_in(
        &self,
        category: MilestoneCategory,
    ) -> impl Iterator<Item = &'static Milestone> {
        self.milestones
            .iter()
            .filter(move |m| m.category == category)
    }

    /// Categories in display order.
    #[must_use]
    pub fn categories(&self) -> [MilestoneCategory; 6] {
        MilestoneCategory::ALL
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_builtin_sizes() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.milestones().len(), 87);
        assert_eq!(catalog.vaccinations().len(), 37);
    }

    #[test]
    fn test_milestone_ids_unique() {
        let ids: HashSet<_> = MILESTONES.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), MILESTONES.len());
    }

    #[test]
    fn test_milestone_titles_unique() {
        let titles: HashSet<_> = MILESTONES.iter().map(|m| m.title).collect();
        assert_eq!(titles.len(), MILESTONES.len());
    }

    #[test]
    fn test_vaccination_ids_unique() {
        let ids: HashSet<_> = VACCINATIONS.iter().map(|v| v.id).collect();
        assert_eq!(ids.len(), VACCINATIONS.len());
    }

    #[test]
    fn test_prerequisites_resolve() {
        let catalog = Catalog::builtin();
        for m in catalog.milestones() {
            if let Some(pre) = m.prerequisite_id {
                assert!(catalog.milestone(pre).is_some(), "{} -> {pre}", m.id);
            }
        }
    }

    #[test]
    fn test_age_windows_ordered() {
        for m in MILESTONES {
            assert!(m.month_from <= m.month_to, "{}", m.id);
        }
    }

    #[test]
    fn test_lookup_by_id_and_title() {
        let catalog = Catalog::builtin();
        let m = catalog.milestone("kdst_6_sit_support").unwrap();
        assert_eq!(m.prerequisite_id, Some("kdst_4_neck_control"));
        assert_eq!(catalog.milestone_by_title(m.title).unwrap().id, m.id);
        assert!(catalog.milestone("no_such_id").is_none());
        assert!(catalog.milestone_by_title("no such title").is_none());
    }

    #[test]
    fn test_vaccination_lookup() {
        let catalog = Catalog::builtin();
        let v = catalog.vaccination("mmr1").unwrap();
        assert_eq!(v.recommended_month, 12);
        assert_eq!(v.dose_number, 1);
    }

    #[test]
    fn test_milestones_in_category() {
        let catalog = Catalog::builtin();
        let total: usize = catalog
            .categories()
            .iter()
            .map(|c| catalog.milestones_in(*c).count())
            .sum();
        assert_eq!(total, catalog.milestones().len());
        assert!(catalog
            .milestones_in(MilestoneCategory::SelfHelp)
            .all(|m| m.category == MilestoneCategory::SelfHelp));
    }

    #[test]
    fn test_category_round_trip() {
        for c in MilestoneCategory::ALL {
            assert_eq!(c.as_str().parse::<MilestoneCategory>().unwrap(), c);
        }
        assert!("walking".parse::<MilestoneCategory>().is_err());
    }

    #[test]
    fn test_milestone_serializes_camel_case() {
        let json = serde_json::to_value(MILESTONES[0]).unwrap();
        assert!(json.get("monthFrom").is_some());
        assert!(json.get("isCore").is_some());
        assert_eq!(json["category"], MILESTONES[0].category.as_str());
    }
}
