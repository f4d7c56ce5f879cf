//! Derived milestone achievement view and developmental levels.
//!
//! Nothing here is stored. Achievements are recomputed from the diary entries'
//! skill labels and the manual milestone records whenever they are needed.

use std::collections::BTreeMap;

use babylog_catalog::{Catalog, Milestone, MilestoneCategory};
use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::AppState;

/// Where an achievement was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementSource {
    /// Listed among the skills of a diary entry.
    Diary,
    /// Recorded directly, at onboarding or from the milestone list.
    Manual,
}

/// A milestone the baby has achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    /// When it was achieved, `None` when unknown.
    pub date: Option<NaiveDate>,
    /// Where it was recorded.
    pub source: AchievementSource,
}

impl Achievement {
    /// Whether the record can be changed from the milestone list.
    ///
    /// Diary-sourced achievements must be edited through their entry.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.source == AchievementSource::Manual
    }
}

/// Achievements keyed by milestone id.
pub type AchievementMap = BTreeMap<String, Achievement>;

/// Merge diary skills and manual records into one achievement per milestone.
///
/// Entries are visited in ascending date order, so the earliest diary
/// occurrence of a milestone wins. Manual records only fill milestones no
/// diary entry mentions. Skills and ids that don't resolve in `catalog` are
/// ignored.
#[must_use]
pub fn achievement_map(state: &AppState, catalog: &Catalog) -> AchievementMap {
    let mut map = AchievementMap::new();

    for entry in state.entries.values() {
        for skill in &entry.skills {
            if let Some(milestone) = catalog.milestone_by_title(skill) {
                map.entry(milestone.id.to_string()).or_insert(Achievement {
                    date: Some(entry.date),
                    source: AchievementSource::Diary,
                });
            }
        }
    }

    for record in &state.past_milestones {
        if catalog.milestone(&record.id).is_none() {
            continue;
        }
        map.entry(record.id.clone()).or_insert(Achievement {
            date: record.date,
            source: AchievementSource::Manual,
        });
    }

    map
}

/// Check that `id` may be recorded or re-dated from the milestone list.
///
/// # Errors
///
/// Returns [`Error::PrerequisiteMissing`] if the milestone's prerequisite has
/// not been achieved, or [`Error::DiarySourced`] if the milestone is already
/// recorded by a diary entry.
pub fn check_recordable(map: &AchievementMap, catalog: &Catalog, id: &str) -> Result<()> {
    let Some(milestone) = catalog.milestone(id) else {
        return Ok(());
    };

    if let Some(prerequisite) = milestone.prerequisite_id {
        if !map.contains_key(prerequisite) {
            return Err(Error::PrerequisiteMissing {
                milestone: milestone.title.to_string(),
                prerequisite: catalog
                    .milestone(prerequisite)
                    .map_or(prerequisite, |m| m.title)
                    .to_string(),
            });
        }
    }

    match map.get(id) {
        Some(Achievement {
            date: Some(date),
            source: AchievementSource::Diary,
        }) => Err(Error::DiarySourced {
            milestone: milestone.title.to_string(),
            date: *date,
        }),
        _ => Ok(()),
    }
}

/// Whether `milestone` is locked behind an unachieved prerequisite.
#[must_use]
pub fn is_locked(map: &AchievementMap, milestone: &Milestone) -> bool {
    milestone
        .prerequisite_id
        .is_some_and(|p| !map.contains_key(p))
}

/// Developmental level per category, in display order.
///
/// A category's level is the highest `month_to` among its achieved
/// milestones, 0 when none is achieved.
#[must_use]
pub fn category_levels(map: &AchievementMap, catalog: &Catalog) -> Vec<(MilestoneCategory, u32)> {
    catalog
        .categories()
        .into_iter()
        .map(|category| {
            let level = catalog
                .milestones_in(category)
                .filter(|m| map.contains_key(m.id))
                .map(|m| m.month_to)
                .max()
                .unwrap_or(0);
            (category, level)
        })
        .collect()
}

/// Mean level over the categories with any achievement, 0.0 when there are none.
#[must_use]
pub fn overall_level(levels: &[(MilestoneCategory, u32)]) -> f64 {
    let active: Vec<u32> = levels
        .iter()
        .map(|&(_, level)| level)
        .filter(|&level| level > 0)
        .collect();
    if active.is_empty() {
        return 0.0;
    }
    f64::from(active.iter().sum::<u32>()) / f64::from(u32::try_from(active.len()).unwrap_or(u32::MAX))
}

/// Dated achievements, newest first.
#[must_use]
pub fn timeline<'a>(
    map: &'a AchievementMap,
    catalog: &Catalog,
) -> Vec<(&'static Milestone, NaiveDate, &'a Achievement)> {
    let mut items: Vec<_> = map
        .iter()
        .filter_map(|(id, achievement)| {
            let milestone = catalog.milestone(id)?;
            Some((milestone, achievement.date?, achievement))
        })
        .collect();
    items.sort_by(|a, b| b.1.cmp(&a.1));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CompletedMilestone, DiaryEntry};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn title(id: &str) -> String {
        Catalog::builtin().milestone(id).unwrap().title.to_string()
    }

    fn entry_with(day: NaiveDate, skills: &[String]) -> DiaryEntry {
        let mut entry = DiaryEntry::new(day);
        entry.skills = skills.to_vec();
        entry
    }

    fn manual(id: &str, day: Option<NaiveDate>) -> CompletedMilestone {
        CompletedMilestone {
            id: id.to_string(),
            date: day,
        }
    }

    #[test]
    fn test_diary_takes_precedence_over_manual() {
        let catalog = Catalog::builtin();
        let mut state = AppState::default();
        state.upsert_entry(entry_with(date(2024, 5, 10), &[title("nb_cooing")]));
        state.past_milestones.push(manual("nb_cooing", Some(date(2024, 4, 1))));

        let map = achievement_map(&state, &catalog);
        assert_eq!(
            map["nb_cooing"],
            Achievement {
                date: Some(date(2024, 5, 10)),
                source: AchievementSource::Diary
            }
        );
        assert!(!map["nb_cooing"].is_editable());
    }

    #[test]
    fn test_earliest_diary_entry_wins() {
        let catalog = Catalog::builtin();
        let mut state = AppState::default();
        state.upsert_entry(entry_with(date(2024, 6, 1), &[title("nb_fist")]));
        state.upsert_entry(entry_with(date(2024, 5, 1), &[title("nb_fist")]));

        let map = achievement_map(&state, &catalog);
        assert_eq!(map["nb_fist"].date, Some(date(2024, 5, 1)));
    }

    #[test]
    fn test_unknown_labels_and_ids_ignored() {
        let catalog = Catalog::builtin();
        let mut state = AppState::default();
        state.upsert_entry(entry_with(date(2024, 5, 1), &["said mama".to_string()]));
        state.past_milestones.push(manual("retired_id", None));
        state.past_milestones.push(manual("nb_fist", None));

        let map = achievement_map(&state, &catalog);
        assert_eq!(map.len(), 1);
        assert!(map["nb_fist"].is_editable());
        assert_eq!(map["nb_fist"].date, None);
    }

    #[test]
    fn test_check_recordable() {
        let catalog = Catalog::builtin();
        let mut state = AppState::default();

        let map = achievement_map(&state, &catalog);
        let err = check_recordable(&map, &catalog, "kdst_6_sit_support").unwrap_err();
        assert!(matches!(err, Error::PrerequisiteMissing { .. }));
        assert!(is_locked(&map, catalog.milestone("kdst_6_sit_support").unwrap()));
        check_recordable(&map, &catalog, "kdst_4_neck_control").unwrap();
        check_recordable(&map, &catalog, "no_such_milestone").unwrap();

        let day = date(2024, 5, 1);
        state.upsert_entry(entry_with(day, &[title("kdst_4_neck_control")]));
        let map = achievement_map(&state, &catalog);
        check_recordable(&map, &catalog, "kdst_6_sit_support").unwrap();
        let err = check_recordable(&map, &catalog, "kdst_4_neck_control").unwrap_err();
        assert!(matches!(err, Error::DiarySourced { date: d, .. } if d == day));
    }

    #[test]
    fn test_levels() {
        let catalog = Catalog::builtin();
        let mut state = AppState::default();
        state.past_milestones.push(manual("kdst_4_neck_control", None));
        state.past_milestones.push(manual("nb_fist", None));
        state.past_milestones.push(manual("nb_cooing", None));

        let map = achievement_map(&state, &catalog);
        let levels = category_levels(&map, &catalog);
        assert_eq!(levels[0], (MilestoneCategory::GrossMotor, 5));
        assert_eq!(levels[1], (MilestoneCategory::FineMotor, 1));
        assert_eq!(levels[2], (MilestoneCategory::Language, 3));
        assert_eq!(levels[3], (MilestoneCategory::Social, 0));
        assert!((overall_level(&levels) - 3.0).abs() < f64::EPSILON);

        assert!(overall_level(&category_levels(&AchievementMap::new(), &catalog)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_timeline_newest_first() {
        let catalog = Catalog::builtin();
        let mut state = AppState::default();
        state.past_milestones.push(manual("nb_fist", Some(date(2024, 2, 1))));
        state.past_milestones.push(manual("nb_cooing", Some(date(2024, 4, 1))));
        state.past_milestones.push(manual("nb_eye_contact", None));

        let map = achievement_map(&state, &catalog);
        let ids: Vec<_> = timeline(&map, &catalog).iter().map(|(m, _, _)| m.id).collect();
        assert_eq!(ids, vec!["nb_cooing", "nb_fist"]);
    }
}
