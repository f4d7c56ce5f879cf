//! Initial state inferred from the baby's age at onboarding.
//!
//! A baby who is already several months old has passed the earliest
//! milestones and vaccinations. Those are recorded automatically, with
//! unknown milestone dates and vaccinations dated at their due day, and the
//! caregiver is shown the milestones around the current age to tick off.

use std::collections::BTreeSet;

use babylog_catalog::{Catalog, Milestone};
use chrono::{Datelike, Months, NaiveDate};
use tracing::debug;

use crate::model::{CompletedMilestone, CompletedVaccination, UserProfile};
use crate::vaccinations::due_date;

/// Whole months elapsed from `birth` to `today`, 0 if `today` is earlier.
#[must_use]
pub fn month_age(birth: NaiveDate, today: NaiveDate) -> u32 {
    if today <= birth {
        return 0;
    }
    let span = (i64::from(today.year()) - i64::from(birth.year())) * 12
        + i64::from(today.month0())
        - i64::from(birth.month0());
    let mut months = u32::try_from(span).unwrap_or(0);
    // The calendar-month span overshoots by one when the day of month hasn't come round yet.
    while months > 0
        && !matches!(birth.checked_add_months(Months::new(months)), Some(d) if d <= today)
    {
        months -= 1;
    }
    months
}

/// What onboarding proposes for a given birth date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingPlan {
    /// The baby's age in whole months.
    pub month_age: u32,
    /// Milestones offered for the caregiver to confirm.
    pub visible_milestones: Vec<&'static Milestone>,
    /// Milestones considered passed without asking.
    pub auto_milestones: Vec<&'static Milestone>,
    /// Vaccinations considered given, dated at their due day.
    pub auto_vaccinations: Vec<CompletedVaccination>,
}

/// The records onboarding produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingResult {
    /// The new profile.
    pub profile: UserProfile,
    /// Milestone records, all with unknown dates.
    pub milestones: Vec<CompletedMilestone>,
    /// Vaccination records.
    pub vaccinations: Vec<CompletedVaccination>,
}

/// Work out the onboarding proposal for a baby born on `birth`.
#[must_use]
pub fn infer(birth: NaiveDate, today: NaiveDate, catalog: &Catalog) -> OnboardingPlan {
    let age = month_age(birth, today);
    let age_i = i64::from(age);
    let cutoff = (age_i - 2).max(-1);

    let auto_milestones: Vec<_> = catalog
        .milestones()
        .iter()
        .filter(|m| i64::from(m.month_to) <= cutoff)
        .collect();
    let visible_milestones: Vec<_> = catalog
        .milestones()
        .iter()
        .filter(|m| i64::from(m.month_to) > cutoff && i64::from(m.month_from) <= age_i + 2)
        .collect();

    let auto_vaccinations: Vec<_> = catalog
        .vaccinations()
        .iter()
        .filter(|v| {
            if v.recommended_month < 12 {
                v.recommended_month < age
            } else {
                age >= v.recommended_month + 4
            }
        })
        .map(|v| CompletedVaccination {
            id: v.id.to_string(),
            date: due_date(birth, v),
        })
        .collect();

    debug!(
        "Onboarding at {} months: {} auto milestones, {} offered, {} auto vaccinations",
        age,
        auto_milestones.len(),
        visible_milestones.len(),
        auto_vaccinations.len()
    );

    OnboardingPlan {
        month_age: age,
        visible_milestones,
        auto_milestones,
        auto_vaccinations,
    }
}

impl OnboardingPlan {
    /// Finish onboarding.
    ///
    /// `checked_ids` are the milestones the caregiver confirmed; ids the
    /// catalog doesn't know are skipped. With reminders disabled the profile's
    /// notification time is cleared.
    #[must_use]
    pub fn complete(
        &self,
        catalog: &Catalog,
        mut profile: UserProfile,
        checked_ids: &[String],
        reminders_enabled: bool,
    ) -> OnboardingResult {
        if !reminders_enabled {
            profile.notification_time.clear();
        }

        let mut seen = BTreeSet::new();
        let milestones = self
            .auto_milestones
            .iter()
            .map(|m| m.id)
            .chain(
                checked_ids
                    .iter()
                    .filter_map(|id| catalog.milestone(id))
                    .map(|m| m.id),
            )
            .filter(|id| seen.insert(*id))
            .map(|id| CompletedMilestone {
                id: id.to_string(),
                date: None,
            })
            .collect();

        OnboardingResult {
            profile,
            milestones,
            vaccinations: self.auto_vaccinations.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_month_age() {
        assert_eq!(month_age(date(2024, 1, 10), date(2024, 1, 10)), 0);
        assert_eq!(month_age(date(2024, 1, 10), date(2024, 2, 9)), 0);
        assert_eq!(month_age(date(2024, 1, 10), date(2024, 2, 10)), 1);
        assert_eq!(month_age(date(2024, 1, 31), date(2024, 2, 29)), 1);
        assert_eq!(month_age(date(2024, 1, 10), date(2025, 7, 9)), 17);
        assert_eq!(month_age(date(2024, 1, 10), date(2023, 12, 1)), 0);
    }

    #[test]
    fn test_newborn_plan() {
        let catalog = Catalog::builtin();
        let plan = infer(date(2024, 1, 10), date(2024, 1, 20), &catalog);

        assert_eq!(plan.month_age, 0);
        assert!(plan.auto_milestones.is_empty());
        assert!(plan.auto_vaccinations.is_empty());
        assert!(plan.visible_milestones.iter().all(|m| m.month_from <= 2));
        assert!(plan.visible_milestones.iter().any(|m| m.id == "nb_fist"));
    }

    #[test]
    fn test_six_month_plan() {
        let catalog = Catalog::builtin();
        let birth = date(2024, 1, 10);
        let plan = infer(birth, date(2024, 7, 15), &catalog);

        assert_eq!(plan.month_age, 6);
        assert!(plan.auto_milestones.iter().all(|m| m.month_to <= 4));
        assert!(plan.auto_milestones.iter().any(|m| m.id == "nb_cooing"));
        assert!(plan
            .visible_milestones
            .iter()
            .all(|m| m.month_to > 4 && m.month_from <= 8));
        assert!(plan.visible_milestones.iter().any(|m| m.id == "kdst_6_sit_support"));

        let hepb1 = plan.auto_vaccinations.iter().find(|v| v.id == "hepb1").unwrap();
        assert_eq!(hepb1.date, birth);
        let hepb2 = plan.auto_vaccinations.iter().find(|v| v.id == "hepb2").unwrap();
        assert_eq!(hepb2.date, date(2024, 2, 10));
        assert!(plan.auto_vaccinations.iter().all(|v| v.id != "mmr1"));
    }

    #[test]
    fn test_late_vaccinations_need_grace_period() {
        let catalog = Catalog::builtin();
        let birth = date(2023, 1, 10);

        let plan = infer(birth, date(2024, 4, 10), &catalog);
        assert_eq!(plan.month_age, 15);
        assert!(plan.auto_vaccinations.iter().all(|v| v.id != "mmr1"));

        let plan = infer(birth, date(2024, 5, 10), &catalog);
        assert!(plan.auto_vaccinations.iter().any(|v| v.id == "mmr1"));
    }

    #[test]
    fn test_complete() {
        let catalog = Catalog::builtin();
        let plan = infer(date(2024, 1, 10), date(2024, 7, 15), &catalog);
        let checked = vec![
            "kdst_4_neck_control".to_string(),
            "nb_cooing".to_string(),
            "not_in_catalog".to_string(),
        ];

        let result = plan.complete(&catalog, profile(), &checked, false);
        assert_eq!(result.profile.notification_time, "");
        assert!(result.milestones.iter().all(|m| m.date.is_none()));
        assert_eq!(
            result.milestones.iter().filter(|m| m.id == "nb_cooing").count(),
            1
        );
        assert!(result.milestones.iter().any(|m| m.id == "kdst_4_neck_control"));
        assert!(result.milestones.iter().all(|m| m.id != "not_in_catalog"));
        assert_eq!(result.milestones.len(), plan.auto_milestones.len() + 1);
        assert_eq!(result.vaccinations, plan.auto_vaccinations);

        let result = plan.complete(&catalog, profile(), &[], true);
        assert_eq!(result.profile.notification_time, "20:00");
    }
}
