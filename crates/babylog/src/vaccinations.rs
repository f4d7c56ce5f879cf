//! The vaccination schedule as seen from one baby's birth date.

use babylog_catalog::{Catalog, Vaccination};
use chrono::{Months, NaiveDate};
use serde::Serialize;

use crate::model::AppState;

/// The day a vaccination is due: `birth` plus its recommended month.
#[must_use]
pub fn due_date(birth: NaiveDate, vaccination: &Vaccination) -> NaiveDate {
    birth
        .checked_add_months(Months::new(vaccination.recommended_month))
        .unwrap_or(NaiveDate::MAX)
}

/// One catalog vaccination and where the baby stands with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VaccinationStatus {
    /// The catalog entry.
    pub vaccination: &'static Vaccination,
    /// When it is due.
    pub due: NaiveDate,
    /// When it was given, `None` if not yet.
    pub completed: Option<NaiveDate>,
}

impl VaccinationStatus {
    /// Whether the dose has been given.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.completed.is_some()
    }

    /// Whether the dose is still outstanding after its due date.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.completed.is_none() && self.due < today
    }
}

/// The whole schedule in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    items: Vec<VaccinationStatus>,
}

impl Schedule {
    /// Every vaccination in catalog order.
    #[must_use]
    pub fn items(&self) -> &[VaccinationStatus] {
        &self.items
    }

    /// Vaccinations not yet given.
    pub fn todo(&self) -> impl Iterator<Item = &VaccinationStatus> {
        self.items.iter().filter(|s| !s.is_done())
    }

    /// Vaccinations already given.
    pub fn done(&self) -> impl Iterator<Item = &VaccinationStatus> {
        self.items.iter().filter(|s| s.is_done())
    }

    /// `(given, total)`.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.done().count(), self.items.len())
    }

    /// Progress as a whole percentage.
    #[must_use]
    pub fn percent(&self) -> usize {
        let (done, total) = self.progress();
        if total == 0 {
            return 0;
        }
        (done * 100 + total / 2) / total
    }
}

/// Build the schedule for a baby born on `birth`.
///
/// Completion records for ids the catalog doesn't know are ignored.
#[must_use]
pub fn schedule(state: &AppState, catalog: &Catalog, birth: NaiveDate) -> Schedule {
    let items = catalog
        .vaccinations()
        .iter()
        .map(|vaccination| VaccinationStatus {
            vaccination,
            due: due_date(birth, vaccination),
            completed: state.vaccination(vaccination.id).map(|v| v.date),
        })
        .collect();
    Schedule { items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CompletedVaccination;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_due_date_clamps_to_month_end() {
        let catalog = Catalog::builtin();
        let hepb2 = catalog.vaccination("hepb2").unwrap();
        assert_eq!(due_date(date(2024, 1, 31), hepb2), date(2024, 2, 29));

        let mmr1 = catalog.vaccination("mmr1").unwrap();
        assert_eq!(due_date(date(2024, 1, 10), mmr1), date(2025, 1, 10));
    }

    #[test]
    fn test_schedule_partitions() {
        let catalog = Catalog::builtin();
        let mut state = AppState::default();
        state.completed_vaccinations = vec![
            CompletedVaccination {
                id: "bcg".to_string(),
                date: date(2024, 1, 12),
            },
            CompletedVaccination {
                id: "withdrawn_vaccine".to_string(),
                date: date(2024, 1, 12),
            },
        ];

        let schedule = schedule(&state, &catalog, date(2024, 1, 10));
        assert_eq!(schedule.items().len(), catalog.vaccinations().len());
        assert_eq!(schedule.progress(), (1, catalog.vaccinations().len()));

        let done: Vec<_> = schedule.done().map(|s| s.vaccination.id).collect();
        assert_eq!(done, vec!["bcg"]);
        assert_eq!(schedule.todo().count(), catalog.vaccinations().len() - 1);

        let hepb1 = schedule.todo().find(|s| s.vaccination.id == "hepb1").unwrap();
        assert!(hepb1.is_overdue(date(2024, 2, 1)));
        assert!(!hepb1.is_overdue(date(2024, 1, 10)));
    }
}
