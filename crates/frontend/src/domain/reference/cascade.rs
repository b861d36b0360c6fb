//! Parent → dependent selector pair (city → object, category → violation).
//!
//! Any change of the parent value clears the dependent selection
//! unconditionally, even if the old value would still exist under the new
//! parent.

use super::catalog::{ReferenceSpec, CITIES, OBJECTS, VIOLATIONS, VIOLATION_CATEGORIES};
use super::selector::{LoadTicket, SelectorState};

/// Запрос на загрузку зависимого списка
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependentLoad {
    pub ticket: LoadTicket,
    /// Значение родителя для параметра фильтра
    pub parent_id: String,
}

#[derive(Debug, Clone)]
pub struct CascadePair {
    pub parent: SelectorState,
    pub dependent: SelectorState,
}

impl CascadePair {
    pub fn new(parent: &'static ReferenceSpec, dependent: &'static ReferenceSpec) -> Self {
        Self {
            parent: SelectorState::new(parent),
            dependent: SelectorState::new(dependent),
        }
    }

    pub fn city_object() -> Self {
        Self::new(&CITIES, &OBJECTS)
    }

    pub fn category_violation() -> Self {
        Self::new(&VIOLATION_CATEGORIES, &VIOLATIONS)
    }

    /// Start (re)loading the parent list; the dependent goes back to `Locked`
    pub fn begin_parent_load(&mut self) -> LoadTicket {
        self.dependent.lock();
        self.parent.begin_load()
    }

    /// Parent selection changed.
    ///
    /// The dependent is reset synchronously. A non-empty parent value yields a
    /// dependent load to run; an empty or unknown one clears the parent and
    /// leaves the dependent `Locked`.
    pub fn select_parent(&mut self, value: &str) -> Option<DependentLoad> {
        if !self.parent.select(value) {
            self.parent.clear_selection();
        }
        let parent_id = self.parent.selected().to_string();

        if parent_id.is_empty() {
            self.dependent.lock();
            return None;
        }

        Some(DependentLoad {
            ticket: self.dependent.begin_load(),
            parent_id,
        })
    }

    /// After a successful submission: parent keeps its options but loses the
    /// selection, dependent is forced back to `Locked`.
    pub fn reset(&mut self) {
        self.parent.clear_selection();
        self.dependent.lock();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reference::selector::{LoadOutcome, SelectorPhase};
    use contracts::domain::a001_city::aggregate::City;
    use contracts::domain::a002_object::aggregate::Object;
    use contracts::domain::common::BtxId;

    fn loaded_pair() -> CascadePair {
        let mut pair = CascadePair::city_object();
        let ticket = pair.begin_parent_load();
        pair.parent.apply(
            ticket,
            Ok(vec![
                City {
                    btxid: Some(BtxId::from(1)),
                    name: "Москва".into(),
                },
                City {
                    btxid: Some(BtxId::from(2)),
                    name: "Тверь".into(),
                },
            ]),
        );
        pair
    }

    fn objects(ids: &[i64]) -> Vec<Object> {
        ids.iter()
            .map(|id| Object {
                btxid: Some(BtxId::from(*id)),
                name: format!("Объект {}", id),
                city_id: None,
            })
            .collect()
    }

    #[test]
    fn test_select_parent_starts_dependent_load() {
        let mut pair = loaded_pair();
        let load = pair.select_parent("1").unwrap();

        assert_eq!(load.parent_id, "1");
        assert_eq!(pair.dependent.phase(), SelectorPhase::Loading);
        assert!(!pair.dependent.is_enabled());

        let outcome = pair.dependent.apply(load.ticket, Ok(objects(&[100, 101])));
        assert_eq!(outcome, LoadOutcome::Ready { count: 2 });
        assert!(pair.dependent.is_enabled());
        assert_eq!(pair.dependent.options().len(), 3);
    }

    #[test]
    fn test_empty_parent_locks_dependent() {
        let mut pair = loaded_pair();
        let load = pair.select_parent("1").unwrap();
        pair.dependent.apply(load.ticket, Ok(objects(&[100])));
        pair.dependent.select("100");

        assert!(pair.select_parent("").is_none());
        assert_eq!(pair.dependent.phase(), SelectorPhase::Locked);
        assert_eq!(pair.dependent.selected(), "");
        assert_eq!(pair.dependent.options()[0].label, "Сначала выберите город");
    }

    #[test]
    fn test_parent_change_clears_dependent_even_if_still_valid() {
        let mut pair = loaded_pair();
        let load = pair.select_parent("1").unwrap();
        pair.dependent.apply(load.ticket, Ok(objects(&[100])));
        pair.dependent.select("100");

        let load = pair.select_parent("2").unwrap();
        assert_eq!(pair.dependent.selected(), "");

        // same object id exists under the new city, still not re-selected
        pair.dependent.apply(load.ticket, Ok(objects(&[100])));
        assert_eq!(pair.dependent.selected(), "");
    }

    #[test]
    fn test_reselecting_same_parent_reloads() {
        let mut pair = loaded_pair();
        let first = pair.select_parent("1").unwrap();
        let second = pair.select_parent("1").unwrap();
        assert_ne!(first.ticket, second.ticket);
    }

    #[test]
    fn test_late_response_after_reselection_is_ignored() {
        let mut pair = loaded_pair();
        let slow = pair.select_parent("1").unwrap();
        let fast = pair.select_parent("2").unwrap();

        pair.dependent.apply(fast.ticket, Ok(objects(&[200])));
        let late = pair.dependent.apply(slow.ticket, Ok(objects(&[100, 101, 102])));

        assert_eq!(late, LoadOutcome::Stale);
        let values: Vec<_> = pair
            .dependent
            .options()
            .into_iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(values, vec!["", "200"]);
    }

    #[test]
    fn test_late_response_after_clearing_parent_is_ignored() {
        let mut pair = loaded_pair();
        let pending = pair.select_parent("1").unwrap();
        pair.select_parent("");

        let late = pair.dependent.apply(pending.ticket, Ok(objects(&[100])));
        assert_eq!(late, LoadOutcome::Stale);
        assert_eq!(pair.dependent.phase(), SelectorPhase::Locked);
    }

    #[test]
    fn test_reset_forces_locked() {
        let mut pair = loaded_pair();
        let load = pair.select_parent("2").unwrap();
        pair.dependent.apply(load.ticket, Ok(objects(&[7])));
        pair.dependent.select("7");

        pair.reset();

        assert_eq!(pair.parent.selected(), "");
        assert!(pair.parent.is_enabled());
        assert_eq!(pair.parent.options().len(), 3);
        assert_eq!(pair.dependent.phase(), SelectorPhase::Locked);
        assert_eq!(pair.dependent.selected(), "");
    }

    #[test]
    fn test_reset_from_locked_is_idempotent() {
        let mut pair = loaded_pair();
        pair.reset();
        pair.reset();
        assert_eq!(pair.dependent.phase(), SelectorPhase::Locked);
    }

    #[test]
    fn test_unknown_parent_value_locks() {
        let mut pair = loaded_pair();
        assert!(pair.select_parent("999").is_none());
        assert_eq!(pair.dependent.phase(), SelectorPhase::Locked);
    }

    #[test]
    fn test_unknown_parent_value_drops_previous_selection() {
        let mut pair = loaded_pair();
        pair.select_parent("1").unwrap();
        assert_eq!(pair.parent.selected(), "1");

        assert!(pair.select_parent("999").is_none());
        assert_eq!(pair.parent.selected(), "");
        assert_eq!(pair.dependent.phase(), SelectorPhase::Locked);
    }

    #[test]
    fn test_category_violation_pair() {
        let pair = CascadePair::category_violation();
        assert_eq!(pair.parent.spec().key, "violation-categories");
        assert_eq!(
            pair.dependent.options()[0].label,
            "Сначала выберите категорию"
        );
    }
}
