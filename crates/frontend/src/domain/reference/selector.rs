//! State of one reference selector.
//!
//! Every `begin_load()` and `lock()` starts a new generation. A load result is
//! applied only with the ticket of the current generation, so a late answer
//! to an earlier request can never overwrite what the latest selection left.

use contracts::domain::common::ReferenceRecord;

use super::catalog::ReferenceSpec;
use crate::shared::api_utils::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorPhase {
    /// Родитель не выбран (или сброшен)
    Locked,
    Loading,
    Ready,
    /// Загрузка успешна, но выбирать нечего
    Empty,
    Failed,
}

/// Квитанция запроса загрузки; действительна до следующего `begin_load`/`lock`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Ответ на устаревший запрос, ничего не изменилось
    Stale,
    Ready { count: usize },
    Empty,
    /// Загрузка не удалась; `notice` показывается пользователю
    Failed { notice: String },
}

#[derive(Debug, Clone)]
pub struct SelectorState {
    spec: &'static ReferenceSpec,
    phase: SelectorPhase,
    records: Vec<SelectOption>,
    selected: String,
    generation: u64,
}

impl SelectorState {
    pub fn new(spec: &'static ReferenceSpec) -> Self {
        Self {
            spec,
            phase: SelectorPhase::Locked,
            records: Vec::new(),
            selected: String::new(),
            generation: 0,
        }
    }

    pub fn spec(&self) -> &'static ReferenceSpec {
        self.spec
    }

    pub fn phase(&self) -> SelectorPhase {
        self.phase
    }

    /// Выбор возможен только из готового списка
    pub fn is_enabled(&self) -> bool {
        self.phase == SelectorPhase::Ready
    }

    /// Текущее значение; пустая строка, если ничего не выбрано
    pub fn selected(&self) -> &str {
        &self.selected
    }

    fn placeholder_label(&self) -> &'static str {
        match self.phase {
            SelectorPhase::Locked => self.spec.locked,
            SelectorPhase::Loading => self.spec.loading,
            SelectorPhase::Ready => self.spec.prompt,
            SelectorPhase::Empty => self.spec.empty,
            SelectorPhase::Failed => self.spec.error,
        }
    }

    /// Options to render: one placeholder, then the loaded records in server
    /// order (only while `Ready`).
    pub fn options(&self) -> Vec<SelectOption> {
        let mut options = vec![SelectOption::placeholder(self.placeholder_label())];
        if self.phase == SelectorPhase::Ready {
            options.extend(self.records.iter().cloned());
        }
        options
    }

    /// Disable the selector and show "loading" until the ticket is applied
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.phase = SelectorPhase::Loading;
        self.records.clear();
        self.selected.clear();
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Back to `Locked`; any in-flight load becomes stale
    pub fn lock(&mut self) {
        self.generation += 1;
        self.phase = SelectorPhase::Locked;
        self.records.clear();
        self.selected.clear();
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    pub fn apply<T: ReferenceRecord>(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<T>, ApiError>,
    ) -> LoadOutcome {
        if !self.is_current(ticket) {
            return LoadOutcome::Stale;
        }

        match result {
            Ok(items) => {
                self.records = items
                    .iter()
                    .filter_map(|item| {
                        item.selectable_id().map(|id| SelectOption {
                            value: id.to_string(),
                            label: item.name().to_string(),
                        })
                    })
                    .collect();

                if self.records.is_empty() {
                    self.phase = SelectorPhase::Empty;
                    LoadOutcome::Empty
                } else {
                    self.phase = SelectorPhase::Ready;
                    LoadOutcome::Ready {
                        count: self.records.len(),
                    }
                }
            }
            Err(e) => {
                self.records.clear();
                self.phase = SelectorPhase::Failed;
                LoadOutcome::Failed {
                    notice: load_error_notice(self.spec, &e),
                }
            }
        }
    }

    /// Select a value. Empty string clears the selection; a value that is not
    /// among the loaded options is refused.
    pub fn select(&mut self, value: &str) -> bool {
        if value.is_empty() {
            self.selected.clear();
            return true;
        }
        let known = self.is_enabled() && self.records.iter().any(|o| o.value == value);
        if known {
            self.selected = value.to_string();
        }
        known
    }

    /// Clear the selection but keep the loaded options
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}

/// `"<prefix>: <server text>"` for a logical failure, bare prefix otherwise
pub fn load_error_notice(spec: &ReferenceSpec, error: &ApiError) -> String {
    match error {
        ApiError::Rejected(reason) => format!("{}: {}", spec.error_notice, reason),
        _ => spec.error_notice.to_string(),
    }
}
