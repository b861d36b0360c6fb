//! Reference data: cities, objects, violation categories, violations.

pub mod api;
pub mod cascade;
pub mod catalog;
pub mod selector;

pub use cascade::{CascadePair, DependentLoad};
pub use catalog::ReferenceSpec;
pub use selector::{LoadOutcome, LoadTicket, SelectOption, SelectorPhase, SelectorState};
