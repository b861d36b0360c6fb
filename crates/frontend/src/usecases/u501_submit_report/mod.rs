//! Violation report form (MVVM Standard)
//!
//! Structure:
//! - model.rs: multipart submission and file helpers
//! - validation.rs: required fields and attachment limits
//! - outcome.rs: server answer → notice, haptic, reset
//! - view_model.rs: ReportFormVm with RwSignals
//! - view.rs: Main component ReportForm

mod model;
pub mod outcome;
pub mod validation;
mod view;
mod view_model;

pub use view::ReportForm;
pub use view_model::ReportFormVm;
