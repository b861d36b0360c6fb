pub mod a001_city;
pub mod a002_object;
pub mod a003_violation_category;
pub mod a004_violation;
pub mod a005_form_submission;
pub mod common;
