//! Common types for all reference records and API responses

pub mod envelope;
pub mod reference;

// Re-exports
pub use envelope::{ApiEnvelope, UNKNOWN_ERROR};
pub use reference::{BtxId, ReferenceRecord};
