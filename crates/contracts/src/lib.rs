//! Wire contracts of the report form API (`/api`).
//!
//! Shared between the Mini App client and anything that talks to the same
//! server. No browser dependencies here.

pub mod domain;
pub mod system;
