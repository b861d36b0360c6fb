//! Authorization gate: Telegram identity token → allow/deny decision.

pub mod api;
pub mod gate;

pub use gate::{AccessDecision, AccessPhase, DenyReason};
