//! Access gate decision.
//!
//! Every session ends with an explicit allow/deny before any control is
//! enabled. The two cases the server cannot answer (no Telegram token, failed
//! check) are decided by configuration.

use contracts::system::access::AccessCheckResponse;

use crate::shared::api_utils::ApiError;
use crate::shared::config::{AccessConfig, AccessPolicy};

pub const DENIED_NOT_REGISTERED: &str =
    "Доступ запрещен: Пользователь не зарегистрирован в системе";
pub const DENIED_NO_TOKEN: &str = "Доступ запрещен: откройте форму из Telegram";
pub const DENIED_CHECK_FAILED: &str = "Доступ запрещен: не удалось проверить доступ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    Denied(DenyReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    NotRegistered,
    MissingToken,
    CheckFailed(String),
}

impl DenyReason {
    /// Текст уведомления для пользователя
    pub fn message(&self) -> String {
        match self {
            DenyReason::NotRegistered => DENIED_NOT_REGISTERED.to_string(),
            DenyReason::MissingToken => DENIED_NO_TOKEN.to_string(),
            DenyReason::CheckFailed(e) => format!("{} ({})", DENIED_CHECK_FAILED, e),
        }
    }
}

/// Состояние проверки доступа для UI
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AccessPhase {
    #[default]
    Checking,
    Allowed,
    Denied,
}

/// Decision when the page was opened without an identity token
pub fn decide_without_token(config: &AccessConfig) -> AccessDecision {
    match config.missing_token {
        AccessPolicy::Allow => AccessDecision::Allowed,
        AccessPolicy::Deny => AccessDecision::Denied(DenyReason::MissingToken),
    }
}

/// Decision from the result of `POST /users/check-access`
pub fn decide_from_check(
    config: &AccessConfig,
    result: Result<AccessCheckResponse, ApiError>,
) -> AccessDecision {
    match result {
        Ok(response) if response.is_authorized() => AccessDecision::Allowed,
        Ok(_) => AccessDecision::Denied(DenyReason::NotRegistered),
        Err(e) => match config.check_error {
            AccessPolicy::Allow => AccessDecision::Allowed,
            AccessPolicy::Deny => AccessDecision::Denied(DenyReason::CheckFailed(e.to_string())),
        },
    }
}
