use serde::{Deserialize, Serialize};

/// Заголовок, в котором передаётся `Telegram.WebApp.initData`
pub const INIT_DATA_HEADER: &str = "X-Telegram-Init-Data";

/// Тело `POST /users/check-access`: пустой JSON-объект
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessCheckRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessCheckResponse {
    pub success: bool,
    #[serde(default)]
    pub authorized: bool,
    pub error: Option<String>,
}

impl AccessCheckResponse {
    /// Доступ есть, только если запрос успешен и пользователь авторизован
    pub fn is_authorized(&self) -> bool {
        self.success && self.authorized
    }
}
