use serde::{Deserialize, Serialize};

/// Текст ошибки, если сервер ответил `success: false` без поля `error`
pub const UNKNOWN_ERROR: &str = "неизвестная ошибка";

/// Единый конверт ответа API: `{success, data?, error?}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Успешный ответ с данными
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Логическая ошибка с текстом сервера
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Свернуть конверт в `Result`.
    ///
    /// `success: false` превращается в `Err` с текстом сервера (или
    /// [`UNKNOWN_ERROR`], если текста нет). Успешный ответ может не нести
    /// `data` вовсе, поэтому `Ok` содержит `Option`.
    pub fn into_result(self) -> Result<Option<T>, String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string()))
        }
    }
}
