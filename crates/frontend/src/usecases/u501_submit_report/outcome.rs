use contracts::domain::a005_form_submission::fields::SubmitResponse;

use crate::shared::api_utils::ApiError;
use crate::shared::notice::NoticeKind;
use crate::shared::telegram::HapticNotification;

pub const SUCCESS_TEXT: &str = "Данные успешно отправлены!";

/// Итог отправки заявки
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// `success: true`
    Accepted,
    /// Сервер ответил `success: false` с причиной
    Rejected(String),
    /// Сеть, статус без тела, нечитаемый ответ
    Failed(String),
}

impl SubmissionOutcome {
    pub fn from_result(result: Result<SubmitResponse, ApiError>) -> Self {
        match result {
            Ok(response) => match response.into_result() {
                Ok(_) => SubmissionOutcome::Accepted,
                Err(reason) => SubmissionOutcome::Rejected(reason),
            },
            Err(ApiError::Rejected(reason)) => SubmissionOutcome::Rejected(reason),
            Err(e) => SubmissionOutcome::Failed(e.to_string()),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted)
    }

    pub fn notice(&self) -> (NoticeKind, String) {
        match self {
            SubmissionOutcome::Accepted => (NoticeKind::Success, SUCCESS_TEXT.to_string()),
            SubmissionOutcome::Rejected(reason) => {
                (NoticeKind::Error, format!("Ошибка: {}", reason))
            }
            SubmissionOutcome::Failed(msg) => (
                NoticeKind::Error,
                format!("Ошибка отправки данных: {}", msg),
            ),
        }
    }

    pub fn haptic(&self) -> HapticNotification {
        if self.is_accepted() {
            HapticNotification::Success
        } else {
            HapticNotification::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::UNKNOWN_ERROR;

    #[test]
    fn test_success_resets_and_notifies() {
        let outcome =
            SubmissionOutcome::from_result(Ok(SubmitResponse::ok(serde_json::json!({"id": 7}))));
        assert!(outcome.is_accepted());
        assert_eq!(
            outcome.notice(),
            (NoticeKind::Success, "Данные успешно отправлены!".to_string())
        );
        assert_eq!(outcome.haptic(), HapticNotification::Success);
    }

    #[test]
    fn test_server_rejection_text_is_kept() {
        let outcome = SubmissionOutcome::from_result(Ok(SubmitResponse::failure(
            "Не указан город",
        )));
        assert_eq!(outcome, SubmissionOutcome::Rejected("Не указан город".into()));
        assert_eq!(outcome.notice().1, "Ошибка: Не указан город");
        assert_eq!(outcome.haptic(), HapticNotification::Error);
    }

    #[test]
    fn test_rejection_without_reason() {
        let body: SubmitResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        let outcome = SubmissionOutcome::from_result(Ok(body));
        assert_eq!(outcome.notice().1, format!("Ошибка: {}", UNKNOWN_ERROR));
    }

    #[test]
    fn test_rejected_error_status() {
        let outcome =
            SubmissionOutcome::from_result(Err(ApiError::Rejected("Доступ запрещен".into())));
        assert_eq!(outcome.notice().1, "Ошибка: Доступ запрещен");
    }

    #[test]
    fn test_transport_failure() {
        let outcome =
            SubmissionOutcome::from_result(Err(ApiError::Transport("Failed to fetch".into())));
        assert!(!outcome.is_accepted());
        let (kind, text) = outcome.notice();
        assert_eq!(kind, NoticeKind::Error);
        assert!(text.starts_with("Ошибка отправки данных: "));
        assert!(text.contains("Failed to fetch"));
    }
}
