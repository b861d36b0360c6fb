//! Поля multipart-запроса `POST /submit` и ограничения на вложения

use serde::{Deserialize, Serialize};

use crate::domain::common::ApiEnvelope;

pub const FIELD_CITY: &str = "city_id";
pub const FIELD_OBJECT: &str = "object_id";
pub const FIELD_VIOLATION_CATEGORY: &str = "violation_category_id";
pub const FIELD_VIOLATION: &str = "violation_id";
pub const FIELD_COMMENT: &str = "comment";
/// Файлы уходят повторяющейся частью с одним и тем же именем
pub const FIELD_FILE: &str = "file";

/// Не более 5 файлов в одной заявке
pub const MAX_ATTACHMENTS: usize = 5;
/// 50 МиБ на файл
pub const MAX_ATTACHMENT_SIZE: u64 = 50 * 1024 * 1024;

/// Ответ на отправку: `{success, error?, message?, data?}`.
/// `data` содержит сохранённую заявку, её форма клиенту не важна.
pub type SubmitResponse = ApiEnvelope<serde_json::Value>;

/// Текстовая часть заявки (без файлов)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDraft {
    pub city_id: String,
    pub object_id: String,
    pub violation_category_id: String,
    pub violation_id: String,
    pub comment: String,
}

impl ReportDraft {
    /// Текстовые части формы в порядке отправки
    pub fn text_fields(&self) -> [(&'static str, &str); 5] {
        [
            (FIELD_CITY, self.city_id.as_str()),
            (FIELD_OBJECT, self.object_id.as_str()),
            (FIELD_VIOLATION_CATEGORY, self.violation_category_id.as_str()),
            (FIELD_VIOLATION, self.violation_id.as_str()),
            (FIELD_COMMENT, self.comment.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_limit_is_50_mib() {
        assert_eq!(MAX_ATTACHMENT_SIZE, 52_428_800);
    }

    #[test]
    fn test_text_fields_order() {
        let draft = ReportDraft {
            city_id: "12".into(),
            object_id: "501".into(),
            violation_category_id: "3".into(),
            violation_id: "44".into(),
            comment: "Не работает освещение".into(),
        };
        let names: Vec<_> = draft.text_fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "city_id",
                "object_id",
                "violation_category_id",
                "violation_id",
                "comment"
            ]
        );
        assert_eq!(draft.text_fields()[4].1, "Не работает освещение");
    }
}
