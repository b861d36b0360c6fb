//! Client-side checks that run before anything reaches the network.

use std::collections::BTreeMap;

use contracts::domain::a005_form_submission::fields::ReportDraft;
use thiserror::Error;

use crate::shared::config::AttachmentConfig;

/// Обязательные поля формы
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    City,
    Object,
    ViolationCategory,
    Violation,
}

impl FormField {
    pub const REQUIRED: [FormField; 4] = [
        FormField::City,
        FormField::Object,
        FormField::ViolationCategory,
        FormField::Violation,
    ];

    /// ID элемента на странице; ошибка выводится в `<id>-error`
    pub fn dom_id(&self) -> &'static str {
        match self {
            FormField::City => "city",
            FormField::Object => "object",
            FormField::ViolationCategory => "violationCategory",
            FormField::Violation => "violation",
        }
    }

    pub fn required_message(&self) -> &'static str {
        match self {
            FormField::City => "Выберите город",
            FormField::Object => "Выберите объект",
            FormField::ViolationCategory => "Выберите категорию нарушения",
            FormField::Violation => "Выберите нарушение",
        }
    }

    fn value<'a>(&self, draft: &'a ReportDraft) -> &'a str {
        match self {
            FormField::City => &draft.city_id,
            FormField::Object => &draft.object_id,
            FormField::ViolationCategory => &draft.violation_category_id,
            FormField::Violation => &draft.violation_id,
        }
    }
}

/// Inline errors per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Check all four selections; every missing one is reported, not just the
/// first.
pub fn validate_required(draft: &ReportDraft) -> Result<(), FieldErrors> {
    let errors: BTreeMap<_, _> = FormField::REQUIRED
        .iter()
        .filter(|field| field.value(draft).trim().is_empty())
        .map(|field| (*field, field.required_message().to_string()))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(FieldErrors(errors))
    }
}

/// Имя и размер выбранного файла
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentMeta {
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    #[error("Можно прикрепить не более {max} файлов")]
    TooMany { count: usize, max: usize },
    #[error("Файл \"{name}\" превышает {limit} МБ")]
    TooLarge {
        name: String,
        size: u64,
        /// Лимит в МиБ для сообщения: `50`, `1,5`
        limit: String,
    },
}

const MIB: u64 = 1024 * 1024;

/// Byte limit as MiB with at most one decimal, rounded up so the message
/// never states less than the real limit.
fn format_mib(bytes: u64) -> String {
    let tenths = bytes.saturating_mul(10).div_ceil(MIB);
    if tenths % 10 == 0 {
        (tenths / 10).to_string()
    } else {
        format!("{},{}", tenths / 10, tenths % 10)
    }
}

/// Count first, then every file's size; the first violation wins.
pub fn validate_attachments(
    files: &[AttachmentMeta],
    limits: &AttachmentConfig,
) -> Result<(), AttachmentError> {
    if files.len() > limits.max_files {
        return Err(AttachmentError::TooMany {
            count: files.len(),
            max: limits.max_files,
        });
    }

    match files.iter().find(|f| f.size > limits.max_file_size) {
        Some(file) => Err(AttachmentError::TooLarge {
            name: file.name.clone(),
            size: file.size,
            limit: format_mib(limits.max_file_size),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;

    fn limits() -> AttachmentConfig {
        AppConfig::default().attachments
    }

    fn file(name: &str, size: u64) -> AttachmentMeta {
        AttachmentMeta {
            name: name.to_string(),
            size,
        }
    }

    fn full_draft() -> ReportDraft {
        ReportDraft {
            city_id: "1".into(),
            object_id: "10".into(),
            violation_category_id: "5".into(),
            violation_id: "50".into(),
            comment: String::new(),
        }
    }

    #[test]
    fn test_all_fields_missing_gives_four_errors() {
        let errors = validate_required(&ReportDraft::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(FormField::City), Some("Выберите город"));
        assert_eq!(errors.get(FormField::Object), Some("Выберите объект"));
        assert_eq!(
            errors.get(FormField::ViolationCategory),
            Some("Выберите категорию нарушения")
        );
        assert_eq!(errors.get(FormField::Violation), Some("Выберите нарушение"));
    }

    #[test]
    fn test_only_missing_fields_reported() {
        let mut draft = full_draft();
        draft.object_id.clear();
        draft.violation_id.clear();

        let errors = validate_required(&draft).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.get(FormField::City).is_none());
        assert!(errors.get(FormField::Object).is_some());
        assert!(errors.get(FormField::Violation).is_some());
    }

    #[test]
    fn test_full_draft_passes_without_comment() {
        assert!(validate_required(&full_draft()).is_ok());
    }

    #[test]
    fn test_six_files_rejected() {
        let files: Vec<_> = (0..6).map(|i| file(&format!("photo{}.jpg", i), MIB)).collect();
        let err = validate_attachments(&files, &limits()).unwrap_err();
        assert_eq!(err, AttachmentError::TooMany { count: 6, max: 5 });
        assert_eq!(err.to_string(), "Можно прикрепить не более 5 файлов");
    }

    #[test]
    fn test_five_files_under_limit_accepted() {
        let files: Vec<_> = (0..5)
            .map(|i| file(&format!("doc{}.pdf", i), 49 * MIB))
            .collect();
        assert!(validate_attachments(&files, &limits()).is_ok());
    }

    #[test]
    fn test_exactly_50_mib_accepted() {
        assert!(validate_attachments(&[file("video.mp4", 50 * MIB)], &limits()).is_ok());
    }

    #[test]
    fn test_one_byte_over_rejected() {
        let err = validate_attachments(&[file("video.mp4", 50 * MIB + 1)], &limits()).unwrap_err();
        assert_eq!(err.to_string(), "Файл \"video.mp4\" превышает 50 МБ");
    }

    #[test]
    fn test_fractional_limit_is_not_understated() {
        let mut limits = limits();
        limits.max_file_size = 3 * MIB / 2;

        let err = validate_attachments(&[file("scan.pdf", 2 * MIB)], &limits).unwrap_err();
        assert_eq!(err.to_string(), "Файл \"scan.pdf\" превышает 1,5 МБ");

        assert_eq!(format_mib(10 * MIB + 1), "10,1");
        assert_eq!(format_mib(50 * MIB), "50");
    }

    #[test]
    fn test_no_files_is_fine() {
        assert!(validate_attachments(&[], &limits()).is_ok());
    }
}
