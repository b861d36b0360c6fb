//! Runtime configuration of the Mini App.
//!
//! Built-in defaults can be overridden by a TOML document embedded in the
//! page:
//!
//! ```html
//! <script id="app-config" type="application/toml">
//! [api]
//! base_path = "/form/api"
//! </script>
//! ```
//!
//! Only the keys present in the override are replaced.

use contracts::domain::a005_form_submission::fields::{MAX_ATTACHMENTS, MAX_ATTACHMENT_SIZE};
use serde::{Deserialize, Serialize};

/// ID элемента страницы с TOML-переопределениями
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub access: AccessConfig,
    pub notice: NoticeConfig,
    pub attachments: AttachmentConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Префикс API; за reverse proxy может быть, например, `/form/api`
    pub base_path: String,
}

/// Что делать, если решение о доступе не получено от сервера
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessPolicy {
    Allow,
    Deny,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Форма открыта не из Telegram (нет initData)
    pub missing_token: AccessPolicy,
    /// Проверка доступа упала (сеть, разбор ответа)
    pub check_error: AccessPolicy,
    /// Задержка перед закрытием Mini App после отказа
    pub close_delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoticeConfig {
    pub auto_hide_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentConfig {
    pub max_files: usize,
    pub max_file_size: u64,
    /// Подсказка для диалога выбора файлов; на клиенте не проверяется
    pub accept: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_path: "/api".to_string(),
            },
            access: AccessConfig {
                missing_token: AccessPolicy::Allow,
                check_error: AccessPolicy::Deny,
                close_delay_ms: 3000,
            },
            notice: NoticeConfig { auto_hide_ms: 5000 },
            attachments: AttachmentConfig {
                max_files: MAX_ATTACHMENTS,
                max_file_size: MAX_ATTACHMENT_SIZE,
                accept: ".png,.jpg,.jpeg,.gif,.pdf,.doc,.docx,.txt".to_string(),
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize defaults: {0}")]
    Defaults(#[from] toml::ser::Error),
}

/// Apply a (possibly partial) TOML override on top of the defaults
pub fn parse_with_overrides(source: &str) -> Result<AppConfig, ConfigError> {
    let mut merged = toml::Value::try_from(AppConfig::default())?;
    let overlay: toml::Value = toml::from_str(source)?;
    merge(&mut merged, overlay);
    Ok(merged.try_into::<AppConfig>()?)
}

fn merge(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Load configuration for the current page.
///
/// Falls back to defaults when the page carries no override or the
/// override is malformed.
pub fn load_config() -> AppConfig {
    let source = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());

    let Some(source) = source else {
        log::info!("Using default configuration");
        return AppConfig::default();
    };

    match parse_with_overrides(&source) {
        Ok(config) => {
            log::info!("Loaded configuration overrides from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            log::warn!("Ignoring configuration overrides: {}", e);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_override_gives_defaults() {
        let config = parse_with_overrides("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_path, "/api");
        assert_eq!(config.notice.auto_hide_ms, 5000);
        assert_eq!(config.attachments.max_files, 5);
        assert_eq!(config.attachments.max_file_size, 52_428_800);
    }

    #[test]
    fn test_partial_override() {
        let config = parse_with_overrides(
            r#"
            [api]
            base_path = "/form/api"

            [access]
            missing_token = "deny"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_path, "/form/api");
        assert_eq!(config.access.missing_token, AccessPolicy::Deny);
        // untouched keys keep defaults
        assert_eq!(config.access.check_error, AccessPolicy::Deny);
        assert_eq!(config.access.close_delay_ms, 3000);
    }

    #[test]
    fn test_malformed_override_is_error() {
        assert!(parse_with_overrides("[api\nbase_path = ").is_err());
        assert!(parse_with_overrides("[access]\nmissing_token = \"maybe\"").is_err());
    }
}
