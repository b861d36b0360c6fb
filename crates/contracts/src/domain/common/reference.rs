use serde::{Deserialize, Serialize};
use std::fmt;

/// Внешний идентификатор записи справочника (ID в Bitrix24).
///
/// Сервер отдаёт его числом, но старые выгрузки присылают строку, поэтому
/// принимаются оба варианта. Внутри хранится строковая форма: именно она
/// уходит в `value` опции и в параметры запроса.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawBtxId")]
pub struct BtxId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBtxId {
    Int(i64),
    Text(String),
}

impl From<RawBtxId> for BtxId {
    fn from(raw: RawBtxId) -> Self {
        match raw {
            RawBtxId::Int(v) => BtxId(v.to_string()),
            RawBtxId::Text(s) => BtxId(s.trim().to_string()),
        }
    }
}

impl BtxId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<i64> for BtxId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for BtxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Запись справочника, которую можно показать в выпадающем списке
pub trait ReferenceRecord {
    fn btxid(&self) -> Option<&BtxId>;

    fn name(&self) -> &str;

    /// ID, пригодный для выбора. Записи без ID (или с пустым ID) не
    /// показываются и не выбираются.
    fn selectable_id(&self) -> Option<&BtxId> {
        self.btxid().filter(|id| !id.is_blank())
    }
}
