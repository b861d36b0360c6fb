use serde::{Deserialize, Serialize};

use crate::domain::common::{BtxId, ReferenceRecord};

/// Нарушение. Сервер фильтрует список по категории (`?category_id=`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub btxid: Option<BtxId>,
    #[serde(default)]
    pub name: String,
    pub category_id: Option<BtxId>,
}

impl ReferenceRecord for Violation {
    fn btxid(&self) -> Option<&BtxId> {
        self.btxid.as_ref()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
