use serde::{Deserialize, Serialize};

use crate::domain::common::{BtxId, ReferenceRecord};

/// Категория нарушений. Корень каскада «категория → нарушение».
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolationCategory {
    pub btxid: Option<BtxId>,
    #[serde(default)]
    pub name: String,
}

impl ReferenceRecord for ViolationCategory {
    fn btxid(&self) -> Option<&BtxId> {
        self.btxid.as_ref()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
