use serde::{Deserialize, Serialize};

use crate::domain::common::{BtxId, ReferenceRecord};

/// Город. Корень каскада «город → объект».
///
/// В форме `city_id` означает `btxid` города.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub btxid: Option<BtxId>,
    #[serde(default)]
    pub name: String,
}

impl ReferenceRecord for City {
    fn btxid(&self) -> Option<&BtxId> {
        self.btxid.as_ref()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
