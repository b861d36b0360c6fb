use serde::{Deserialize, Serialize};

use crate::domain::common::{BtxId, ReferenceRecord};

/// Объект проверки. Сервер фильтрует список по городу (`?city_id=`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object {
    pub btxid: Option<BtxId>,
    #[serde(default)]
    pub name: String,
    /// Город-владелец; старые версии API его не присылают
    pub city_id: Option<BtxId>,
}

impl ReferenceRecord for Object {
    fn btxid(&self) -> Option<&BtxId> {
        self.btxid.as_ref()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ApiEnvelope;

    #[test]
    fn test_parse_object_list() {
        let json = r#"{
            "success": true,
            "data": [
                {"btxid": 501, "name": "ТЦ Галерея", "city_id": 12},
                {"btxid": null, "name": "Без привязки"},
                {"name": "Склад №3"}
            ]
        }"#;
        let env: ApiEnvelope<Vec<Object>> = serde_json::from_str(json).unwrap();
        let objects = env.into_result().unwrap().unwrap();

        assert_eq!(objects.len(), 3);
        assert_eq!(objects[0].selectable_id(), Some(&BtxId::from(501)));
        assert_eq!(objects[0].city_id, Some(BtxId::from(12)));
        assert_eq!(objects[1].selectable_id(), None);
        assert_eq!(objects[2].selectable_id(), None);
        assert_eq!(objects[2].name(), "Склад №3");
    }
}
