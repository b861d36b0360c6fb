use contracts::domain::common::ApiEnvelope;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use super::catalog::ReferenceSpec;
use crate::shared::api_utils::{api_url, read_body, with_query, ApiError};

/// URL справочника с фильтром по родителю (если он есть)
pub fn reference_url(base_path: &str, spec: &ReferenceSpec, parent_id: Option<&str>) -> String {
    let url = api_url(base_path, spec.path);
    match (spec.parent_param, parent_id) {
        (Some(param), Some(id)) => with_query(&url, param, id),
        _ => url,
    }
}

/// Загрузить справочник целиком.
///
/// Успешный ответ без `data` считается пустым списком.
pub async fn fetch_reference<T: DeserializeOwned>(
    base_path: &str,
    spec: &ReferenceSpec,
    parent_id: Option<&str>,
) -> Result<Vec<T>, ApiError> {
    let url = reference_url(base_path, spec, parent_id);

    let response = Request::get(&url).send().await?;
    let envelope: ApiEnvelope<Vec<T>> = read_body(response).await?;

    envelope
        .into_result()
        .map(Option::unwrap_or_default)
        .map_err(ApiError::Rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reference::catalog::{CITIES, OBJECTS, VIOLATIONS};

    #[test]
    fn test_reference_url() {
        assert_eq!(reference_url("/api", &CITIES, None), "/api/cities");
        assert_eq!(
            reference_url("/form/api", &OBJECTS, Some("12")),
            "/form/api/objects?city_id=12"
        );
        assert_eq!(
            reference_url("/api", &VIOLATIONS, Some("5")),
            "/api/violations?category_id=5"
        );
    }

    #[test]
    fn test_independent_set_ignores_parent() {
        assert_eq!(reference_url("/api", &CITIES, Some("1")), "/api/cities");
    }
}
