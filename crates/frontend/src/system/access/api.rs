use contracts::system::access::{AccessCheckRequest, AccessCheckResponse, INIT_DATA_HEADER};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_body, ApiError};

/// Проверить, зарегистрирован ли пользователь Telegram в системе
pub async fn check_access(base_path: &str, init_data: &str) -> Result<AccessCheckResponse, ApiError> {
    let url = api_url(base_path, "/users/check-access");

    let response = Request::post(&url)
        .header(INIT_DATA_HEADER, init_data)
        .json(&AccessCheckRequest {})?
        .send()
        .await?;

    read_body(response).await
}
