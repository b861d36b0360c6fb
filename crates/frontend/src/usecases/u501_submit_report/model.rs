//! Submit Report - Model (API)

use contracts::domain::a005_form_submission::fields::{ReportDraft, SubmitResponse, FIELD_FILE};
use contracts::system::access::INIT_DATA_HEADER;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use super::validation::AttachmentMeta;
use crate::shared::api_utils::{api_url, read_body, ApiError};

fn js_error(e: JsValue) -> ApiError {
    ApiError::Transport(format!("{e:?}"))
}

/// Files currently chosen in a file input
pub fn selected_files(input: &web_sys::HtmlInputElement) -> Vec<File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

pub fn attachment_meta(files: &[File]) -> Vec<AttachmentMeta> {
    files
        .iter()
        .map(|f| AttachmentMeta {
            name: f.name(),
            size: f.size() as u64,
        })
        .collect()
}

/// Build the multipart body: five text parts, then one `file` part per
/// attachment.
fn build_form_data(draft: &ReportDraft, files: &[File]) -> Result<FormData, ApiError> {
    let form_data = FormData::new().map_err(js_error)?;

    for (name, value) in draft.text_fields() {
        form_data.append_with_str(name, value).map_err(js_error)?;
    }
    for file in files {
        form_data
            .append_with_blob_and_filename(FIELD_FILE, file, &file.name())
            .map_err(js_error)?;
    }

    Ok(form_data)
}

/// `POST /submit` (multipart/form-data).
///
/// Заголовок с initData добавляется только если он есть; Content-Type
/// выставляет браузер вместе с boundary.
pub async fn submit_report(
    base_path: &str,
    init_data: Option<&str>,
    draft: &ReportDraft,
    files: &[File],
) -> Result<SubmitResponse, ApiError> {
    let url = api_url(base_path, "/submit");
    let form_data = build_form_data(draft, files)?;

    let mut request = Request::post(&url);
    if let Some(token) = init_data {
        request = request.header(INIT_DATA_HEADER, token);
    }

    let response = request.body(form_data)?.send().await?;
    read_body(response).await
}
