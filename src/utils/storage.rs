use crate::config::StorageConfig;
use crate::types::error::AppError;
use base64::{prelude::BASE64_STANDARD, Engine as _};
use reqwest::header::CONTENT_TYPE;
use reqwest::ClientBuilder;
use std::time::Duration;

/// Splits a `data:<mime>;base64,<payload>` URL into its mime type and
/// decoded bytes. Anything else (plain URLs, missing base64 marker) is None.
pub fn decode_data_url(input: &str) -> Option<(String, Vec<u8>)> {
    let rest = input.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    let mime = meta.strip_suffix(";base64")?;
    let bytes = BASE64_STANDARD.decode(payload.trim()).ok()?;
    Some((mime.to_string(), bytes))
}

fn storage_err(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::Timeout("storage upload timed out".to_string())
    } else {
        AppError::Upstream(format!("storage API error: {e}"))
    }
}

/// Uploads an object to the hosted bucket and returns the stored key,
/// which callers persist as the image/signature reference.
pub async fn put_object(
    cfg: &StorageConfig,
    key: &str,
    mime_type: &str,
    bytes: Vec<u8>,
) -> Result<String, AppError> {
    let url = format!("{}/{}/{}", cfg.endpoint.trim_end_matches('/'), cfg.bucket, key);

    let client = ClientBuilder::new()
        .user_agent("reclaim/0.1 (+reqwest)")
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| AppError::Internal(format!("build client failed: {e}")))?;

    log::info!("[storage] -> PUT {url} ({} bytes)", bytes.len());

    let res = client
        .put(&url)
        .bearer_auth(&cfg.api_key)
        .header(CONTENT_TYPE, mime_type)
        .body(bytes)
        .send()
        .await
        .map_err(storage_err)?;

    let status = res.status();
    if status.is_success() {
        Ok(key.to_string())
    } else {
        let body = res.text().await.unwrap_or_default();
        Err(AppError::Upstream(format!(
            "storage API error: HTTP {status}: {body}"
        )))
    }
}
