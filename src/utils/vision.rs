use crate::config::VisionConfig;
use crate::types::error::AppError;
use crate::types::vision::VisionFields;
use base64::{prelude::BASE64_STANDARD, Engine as _};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Fixed instruction prompt. The parser below only understands the four
/// labels this asks for, so keep them in sync.
pub const ANALYZE_PROMPT: &str = "This is a photo of a found item handed in \
to a lost-and-found desk. Answer with exactly four lines and nothing else:\n\
Name: <short item name>\n\
Brand: <brand or maker, leave blank if unreadable>\n\
Color: <dominant colors>\n\
Feature: <distinguishing features useful for identification>";

#[derive(Debug)]
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

fn http_client(timeout_secs: u64) -> Result<Client, AppError> {
    ClientBuilder::new()
        .user_agent("reclaim/0.1 (+reqwest)")
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| AppError::Internal(format!("build client failed: {e}")))
}

fn fetch_err(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::Timeout("image fetch timed out".to_string())
    } else {
        AppError::Upstream(format!("image fetch failed: {e}"))
    }
}

fn infer_err(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::Timeout("image analysis timed out".to_string())
    } else {
        AppError::Upstream(format!("vision API error: {e}"))
    }
}

fn oversize(limit: usize) -> AppError {
    AppError::BadRequest(format!("image exceeds the {limit} byte limit"))
}

/// Downloads the photo to analyze. The size cap is enforced on the
/// advertised Content-Length first so oversized payloads are rejected
/// before the body is pulled, and again on the actual bytes.
pub async fn fetch_image(cfg: &VisionConfig, url: &str) -> Result<FetchedImage, AppError> {
    let client = http_client(cfg.fetch_timeout_secs)?;

    let res = client.get(url).send().await.map_err(fetch_err)?;
    if !res.status().is_success() {
        return Err(AppError::Upstream(format!(
            "image fetch failed: HTTP {}",
            res.status()
        )));
    }

    if let Some(len) = res.content_length() {
        if len as usize > cfg.max_image_bytes {
            return Err(oversize(cfg.max_image_bytes));
        }
    }

    let mime_type = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("image/jpeg")
        .to_string();

    let bytes = res.bytes().await.map_err(fetch_err)?;
    if bytes.len() > cfg.max_image_bytes {
        return Err(oversize(cfg.max_image_bytes));
    }

    Ok(FetchedImage {
        bytes: bytes.to_vec(),
        mime_type,
    })
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    prompt: &'a str,
    image: ImagePart<'a>,
}

#[derive(Serialize)]
struct ImagePart<'a> {
    mime_type: &'a str,
    data: String,
}

#[derive(Deserialize)]
struct AnalyzeResponse {
    text: String,
}

pub async fn analyze_image(
    cfg: &VisionConfig,
    image: &FetchedImage,
) -> Result<VisionFields, AppError> {
    let client = http_client(cfg.infer_timeout_secs)?;

    let body = AnalyzeRequest {
        prompt: ANALYZE_PROMPT,
        image: ImagePart {
            mime_type: &image.mime_type,
            data: BASE64_STANDARD.encode(&image.bytes),
        },
    };

    log::info!(
        "[vision] -> POST {} ({} image bytes)",
        cfg.endpoint,
        image.bytes.len()
    );

    let t0 = Instant::now();
    let res = client
        .post(&cfg.endpoint)
        .bearer_auth(&cfg.api_key) // do NOT log the key
        .json(&body)
        .send()
        .await
        .map_err(infer_err)?;

    let status = res.status();
    log::info!("[vision] <- HTTP {status} in {} ms", t0.elapsed().as_millis());

    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(AppError::Upstream(format!(
            "vision API error: HTTP {status}: {body}"
        )));
    }

    let parsed: AnalyzeResponse = res.json().await.map_err(infer_err)?;
    Ok(parse_fields(&parsed.text))
}

/// Pulls the four labeled fields out of the model's free-text reply.
/// Tolerates markdown bullets, bold markers and fullwidth colons; a label
/// that never appears stays an empty string.
pub fn parse_fields(text: &str) -> VisionFields {
    let mut out = VisionFields::default();
    for raw in text.lines() {
        let line = raw.replace("**", "");
        let line = line.trim().trim_start_matches(['-', '*']).trim();
        let Some((label, value)) = line.split_once([':', '：']) else {
            continue;
        };
        let value = value.trim().to_string();
        match label.trim().to_ascii_lowercase().as_str() {
            "name" if out.name.is_empty() => out.name = value,
            "brand" if out.brand.is_empty() => out.brand = value,
            "color" if out.color.is_empty() => out.color = value,
            "feature" if out.feature.is_empty() => out.feature = value,
            _ => {}
        }
    }
    out
}
