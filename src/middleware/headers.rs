use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{self, HeaderValue};
use actix_web::middleware::Next;
use actix_web::Error;

use crate::config::{AppEnv, EnvConfig};

/// Hardening headers computed once at startup. Development keeps the CSP
/// loose enough for hot-reload tooling; production pins script/style to
/// self and allows connections only to our own origins plus the storage
/// and vision backends.
#[derive(Clone)]
pub struct SecurityHeaders {
    csp: String,
    hsts: bool,
}

impl SecurityHeaders {
    pub fn from_config(config: &EnvConfig) -> Self {
        let csp = match config.app_env {
            AppEnv::Development => "default-src 'self'; \
                 script-src 'self' 'unsafe-inline' 'unsafe-eval'; \
                 style-src 'self' 'unsafe-inline'; \
                 img-src 'self' data: blob: https:; \
                 connect-src *"
                .to_string(),
            AppEnv::Production => {
                let storage = origin_of(&config.storage.endpoint);
                let vision = origin_of(&config.vision.endpoint);
                format!(
                    "default-src 'self'; \
                     script-src 'self'; \
                     style-src 'self' 'unsafe-inline'; \
                     img-src 'self' data: {storage}; \
                     connect-src 'self' {storage} {vision}"
                )
            }
        };
        Self {
            csp,
            hsts: config.app_env == AppEnv::Production,
        }
    }
}

/// scheme://host[:port] prefix of a URL, best effort.
fn origin_of(url: &str) -> String {
    match url.find("://") {
        Some(i) => {
            let after = i + 3;
            let end = url[after..]
                .find('/')
                .map(|j| after + j)
                .unwrap_or(url.len());
            url[..end].to_string()
        }
        None => url.to_string(),
    }
}

pub async fn security_headers(
    headers: SecurityHeaders,
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let https = req.connection_info().scheme() == "https";

    let mut res = next.call(req).await?;
    let h = res.headers_mut();

    if let Ok(csp) = HeaderValue::from_str(&headers.csp) {
        h.insert(header::CONTENT_SECURITY_POLICY, csp);
    }
    h.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    h.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    h.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    if headers.hsts && https {
        h.insert(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=63072000; includeSubDomains"),
        );
    }

    Ok(res)
}
