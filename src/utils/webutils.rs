use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::dev::{Payload, ServiceRequest};
use actix_web::error::ErrorUnauthorized;
use actix_web::{web, FromRequest, HttpRequest};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use futures::future::LocalBoxFuture;
use std::sync::Arc;
use subtle::ConstantTimeEq;

use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token::extract_token_parts;

// Session cookie pair plus the marker the gate checks right after login.
pub const ACCESS_COOKIE: &str = "session_access";
pub const REFRESH_COOKIE: &str = "session_refresh";
pub const FRESH_LOGIN_COOKIE: &str = "login_fresh";

// Brute-force counters owned by the access gate.
pub const ATTEMPTS_COOKIE: &str = "gate_attempts";
pub const LOCK_COOKIE: &str = "gate_lock";

pub async fn validate_admin_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let expected = config().admin_key.as_bytes();
    if credentials.token().as_bytes().ct_eq(expected).into() {
        Ok(req)
    } else {
        Err((ErrorUnauthorized("Invalid token"), req))
    }
}

pub fn session_cookie(name: &'static str, value: String, max_age_secs: i64) -> Cookie<'static> {
    Cookie::build(name, value)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::seconds(max_age_secs))
        .finish()
}

pub fn removal_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::new(name, "");
    cookie.set_path("/");
    cookie
}

/// Extractor guarding session-scoped routes: resolves the access cookie to
/// the staff account behind it or answers 401.
pub struct CurrentUser {
    pub user: entity::user::Model,
    pub session: entity::session::Model,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let db = req.app_data::<web::Data<Arc<PostgresService>>>().cloned();
        let cookie = req.cookie(ACCESS_COOKIE).map(|c| c.value().to_string());

        Box::pin(async move {
            let db = db.ok_or_else(|| AppError::Internal("database not configured".into()))?;
            let value = cookie.ok_or(AppError::Unauthorized)?;
            let (session_id, secret) =
                extract_token_parts(&value).ok_or(AppError::Unauthorized)?;
            let (session, user) = db.verify_access(&session_id, &secret).await?;
            Ok(CurrentUser { user, session })
        })
    }
}
