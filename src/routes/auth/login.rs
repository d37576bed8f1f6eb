use actix_web::{post, web, HttpResponse};
use std::sync::Arc;

use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::auth::{LoginRes, RLogin};
use crate::types::error::AppError;
use crate::types::response::DataBody;
use crate::types::user::UserRes;
use crate::utils::token::construct_token;
use crate::utils::webutils::{
    session_cookie, ACCESS_COOKIE, FRESH_LOGIN_COOKIE, REFRESH_COOKIE,
};

// the fresh-login marker only needs to outlive the redirect back into the app
const FRESH_LOGIN_SECS: i64 = 60;

#[post("/login")]
async fn login(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RLogin>,
) -> Result<HttpResponse, AppError> {
    if body.email.trim().is_empty() || body.password.is_empty() {
        return Err(AppError::BadRequest("email and password are required".into()));
    }

    let user = db.verify_login(&body.email, &body.password).await?;

    let session_cfg = &config().session;
    let (session_id, access, refresh) = db
        .create_session(user.id, session_cfg.max_age_secs, session_cfg.refresh_secs)
        .await?;
    let sid = session_id.to_string();

    log::info!("login: {} ({})", user.email, user.id);

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(
            ACCESS_COOKIE,
            construct_token(&sid, &access),
            session_cfg.max_age_secs,
        ))
        .cookie(session_cookie(
            REFRESH_COOKIE,
            construct_token(&sid, &refresh),
            session_cfg.refresh_secs,
        ))
        .cookie(session_cookie(
            FRESH_LOGIN_COOKIE,
            "1".to_string(),
            FRESH_LOGIN_SECS,
        ))
        .json(DataBody {
            data: LoginRes {
                user: UserRes::from(user),
            },
        }))
}
