use actix_web::{post, web, HttpRequest, HttpResponse};
use std::sync::Arc;

use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::auth::MessageRes;
use crate::types::error::AppError;
use crate::types::response::DataBody;
use crate::utils::token::{construct_token, extract_token_parts};
use crate::utils::webutils::{session_cookie, ACCESS_COOKIE, REFRESH_COOKIE};

#[post("/refresh")]
async fn refresh(
    req: HttpRequest,
    db: web::Data<Arc<PostgresService>>,
) -> Result<HttpResponse, AppError> {
    let cookie = req.cookie(REFRESH_COOKIE).ok_or(AppError::Unauthorized)?;
    let (session_id, secret) =
        extract_token_parts(cookie.value()).ok_or(AppError::Unauthorized)?;

    let session_cfg = &config().session;
    let (session, access) = db
        .refresh_session(&session_id, &secret, session_cfg.max_age_secs)
        .await?;

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(
            ACCESS_COOKIE,
            construct_token(&session.id.to_string(), &access),
            session_cfg.max_age_secs,
        ))
        .json(DataBody {
            data: MessageRes {
                message: "Session refreshed.".to_string(),
            },
        }))
}
