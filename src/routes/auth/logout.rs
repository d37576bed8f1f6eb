use actix_web::{post, web, HttpRequest, HttpResponse};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::auth::MessageRes;
use crate::types::error::AppError;
use crate::types::response::DataBody;
use crate::utils::token::extract_token_parts;
use crate::utils::webutils::{
    removal_cookie, ACCESS_COOKIE, FRESH_LOGIN_COOKIE, REFRESH_COOKIE,
};

#[post("/logout")]
async fn logout(
    req: HttpRequest,
    db: web::Data<Arc<PostgresService>>,
) -> Result<HttpResponse, AppError> {
    if let Some(cookie) = req.cookie(ACCESS_COOKIE) {
        if let Some((session_id, _)) = extract_token_parts(cookie.value()) {
            if let Err(e) = db.delete_session(&session_id).await {
                log::warn!("logout: could not delete session {session_id}: {e}");
            }
        }
    }

    let mut res = HttpResponse::Ok().json(DataBody {
        data: MessageRes {
            message: "Logged out.".to_string(),
        },
    });
    for name in [ACCESS_COOKIE, REFRESH_COOKIE, FRESH_LOGIN_COOKIE] {
        let _ = res.add_removal_cookie(&removal_cookie(name));
    }
    Ok(res)
}
