use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate, UserCreateRes};
use crate::utils::token::encrypt;
use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    _auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserCreateRes> {
    if body.email.trim().is_empty() || !body.email.contains('@') {
        return Err(AppError::Validation("a valid email is required".into()));
    }
    if body.password.len() < 8 {
        return Err(AppError::Validation(
            "password must be at least 8 characters".into(),
        ));
    }

    let pass_hash =
        encrypt(&body.password).map_err(|_| AppError::Internal("password hash failed".into()))?;

    let user_id = db
        .create_user(DBUserCreate {
            name: body.name.clone(),
            email: body.email.clone(),
            pass_hash,
        })
        .await?;

    log::info!("staff account created: {user_id}");

    Ok(ApiResponse::Created(UserCreateRes {
        id: user_id,
        message: "User created.".to_string(),
    }))
}
