use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::item::RItemUpdate;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::CurrentUser;

#[post("/update")]
async fn update(
    _user: CurrentUser,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RItemUpdate>,
) -> ApiResult<entity::item::Model> {
    if let Some(name) = &body.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("item name cannot be blank".into()));
        }
    }

    let item = db.update_item(body.into_inner()).await?;
    Ok(ApiResponse::Ok(item))
}
