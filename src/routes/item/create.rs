use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::item::RItemCreate;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::CurrentUser;

#[post("/create")]
async fn create(
    _user: CurrentUser,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RItemCreate>,
) -> ApiResult<entity::item::Model> {
    if body.name.trim().is_empty() {
        return Err(AppError::Validation("item name is required".into()));
    }

    let item = db.create_item(body.into_inner()).await?;
    log::info!("item registered: {} ({})", item.name, item.id);

    Ok(ApiResponse::Created(item))
}
