use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::CurrentUser;

#[get("/{id}")]
async fn get_item(
    _user: CurrentUser,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<entity::item::Model> {
    let item = db.get_item_by_id(&path.into_inner()).await?;
    Ok(ApiResponse::Ok(item))
}
