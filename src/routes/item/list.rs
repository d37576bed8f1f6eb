use actix_web::{get, web};
use std::sync::Arc;

use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::item::ItemListQuery;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::CurrentUser;

#[get("/list")]
async fn list(
    _user: CurrentUser,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<ItemListQuery>,
) -> ApiResult<Vec<entity::item::Model>> {
    let items = db
        .list_items(&query, config().tz_offset_hours)
        .await?;
    Ok(ApiResponse::Ok(items))
}
