use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::claim::ClaimListQuery;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::CurrentUser;

#[get("/list")]
async fn list(
    _user: CurrentUser,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<ClaimListQuery>,
) -> ApiResult<Vec<entity::claim::Model>> {
    let claims = db.list_claims(query.item_id).await?;
    Ok(ApiResponse::Ok(claims))
}
