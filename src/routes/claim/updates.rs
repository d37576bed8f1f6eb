use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::claim::CursorQuery;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::CurrentUser;

/// Polling fallback for new-claim notifications: everything filed after
/// the caller's last seen id, oldest first.
#[get("/updates")]
async fn updates(
    _user: CurrentUser,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<CursorQuery>,
) -> ApiResult<Vec<entity::claim::Model>> {
    let claims = db.claims_after(query.after.unwrap_or(0)).await?;
    Ok(ApiResponse::Ok(claims))
}
