use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::notify::ClaimNotifier;
use crate::types::claim::RClaimCreate;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::CurrentUser;

#[post("/create")]
async fn create(
    _user: CurrentUser,
    db: web::Data<Arc<PostgresService>>,
    notifier: web::Data<ClaimNotifier>,
    body: web::Json<RClaimCreate>,
) -> ApiResult<entity::claim::Model> {
    if body.applicant.trim().is_empty() {
        return Err(AppError::Validation("applicant is required".into()));
    }

    let claim = db.create_claim(body.into_inner()).await?;
    log::info!("claim #{} filed against item {}", claim.id, claim.item_id);

    // published after commit so subscribers never see an id that a
    // cursor read could miss
    notifier.publish(claim.clone());

    Ok(ApiResponse::Created(claim))
}
