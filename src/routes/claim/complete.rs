use actix_web::{post, web};
use std::sync::Arc;

use crate::config::config;
use crate::db::postgres_service::PostgresService;
use crate::types::claim::RClaimComplete;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::storage::{decode_data_url, put_object};
use crate::utils::token;
use crate::utils::webutils::CurrentUser;

/// Return handover: store the signature, stamp it on the item, mark the
/// claim completed. Repeating the call for a completed claim returns the
/// same state without touching storage again.
#[post("/complete")]
async fn complete(
    _user: CurrentUser,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RClaimComplete>,
) -> ApiResult<entity::claim::Model> {
    let current = db.get_claim_by_id(body.id).await?;
    if current.completed {
        return Ok(ApiResponse::Ok(current));
    }

    let (mime, bytes) = decode_data_url(&body.signature)
        .ok_or_else(|| AppError::BadRequest("signature must be a base64 data URL".into()))?;

    let ext = mime.strip_prefix("image/").unwrap_or("png");
    let key = format!("signatures/{}.{}", token::new_id(), ext);

    // No rollback past this point: a stored signature with a failed row
    // update surfaces as an error and leaves the object behind.
    let signature_ref = put_object(&config().storage, &key, &mime, bytes).await?;
    db.set_item_signature(&current.item_id, signature_ref).await?;
    let claim = db.complete_claim(current.id).await?;

    log::info!("claim #{} completed, item {} returned", claim.id, claim.item_id);

    Ok(ApiResponse::Ok(claim))
}
