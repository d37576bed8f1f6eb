use actix_web::{post, web};

use crate::config::config;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::vision::{RAnalyzeImage, VisionFields};
use crate::utils::vision::{analyze_image, fetch_image};
use crate::utils::webutils::CurrentUser;

/// Photo prefill: pull the image, run it through the vision provider,
/// hand back the four form fields. Oversized images are rejected before
/// any AI call; either timeout surfaces as 504.
#[post("/image")]
async fn image(_user: CurrentUser, body: web::Json<RAnalyzeImage>) -> ApiResult<VisionFields> {
    let url = body.image_url.trim();
    if url.is_empty() {
        return Err(AppError::BadRequest("image_url is required".into()));
    }

    let vision = &config().vision;
    let image = fetch_image(vision, url).await?;
    let fields = analyze_image(vision, &image).await?;

    Ok(ApiResponse::Ok(fields))
}
