use actix_web::get;

use crate::types::auth::SessionRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;
use crate::utils::webutils::CurrentUser;

#[get("/session")]
async fn session(current: CurrentUser) -> ApiResult<SessionRes> {
    Ok(ApiResponse::Ok(SessionRes {
        user: UserRes::from(current.user),
    }))
}
