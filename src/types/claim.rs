use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RClaimCreate {
    pub item_id: Uuid,
    pub applicant: String,
    pub applied_on: NaiveDate,
    pub remarks: Option<String>,
}

/// `signature` is a `data:image/...;base64,` URL captured from the
/// signing pad at handover.
#[derive(Serialize, Deserialize, Debug)]
pub struct RClaimComplete {
    pub id: i64,
    pub signature: String,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ClaimListQuery {
    pub item_id: Option<Uuid>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CursorQuery {
    pub after: Option<i64>,
}
