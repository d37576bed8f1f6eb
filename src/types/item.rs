use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct RItemCreate {
    pub name: String,
    pub brand: String,
    pub color: String,
    pub feature: String,
    pub place: String,
    pub category: String,
    pub image_ref: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RItemUpdate {
    pub id: Uuid,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub feature: Option<String>,
    pub place: Option<String>,
    pub category: Option<String>,
    pub image_ref: Option<String>,
}

/// `q` is a substring match over the descriptive columns; `from`/`to` are
/// inclusive registration dates in the configured local timezone.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ItemListQuery {
    pub q: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}
