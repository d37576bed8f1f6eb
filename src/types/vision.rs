use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct RAnalyzeImage {
    pub image_url: String,
}

/// The four fields staff would otherwise type by hand. Absent labels come
/// back as empty strings so the form can prefill whatever was extracted.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct VisionFields {
    pub name: String,
    pub brand: String,
    pub color: String,
    pub feature: String,
}
