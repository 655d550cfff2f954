//! Computer Vision v3.2 `analyze` response model.
//!
//! Every section is optional in the service response; absent lists
//! deserialize as empty.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One image's analysis result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub objects: Vec<DetectedObject>,
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Service-returned order.
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub description: Option<Description>,
    #[serde(default)]
    pub faces: Vec<Face>,
    #[serde(default)]
    pub color: Option<ColorInfo>,
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub adult: Option<AdultInfo>,
}

impl AnalysisResult {
    /// Captions from the description, or an empty slice.
    pub fn captions(&self) -> &[Caption] {
        self.description
            .as_ref()
            .map(|d| d.captions.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedObject {
    #[serde(rename = "object")]
    pub label: String,
    pub confidence: f64,
    #[serde(default)]
    pub rectangle: Option<BoundingRect>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub captions: Vec<Caption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    pub text: String,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Face {
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub face_rectangle: Option<FaceRect>,
}

/// Object/brand bounding box (`x`, `y`, `w`, `h`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingRect {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

impl fmt::Display for BoundingRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={}, y={}, w={}, h={}", self.x, self.y, self.w, self.h)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceRect {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

impl fmt::Display for FaceRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "left={}, top={}, width={}, height={}",
            self.left, self.top, self.width, self.height
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorInfo {
    #[serde(default)]
    pub dominant_colors: Vec<String>,
    #[serde(default)]
    pub accent_color: Option<String>,
    // v3.2 sends both spellings.
    #[serde(default, rename = "isBWImg")]
    pub is_bw_img: Option<bool>,
    #[serde(default, rename = "isBwImg")]
    pub is_bw_img_legacy: Option<bool>,
}

impl ColorInfo {
    pub fn is_black_and_white(&self) -> bool {
        self.is_bw_img.or(self.is_bw_img_legacy).unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub rectangle: Option<BoundingRect>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdultInfo {
    #[serde(default)]
    pub is_adult_content: bool,
    #[serde(default)]
    pub adult_score: f64,
    #[serde(default)]
    pub is_racy_content: bool,
    #[serde(default)]
    pub racy_score: f64,
}
