//! Azure Computer Vision: image analysis, reporting, and renamed copies.

mod client;
mod model;
pub mod pipeline;
mod report;

pub use client::{ImageAnalyzer, VisionClient, VisionError, SUBSCRIPTION_KEY_HEADER, VISUAL_FEATURES};
pub use model::{
    AdultInfo, AnalysisResult, BoundingRect, Brand, Caption, Category, ColorInfo, Description,
    DetectedObject, Face, FaceRect, Tag,
};
pub use pipeline::{run_folder, VisionRun};
pub use report::report_lines;
