//! Computer Vision `analyze` client.

use serde::Deserialize;

use super::model::AnalysisResult;
use crate::credentials::EndpointKey;
use crate::http::{HttpClient, HttpError, Request};

pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Features requested for every image.
pub const VISUAL_FEATURES: [&str; 8] = [
    "Categories",
    "Tags",
    "Description",
    "Faces",
    "Objects",
    "Color",
    "Brands",
    "Adult",
];

#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    /// The service rejected the image (bad format, too large, …).
    #[error("{code}: {message}")]
    Service {
        status: u32,
        code: String,
        message: String,
    },
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Anything that can turn image bytes into an [`AnalysisResult`].
pub trait ImageAnalyzer {
    fn analyze(&self, image: &[u8]) -> Result<AnalysisResult, VisionError>;
}

pub struct VisionClient {
    creds: EndpointKey,
    http: HttpClient,
}

impl VisionClient {
    pub fn new(creds: EndpointKey, http: HttpClient) -> Self {
        Self { creds, http }
    }

    fn analyze_url(&self) -> Result<String, url::ParseError> {
        let base = format!("{}/vision/v3.2/analyze", self.creds.endpoint);
        let url = url::Url::parse_with_params(&base, &[("visualFeatures", VISUAL_FEATURES.join(","))])?;
        Ok(url.into())
    }
}

impl ImageAnalyzer for VisionClient {
    fn analyze(&self, image: &[u8]) -> Result<AnalysisResult, VisionError> {
        let req = Request::post(self.analyze_url()?)
            .header(SUBSCRIPTION_KEY_HEADER, self.creds.key.as_str())
            .header("Content-Type", "application/octet-stream")
            .body(image.to_vec());
        let resp = self.http.send(&req)?;
        if !resp.is_success() {
            return Err(service_error(resp.status, &resp.body));
        }
        Ok(resp.json()?)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
    code: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Builds a [`VisionError::Service`] from an error response body.
///
/// Accepts both `{"error": {"code", "message"}}` and the flat `{"code", "message"}`
/// shape; anything else keeps the raw body as the message.
fn service_error(status: u32, body: &[u8]) -> VisionError {
    let parsed: Option<(Option<String>, Option<String>)> =
        serde_json::from_slice::<ErrorEnvelope>(body)
            .ok()
            .map(|env| match env.error {
                Some(inner) => (inner.code, inner.message),
                None => (env.code, env.message),
            });

    let (code, message) = parsed.unwrap_or((None, None));
    VisionError::Service {
        status,
        code: code.unwrap_or_else(|| format!("HTTP{status}")),
        message: message.unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string()),
    }
}
