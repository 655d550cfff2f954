//! Text Analytics v3.1 sentiment client (one document per call).

use serde::{Deserialize, Serialize};

use crate::credentials::EndpointKey;
use crate::http::{HttpClient, HttpError, Request};
use crate::vision::SUBSCRIPTION_KEY_HEADER;

const DOCUMENT_ID: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ConfidenceScores {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSentiment {
    /// `positive`, `neutral`, `negative` or `mixed`.
    pub sentiment: String,
    pub confidence_scores: ConfidenceScores,
}

/// Per-document result: the service can fail one document without failing the call.
#[derive(Debug, Clone, PartialEq)]
pub enum SentimentOutcome {
    Analyzed(DocumentSentiment),
    Failed { message: String },
}

pub trait SentimentAnalyzer {
    fn analyze(&self, text: &str) -> Result<SentimentOutcome, HttpError>;
}

#[derive(Serialize)]
struct RequestDocument<'a> {
    id: &'a str,
    language: &'a str,
    text: &'a str,
}

#[derive(Serialize)]
struct RequestBody<'a> {
    documents: Vec<RequestDocument<'a>>,
}

#[derive(Deserialize)]
struct ResponseDocument {
    id: String,
    #[serde(flatten)]
    sentiment: DocumentSentiment,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

#[derive(Deserialize)]
struct DocumentError {
    id: String,
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ResponseBody {
    #[serde(default)]
    documents: Vec<ResponseDocument>,
    #[serde(default)]
    errors: Vec<DocumentError>,
}

pub struct SentimentClient {
    creds: EndpointKey,
    http: HttpClient,
    language: String,
}

impl SentimentClient {
    pub fn new(creds: EndpointKey, http: HttpClient) -> Self {
        Self {
            creds,
            http,
            language: "en".to_string(),
        }
    }
}

impl SentimentAnalyzer for SentimentClient {
    fn analyze(&self, text: &str) -> Result<SentimentOutcome, HttpError> {
        let url = format!("{}/text/analytics/v3.1/sentiment", self.creds.endpoint);
        let body = RequestBody {
            documents: vec![RequestDocument {
                id: DOCUMENT_ID,
                language: &self.language,
                text,
            }],
        };
        let req = Request::post(url)
            .header(SUBSCRIPTION_KEY_HEADER, self.creds.key.as_str())
            .json(&body)?;
        let resp = self.http.send(&req)?.error_for_status()?;
        Ok(outcome_from(resp.json()?))
    }
}

fn outcome_from(body: ResponseBody) -> SentimentOutcome {
    if let Some(doc) = body.documents.into_iter().find(|d| d.id == DOCUMENT_ID) {
        return SentimentOutcome::Analyzed(doc.sentiment);
    }
    let message = body
        .errors
        .into_iter()
        .find(|e| e.id == DOCUMENT_ID)
        .map(|e| e.error.message)
        .unwrap_or_else(|| "no result returned for document".to_string());
    SentimentOutcome::Failed { message }
}
