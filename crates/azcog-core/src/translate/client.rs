//! Translator v3 client.

use serde::Serialize;
use serde_json::Value;

use crate::credentials::TranslatorCredentials;
use crate::http::{HttpClient, HttpError, Request};
use crate::vision::SUBSCRIPTION_KEY_HEADER;

pub const REGION_HEADER: &str = "Ocp-Apim-Subscription-Region";
pub const TRACE_ID_HEADER: &str = "X-ClientTraceId";
pub const API_VERSION: &str = "3.0";

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Translates texts, returning the service's JSON response as-is.
pub trait TextTranslator {
    fn translate(&self, texts: &[&str], from: &str, to: &[&str]) -> Result<Value, TranslateError>;
}

#[derive(Serialize)]
struct TextItem<'a> {
    text: &'a str,
}

pub struct TranslatorClient {
    creds: TranslatorCredentials,
    http: HttpClient,
}

impl TranslatorClient {
    pub fn new(creds: TranslatorCredentials, http: HttpClient) -> Self {
        Self { creds, http }
    }

    fn translate_url(&self, from: &str, to: &[&str]) -> Result<String, url::ParseError> {
        let mut params: Vec<(&str, &str)> = vec![("api-version", API_VERSION), ("from", from)];
        params.extend(to.iter().map(|t| ("to", *t)));
        let url = url::Url::parse_with_params(&format!("{}/translate", self.creds.endpoint), &params)?;
        Ok(url.into())
    }
}

impl TextTranslator for TranslatorClient {
    fn translate(&self, texts: &[&str], from: &str, to: &[&str]) -> Result<Value, TranslateError> {
        let body: Vec<TextItem<'_>> = texts.iter().map(|t| TextItem { text: t }).collect();
        let trace_id = uuid::Uuid::new_v4().to_string();
        let req = Request::post(self.translate_url(from, to)?)
            .header(SUBSCRIPTION_KEY_HEADER, self.creds.key.as_str())
            .header(REGION_HEADER, self.creds.region.as_str())
            .header(TRACE_ID_HEADER, trace_id.as_str())
            .json(&body)?;
        tracing::debug!(trace_id = %trace_id, from, targets = to.len(), "translate request");
        let resp = self.http.send(&req)?.error_for_status()?;
        Ok(resp.json()?)
    }
}

/// `response[0].translations[0].text`, if the response has that shape.
pub fn first_translation(response: &Value) -> Option<String> {
    response
        .get(0)?
        .get("translations")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(str::to_string)
}

/// Pretty JSON with sorted keys and four-space indentation.
pub fn to_pretty_json(value: &Value) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
