//! Blocking HTTP requests over libcurl.
//!
//! Every service client goes through [`HttpClient::send`]: one Easy handle
//! per request, body collected in memory, status checked by the caller.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::str;
use std::time::Duration;

use crate::config::HttpConfig;

#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Curl(#[from] curl::Error),
    #[error("HTTP {status}: {body}")]
    Status { status: u32, body: String },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request to send. Headers are `(name, value)` pairs.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Serializes `value` as the body and sets `Content-Type: application/json`.
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, HttpError> {
        let body = serde_json::to_vec(value)?;
        Ok(self.header("Content-Type", "application/json").body(body))
    }
}

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u32,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Turns a non-2xx response into [`HttpError::Status`].
    pub fn error_for_status(self) -> Result<Self, HttpError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(HttpError::Status {
                status: self.status,
                body: self.text(),
            })
        }
    }
}

/// Timeouts shared by all requests from one command.
#[derive(Debug, Clone, Copy)]
pub struct HttpClient {
    connect_timeout: Duration,
    timeout: Duration,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::from_config(&HttpConfig::default())
    }
}

impl HttpClient {
    pub fn from_config(cfg: &HttpConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
        }
    }

    /// Performs the request on the current thread. Any status code is returned
    /// as a [`Response`]; only transport failures are errors.
    pub fn send(&self, req: &Request) -> Result<Response, HttpError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(&req.url)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        match req.method {
            Method::Get => easy.get(true)?,
            Method::Post => {
                easy.post(true)?;
                easy.post_fields_copy(req.body.as_deref().unwrap_or(&[]))?;
            }
        }

        let mut list = curl::easy::List::new();
        for (k, v) in &req.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        // Suppress `Expect: 100-continue` on uploads.
        list.append("Expect:")?;
        easy.http_headers(list)?;

        let mut body = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!(
            method = ?req.method,
            url = %redact_query(&req.url),
            status,
            bytes = body.len(),
            "http request done"
        );
        Ok(Response { status, body })
    }
}

/// URL without its query string, for logs.
fn redact_query(url: &str) -> &str {
    match url.split_once('?') {
        Some((base, _)) => base,
        None => url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        let ok = Response {
            status: 204,
            body: Vec::new(),
        };
        assert!(ok.is_success());
        let not_found = Response {
            status: 404,
            body: b"missing".to_vec(),
        };
        assert!(!not_found.is_success());
    }

    #[test]
    fn error_for_status_keeps_body() {
        let r = Response {
            status: 401,
            body: b"bad key".to_vec(),
        };
        match r.error_for_status() {
            Err(HttpError::Status { status, body }) => {
                assert_eq!(status, 401);
                assert_eq!(body, "bad key");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[test]
    fn json_request_sets_content_type() {
        let req = Request::post("http://localhost/x")
            .json(&serde_json::json!([{"text": "hi"}]))
            .unwrap();
        assert_eq!(
            req.headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
        assert_eq!(req.body.as_deref(), Some(&br#"[{"text":"hi"}]"#[..]));
    }

    #[test]
    fn redact_query_strips_params() {
        assert_eq!(redact_query("https://a/b?key=1"), "https://a/b");
        assert_eq!(redact_query("https://a/b"), "https://a/b");
    }
}
