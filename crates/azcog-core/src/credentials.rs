//! Service credentials from the environment.
//!
//! A `.env` file in the working directory is loaded first (see
//! [`load_dotenv`]); variables already set in the process win.

use std::env;

pub const DEFAULT_TRANSLATOR_REGION: &str = "australiaeast";

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("missing environment variable {0} (set it in the environment or .env)")]
    Missing(&'static str),
}

/// Loads `.env` if present. Missing file is not an error.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("ignoring unreadable .env: {}", e),
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, CredentialError> {
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(CredentialError::Missing(name))
}

fn optional(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn process_env(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// Subscription key plus resource endpoint (Computer Vision, Text Analytics).
#[derive(Debug, Clone)]
pub struct EndpointKey {
    pub key: String,
    /// Endpoint without a trailing slash.
    pub endpoint: String,
}

impl EndpointKey {
    fn from_lookup(
        lookup: &impl Fn(&str) -> Option<String>,
        key_var: &'static str,
        endpoint_var: &'static str,
    ) -> Result<Self, CredentialError> {
        Ok(Self {
            key: required(lookup, key_var)?,
            endpoint: required(lookup, endpoint_var)?
                .trim_end_matches('/')
                .to_string(),
        })
    }

    pub fn vision_from_env() -> Result<Self, CredentialError> {
        Self::vision_from_lookup(&process_env)
    }

    pub fn vision_from_lookup(
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<Self, CredentialError> {
        Self::from_lookup(
            lookup,
            "AZURE_COMPUTERVISION_CSV_KEY",
            "AZURE_COMPUTERVISION_CSV_ENDPOINT",
        )
    }

    pub fn text_analytics_from_env() -> Result<Self, CredentialError> {
        Self::text_analytics_from_lookup(&process_env)
    }

    pub fn text_analytics_from_lookup(
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<Self, CredentialError> {
        Self::from_lookup(
            lookup,
            "AZURE_TEXTANALYTICS_KEY",
            "AZURE_TEXTANALYTICS_ENDPOINT",
        )
    }
}

/// Translator resource: key, endpoint and region.
#[derive(Debug, Clone)]
pub struct TranslatorCredentials {
    pub key: String,
    pub endpoint: String,
    pub region: String,
}

impl TranslatorCredentials {
    /// `AZURE_TRANSLATOR_*`; region defaults to [`DEFAULT_TRANSLATOR_REGION`].
    pub fn from_env() -> Result<Self, CredentialError> {
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, CredentialError> {
        let base =
            EndpointKey::from_lookup(lookup, "AZURE_TRANSLATOR_KEY", "AZURE_TRANSLATOR_ENDPOINT")?;
        Ok(Self {
            key: base.key,
            endpoint: base.endpoint,
            region: optional(lookup, "AZURE_TRANSLATOR_LOCATION")
                .unwrap_or_else(|| DEFAULT_TRANSLATOR_REGION.to_string()),
        })
    }

    /// `AZURE_TRANSLATOR_CSV_*` for the batch job; region is required.
    pub fn csv_from_env() -> Result<Self, CredentialError> {
        Self::csv_from_lookup(&process_env)
    }

    pub fn csv_from_lookup(
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<Self, CredentialError> {
        let base = EndpointKey::from_lookup(
            lookup,
            "AZURE_TRANSLATOR_CSV_KEY",
            "AZURE_TRANSLATOR_CSV_ENDPOINT",
        )?;
        Ok(Self {
            key: base.key,
            endpoint: base.endpoint,
            region: required(lookup, "AZURE_TRANSLATOR_CSV_REGION")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SpeechCredentials {
    pub key: String,
    pub region: String,
}

impl SpeechCredentials {
    pub fn from_env() -> Result<Self, CredentialError> {
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, CredentialError> {
        Ok(Self {
            key: required(lookup, "AZURE_SPEECH_KEY")?,
            region: required(lookup, "AZURE_SPEECH_REGION")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DirectLineSecret(pub String);

impl DirectLineSecret {
    pub fn from_env() -> Result<Self, CredentialError> {
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, CredentialError> {
        required(lookup, "DIRECT_LINE_SECRET").map(Self)
    }
}
