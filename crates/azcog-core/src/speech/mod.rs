//! WAV transcription via the Azure Speech short-audio REST endpoint.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SpeechLanguage;
use crate::credentials::SpeechCredentials;
use crate::http::{HttpClient, HttpError, Request};
use crate::vision::SUBSCRIPTION_KEY_HEADER;

pub const NO_MATCH_TEXT: &str = "[No speech could be recognized]";
pub const FAILED_TEXT: &str = "[Speech recognition failed]";

const WAV_CONTENT_TYPE: &str = "audio/wav; codecs=audio/pcm; samplerate=16000";
const RECOGNITION_PATH: &str = "/speech/recognition/conversation/cognitiveservices/v1";

/// Outcome of recognizing one file in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recognition {
    Recognized(String),
    NoMatch,
    Failed(String),
}

impl Recognition {
    /// Text written to the transcription file.
    pub fn file_text(&self) -> &str {
        match self {
            Recognition::Recognized(text) => text,
            Recognition::NoMatch => NO_MATCH_TEXT,
            Recognition::Failed(_) => FAILED_TEXT,
        }
    }
}

pub trait SpeechRecognizer {
    fn recognize(&self, wav: &[u8], language: &str) -> Result<Recognition, HttpError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SimpleResult {
    recognition_status: String,
    #[serde(default)]
    display_text: Option<String>,
}

fn recognition_from(result: SimpleResult) -> Recognition {
    match result.recognition_status.as_str() {
        "Success" => match result.display_text {
            Some(text) if !text.trim().is_empty() => Recognition::Recognized(text),
            _ => Recognition::NoMatch,
        },
        "NoMatch" | "InitialSilenceTimeout" => Recognition::NoMatch,
        other => Recognition::Failed(other.to_string()),
    }
}

pub struct SpeechClient {
    key: String,
    base_url: String,
    http: HttpClient,
}

impl SpeechClient {
    /// `endpoint` overrides `https://{region}.stt.speech.microsoft.com`.
    pub fn new(creds: SpeechCredentials, endpoint: Option<&str>, http: HttpClient) -> Self {
        let base_url = match endpoint {
            Some(e) => e.trim_end_matches('/').to_string(),
            None => format!("https://{}.stt.speech.microsoft.com", creds.region),
        };
        Self {
            key: creds.key,
            base_url,
            http,
        }
    }

    fn recognition_url(&self, language: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("language", language)
            .append_pair("format", "simple")
            .finish();
        format!("{}{}?{}", self.base_url, RECOGNITION_PATH, query)
    }
}

impl SpeechRecognizer for SpeechClient {
    fn recognize(&self, wav: &[u8], language: &str) -> Result<Recognition, HttpError> {
        let req = Request::post(self.recognition_url(language))
            .header(SUBSCRIPTION_KEY_HEADER, self.key.as_str())
            .header("Content-Type", WAV_CONTENT_TYPE)
            .header("Accept", "application/json")
            .body(wav.to_vec());
        let resp = self.http.send(&req)?;
        if !resp.is_success() {
            return Ok(Recognition::Failed(format!("HTTP {}", resp.status)));
        }
        Ok(recognition_from(resp.json()?))
    }
}

/// `meeting.wav` + `english` → `meeting.english.txt`.
pub fn transcription_file_name(wav_name: &str, language_name: &str) -> String {
    let stem = match wav_name.len().checked_sub(4) {
        Some(idx) if wav_name.is_char_boundary(idx) && wav_name[idx..].eq_ignore_ascii_case(".wav") => {
            &wav_name[..idx]
        }
        _ => wav_name,
    };
    format!("{stem}.{language_name}.txt")
}

#[derive(Debug, Default)]
pub struct SpeechRun {
    /// `(output path, outcome)` per file and language.
    pub outputs: Vec<(PathBuf, Recognition)>,
}

/// Transcribes every `.wav` in `audio_dir` once per language into `output_dir`.
///
/// Recognition failures are written as placeholder text; only file I/O errors abort.
pub fn run_folder(
    recognizer: &dyn SpeechRecognizer,
    audio_dir: &Path,
    output_dir: &Path,
    languages: &[SpeechLanguage],
    echo: &mut dyn FnMut(&str),
) -> Result<SpeechRun> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;

    let mut run = SpeechRun::default();
    for path in list_wavs(audio_dir)? {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        echo(&format!("Processing {name}"));
        let wav = fs::read(&path).with_context(|| format!("read {}", path.display()))?;

        for lang in languages {
            echo(&format!("Transcribing to {}...", lang.name));
            let outcome = recognizer.recognize(&wav, &lang.code).unwrap_or_else(|e| {
                tracing::warn!(file = %name, language = %lang.code, "recognition request failed: {}", e);
                Recognition::Failed(e.to_string())
            });

            let out_path = output_dir.join(transcription_file_name(&name, &lang.name));
            fs::write(&out_path, outcome.file_text())
                .with_context(|| format!("write {}", out_path.display()))?;

            match &outcome {
                Recognition::Recognized(_) => echo(&format!("Saved: {}", out_path.display())),
                Recognition::NoMatch => echo(&format!("No match for {}: {}", lang.name, name)),
                Recognition::Failed(reason) => {
                    echo(&format!("Failed for {}: {} ({})", lang.name, name, reason))
                }
            }
            run.outputs.push((out_path, outcome));
        }
    }
    Ok(run)
}

fn list_wavs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let path = entry?.path();
        let is_wav = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("wav"));
        if path.is_file() && is_wav {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedRecognizer;

    impl SpeechRecognizer for ScriptedRecognizer {
        fn recognize(&self, wav: &[u8], language: &str) -> Result<Recognition, HttpError> {
            match (wav, language) {
                (b"silence", _) => Ok(Recognition::NoMatch),
                (_, "pt-BR") => Err(HttpError::Status {
                    status: 503,
                    body: "busy".to_string(),
                }),
                _ => Ok(Recognition::Recognized("Hello there.".to_string())),
            }
        }
    }

    fn langs() -> Vec<SpeechLanguage> {
        vec![
            SpeechLanguage {
                code: "en-US".to_string(),
                name: "english".to_string(),
            },
            SpeechLanguage {
                code: "pt-BR".to_string(),
                name: "portuguese".to_string(),
            },
        ]
    }

    #[test]
    fn file_names() {
        assert_eq!(transcription_file_name("a.wav", "english"), "a.english.txt");
        assert_eq!(transcription_file_name("B.WAV", "portuguese"), "B.portuguese.txt");
        assert_eq!(transcription_file_name("wav", "english"), "wav.english.txt");
    }

    #[test]
    fn simple_result_mapping() {
        let ok: SimpleResult =
            serde_json::from_str(r#"{"RecognitionStatus":"Success","DisplayText":"Hi.","Offset":0,"Duration":100}"#)
                .unwrap();
        assert_eq!(recognition_from(ok), Recognition::Recognized("Hi.".to_string()));

        let silent: SimpleResult =
            serde_json::from_str(r#"{"RecognitionStatus":"InitialSilenceTimeout"}"#).unwrap();
        assert_eq!(recognition_from(silent), Recognition::NoMatch);

        let err: SimpleResult = serde_json::from_str(r#"{"RecognitionStatus":"Error"}"#).unwrap();
        assert_eq!(recognition_from(err), Recognition::Failed("Error".to_string()));
    }

    #[test]
    fn runs_folder_per_language() {
        let audio = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(audio.path().join("talk.wav"), b"speech").unwrap();
        fs::write(audio.path().join("quiet.WAV"), b"silence").unwrap();
        fs::write(audio.path().join("notes.mp3"), b"speech").unwrap();

        let mut lines = Vec::new();
        let run = run_folder(
            &ScriptedRecognizer,
            audio.path(),
            out.path(),
            &langs(),
            &mut |l: &str| lines.push(l.to_string()),
        )
        .unwrap();
        assert_eq!(run.outputs.len(), 4);

        let read = |n: &str| fs::read_to_string(out.path().join(n)).unwrap();
        assert_eq!(read("talk.english.txt"), "Hello there.");
        assert_eq!(read("talk.portuguese.txt"), FAILED_TEXT);
        assert_eq!(read("quiet.english.txt"), NO_MATCH_TEXT);
        assert!(!out.path().join("notes.english.txt").exists());
        assert!(lines.iter().any(|l| l == "No match for english: quiet.WAV"));
    }

    #[test]
    fn regional_base_url() {
        let creds = SpeechCredentials {
            key: "k".to_string(),
            region: "eastus".to_string(),
        };
        let client = SpeechClient::new(creds, None, HttpClient::default());
        assert_eq!(client.base_url, "https://eastus.stt.speech.microsoft.com");
    }

    #[test]
    fn language_is_query_encoded() {
        let creds = SpeechCredentials {
            key: "k".to_string(),
            region: "eastus".to_string(),
        };
        let client = SpeechClient::new(creds, Some("http://localhost:9/"), HttpClient::default());
        assert_eq!(
            client.recognition_url("en-US"),
            "http://localhost:9/speech/recognition/conversation/cognitiveservices/v1?language=en-US&format=simple"
        );
        assert!(client
            .recognition_url("x&format=detailed")
            .ends_with("?language=x%26format%3Ddetailed&format=simple"));
    }
}
