use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// HTTP timeouts applied to every service call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 60,
        }
    }
}

/// Image analysis and renaming.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    /// Input folder; `analysis/` and `analysis/updated_images/` are created inside it.
    pub images_dir: PathBuf,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("data/images"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("data/comments/input"),
            output_dir: PathBuf::from("data/comments/output"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    pub from: String,
    pub to: Vec<String>,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            from: "en".to_string(),
            to: vec!["fr".to_string(), "zu".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateCsvConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Column holding the source text.
    pub source_column: String,
    /// Column appended with the translations.
    pub target_column: String,
    pub from: String,
    pub to: String,
    /// Pause between rows to stay under the service's rate limit.
    pub delay_ms: u64,
}

impl Default for TranslateCsvConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data/interesting_text.csv"),
            output: PathBuf::from("data/translated_to_portuguese_br.csv"),
            source_column: "text".to_string(),
            target_column: "Portuguese_BR".to_string(),
            from: "en".to_string(),
            to: "pt-BR".to_string(),
            delay_ms: 100,
        }
    }
}

/// A recognition language and the name used in output filenames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechLanguage {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub audio_dir: PathBuf,
    pub output_dir: PathBuf,
    pub languages: Vec<SpeechLanguage>,
    /// Overrides the regional recognition endpoint (scheme + host).
    pub endpoint: Option<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            audio_dir: PathBuf::from("audio"),
            output_dir: PathBuf::from("transcriptions"),
            languages: vec![
                SpeechLanguage {
                    code: "en-US".to_string(),
                    name: "english".to_string(),
                },
                SpeechLanguage {
                    code: "pt-BR".to_string(),
                    name: "portuguese".to_string(),
                },
            ],
            endpoint: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub base_url: String,
    pub user_id: String,
    /// Seconds to wait for the bot before reading replies.
    pub reply_wait_secs: f64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            base_url: "https://directline.botframework.com/v3/directline".to_string(),
            user_id: "user1".to_string(),
            reply_wait_secs: 2.0,
        }
    }
}

/// Upper bound for [`BotConfig::reply_wait`].
pub const MAX_REPLY_WAIT_SECS: f64 = 300.0;

impl BotConfig {
    /// `reply_wait_secs` as a duration, clamped to `0..=MAX_REPLY_WAIT_SECS`.
    /// Negative and NaN become zero; `inf` becomes the maximum.
    pub fn reply_wait(&self) -> Duration {
        let secs = self.reply_wait_secs.max(0.0).min(MAX_REPLY_WAIT_SECS);
        if secs != self.reply_wait_secs {
            tracing::warn!(
                configured = self.reply_wait_secs,
                used = secs,
                "bot.reply_wait_secs out of range, clamped"
            );
        }
        Duration::from_secs_f64(secs)
    }
}

/// Top-level config (`~/.config/azcog/config.toml`). Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AzcogConfig {
    pub http: HttpConfig,
    pub vision: VisionConfig,
    pub sentiment: SentimentConfig,
    pub translate: TranslateConfig,
    pub translate_csv: TranslateCsvConfig,
    pub speech: SpeechConfig,
    pub bot: BotConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("azcog")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AzcogConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AzcogConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<AzcogConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: AzcogConfig = toml::from_str(&data)?;
    Ok(cfg)
}
