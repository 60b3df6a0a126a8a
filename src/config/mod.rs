use std::time::Duration;

use crate::errors::{DigestError, DigestResult};

pub const DEFAULT_SUMMARIZER_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 465;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct Config {
    pub news_api_key: Option<String>,
    pub huggingface_api_key: Option<String>,
    pub summarizer_url: String,
    pub mail: MailSettings,
    pub http_timeout: Duration,
}

/// SMTP settings. Credentials stay optional here so that commands which never
/// deliver (preview, sources) work without them.
#[derive(Debug, Clone)]
pub struct MailSettings {
    pub origin_email: Option<String>,
    pub password: Option<String>,
    pub smtp_host: String,
    pub smtp_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            news_api_key: None,
            huggingface_api_key: None,
            summarizer_url: DEFAULT_SUMMARIZER_URL.to_string(),
            mail: MailSettings {
                origin_email: None,
                password: None,
                smtp_host: DEFAULT_SMTP_HOST.to_string(),
                smtp_port: DEFAULT_SMTP_PORT,
            },
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> DigestResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> DigestResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let smtp_port = match non_empty("SMTP_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                DigestError::Config(format!("SMTP_PORT must be a port number, got {:?}", raw))
            })?,
            None => DEFAULT_SMTP_PORT,
        };

        let timeout_secs = match non_empty("DIGEST_HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(DigestError::Config(format!(
                        "DIGEST_HTTP_TIMEOUT_SECS must be a positive integer, got {:?}",
                        raw
                    )))
                }
            },
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            news_api_key: non_empty("NEWS_API_KEY"),
            huggingface_api_key: non_empty("HUGGINGFACE_API_KEY"),
            summarizer_url: non_empty("HUGGINGFACE_MODEL_URL")
                .unwrap_or_else(|| DEFAULT_SUMMARIZER_URL.to_string()),
            mail: MailSettings {
                origin_email: non_empty("ORIGIN_EMAIL"),
                password: non_empty("EMAIL_PASSWORD"),
                smtp_host: non_empty("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                smtp_port,
            },
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
