//! Server configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONTACT_RATE_LIMIT: usize = 5;
pub const DEFAULT_CONTACT_RATE_WINDOW_SECS: u64 = 600;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("RESEND_API_KEY, CONTACT_FROM and CONTACT_TO must be set together (missing {missing})")]
    PartialMailer { missing: &'static str },
}

/// Outbound email settings for contact-form forwarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailerConfig {
    pub api_key: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLimits {
    pub max_requests: usize,
    pub window: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub assets_dir: PathBuf,
    pub mailer: Option<MailerConfig>,
    pub contact_limits: ContactLimits,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ASSETS_DIR`: default `<crate>/../assets`
    /// - `RESEND_API_KEY`, `CONTACT_FROM`, `CONTACT_TO`: all or none; when
    ///   absent, contact messages are only logged
    /// - `CONTACT_RATE_LIMIT`: default 5 messages per window per IP
    /// - `CONTACT_RATE_WINDOW_SECS`: default 600
    ///
    /// # Errors
    ///
    /// Returns an error for unparsable numbers or a partial mailer setup.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let assets_dir = lookup("ASSETS_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(default_assets_dir, PathBuf::from);
        let mailer = parse_mailer(lookup("RESEND_API_KEY"), lookup("CONTACT_FROM"), lookup("CONTACT_TO"))?;
        let contact_limits = ContactLimits {
            max_requests: parse_or("CONTACT_RATE_LIMIT", lookup("CONTACT_RATE_LIMIT"), DEFAULT_CONTACT_RATE_LIMIT)?,
            window: Duration::from_secs(parse_or(
                "CONTACT_RATE_WINDOW_SECS",
                lookup("CONTACT_RATE_WINDOW_SECS"),
                DEFAULT_CONTACT_RATE_WINDOW_SECS,
            )?),
        };

        Ok(Self { port, assets_dir, mailer, contact_limits })
    }

    /// Files the page links to that are absent from `assets_dir`.
    #[must_use]
    pub fn missing_assets(&self) -> Vec<PathBuf> {
        REQUIRED_ASSETS
            .iter()
            .map(|rel| self.assets_dir.join(rel))
            .filter(|path| !path.is_file())
            .collect()
    }
}

/// Linked from the CV download gate; every accepted lead fetches it.
const REQUIRED_ASSETS: &[&str] = &["cv/resume.pdf"];

fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../assets")
}

fn parse_or<T: std::str::FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: value.to_owned() }),
    }
}

fn parse_mailer(
    api_key: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> Result<Option<MailerConfig>, ConfigError> {
    let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
    match (present(api_key), present(from), present(to)) {
        (None, None, None) => Ok(None),
        (Some(api_key), Some(from), Some(to)) => Ok(Some(MailerConfig { api_key, from, to })),
        (None, _, _) => Err(ConfigError::PartialMailer { missing: "RESEND_API_KEY" }),
        (_, None, _) => Err(ConfigError::PartialMailer { missing: "CONTACT_FROM" }),
        (_, _, None) => Err(ConfigError::PartialMailer { missing: "CONTACT_TO" }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
