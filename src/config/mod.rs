//! Typed settings for the advertorial core.
//!
//! The core reads no environment variables and exposes no CLI; the hosting
//! application builds these structs from whatever layering it uses and hands
//! them in. Raw forms are serde-deserializable so a host can feed them from a
//! settings file; typed forms carry the parsed values.

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

const DEFAULT_MODEL_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL_NAME: &str = "gpt-4o-mini";
const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 120;
const DEFAULT_MODEL_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid setting `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl SettingsError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
            format: LogFormat::Compact,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

/// Connection settings for the completion model service.
///
/// The api key deliberately has no default: a blank key is a configuration
/// error the AI adapter reports before any network I/O.
#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    pub temperature: f32,
}

impl ModelSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_MODEL_BASE_URL.into(),
            model: DEFAULT_MODEL_NAME.into(),
            timeout: Duration::from_secs(DEFAULT_MODEL_TIMEOUT_SECS),
            temperature: DEFAULT_MODEL_TEMPERATURE,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLoggingSettings {
    pub level: Option<String>,
    pub json: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawModelSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
    pub temperature: Option<f32>,
}

pub fn build_logging_settings(raw: RawLoggingSettings) -> Result<LoggingSettings, SettingsError> {
    let level = match raw.level {
        Some(level) => LevelFilter::from_str(level.as_str())
            .map_err(|err| SettingsError::invalid("logging.level", format!("failed to parse: {err}")))?,
        None => LevelFilter::INFO,
    };

    let format = if raw.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

pub fn build_model_settings(raw: RawModelSettings) -> Result<ModelSettings, SettingsError> {
    if let Some(temperature) = raw.temperature
        && !(0.0..=2.0).contains(&temperature)
    {
        return Err(SettingsError::invalid(
            "model.temperature",
            format!("{temperature} is outside 0.0..=2.0"),
        ));
    }

    Ok(ModelSettings {
        api_key: raw.api_key.unwrap_or_default(),
        base_url: raw
            .base_url
            .unwrap_or_else(|| DEFAULT_MODEL_BASE_URL.into()),
        model: raw.model.unwrap_or_else(|| DEFAULT_MODEL_NAME.into()),
        timeout: Duration::from_secs(raw.timeout_secs.unwrap_or(DEFAULT_MODEL_TIMEOUT_SECS)),
        temperature: raw.temperature.unwrap_or(DEFAULT_MODEL_TEMPERATURE),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_defaults_to_compact_info() {
        let settings = build_logging_settings(RawLoggingSettings::default()).expect("settings");
        assert_eq!(settings.level, LevelFilter::INFO);
        assert!(matches!(settings.format, LogFormat::Compact));
    }

    #[test]
    fn logging_rejects_unknown_level() {
        let raw = RawLoggingSettings {
            level: Some("chatty".into()),
            json: None,
        };
        assert!(build_logging_settings(raw).is_err());
    }

    #[test]
    fn model_settings_fill_defaults() {
        let settings = build_model_settings(RawModelSettings::default()).expect("settings");
        assert!(settings.api_key.is_empty());
        assert_eq!(settings.base_url, DEFAULT_MODEL_BASE_URL);
        assert_eq!(settings.timeout, Duration::from_secs(120));
    }

    #[test]
    fn model_settings_reject_out_of_range_temperature() {
        let raw = RawModelSettings {
            temperature: Some(3.5),
            ..RawModelSettings::default()
        };
        assert!(build_model_settings(raw).is_err());
    }
}
