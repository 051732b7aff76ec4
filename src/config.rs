use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `TRANSLATOR_OPENROUTER__API_KEY`.
pub const ENV_PREFIX: &str = "TRANSLATOR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub openrouter: OpenRouterConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
    #[serde(default)]
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound on handling one inbound request. Zero disables it.
    #[serde(default, deserialize_with = "duration::deserialize")]
    pub request_timeout: Duration,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Remote chat-completion endpoint settings.
///
/// `timeout`, `max_retries` and `retry_delay` are accepted so existing config
/// files keep loading, but the translator makes exactly one call with the
/// transport's default timeout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRouterConfig {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub model: String,
    #[serde(default, deserialize_with = "duration::deserialize")]
    pub timeout: Duration,
    #[serde(default)]
    pub max_retries: u32,
    #[serde(default, deserialize_with = "duration::deserialize")]
    pub retry_delay: Duration,
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

/// Translation tuning knobs. Declared for config compatibility only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationConfig {
    #[serde(default)]
    pub max_text_length: usize,
    #[serde(default)]
    pub default_temperature: f64,
    #[serde(default)]
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: Duration::ZERO,
        }
    }
}

impl Config {
    /// Load configuration from a YAML or JSON file, expanding `${VAR}`
    /// placeholders and layering `TRANSLATOR_*` environment overrides on top.
    pub fn load(path: &str) -> Result<Self> {
        Self::load_with_env_prefix(path, ENV_PREFIX)
    }

    fn load_with_env_prefix(path: &str, env_prefix: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("Configuration file not found: {}", path);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path))?;
        let content = expand_env_vars(&content)?;

        let path_lower = path.to_lowercase();
        let format = if path_lower.ends_with(".json") {
            ::config::FileFormat::Json
        } else {
            ::config::FileFormat::Yaml
        };

        let settings = ::config::Config::builder()
            .add_source(::config::File::from_str(&content, format))
            .add_source(
                ::config::Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to parse configuration file: {}", path))?;

        let config: Config = settings
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path))?;
        Ok(config)
    }

    /// Configured language codes, in configured order.
    pub fn language_codes(&self) -> Vec<String> {
        self.languages.iter().map(|l| l.code.clone()).collect()
    }
}

/// Replace `${VAR_NAME}` with the variable's value. Unset variables are left as-is.
fn expand_env_vars(content: &str) -> Result<Cow<'_, str>> {
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    Ok(pattern.replace_all(content, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    }))
}

/// Durations given either as whole seconds (`30`) or Go-style strings
/// (`30s`, `1m30s`, `500ms`).
mod duration {
    use std::time::Duration;

    use serde::{de, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Seconds(u64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Seconds(secs) => Ok(Duration::from_secs(secs)),
            Raw::Text(text) => parse(&text).map_err(de::Error::custom),
        }
    }

    pub fn parse(text: &str) -> Result<Duration, String> {
        let text = text.trim();
        if let Ok(secs) = text.parse::<u64>() {
            return Ok(Duration::from_secs(secs));
        }
        if text.is_empty() {
            return Err("empty duration".to_string());
        }

        let mut total = Duration::ZERO;
        let mut rest = text;
        while !rest.is_empty() {
            let number_len = rest
                .find(|c: char| !(c.is_ascii_digit() || c == '.'))
                .ok_or_else(|| format!("missing unit in duration {:?}", text))?;
            let unit_len = rest[number_len..]
                .find(|c: char| c.is_ascii_digit() || c == '.')
                .unwrap_or(rest.len() - number_len);

            let value: f64 = rest[..number_len]
                .parse()
                .map_err(|_| format!("invalid duration {:?}", text))?;
            let unit_secs = match &rest[number_len..number_len + unit_len] {
                "ns" => 1e-9,
                "us" | "µs" => 1e-6,
                "ms" => 1e-3,
                "s" => 1.0,
                "m" => 60.0,
                "h" => 3600.0,
                unit => return Err(format!("unknown unit {:?} in duration {:?}", unit, text)),
            };

            total = Duration::try_from_secs_f64(value * unit_secs)
                .ok()
                .and_then(|part| total.checked_add(part))
                .ok_or_else(|| format!("duration out of range {:?}", text))?;
            rest = &rest[number_len + unit_len..];
        }
        Ok(total)
    }

}
