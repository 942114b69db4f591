//! # Configuration
//!
//! Builds the application's configuration once at start-up.
//! Non-secret settings come from an optional `data/config.yaml`; credentials and the
//! channel list come from the environment (`BOT_OAUTH`, `BOT_NICK`, `CHANNELS`).

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;

pub const ENV_TOKEN: &str = "BOT_OAUTH";
pub const ENV_NICK: &str = "BOT_NICK";
pub const ENV_CHANNELS: &str = "CHANNELS";
pub const ENV_HTTP_BIND: &str = "HTTP_BIND";
pub const ENV_STEAKS_FILE: &str = "CUSTOM_STEAKS_FILE";

/// Main application configuration structure.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub twitch: TwitchConfig,
    #[serde(default)]
    pub commands: CommandsConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Credentials and channels for the chat connection.
/// Always filled from the environment; the YAML file never carries the token.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TwitchConfig {
    #[serde(skip)]
    pub token: String,
    #[serde(skip)]
    pub nick: String,
    #[serde(skip)]
    pub channels: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CommandsConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    #[serde(default = "default_steaks_file")]
    pub custom_steaks_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            custom_steaks_file: default_steaks_file(),
        }
    }
}

/// Liveness endpoint settings.
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
        }
    }
}

fn default_prefix() -> String {
    "!".to_string()
}
fn default_steaks_file() -> String {
    "custom_steaks.txt".to_string()
}
fn default_bind() -> String {
    "0.0.0.0:10000".to_string()
}
fn default_log_dir() -> String {
    "data".to_string()
}
fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Reads the YAML file at `path` if it exists, then applies the process environment.
    pub fn load(path: &Path) -> Result<Self> {
        let base = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Self::from_yaml(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            Self::default()
        };
        base.with_env(|key| std::env::var(key).ok())
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Fills credentials and overrides from an environment lookup.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(ENV_TOKEN).unwrap_or_default();
        let token = token.trim();
        let token = token.strip_prefix("oauth:").unwrap_or(token);
        if token.is_empty() {
            bail!("{ENV_TOKEN} is not set");
        }

        let nick = lookup(ENV_NICK).unwrap_or_default().trim().to_lowercase();
        if nick.is_empty() {
            bail!("{ENV_NICK} is not set");
        }

        let channels = parse_channels(&lookup(ENV_CHANNELS).unwrap_or_default());
        if channels.is_empty() {
            bail!("{ENV_CHANNELS} must list at least one channel");
        }

        self.twitch = TwitchConfig {
            token: token.to_string(),
            nick,
            channels,
        };

        if let Some(bind) = lookup(ENV_HTTP_BIND).filter(|v| !v.trim().is_empty()) {
            self.http.bind = bind.trim().to_string();
        }
        if let Some(file) = lookup(ENV_STEAKS_FILE).filter(|v| !v.trim().is_empty()) {
            self.storage.custom_steaks_file = file.trim().to_string();
        }

        Ok(self)
    }
}

/// Splits a comma separated channel list. Twitch logins are lowercase.
pub fn parse_channels(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|c| c.trim().trim_start_matches('#').to_lowercase())
        .filter(|c| !c.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_env_fills_twitch_section() {
        let config = AppConfig::default()
            .with_env(env(&[
                (ENV_TOKEN, "oauth:abc123"),
                (ENV_NICK, "SteakBot"),
                (ENV_CHANNELS, " alice, #Bob ,,"),
            ]))
            .unwrap();

        assert_eq!(config.twitch.token, "abc123");
        assert_eq!(config.twitch.nick, "steakbot");
        assert_eq!(config.twitch.channels, vec!["alice", "bob"]);
        assert_eq!(config.http.bind, "0.0.0.0:10000");
        assert_eq!(config.storage.custom_steaks_file, "custom_steaks.txt");
        assert_eq!(config.commands.prefix, "!");
    }

    #[test]
    fn test_missing_values_are_errors() {
        let err = AppConfig::default()
            .with_env(env(&[(ENV_NICK, "bot"), (ENV_CHANNELS, "alice")]))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_TOKEN));

        let err = AppConfig::default()
            .with_env(env(&[(ENV_TOKEN, "t"), (ENV_NICK, "bot"), (ENV_CHANNELS, " , ")]))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_CHANNELS));
    }

    #[test]
    fn test_env_overrides_yaml() {
        let yaml = "commands:\n  prefix: \"?\"\nhttp:\n  bind: 127.0.0.1:8080\n  enabled: false\n";
        let config = AppConfig::from_yaml(yaml)
            .unwrap()
            .with_env(env(&[
                (ENV_TOKEN, "t"),
                (ENV_NICK, "bot"),
                (ENV_CHANNELS, "alice"),
                (ENV_STEAKS_FILE, "/tmp/steaks.txt"),
            ]))
            .unwrap();

        assert_eq!(config.commands.prefix, "?");
        assert_eq!(config.http.bind, "127.0.0.1:8080");
        assert!(!config.http.enabled);
        assert_eq!(config.storage.custom_steaks_file, "/tmp/steaks.txt");
        assert_eq!(config.logging.dir, "data");
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = AppConfig::from_yaml("\n").unwrap();
        assert!(config.http.enabled);
        assert_eq!(config.commands.prefix, "!");
    }
}
