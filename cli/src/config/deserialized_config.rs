use anyhow::{anyhow, Context, Result};
use log::{debug, info, trace};
use serde::Deserialize;
use std::{env, fs, path::PathBuf};

use crate::config::DeserializedMessages;

/// Represents the user config file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct DeserializedConfig {
    /// Represents the tarot api base url.
    pub api_url: Option<String>,
    /// Represents the request timeout, in seconds. Defaults to 30.
    pub timeout_secs: Option<u64>,
    /// Overrides the message shown when no card was drawn.
    pub empty_message: Option<String>,
    /// Overrides the name shown for cards without name.
    pub unknown_card: Option<String>,
    /// Overrides the label of unnamed positions. `{n}` is replaced by
    /// the position number.
    pub position_label: Option<String>,
    /// Overrides the error messages.
    #[serde(default)]
    pub messages: DeserializedMessages,
}

impl DeserializedConfig {
    /// Tries to create a config from an optional path.
    ///
    /// An explicit path must exist. Without path, the default locations
    /// are searched and a missing file leads to the default config.
    pub fn from_opt_path(path: Option<&str>) -> Result<Self> {
        info!(">> parse config from path");
        debug!("path: {:?}", path);

        let path = match path {
            Some(path) => Some(
                shellexpand::full(path)
                    .map(|path| PathBuf::from(path.to_string()))
                    .with_context(|| format!("cannot expand config path {:?}", path))?,
            ),
            None => Self::path()
                .map_err(|err| debug!("no config file found: {:#}", err))
                .ok(),
        };

        let config = match path {
            Some(path) => {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("cannot read config file {:?}", path))?;
                Self::from_toml(&content)
                    .with_context(|| format!("cannot parse config file {:?}", path))?
            }
            None => Self::default(),
        };
        trace!("config: {:?}", config);

        info!("<< parse config from path");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Tries to get the XDG config file path from XDG_CONFIG_HOME environment variable.
    fn path_from_xdg() -> Result<PathBuf> {
        let path =
            env::var("XDG_CONFIG_HOME").context("cannot find \"XDG_CONFIG_HOME\" env var")?;
        let path = PathBuf::from(path).join("tarot").join("config.toml");
        if path.is_file() {
            Ok(path)
        } else {
            Err(anyhow!("cannot find config file {:?}", path))
        }
    }

    /// Tries to get the XDG config file path from HOME environment variable.
    fn path_from_xdg_alt() -> Result<PathBuf> {
        let path = PathBuf::from(home_dir()?)
            .join(".config")
            .join("tarot")
            .join("config.toml");
        if path.is_file() {
            Ok(path)
        } else {
            Err(anyhow!("cannot find config file {:?}", path))
        }
    }

    /// Tries to get the .tarotrc config file path from HOME environment variable.
    fn path_from_home() -> Result<PathBuf> {
        let path = PathBuf::from(home_dir()?).join(".tarotrc");
        if path.is_file() {
            Ok(path)
        } else {
            Err(anyhow!("cannot find config file {:?}", path))
        }
    }

    /// Tries to get the config file path.
    pub fn path() -> Result<PathBuf> {
        Self::path_from_xdg()
            .or_else(|_| Self::path_from_xdg_alt())
            .or_else(|_| Self::path_from_home())
            .context("cannot find config path")
    }
}

fn home_dir() -> Result<String> {
    let home_var = if cfg!(target_family = "windows") {
        "USERPROFILE"
    } else {
        "HOME"
    };
    env::var(home_var).context(format!("cannot find {:?} env var", home_var))
}

#[cfg(test)]
mod tests {
    use tarot_lib::messages::MessageTemplate;

    use super::*;

    #[test]
    fn it_should_parse_empty_config() {
        assert_eq!(
            DeserializedConfig::default(),
            DeserializedConfig::from_toml("").unwrap()
        );
    }

    #[test]
    fn it_should_parse_full_config() {
        let config = DeserializedConfig::from_toml(
            r#"
            api-url = "https://api.example.com"
            timeout-secs = 10
            position-label = "Kart {n}"

            [messages.network]
            message = "API'ye ulaşılamadı"
            hint = "Tekrar dene"
            "#,
        )
        .unwrap();

        assert_eq!(Some("https://api.example.com".into()), config.api_url);
        assert_eq!(Some(10), config.timeout_secs);
        assert_eq!(Some("Kart {n}".into()), config.position_label);
        assert_eq!(
            Some(MessageTemplate {
                message: "API'ye ulaşılamadı".into(),
                hint: Some("Tekrar dene".into()),
            }),
            config.messages.network
        );
        assert_eq!(None, config.messages.http_status);
    }

    #[test]
    fn it_should_reject_unknown_keys() {
        assert!(DeserializedConfig::from_toml("api = \"x\"").is_err());
        assert!(DeserializedConfig::from_toml("[messages.timeout]\nmessage = \"x\"").is_err());
    }
}
