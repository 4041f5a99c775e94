use log::{debug, info, trace};
use std::{env, time::Duration};
use tarot_lib::{
    client::{API_URL_ENV_VAR, DEFAULT_TIMEOUT},
    messages::Messages,
};

use crate::config::DeserializedConfig;

/// Represents the resolved configuration of a reading.
#[derive(Debug, Clone)]
pub struct ReadingConfig {
    /// Represents the tarot api base url, if any.
    pub api_url: Option<String>,
    /// Represents the request timeout.
    pub timeout: Duration,
    /// Represents the user-facing messages.
    pub messages: Messages,
}

impl ReadingConfig {
    /// Builds the reading config from the config file, the environment and
    /// an optional api url argument.
    pub fn from_config_and_opt_api_url(config: &DeserializedConfig, api_url: Option<&str>) -> Self {
        info!(">> build reading config");
        debug!("api url argument: {:?}", api_url);

        let env_api_url = env::var(API_URL_ENV_VAR).ok();
        let api_url = resolve_api_url(api_url, env_api_url.as_deref(), config.api_url.as_deref());
        debug!("resolved api url: {:?}", api_url);

        let mut messages = Messages::default().with_overrides(config.messages.overrides());
        if let Some(empty) = config.empty_message.as_ref() {
            messages.empty = empty.to_owned();
        }
        if let Some(unknown_card) = config.unknown_card.as_ref() {
            messages.unknown_card = unknown_card.to_owned();
        }
        if let Some(position_label) = config.position_label.as_ref() {
            messages.position_label = position_label.to_owned();
        }

        let reading_config = Self {
            api_url,
            timeout: config
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
            messages,
        };
        trace!("reading config: {:?}", reading_config);

        info!("<< build reading config");
        reading_config
    }
}

/// Picks the first non-blank api url among the argument, the environment
/// and the config file.
pub fn resolve_api_url(
    arg: Option<&str>,
    env: Option<&str>,
    config: Option<&str>,
) -> Option<String> {
    [arg, env, config]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_resolve_api_url_by_precedence() {
        assert_eq!(
            Some("http://arg".into()),
            resolve_api_url(Some("http://arg"), Some("http://env"), Some("http://cfg"))
        );
        assert_eq!(
            Some("http://env".into()),
            resolve_api_url(None, Some("http://env"), Some("http://cfg"))
        );
        assert_eq!(
            Some("http://cfg".into()),
            resolve_api_url(Some(" "), Some(""), Some("http://cfg"))
        );
        assert_eq!(None, resolve_api_url(None, Some(""), None));
    }

    #[test]
    fn it_should_apply_config_overrides() {
        let config = DeserializedConfig::from_toml(
            r#"
            timeout-secs = 5
            unknown-card = "Unknown card"

            [messages.unexpected-shape]
            message = "Bad payload"
            "#,
        )
        .unwrap();

        let reading_config = ReadingConfig::from_config_and_opt_api_url(&config, Some("http://arg"));

        assert_eq!(Some("http://arg".into()), reading_config.api_url);
        assert_eq!(Duration::from_secs(5), reading_config.timeout);
        assert_eq!("Unknown card", reading_config.messages.unknown_card);
        assert_eq!(
            "Bad payload",
            reading_config
                .messages
                .render(&tarot_lib::ReadingError::UnexpectedShape)
                .message
        );
    }
}
