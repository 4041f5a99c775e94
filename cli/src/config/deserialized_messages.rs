use serde::Deserialize;
use std::collections::HashMap;
use tarot_lib::{messages::MessageTemplate, ErrorKind};

/// Represents the error messages overridden in the config file, one
/// optional table per error kind.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct DeserializedMessages {
    pub configuration: Option<MessageTemplate>,
    pub network: Option<MessageTemplate>,
    pub http_status: Option<MessageTemplate>,
    pub malformed_response: Option<MessageTemplate>,
    pub unexpected_shape: Option<MessageTemplate>,
}

impl DeserializedMessages {
    /// Collects the overridden templates, keyed by error kind.
    pub fn overrides(&self) -> HashMap<ErrorKind, MessageTemplate> {
        [
            (ErrorKind::Configuration, &self.configuration),
            (ErrorKind::Network, &self.network),
            (ErrorKind::HttpStatus, &self.http_status),
            (ErrorKind::MalformedResponse, &self.malformed_response),
            (ErrorKind::UnexpectedShape, &self.unexpected_shape),
        ]
        .into_iter()
        .filter_map(|(kind, tpl)| tpl.clone().map(|tpl| (kind, tpl)))
        .collect()
    }
}
