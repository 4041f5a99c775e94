//! Messages module.
//!
//! This module holds the user-facing texts shown for a reading: one
//! message template per error kind, plus the texts of the neutral states.
//! Classification never depends on these texts.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{ErrorKind, ReadingError};

/// Represents the text shown for one error kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageTemplate {
    /// Short message. `{status}` and `{status_text}` are replaced for
    /// http status errors.
    pub message: String,
    /// Optional longer hint.
    #[serde(default)]
    pub hint: Option<String>,
}

impl MessageTemplate {
    fn new(message: &str, hint: Option<&str>) -> Self {
        Self {
            message: message.to_owned(),
            hint: hint.map(str::to_owned),
        }
    }
}

/// Represents a rendered error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub kind: ErrorKind,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// Represents the whole message table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub error_title: String,
    pub empty: String,
    pub unknown_card: String,
    pub position_label: String,
    errors: HashMap<ErrorKind, MessageTemplate>,
}

impl Default for Messages {
    fn default() -> Self {
        let errors = HashMap::from([
            (
                ErrorKind::Configuration,
                MessageTemplate::new(
                    "API adresi tanımlı değil.",
                    Some("TAROT_API_URL ortam değişkenini ya da api-url ayarını kontrol et."),
                ),
            ),
            (
                ErrorKind::Network,
                MessageTemplate::new(
                    "Tarot API'sine ulaşılamadı.",
                    Some("Bağlantını kontrol edip falı yeniden açmayı dene."),
                ),
            ),
            (
                ErrorKind::HttpStatus,
                MessageTemplate::new("API hatası: {status} – {status_text}", None),
            ),
            (
                ErrorKind::MalformedResponse,
                MessageTemplate::new("API'den okunamayan bir yanıt geldi.", None),
            ),
            (
                ErrorKind::UnexpectedShape,
                MessageTemplate::new("API beklenen formatta kart listesi döndürmedi.", None),
            ),
        ]);

        Self {
            error_title: "Bir şeyler ters gitti.".into(),
            empty: "Henüz kart çekilmedi. Niyetini belirleyip falı aç.".into(),
            unknown_card: "Bilinmeyen Kart".into(),
            position_label: "Position {n}".into(),
            errors,
        }
    }
}

impl Messages {
    /// Replaces the templates of the given error kinds, keeping the
    /// defaults for the others.
    pub fn with_overrides(mut self, overrides: HashMap<ErrorKind, MessageTemplate>) -> Self {
        self.errors.extend(overrides);
        self
    }

    pub fn template(&self, kind: ErrorKind) -> Option<&MessageTemplate> {
        self.errors.get(&kind)
    }

    /// Renders the message of the given error.
    pub fn render(&self, err: &ReadingError) -> Message {
        let kind = err.kind();
        let (message, hint) = match self.template(kind) {
            Some(tpl) => (tpl.message.clone(), tpl.hint.clone()),
            None => (err.to_string(), None),
        };
        let message = match err {
            ReadingError::HttpStatus {
                status,
                status_text,
            } => message
                .replace("{status}", &status.to_string())
                .replace("{status_text}", status_text),
            _ => message,
        };

        Message {
            kind,
            title: self.error_title.clone(),
            message,
            hint,
        }
    }
}
