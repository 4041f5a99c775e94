use serde::{Deserialize, Serialize};
use std::{fmt, result};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadingError {
    #[error("cannot build reading url: {0}")]
    Configuration(String),
    #[error("cannot reach tarot api: {0}")]
    Network(reqwest::Error),
    #[error("tarot api answered {status} {status_text}")]
    HttpStatus { status: u16, status_text: String },
    #[error("cannot parse tarot api response: {0}")]
    MalformedResponse(serde_json::Error),
    #[error("tarot api did not return a card list")]
    UnexpectedShape,
}

impl ReadingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Network(_) => ErrorKind::Network,
            Self::HttpStatus { .. } => ErrorKind::HttpStatus,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
            Self::UnexpectedShape => ErrorKind::UnexpectedShape,
        }
    }
}

/// Discriminant of [`ReadingError`], used to key user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    Configuration,
    Network,
    HttpStatus,
    MalformedResponse,
    UnexpectedShape,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind = match self {
            Self::Configuration => "configuration",
            Self::Network => "network",
            Self::HttpStatus => "http-status",
            Self::MalformedResponse => "malformed-response",
            Self::UnexpectedShape => "unexpected-shape",
        };
        write!(f, "{}", kind)
    }
}

pub type Result<T> = result::Result<T, ReadingError>;
