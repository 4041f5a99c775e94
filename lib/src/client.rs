use log::{debug, info, trace};
use reqwest::{
    blocking::Client,
    header::{ACCEPT, CACHE_CONTROL, PRAGMA},
};
use serde_json::Value;
use std::{env, time::Duration};
use url::Url;

use crate::{
    card::Cards,
    error::*,
    intent::{Intent, ReadingRequest},
    normalize::{normalize, parse_body},
    reading::Reading,
};

/// Environment variable holding the tarot api base url.
pub const API_URL_ENV_VAR: &str = "TAROT_API_URL";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Represents a blocking client of the tarot api.
#[derive(Debug, Clone)]
pub struct ReadingClient {
    base_url: Option<String>,
    client: Client,
}

impl ReadingClient {
    pub fn new(base_url: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ReadingError::Configuration(err.to_string()))?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: Option<String>, client: Client) -> Self {
        Self { base_url, client }
    }

    /// Builds a client whose base url comes from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(env::var(API_URL_ENV_VAR).ok(), DEFAULT_TIMEOUT)
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Fetches the raw json payload of a reading, without normalizing it.
    pub fn fetch_payload(&self, req: &ReadingRequest) -> Result<Value> {
        info!(">> fetch reading payload");
        debug!("request: {:?}", req);

        let payload = fetch_payload(
            &self.client,
            self.base_url(),
            &req.spread.endpoint(),
            &req.intent,
        )?;

        info!("<< fetch reading payload");
        Ok(payload)
    }

    /// Fetches the normalized cards of a reading.
    pub fn fetch_cards(&self, req: &ReadingRequest) -> Result<Cards> {
        normalize(self.fetch_payload(req)?)
    }

    pub fn fetch_reading(&self, req: &ReadingRequest) -> Result<Reading> {
        let cards = self.fetch_cards(req)?;
        debug!("{} card(s) drawn", cards.len());
        Ok(Reading::new(req.clone(), cards))
    }
}

/// Fetches one reading and normalizes it into ordered cards.
///
/// Fails fast, without touching the network, when the base url is missing
/// or empty.
pub fn fetch_reading(base_url: Option<&str>, endpoint: &str, intent: &Intent) -> Result<Cards> {
    normalize(fetch_payload(&Client::new(), base_url, endpoint, intent)?)
}

/// Builds the reading url: the endpoint appended to the base url, plus
/// the intent query parameters.
pub fn build_url(base_url: Option<&str>, endpoint: &str, intent: &Intent) -> Result<Url> {
    let base_url = base_url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| ReadingError::Configuration(format!("{} is not set", API_URL_ENV_VAR)))?;

    let mut url = Url::parse(&format!("{}{}", base_url.trim_end(), endpoint))
        .map_err(|err| ReadingError::Configuration(format!("{:?}: {}", base_url, err)))?;
    url.query_pairs_mut().extend_pairs(intent.query_pairs());

    Ok(url)
}

fn fetch_payload(
    client: &Client,
    base_url: Option<&str>,
    endpoint: &str,
    intent: &Intent,
) -> Result<Value> {
    let url = build_url(base_url, endpoint, intent)?;
    debug!("GET {}", url);

    let res = client
        .get(url)
        .header(ACCEPT, "application/json")
        .header(CACHE_CONTROL, "no-cache, no-store")
        .header(PRAGMA, "no-cache")
        .send()
        .map_err(|err| {
            debug!("network error: {}", err);
            ReadingError::Network(err)
        })?;
    let res_status = res.status();

    if !res_status.is_success() {
        debug!("http status error: {}", res_status);
        return Err(ReadingError::HttpStatus {
            status: res_status.as_u16(),
            status_text: res_status
                .canonical_reason()
                .unwrap_or_default()
                .to_owned(),
        });
    }

    let body = res.text().map_err(ReadingError::Network)?;
    trace!("body: {}", body);

    parse_body(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_fail_fast_without_base_url() {
        for base_url in [None, Some(""), Some("  ")] {
            assert!(matches!(
                build_url(base_url, "/tarot/daily", &Intent::Myself),
                Err(ReadingError::Configuration(_))
            ));
        }
    }

    #[test]
    fn it_should_reject_unparsable_base_url() {
        assert!(matches!(
            build_url(Some("api.example.com"), "/tarot/daily", &Intent::Myself),
            Err(ReadingError::Configuration(_))
        ));
    }

    #[test]
    fn it_should_append_intent_query() {
        let url = build_url(
            Some("https://api.example.com"),
            "/tarot/love-five",
            &Intent::Myself,
        )
        .unwrap();
        assert_eq!(
            "https://api.example.com/tarot/love-five?intent=self",
            url.as_str()
        );

        let url = build_url(
            Some("https://api.example.com"),
            "/tarot/love-five",
            &Intent::from_target_name(Some(" Ayşe ")),
        )
        .unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            vec![
                ("intent".to_owned(), "someoneElse".to_owned()),
                ("name".to_owned(), "Ayşe".to_owned())
            ],
            pairs
        );
    }
}
