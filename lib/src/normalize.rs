//! Normalize module.
//!
//! The tarot api wraps its card lists inconsistently across endpoints:
//! some answer a bare array, others an object holding the array under
//! `cards` or `spread`. This module is the only place aware of it.

use log::{debug, trace};
use serde_json::Value;

use crate::{
    card::{CardRecord, Cards},
    error::*,
};

/// Envelope keys checked, in order, when the payload is an object.
const ENVELOPE_KEYS: [&str; 2] = ["cards", "spread"];

/// Decodes a response body into a json value.
pub fn parse_body(body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(ReadingError::MalformedResponse)
}

/// Extracts the card list out of a json payload. A bare array is taken as
/// is, then the `cards` key is tried, then the `spread` key.
pub fn extract_cards(payload: &Value) -> Option<&Vec<Value>> {
    if let Value::Array(cards) = payload {
        return Some(cards);
    }

    ENVELOPE_KEYS.iter().find_map(|key| {
        let cards = payload.get(key).and_then(Value::as_array);
        if cards.is_some() {
            debug!("card list found under {:?} key", key);
        }
        cards
    })
}

/// Normalizes a json payload into ordered cards. Only the envelope is
/// checked: elements are read leniently, one card per element.
pub fn normalize(payload: Value) -> Result<Cards> {
    trace!("payload: {:?}", payload);

    let cards = extract_cards(&payload)
        .ok_or(ReadingError::UnexpectedShape)?
        .iter()
        .map(CardRecord::from_value)
        .collect::<Vec<_>>();

    Ok(Cards::from(cards))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn fool() -> Value {
        json!({"name": "The Fool", "meaning": "New beginnings"})
    }

    fn tower() -> Value {
        json!({"id": 16, "name": "The Tower"})
    }

    #[test]
    fn it_should_keep_bare_arrays() {
        let payload = json!([fool(), tower()]);

        let cards = normalize(payload).unwrap();

        assert_eq!(2, cards.len());
        assert_eq!(Some("The Fool"), cards[0].name.as_deref());
        assert_eq!(Some(16), cards[1].id);
    }

    #[test]
    fn it_should_unwrap_cards_and_spread_envelopes() {
        let cards = normalize(json!({"cards": [fool()]})).unwrap();
        assert_eq!(1, cards.len());
        assert_eq!(Some("New beginnings"), cards[0].meaning.as_deref());

        let cards = normalize(json!({"spread": [tower(), fool()]})).unwrap();
        assert_eq!(2, cards.len());
        assert_eq!(Some("The Tower"), cards[0].name.as_deref());
    }

    #[test]
    fn it_should_prefer_cards_over_spread() {
        let payload = json!({"spread": [tower()], "cards": [fool()]});
        let cards = normalize(payload).unwrap();
        assert_eq!(Some("The Fool"), cards[0].name.as_deref());
    }

    #[test]
    fn it_should_skip_non_array_envelopes() {
        let payload = json!({"cards": "none", "spread": [tower()]});
        let cards = normalize(payload).unwrap();
        assert_eq!(Some("The Tower"), cards[0].name.as_deref());
    }

    #[test]
    fn it_should_reject_unknown_shapes() {
        for payload in [
            json!({"foo": 1}),
            json!({"cards": {"name": "The Fool"}}),
            json!("The Fool"),
            json!(null),
        ] {
            assert!(matches!(
                normalize(payload),
                Err(ReadingError::UnexpectedShape)
            ));
        }
    }

    #[test]
    fn it_should_be_idempotent_on_bare_arrays() {
        let payload = json!([fool(), tower()]);
        let once = extract_cards(&payload).unwrap().clone();
        let rewrapped = Value::Array(once.clone());
        let twice = extract_cards(&rewrapped).unwrap();
        assert_eq!(&once, twice);
        assert_eq!(payload.as_array(), Some(&once));
    }

    #[test]
    fn it_should_tolerate_wrong_typed_fields() {
        let cards = normalize(json!({"cards": [{"id": "7", "name": "The Chariot"}]})).unwrap();
        assert_eq!(None, cards[0].id);
        assert_eq!(Some("The Chariot"), cards[0].name.as_deref());

        let cards = normalize(json!([{"name": "The Sun", "image": {"url": "sun.png"}}])).unwrap();
        assert_eq!(Some("The Sun"), cards[0].name.as_deref());
        assert_eq!(None, cards[0].image);

        let cards = normalize(json!([{"id": 1.0, "name": "The Magician"}])).unwrap();
        assert_eq!(Some(1), cards[0].id);
    }

    #[test]
    fn it_should_keep_non_object_elements_in_place() {
        let cards = normalize(json!([1, fool(), "two"])).unwrap();

        assert_eq!(3, cards.len());
        assert_eq!(CardRecord::default(), cards[0]);
        assert_eq!(Some("The Fool"), cards[1].name.as_deref());
        assert_eq!(CardRecord::default(), cards[2]);
    }

    #[test]
    fn it_should_accept_empty_lists() {
        assert!(normalize(json!([])).unwrap().is_empty());
        assert!(normalize(json!({"cards": []})).unwrap().is_empty());
    }

    #[test]
    fn it_should_reject_invalid_json() {
        assert!(matches!(
            parse_body("<html>502</html>"),
            Err(ReadingError::MalformedResponse(_))
        ));
        assert_eq!(json!({"cards": []}), parse_body(r#"{"cards":[]}"#).unwrap());
    }
}
