use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::ops::Deref;

use crate::card_parsers::{opt_id_parser, opt_string_parser};

/// Represents one tarot card as returned by the tarot api.
///
/// The api gives no guarantee about any field, so all of them are
/// optional, and a field of unexpected type reads as absent.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    #[serde(
        default,
        deserialize_with = "opt_id_parser::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    #[serde(
        default,
        deserialize_with = "opt_string_parser::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "opt_string_parser::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub meaning: Option<String>,
    #[serde(
        default,
        deserialize_with = "opt_string_parser::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub love_meaning: Option<String>,
    #[serde(
        default,
        deserialize_with = "opt_string_parser::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub career_meaning: Option<String>,
    #[serde(
        default,
        deserialize_with = "opt_string_parser::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
}

impl CardRecord {
    /// Reads a card out of one element of the api card list. Elements
    /// that are not objects read as a card without any field.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            debug!("card element is not an object: {}", value);
            return Self::default();
        }
        serde_json::from_value(value.clone()).unwrap_or_else(|err| {
            debug!("cannot read card record: {}", err);
            Self::default()
        })
    }

    /// Returns the card name, or the given fallback when the api did
    /// not send one.
    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(fallback)
    }
}

/// Represents the ordered cards of one reading. The order encodes the
/// position of each card in the spread.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Cards(Vec<CardRecord>);

impl Cards {
    pub fn into_inner(self) -> Vec<CardRecord> {
        self.0
    }
}

impl From<Vec<CardRecord>> for Cards {
    fn from(cards: Vec<CardRecord>) -> Self {
        Self(cards)
    }
}

impl Deref for Cards {
    type Target = [CardRecord];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_tolerate_missing_fields() {
        let card: CardRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(CardRecord::default(), card);
        assert_eq!("Bilinmeyen Kart", card.name_or("Bilinmeyen Kart"));
    }

    #[test]
    fn it_should_read_camel_case_fields() {
        let card: CardRecord = serde_json::from_str(
            r#"{"id":3,"name":"The Empress","loveMeaning":"Bolluk","careerMeaning":"Üretkenlik"}"#,
        )
        .unwrap();

        assert_eq!(Some(3), card.id);
        assert_eq!("The Empress", card.name_or("?"));
        assert_eq!(Some("Bolluk"), card.love_meaning.as_deref());
        assert_eq!(Some("Üretkenlik"), card.career_meaning.as_deref());
        assert_eq!(None, card.meaning);
        assert_eq!(None, card.image);
    }

    #[test]
    fn it_should_read_wrong_typed_fields_as_absent() {
        let card: CardRecord = serde_json::from_str(
            r#"{"id":"7","name":"The Chariot","image":{"url":"chariot.png"},"meaning":null}"#,
        )
        .unwrap();

        assert_eq!(
            CardRecord {
                name: Some("The Chariot".into()),
                ..CardRecord::default()
            },
            card
        );
    }

    #[test]
    fn it_should_read_integral_float_ids() {
        let card: CardRecord = serde_json::from_str(r#"{"id":1.0,"name":"The Magician"}"#).unwrap();
        assert_eq!(Some(1), card.id);

        let card: CardRecord = serde_json::from_str(r#"{"id":1.5}"#).unwrap();
        assert_eq!(None, card.id);
    }

    #[test]
    fn it_should_read_non_objects_as_empty_cards() {
        assert_eq!(CardRecord::default(), CardRecord::from_value(&Value::from(1)));
        assert_eq!(CardRecord::default(), CardRecord::from_value(&Value::Null));
        assert_eq!(
            Some("The Sun".into()),
            CardRecord::from_value(&serde_json::json!({"name": "The Sun"})).name
        );
    }

    #[test]
    fn it_should_skip_absent_fields_when_serializing() {
        let card = CardRecord {
            name: Some("The Fool".into()),
            ..CardRecord::default()
        };
        assert_eq!(r#"{"name":"The Fool"}"#, serde_json::to_string(&card).unwrap());
    }
}
