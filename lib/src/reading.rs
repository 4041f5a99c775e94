use chrono::{DateTime, Local};
use serde::Serialize;
use std::borrow::Cow;

use crate::{
    card::{CardRecord, Cards},
    error::ReadingError,
    intent::{Intent, ReadingRequest},
    spread::Spread,
};

/// Represents the snapshot of one successful reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub spread: Spread,
    #[serde(flatten)]
    pub intent: Intent,
    pub cards: Cards,
    pub fetched_at: DateTime<Local>,
}

/// Represents a card together with its label in the spread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedCard<'a> {
    pub position: usize,
    pub label: Cow<'static, str>,
    pub card: &'a CardRecord,
}

impl Reading {
    pub fn new(req: ReadingRequest, cards: Cards) -> Self {
        Self {
            spread: req.spread,
            intent: req.intent,
            cards,
            fetched_at: Local::now(),
        }
    }

    /// Pairs each card with its position label. Positions the spread does
    /// not name are labelled with `fallback`, `{n}` being the one-based
    /// position.
    pub fn positioned<'a>(&'a self, fallback: &str) -> Vec<PositionedCard<'a>> {
        self.cards
            .iter()
            .enumerate()
            .map(|(position, card)| PositionedCard {
                position,
                label: self.spread.position_label(position, fallback),
                card,
            })
            .collect()
    }
}

/// Represents what a renderer has to show for one reading request.
#[derive(Debug)]
pub enum ReadingState {
    /// No card was drawn and no error occurred.
    Empty,
    Drawn(Reading),
    Failed(ReadingError),
}

impl From<Result<Reading, ReadingError>> for ReadingState {
    fn from(res: Result<Reading, ReadingError>) -> Self {
        match res {
            Ok(reading) if reading.cards.is_empty() => Self::Empty,
            Ok(reading) => Self::Drawn(reading),
            Err(err) => Self::Failed(err),
        }
    }
}
