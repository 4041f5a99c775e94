//! Spread module.
//!
//! This module lists the spreads served by the tarot api, together with
//! the presentational data attached to each of them.

use serde::Serialize;
use std::{borrow::Cow, fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown spread {0:?}")]
pub struct UnknownSpreadError(pub String);

/// Represents a spread endpoint of the tarot api.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Spread {
    Daily,
    #[serde(rename = "spread")]
    PastPresentFuture,
    LoveThree,
    CrossFive,
    FateSeven,
    LoveFive,
    CareerSix,
    HealthFive,
}

impl Spread {
    pub const ALL: [Spread; 8] = [
        Spread::Daily,
        Spread::PastPresentFuture,
        Spread::LoveThree,
        Spread::CrossFive,
        Spread::FateSeven,
        Spread::LoveFive,
        Spread::CareerSix,
        Spread::HealthFive,
    ];

    /// Identifier used on the command line and in the endpoint path.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::PastPresentFuture => "spread",
            Self::LoveThree => "love-three",
            Self::CrossFive => "cross-five",
            Self::FateSeven => "fate-seven",
            Self::LoveFive => "love-five",
            Self::CareerSix => "career-six",
            Self::HealthFive => "health-five",
        }
    }

    /// Path of the endpoint, relative to the api base url.
    pub fn endpoint(&self) -> String {
        format!("/tarot/{}", self.id())
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Daily => "Günün Kartı",
            Self::PastPresentFuture => "Geçmiş · Şimdi · Gelecek",
            Self::LoveThree => "3 Kart Aşk Açılımı",
            Self::CrossFive => "5 Kart Haç",
            Self::FateSeven => "7 Kart Kader",
            Self::LoveFive => "5 Kart Aşk",
            Self::CareerSix => "6 Kart Kariyer",
            Self::HealthFive => "5 Kart Sağlık",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Daily => "Günün enerjisini taşıyan tek kart.",
            Self::PastPresentFuture => {
                "Geçmişin etkilerini, şu anki durumu ve geleceğe uzanan enerjiyi gösterir."
            }
            Self::LoveThree => "Seni, partnerini ve ilişkinin enerjisini gösterir.",
            Self::CrossFive => "Genel durum, engeller ve olası sonuç üzerine klasik haç açılımı.",
            Self::FateSeven => {
                "Geçmiş, şimdi, gelecek ve kader yolundaki destekleyen / engelleyen enerjiler."
            }
            Self::LoveFive => "Sen, karşındaki kişi, aranızdaki bağ, engeller ve olası sonuç.",
            Self::CareerSix => "Kariyer yolunda güçlü yanlar, zorluklar, fırsatlar ve sonuç.",
            Self::HealthFive => {
                "Genel enerji, beden, zihin, ruh ve şifa potansiyeline dair bir bakış."
            }
        }
    }

    /// Labels of the card positions, in draw order. Spreads without
    /// named positions return an empty list.
    pub fn positions(&self) -> &'static [&'static str] {
        match self {
            Self::Daily => &["Günün Kartı"],
            Self::PastPresentFuture => &["Geçmiş", "Şimdi", "Gelecek"],
            Self::LoveThree => &["Sen", "Partner", "İlişkinin Enerjisi"],
            _ => &[],
        }
    }

    /// Returns the label of the card at the given zero-based index. Indexes
    /// past the labelled positions fall back to the `template`, where
    /// `{n}` is replaced by the one-based position.
    pub fn position_label(&self, index: usize, template: &str) -> Cow<'static, str> {
        match self.positions().get(index) {
            Some(label) => Cow::Borrowed(label),
            None => Cow::Owned(template.replace("{n}", &(index + 1).to_string())),
        }
    }

    /// Secondary meaning shown under each card, if the spread has one.
    pub fn highlight(&self) -> Option<Highlight> {
        match self {
            Self::PastPresentFuture => Some(Highlight::Love("Duygusal Yansıma")),
            Self::LoveThree | Self::LoveFive => Some(Highlight::Love("Aşk Mesajı")),
            Self::CareerSix => Some(Highlight::Career("Kariyer")),
            _ => None,
        }
    }
}

/// Represents the domain-specific meaning a spread puts forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Love(&'static str),
    Career(&'static str),
}

impl fmt::Display for Spread {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Spread {
    type Err = UnknownSpreadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().trim_start_matches("/tarot/");
        Self::ALL
            .iter()
            .find(|spread| spread.id() == id)
            .copied()
            .ok_or_else(|| UnknownSpreadError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_build_endpoints() {
        assert_eq!("/tarot/daily", Spread::Daily.endpoint());
        assert_eq!("/tarot/spread", Spread::PastPresentFuture.endpoint());
        assert_eq!("/tarot/health-five", Spread::HealthFive.endpoint());
    }

    #[test]
    fn it_should_parse_ids_and_endpoints() {
        assert_eq!(Ok(Spread::LoveThree), "love-three".parse());
        assert_eq!(Ok(Spread::FateSeven), "/tarot/fate-seven".parse());
        assert_eq!(Ok(Spread::PastPresentFuture), " spread ".parse());
        assert_eq!(
            Err(UnknownSpreadError("ten-cards".into())),
            "ten-cards".parse::<Spread>()
        );
    }

    #[test]
    fn it_should_round_trip_every_id() {
        for spread in Spread::ALL {
            assert_eq!(Ok(spread), spread.to_string().parse());
        }
    }

    #[test]
    fn it_should_fall_back_to_generic_position_labels() {
        let spread = Spread::PastPresentFuture;
        assert_eq!("Geçmiş", spread.position_label(0, "Position {n}"));
        assert_eq!("Gelecek", spread.position_label(2, "Position {n}"));
        assert_eq!("Position 4", spread.position_label(3, "Position {n}"));
        assert_eq!("Position 1", Spread::CrossFive.position_label(0, "Position {n}"));
    }
}
