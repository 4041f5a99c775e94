//! Reading views module.
//!
//! This module renders readings, reading errors and the spread list, both
//! as plain text and as json.

use anyhow::Result;
use serde::{Serialize, Serializer};
use tarot_lib::{
    messages::{Message, Messages},
    spread::Highlight,
    Intent, Reading, ReadingState, Spread,
};
use termcolor::{Color, WriteColor};

use crate::output::{wrap, write_colored, Print};

const INDENT: &str = "  ";

/// Represents the view of one reading state.
pub struct ReadingView<'a> {
    pub state: &'a ReadingState,
    pub messages: &'a Messages,
    pub width: usize,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
enum JsonReadingView<'a> {
    Empty { message: &'a str },
    Drawn { reading: &'a Reading },
    Failed { error: Message },
}

impl<'a> Serialize for ReadingView<'a> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let view = match self.state {
            ReadingState::Empty => JsonReadingView::Empty {
                message: &self.messages.empty,
            },
            ReadingState::Drawn(reading) => JsonReadingView::Drawn { reading },
            ReadingState::Failed(err) => JsonReadingView::Failed {
                error: self.messages.render(err),
            },
        };
        view.serialize(serializer)
    }
}

impl<'a> ReadingView<'a> {
    fn print_lines(&self, writer: &mut dyn WriteColor, text: &str) -> Result<()> {
        for line in wrap(text, self.width, INDENT) {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }

    fn print_reading(&self, writer: &mut dyn WriteColor, reading: &Reading) -> Result<()> {
        let spread = reading.spread;
        write_colored(writer, Color::Magenta, true, spread.title())?;
        writeln!(writer, "{}", spread.description())?;
        match &reading.intent {
            Intent::Myself => writeln!(writer, "Niyet: Kendin için.")?,
            Intent::SomeoneElse(name) => writeln!(writer, "Niyet: {} için.", name)?,
        }
        writeln!(writer, "Toplam {} kart açıldı.", reading.cards.len())?;

        for positioned in reading.positioned(&self.messages.position_label) {
            let card = positioned.card;
            writeln!(writer)?;
            write_colored(writer, Color::Cyan, false, &positioned.label)?;
            write_colored(
                writer,
                Color::White,
                true,
                card.name_or(&self.messages.unknown_card),
            )?;
            if let Some(meaning) = card.meaning.as_deref() {
                self.print_lines(writer, meaning)?;
            }

            let highlights = match spread.highlight() {
                Some(Highlight::Love(label)) => vec![(label, card.love_meaning.as_deref())],
                Some(Highlight::Career(label)) => vec![(label, card.career_meaning.as_deref())],
                None => vec![
                    ("Aşk", card.love_meaning.as_deref()),
                    ("Kariyer", card.career_meaning.as_deref()),
                ],
            };
            for (label, text) in highlights {
                if let Some(text) = text {
                    self.print_lines(writer, &format!("{}: {}", label, text))?;
                }
            }
        }

        Ok(())
    }

    fn print_error(&self, writer: &mut dyn WriteColor, message: &Message) -> Result<()> {
        write_colored(writer, Color::Red, true, &message.title)?;
        writeln!(writer, "{}", message.message)?;
        if let Some(hint) = message.hint.as_deref() {
            write_colored(writer, Color::Yellow, false, hint)?;
        }
        Ok(())
    }
}

impl<'a> Print for ReadingView<'a> {
    fn print(&self, writer: &mut dyn WriteColor) -> Result<()> {
        match self.state {
            ReadingState::Empty => {
                writeln!(writer, "{}", self.messages.empty)?;
                Ok(())
            }
            ReadingState::Drawn(reading) => self.print_reading(writer, reading),
            ReadingState::Failed(err) => self.print_error(writer, &self.messages.render(err)),
        }
    }
}

/// Represents one entry of the spread list.
#[derive(Debug, Serialize)]
pub struct SpreadEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub endpoint: String,
}

/// Represents the list of available spreads.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct SpreadsView(pub Vec<SpreadEntry>);

impl SpreadsView {
    pub fn all() -> Self {
        Self(
            Spread::ALL
                .iter()
                .map(|spread| SpreadEntry {
                    id: spread.id(),
                    title: spread.title(),
                    description: spread.description(),
                    endpoint: spread.endpoint(),
                })
                .collect(),
        )
    }
}

impl Print for SpreadsView {
    fn print(&self, writer: &mut dyn WriteColor) -> Result<()> {
        for entry in &self.0 {
            write_colored(writer, Color::Cyan, true, &format!("{:<12}", entry.id))?;
            writeln!(writer, "{}{}", INDENT, entry.title)?;
            writeln!(writer, "{}{}", INDENT, entry.description)?;
        }
        Ok(())
    }
}
