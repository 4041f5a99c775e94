use anyhow::{anyhow, Context, Error, Result};
use log::debug;
use serde::Serialize;
use std::io::Write;
use termcolor::{ColorChoice, StandardStream, WriteColor};
use terminal_size::{terminal_size, Width};

use crate::output::Print;

const DEFAULT_WIDTH: usize = 80;

/// Represents the available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFmt {
    Plain,
    Json,
}

impl TryFrom<Option<&str>> for OutputFmt {
    type Error = Error;

    fn try_from(fmt: Option<&str>) -> Result<Self, Self::Error> {
        match fmt {
            Some(fmt) if fmt.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(fmt) if fmt.eq_ignore_ascii_case("plain") => Ok(Self::Plain),
            None => Ok(Self::Plain),
            Some(fmt) => Err(anyhow!(r#"cannot parse output format "{}""#, fmt)),
        }
    }
}

/// Represents the printer service.
pub trait PrinterService {
    /// Prints data in the format of the printer.
    fn print<T: Serialize + Print>(&mut self, data: T) -> Result<()>;
    /// Returns the width available for plain text.
    fn width(&self) -> usize;
}

/// Represents the standard output printer.
pub struct StdoutPrinter {
    pub fmt: OutputFmt,
    writer: Box<dyn WriteColor>,
}

impl StdoutPrinter {
    pub fn new(fmt: OutputFmt, writer: Box<dyn WriteColor>) -> Self {
        Self { fmt, writer }
    }
}

impl TryFrom<Option<&str>> for StdoutPrinter {
    type Error = Error;

    fn try_from(fmt: Option<&str>) -> Result<Self, Self::Error> {
        let fmt = OutputFmt::try_from(fmt)?;
        let color_choice = if fmt == OutputFmt::Plain && atty::is(atty::Stream::Stdout) {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        debug!("output format: {:?}, color: {:?}", fmt, color_choice);
        Ok(Self::new(fmt, Box::new(StandardStream::stdout(color_choice))))
    }
}

impl PrinterService for StdoutPrinter {
    fn print<T: Serialize + Print>(&mut self, data: T) -> Result<()> {
        match self.fmt {
            OutputFmt::Plain => data.print(self.writer.as_mut())?,
            OutputFmt::Json => {
                serde_json::to_writer(&mut self.writer, &data)
                    .context("cannot serialize output as json")?;
                writeln!(self.writer)?;
            }
        };
        self.writer.flush().context("cannot flush output")
    }

    fn width(&self) -> usize {
        terminal_size()
            .map(|(Width(width), _)| width as usize)
            .unwrap_or(DEFAULT_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_parse_output_formats() {
        assert_eq!(OutputFmt::Plain, OutputFmt::try_from(None).unwrap());
        assert_eq!(OutputFmt::Json, OutputFmt::try_from(Some("JSON")).unwrap());
        assert!(OutputFmt::try_from(Some("yaml")).is_err());
    }
}
