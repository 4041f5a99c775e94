//! Reading arguments module.
//!
//! This module provides subcommands, arguments and a command matcher
//! related to readings.

use anyhow::{Context, Result};
use clap::{App, Arg, ArgMatches, SubCommand};
use log::{debug, info};
use tarot_lib::Spread;

/// Represents the reading commands.
#[derive(Debug, PartialEq, Eq)]
pub enum Cmd {
    /// Represents the daily card command.
    Daily { target: Option<String>, raw: bool },
    /// Represents the spread command.
    Spread {
        spread: Spread,
        target: Option<String>,
    },
    /// Represents the list spreads command.
    Spreads,
}

/// Represents the reading command matcher.
pub fn matches(m: &ArgMatches) -> Result<Option<Cmd>> {
    info!(">> reading command matcher");

    let cmd = if let Some(m) = m.subcommand_matches("daily") {
        debug!("daily command matched");
        let target = m.value_of("for").map(String::from);
        debug!("target: {:?}", target);
        let raw = m.is_present("raw");
        debug!("raw: {}", raw);
        Some(Cmd::Daily { target, raw })
    } else if let Some(m) = m.subcommand_matches("spread") {
        debug!("spread command matched");
        let spread = m.value_of("spread").unwrap_or_default();
        let spread: Spread = spread
            .parse()
            .with_context(|| format!("cannot parse spread {:?}", spread))?;
        debug!("spread: {}", spread);
        let target = m.value_of("for").map(String::from);
        debug!("target: {:?}", target);
        Some(Cmd::Spread { spread, target })
    } else if m.subcommand_matches("spreads").is_some() {
        debug!("spreads command matched");
        Some(Cmd::Spreads)
    } else {
        None
    };

    info!("<< reading command matcher");
    Ok(cmd)
}

/// Represents the target name argument.
fn target_arg<'a>() -> Arg<'a, 'a> {
    Arg::with_name("for")
        .long("for")
        .short("f")
        .help("Draws the cards for someone else")
        .value_name("NAME")
}

/// Represents the reading subcommands.
pub fn subcmds<'a>() -> Vec<App<'a, 'a>> {
    vec![
        SubCommand::with_name("daily")
            .aliases(&["day", "d"])
            .about("Draws the card of the day")
            .arg(target_arg())
            .arg(
                Arg::with_name("raw")
                    .long("raw")
                    .short("r")
                    .help("Prints the api payload as is"),
            ),
        SubCommand::with_name("spread")
            .aliases(&["draw", "s"])
            .about("Draws the cards of a spread")
            .arg(
                Arg::with_name("spread")
                    .help("Spread to draw, see the spreads command")
                    .value_name("SPREAD")
                    .validator(|spread| {
                        spread
                            .parse::<Spread>()
                            .map(|_| ())
                            .map_err(|err| err.to_string())
                    })
                    .default_value("spread"),
            )
            .arg(target_arg()),
        SubCommand::with_name("spreads")
            .aliases(&["list", "l"])
            .about("Lists the available spreads"),
    ]
}
