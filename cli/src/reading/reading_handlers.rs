//! Reading handlers module.
//!
//! This module contains all handlers related to readings. Reading errors
//! are rendered to the user, never returned.

use anyhow::Result;
use log::{debug, info, warn};
use tarot_lib::{Intent, ReadingClient, ReadingRequest, ReadingState, Spread};

use crate::{
    config::ReadingConfig,
    output::PrinterService,
    reading::reading_views::{ReadingView, SpreadsView},
};

fn client(config: &ReadingConfig) -> tarot_lib::Result<ReadingClient> {
    ReadingClient::new(config.api_url.clone(), config.timeout)
}

fn print_state<P: PrinterService>(
    config: &ReadingConfig,
    state: &ReadingState,
    printer: &mut P,
) -> Result<()> {
    if let ReadingState::Failed(err) = state {
        warn!("reading failed: {}", err);
    }
    let width = printer.width();
    printer.print(ReadingView {
        state,
        messages: &config.messages,
        width,
    })
}

/// Draws the cards of a spread.
pub fn spread<P: PrinterService>(
    config: &ReadingConfig,
    spread: Spread,
    target: Option<&str>,
    printer: &mut P,
) -> Result<()> {
    info!(">> draw spread handler");

    let req = ReadingRequest::new(spread, Intent::from_target_name(target));
    debug!("request: {:?}", req);

    let state = ReadingState::from(client(config).and_then(|client| client.fetch_reading(&req)));
    print_state(config, &state, printer)?;

    info!("<< draw spread handler");
    Ok(())
}

/// Draws the card of the day. With `raw`, the api payload is printed as
/// is instead of the normalized cards.
pub fn daily<P: PrinterService>(
    config: &ReadingConfig,
    target: Option<&str>,
    raw: bool,
    printer: &mut P,
) -> Result<()> {
    if !raw {
        return spread(config, Spread::Daily, target, printer);
    }

    info!(">> draw raw daily card handler");

    let req = ReadingRequest::new(Spread::Daily, Intent::from_target_name(target));
    match client(config).and_then(|client| client.fetch_payload(&req)) {
        Ok(payload) => printer.print(payload)?,
        Err(err) => print_state(config, &ReadingState::Failed(err), printer)?,
    }

    info!("<< draw raw daily card handler");
    Ok(())
}

/// Lists the available spreads.
pub fn spreads<P: PrinterService>(printer: &mut P) -> Result<()> {
    info!(">> list spreads handler");

    printer.print(SpreadsView::all())?;

    info!("<< list spreads handler");
    Ok(())
}
