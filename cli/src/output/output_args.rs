//! Output arguments module.
//!
//! This module provides arguments related to the output format.

use clap::Arg;

/// Output arguments.
pub fn args<'a>() -> Vec<Arg<'a, 'a>> {
    vec![Arg::with_name("output")
        .long("output")
        .short("o")
        .help("Defines the output format")
        .value_name("FMT")
        .possible_values(&["plain", "json"])
        .default_value("plain")]
}
