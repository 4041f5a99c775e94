//! Config arguments module.
//!
//! This module provides arguments related to the user config.

use clap::Arg;

/// Represents the config path argument.
pub fn path_arg<'a>() -> Arg<'a, 'a> {
    Arg::with_name("config")
        .long("config")
        .short("c")
        .help("Forces a specific config path")
        .value_name("PATH")
}

/// Represents the api url argument.
pub fn api_url_arg<'a>() -> Arg<'a, 'a> {
    Arg::with_name("api-url")
        .long("api-url")
        .short("u")
        .help("Overrides the tarot api base url")
        .value_name("URL")
}
