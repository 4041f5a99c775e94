//! Config module.
//!
//! This module contains everything related to the user configuration:
//! the raw TOML file, its arguments and the resolved reading config.

pub mod config_args;

mod deserialized_config;
pub use deserialized_config::*;

mod deserialized_messages;
pub use deserialized_messages::*;

mod reading_config;
pub use reading_config::*;
