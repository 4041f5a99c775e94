use anyhow::Result;
use clap::{App, AppSettings};

pub mod config;
pub mod output;
pub mod reading;

use crate::{
    config::{config_args, DeserializedConfig, ReadingConfig},
    output::{output_args, StdoutPrinter},
    reading::{reading_args, reading_handlers},
};

fn create_app<'a>() -> App<'a, 'a> {
    App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .global_setting(AppSettings::GlobalVersion)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(&config_args::path_arg())
        .arg(&config_args::api_url_arg())
        .args(&output_args::args())
        .subcommands(reading_args::subcmds())
}

fn main() -> Result<()> {
    // init env logger
    let default_env_filter = env_logger::DEFAULT_FILTER_ENV;
    env_logger::init_from_env(env_logger::Env::default().filter_or(default_env_filter, "off"));

    // init app
    let app = create_app();
    let m = app.get_matches();

    // init entities and services
    let config = DeserializedConfig::from_opt_path(m.value_of("config"))?;
    let reading_config = ReadingConfig::from_config_and_opt_api_url(&config, m.value_of("api-url"));
    let mut printer = StdoutPrinter::try_from(m.value_of("output"))?;

    // check reading commands
    match reading_args::matches(&m)? {
        Some(reading_args::Cmd::Daily { target, raw }) => {
            reading_handlers::daily(&reading_config, target.as_deref(), raw, &mut printer)
        }
        Some(reading_args::Cmd::Spread { spread, target }) => {
            reading_handlers::spread(&reading_config, spread, target.as_deref(), &mut printer)
        }
        Some(reading_args::Cmd::Spreads) => reading_handlers::spreads(&mut printer),
        None => Ok(()),
    }
}
