//! Output module.
//!
//! This module contains everything related to what is printed to the
//! user: the output format argument, the printer and the text helpers.

pub mod output_args;

mod print;
pub use print::*;

mod printer_service;
pub use printer_service::*;
