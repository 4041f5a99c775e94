//! Reading module.
//!
//! This module contains everything related to drawing readings from the
//! command line: arguments, handlers and views.

pub mod reading_args;
pub mod reading_handlers;
pub mod reading_views;
