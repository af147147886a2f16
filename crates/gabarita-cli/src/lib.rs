//! Gabarita command-line client
//!
//! Each subcommand stands in for one page of the web client: it optionally
//! runs the plan guard, loads its data through `gabarita-api`, and prints
//! the result.

pub mod app;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
pub mod router;
pub mod views;
