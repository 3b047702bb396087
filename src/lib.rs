pub mod cli;
pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod search;
pub mod store;

#[cfg(feature = "tui")]
pub mod tui;
