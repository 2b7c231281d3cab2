// Library interface for chirp (for testing purposes)
pub mod api;
pub mod app;
pub mod config;
pub mod feed;

#[macro_use]
pub mod logging;

pub mod ui;
