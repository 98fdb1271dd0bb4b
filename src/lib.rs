pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod shutdown;
pub mod ui;
