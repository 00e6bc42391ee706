pub mod config;
pub mod events;
pub mod logging;
pub mod model;
pub mod tui;
