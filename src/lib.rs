pub mod api;
pub mod config;
pub mod error;
pub mod tui;
pub mod ui;

pub use error::{Error, Result};
