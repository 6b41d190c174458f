pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use config::BoardConfig;
pub use error::{BoardError, Result};
