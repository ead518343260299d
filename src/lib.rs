// Library entry point
pub mod config;
pub mod constants;
pub mod error;
pub mod logger;

pub use logger::{Field, Level, Logger, field, init_logger};
