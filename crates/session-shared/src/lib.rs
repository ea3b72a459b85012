//! # Session Shared
//!
//! Configuration, telemetry, constants and error types shared by the
//! session authentication crates.

pub mod constants;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use config::{AppConfig, AuthType};
pub use error::AppError;
