//! Core utilities for the demo.
//!
//! This crate provides foundational types used across the workspace:
//! - Error types and result aliases
//! - Logging initialization
//! - Frame clock
//! - Configuration management

pub mod config;
mod clock;
mod error;
mod logging;

pub use clock::FrameClock;
pub use config::DemoConfig;
pub use error::{Error, Result};
pub use logging::{init_logging, init_logging_with};
