//! # Swarm IO
//!
//! File-facing helpers for the swarm simulation.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - Loading `config.toml` files into a validated `AppConfig`
//! - JSONL logging of per-tick statistics

/// Error types and result aliases for I/O operations
pub mod error;
/// Per-tick statistics log
pub mod history;
/// Configuration file loading
pub mod persistence;

pub use error::{IoError, Result};
pub use history::{HistoryLogger, TickRecord};
pub use persistence::{load_config, load_config_or_default};
