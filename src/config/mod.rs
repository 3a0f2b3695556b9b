//! Configuration model for mazewalk.
//!
//! This module defines the Config struct that represents `mazewalk.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

pub use model::Config;
pub use operations::{CONFIG_FILE_NAME, resolve};
