// src/config/mod.rs

pub mod qs_config;

// Re-export main types for convenience
pub use qs_config::{PrimalityConfig, QsConfig, SieveConfig};
