// src/config/qs_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, Environment, File};
use std::path::Path;
use crate::relation_sieve::block::BLOCK_SIZE;

/// Engine tuning knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QsConfig {
    /// Sieving bounds and margins
    pub sieve: SieveConfig,

    /// Primality testing
    pub primality: PrimalityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SieveConfig {
    /// Relations collected beyond the factor-base size. One extra
    /// already guarantees a kernel vector; a larger margin buys more
    /// congruences to try.
    pub relation_margin: usize,

    /// Largest candidate examined while building the factor base.
    pub factor_base_ceiling: u64,

    /// Largest sieve offset examined before giving up.
    pub max_offset: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimalityConfig {
    /// Miller-Rabin rounds per factor-base candidate beyond the
    /// trial-division range.
    pub miller_rabin_rounds: u32,
}

impl Default for QsConfig {
    fn default() -> Self {
        QsConfig {
            sieve: SieveConfig::default(),
            primality: PrimalityConfig::default(),
        }
    }
}

impl Default for SieveConfig {
    fn default() -> Self {
        SieveConfig {
            relation_margin: 1,
            factor_base_ceiling: (1u64 << 53) - 1,
            max_offset: u64::MAX - BLOCK_SIZE as u64,
        }
    }
}

impl Default for PrimalityConfig {
    fn default() -> Self {
        PrimalityConfig {
            miller_rabin_rounds: 50,
        }
    }
}

impl QsConfig {
    /// Load configuration with precedence: defaults → qsieve.toml →
    /// QSIEVE__* environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&QsConfig::default())?);

        if Path::new("qsieve.toml").exists() {
            builder = builder.add_source(File::with_name("qsieve"));
        }

        builder = builder.add_source(
            Environment::with_prefix("QSIEVE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
