use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::keywords::KeywordTable;

/// Central configuration loaded from environment variables.
///
/// Everything is optional: the demo runs out of the box with the built-in
/// keyword table and entropy-based perturbation. The .env file is loaded
/// automatically at startup via dotenvy.
pub struct Config {
    /// Path to a JSON keyword-table override (TRIAGE_KEYWORDS env var)
    pub keywords_path: Option<PathBuf>,
    /// Seed for a reproducible perturbation stream (TRIAGE_SEED env var).
    /// Unset means each run draws fresh entropy.
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let keywords_path = env::var("TRIAGE_KEYWORDS").ok().map(PathBuf::from);

        let seed = match env::var("TRIAGE_SEED") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .with_context(|| format!("TRIAGE_SEED must be a u64, got \"{raw}\""))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            keywords_path,
            seed,
        })
    }

    /// Resolve the keyword table: the override file when configured,
    /// otherwise the built-in default.
    pub fn keyword_table(&self) -> Result<KeywordTable> {
        match &self.keywords_path {
            Some(path) => KeywordTable::from_json_file(path),
            None => Ok(KeywordTable::default()),
        }
    }

    /// Build the perturbation generator: seeded when a seed is configured
    /// (or passed on the command line), fresh OS entropy otherwise.
    pub fn rng(&self, cli_seed: Option<u64>) -> StdRng {
        match cli_seed.or(self.seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
