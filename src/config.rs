//! Generator configuration.
//!
//! Read from the environment once at start-up or built in code:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `TIMETABLE_SEED` | Seed for instructor selection | OS entropy |
//! | `TIMETABLE_FETCH_LIMIT` | Per-query catalog cap | 100 |

use std::env;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

use crate::catalog::FETCH_LIMIT;

pub const SEED_VAR: &str = "TIMETABLE_SEED";
pub const FETCH_LIMIT_VAR: &str = "TIMETABLE_FETCH_LIMIT";

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Fixed rng seed. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Per-query catalog record cap.
    pub fetch_limit: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            fetch_limit: FETCH_LIMIT,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the catalog cap.
    pub fn with_fetch_limit(mut self, limit: usize) -> Self {
        self.fetch_limit = limit;
        self
    }

    /// Loads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads settings through an arbitrary lookup. Unparsable values fall
    /// back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_VAR) {
            match raw.trim().parse() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => warn!(var = SEED_VAR, value = %raw, "ignoring unparsable seed"),
            }
        }

        if let Some(raw) = lookup(FETCH_LIMIT_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => config.fetch_limit = limit,
                _ => warn!(var = FETCH_LIMIT_VAR, value = %raw, "ignoring invalid fetch limit"),
            }
        }

        config
    }

    /// Builds the instructor-selection rng.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
