//! High score tracking
//!
//! A single best score, persisted as a plain integer string.

use crate::persistence::KeyValueStore;

/// Best score across runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    /// Storage key for the persisted value
    pub const STORAGE_KEY: &'static str = "nebula_strike_high_score";

    pub fn new(best: u64) -> Self {
        Self { best }
    }

    /// Parse a stored value. Garbage becomes zero rather than an error.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<u64>() {
            Ok(best) => Self { best },
            Err(_) => {
                log::warn!("Ignoring malformed high score {:?}", raw);
                Self::default()
            }
        }
    }

    /// Record a finished run's score. Returns true if it is a new best.
    pub fn record(&mut self, score: u64) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Load from a store (zero when absent or unreadable)
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Some(raw) => {
                let score = Self::parse(&raw);
                log::info!("Loaded high score {}", score.best);
                score
            }
            None => {
                log::info!("No high score found, starting fresh");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &mut impl KeyValueStore) {
        if store.set(Self::STORAGE_KEY, &self.best.to_string()) {
            log::info!("High score saved ({})", self.best);
        }
    }
}
