//! Session configuration.

use crate::error::ConfigError;
use crate::types::{GHOST_COUNT, GHOST_REDIRECT_PERCENT, MAX_GHOSTS, PELLET_REWARD, TICK_MS};

/// Tunables for one session. The maze itself lives in [`MazeLayout`](crate::MazeLayout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Interval between update steps in milliseconds
    pub tick_ms: u32,
    pub ghost_count: usize,
    pub pellet_reward: u32,
    /// Percent chance a ghost turns while its path is open
    pub redirect_percent: u32,
    /// RNG seed for ghost headings and redirects
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            ghost_count: GHOST_COUNT,
            pellet_reward: PELLET_REWARD,
            redirect_percent: GHOST_REDIRECT_PERCENT,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Create from environment variables, falling back to defaults
    ///
    /// - `PACMAN_TICK_MS`: tick interval
    /// - `PACMAN_GHOSTS`: ghost count
    /// - `PACMAN_SEED`: RNG seed
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let tick_ms = env::var("PACMAN_TICK_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.tick_ms);

        let ghost_count = env::var("PACMAN_GHOSTS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.ghost_count);

        let seed = Self::env_seed().unwrap_or(defaults.seed);

        Self {
            tick_ms,
            ghost_count,
            seed,
            ..defaults
        }
    }

    /// `PACMAN_SEED`, if set to a valid number
    pub fn env_seed() -> Option<u32> {
        std::env::var("PACMAN_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_ghost_count(mut self, ghost_count: usize) -> Self {
        self.ghost_count = ghost_count;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if self.ghost_count > MAX_GHOSTS {
            return Err(ConfigError::TooManyGhosts(self.ghost_count));
        }
        if self.redirect_percent > 100 {
            return Err(ConfigError::RedirectOutOfRange(self.redirect_percent));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.tick_ms, 200);
        assert_eq!(config.ghost_count, 3);
        assert_eq!(config.pellet_reward, 10);
        assert_eq!(config.redirect_percent, 20);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_config_from_env() {
        // This test just ensures it doesn't panic
        let _config = GameConfig::from_env();
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let zero_tick = GameConfig {
            tick_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(zero_tick.validate(), Err(ConfigError::ZeroTick));

        let crowded = GameConfig::default().with_ghost_count(MAX_GHOSTS + 1);
        assert_eq!(
            crowded.validate(),
            Err(ConfigError::TooManyGhosts(MAX_GHOSTS + 1))
        );

        let odds = GameConfig {
            redirect_percent: 101,
            ..GameConfig::default()
        };
        assert_eq!(odds.validate(), Err(ConfigError::RedirectOutOfRange(101)));
    }
}
