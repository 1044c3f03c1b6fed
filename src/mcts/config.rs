//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// MCTS search configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// UCB1 exploration constant (default: 1/sqrt(2) = 0.707).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Simulation iterations per decision (default: 100).
    pub iterations: u32,

    /// Plies during which search is bypassed in favor of a uniformly random
    /// legal action (default: 2, the opening placements).
    pub bootstrap_plies: u32,

    /// Random seed for the search RNG.
    /// Same seed produces deterministic decisions.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            exploration_constant: std::f64::consts::FRAC_1_SQRT_2,
            iterations: 100,
            bootstrap_plies: 2,
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with custom iteration budget.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert!((config.exploration_constant - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
        assert_eq!(config.iterations, 100);
        assert_eq!(config.bootstrap_plies, 2);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_exploration(2.0)
            .with_iterations(500)
            .with_seed(123);

        assert_eq!(config.exploration_constant, 2.0);
        assert_eq!(config.iterations, 500);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.seed, deserialized.seed);
        assert_eq!(config.iterations, deserialized.iterations);
    }
}
