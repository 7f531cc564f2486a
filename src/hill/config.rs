//! Hill Climbing configuration.

/// Configuration parameters for Hill Climbing.
///
/// # Examples
///
/// ```
/// use u_nqueens::hill::HillClimbConfig;
///
/// let config = HillClimbConfig::default()
///     .with_max_iterations(10_000)
///     .with_base_seed(3);
/// assert_eq!(config.max_iterations, 10_000);
/// assert_eq!(config.base_seed, 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbConfig {
    /// Maximum number of moves. 0 = no limit.
    pub max_iterations: usize,

    /// Seed of the first iteration. Iteration `i` uses `base_seed + i`.
    pub base_seed: u64,
}

impl HillClimbConfig {
    /// Sets the maximum number of moves (0 = unbounded).
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the seed of the first iteration.
    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.base_seed = seed;
        self
    }
}
