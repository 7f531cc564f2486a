//! SA configuration.

use crate::error::SearchError;

/// Configuration for the Simulated Annealing search.
///
/// # Examples
///
/// ```
/// use u_nqueens::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_iteration_factor(20)
///     .with_base_seed(5);
/// assert_eq!(config.max_iterations(8).unwrap(), 160);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Iteration budget per queen: `kmax = iteration_factor * size`.
    pub iteration_factor: usize,

    /// Seed of the first iteration. Iteration `k` uses `base_seed + k`.
    pub base_seed: u64,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            iteration_factor: 10,
            base_seed: 0,
        }
    }
}

impl SaConfig {
    pub fn with_iteration_factor(mut self, factor: usize) -> Self {
        self.iteration_factor = factor;
        self
    }

    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.base_seed = seed;
        self
    }

    /// Iteration budget (`kmax`) for a board of `size` queens.
    pub fn max_iterations(&self, size: usize) -> Result<usize, SearchError> {
        self.iteration_factor.checked_mul(size).ok_or_else(|| {
            SearchError::InvalidConfig(format!(
                "iteration budget overflows: {} * {size}",
                self.iteration_factor
            ))
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.iteration_factor == 0 {
            return Err(SearchError::InvalidConfig(
                "iteration_factor must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert_eq!(config.iteration_factor, 10);
        assert_eq!(config.base_seed, 0);
        assert_eq!(config.max_iterations(100), Ok(1000));
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_factor() {
        let config = SaConfig::default().with_iteration_factor(0);
        assert!(matches!(
            config.validate(),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_budget_overflow() {
        let config = SaConfig::default().with_iteration_factor(usize::MAX);
        assert!(config.max_iterations(2).is_err());
    }
}
