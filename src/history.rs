//! Sampled fitness history.
//!
//! Runners record the fitness after every step, but only every
//! `interval`-th value is kept (plus the last one), so an unbounded run
//! holds O(steps / interval) samples.

/// Fitness samples taken every `interval` steps.
#[derive(Debug, Clone)]
pub struct FitnessHistory {
    interval: usize,
    samples: Vec<usize>,
    pending: Option<usize>,
}

impl FitnessHistory {
    /// Starts a history with the fitness before the first step.
    ///
    /// An `interval` of 0 is treated as 1.
    pub fn new(interval: usize, initial: usize) -> Self {
        Self {
            interval: interval.max(1),
            samples: vec![initial],
            pending: None,
        }
    }

    /// Records the fitness after step `step` (1-based).
    pub fn record(&mut self, step: usize, fitness: usize) {
        if step.is_multiple_of(self.interval) {
            self.samples.push(fitness);
            self.pending = None;
        } else {
            self.pending = Some(fitness);
        }
    }

    /// Number of samples kept so far, including a pending final value.
    pub fn len(&self) -> usize {
        self.samples.len() + usize::from(self.pending.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the samples, ending with the fitness after the last step.
    pub fn into_vec(mut self) -> Vec<usize> {
        if let Some(last) = self.pending.take() {
            self.samples.push(last);
        }
        self.samples
    }
}
