//! Simulated Annealing (SA).
//!
//! A trajectory search that, like Hill Climbing, picks among the best
//! neighbors of the current board, but may also accept a worse pick with a
//! probability driven by a temperature. The run is bounded by
//! `iteration_factor * size` iterations and returns the best board seen.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, §4.1.2

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
