//! Search progress hooks.
//!
//! Runners report every step to a [`SearchMonitor`]. All hooks default to
//! no-ops, so a monitor only implements what it cares about. [`LogMonitor`]
//! prints a progress table to stderr; stdout stays reserved for results.

use std::time::Instant;

use crate::board::Board;

/// Observer of a local search run.
pub trait SearchMonitor {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called once with the starting board.
    fn on_start(&mut self, _initial: &Board) {}

    /// Called after a neighbor has been picked at `iteration`.
    ///
    /// `candidates` is the number of neighbors tied for the best fitness.
    fn on_iteration(&mut self, _iteration: usize, _current: &Board, _candidates: usize) {}

    /// Called when the search moves to `neighbor`.
    fn on_accepted(&mut self, _iteration: usize, _neighbor: &Board) {}

    /// Called when the search stays put and discards `neighbor`.
    fn on_rejected(&mut self, _iteration: usize, _neighbor: &Board) {}

    /// Called when the best board seen so far changes.
    fn on_best_updated(&mut self, _iteration: usize, _best: &Board) {}

    /// Called once when the search stops.
    fn on_end(&mut self, _best: &Board, _iterations: usize) {}
}

/// Monitor that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMonitor;

impl SearchMonitor for NoopMonitor {
    fn name(&self) -> &str {
        "NoopMonitor"
    }
}

/// Prints a progress line to stderr every `log_every` iterations.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    log_every: usize,
    start_time: Instant,
    best_fitness: usize,
    accepted: usize,
    rejected: usize,
}

impl LogMonitor {
    /// Creates a monitor logging every `log_every` iterations (at least 1).
    pub fn new(log_every: usize) -> Self {
        Self {
            log_every: log_every.max(1),
            start_time: Instant::now(),
            best_fitness: 0,
            accepted: 0,
            rejected: 0,
        }
    }

    fn print_header(&self) {
        eprintln!(
            "{:<9} | {:<10} | {:<8} | {:<8} | {:<10} | {:<8}",
            "Elapsed", "Iteration", "Current", "Best", "Candidates", "Accepted"
        );
        eprintln!("{}", "-".repeat(68));
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(100)
    }
}

impl SearchMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_start(&mut self, initial: &Board) {
        self.start_time = Instant::now();
        self.best_fitness = initial.fitness();
        self.accepted = 0;
        self.rejected = 0;
        self.print_header();
    }

    fn on_iteration(&mut self, iteration: usize, current: &Board, candidates: usize) {
        if iteration % self.log_every != 0 {
            return;
        }
        let elapsed = format!("{:.1}s", self.start_time.elapsed().as_secs_f32());
        eprintln!(
            "{:<9} | {:<10} | {:<8} | {:<8} | {:<10} | {:<8}",
            elapsed,
            iteration,
            current.fitness(),
            self.best_fitness,
            candidates,
            self.accepted
        );
    }

    fn on_accepted(&mut self, _iteration: usize, _neighbor: &Board) {
        self.accepted += 1;
    }

    fn on_rejected(&mut self, _iteration: usize, _neighbor: &Board) {
        self.rejected += 1;
    }

    fn on_best_updated(&mut self, _iteration: usize, best: &Board) {
        self.best_fitness = best.fitness();
    }

    fn on_end(&mut self, best: &Board, iterations: usize) {
        eprintln!("{}", "-".repeat(68));
        eprintln!(
            "Search finished after {} iterations in {:.2}s: fitness {}/{} ({} accepted, {} rejected).",
            iterations,
            self.start_time.elapsed().as_secs_f32(),
            best.fitness(),
            best.size(),
            self.accepted,
            self.rejected
        );
    }
}
