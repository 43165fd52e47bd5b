//! Greedy nearest-neighbor construction.
//!
//! Builds the initial visiting order by repeatedly picking the unvisited
//! request with the cheapest seek from the current head position. The result
//! seeds the annealing refinement phase.
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several Heuristics
//!   for the Traveling Salesman Problem"

mod runner;

pub use runner::GreedyRunner;
