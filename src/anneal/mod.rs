//! Simulated-annealing refinement.
//!
//! Improves the greedy order by randomized local search: each iteration
//! reverses a random contiguous block of the working permutation and accepts
//! or rejects the result under a Metropolis-style criterion whose temperature
//! cools over time. Block reversal is a bijection on the index set, so every
//! candidate is a valid permutation by construction.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::AnnealConfig;
pub use runner::{AnnealResult, AnnealRunner};
