//! Annealing refinement loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::AnnealConfig;
use crate::cost::CostModel;
use crate::model::{RequestBatch, Schedule};

/// Best cost is sampled into the history every this many iterations.
const HISTORY_INTERVAL: usize = 100;

/// Acceptance exponents beyond this magnitude are clamped before `exp`.
const MAX_EXPONENT: f64 = 100.0;

/// Result of an annealing refinement run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// Cost of the best order found (addressing + read, in milliseconds).
    pub best_cost: f64,

    /// Number of perturbations evaluated.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Accepted moves, improvements included.
    pub accepted_moves: usize,

    /// Moves that improved on the best cost.
    pub improving_moves: usize,

    /// Best cost sampled at regular intervals. Non-increasing.
    pub cost_history: Vec<f64>,
}

/// Executes the annealing refinement phase.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Refines `schedule` in place and leaves the best order observed in it.
    ///
    /// `schedule` must already hold a valid permutation of the batch
    /// (normally the greedy order). The only perturbation operator is
    /// contiguous-block reversal, so validity is preserved through every
    /// iteration. Orders shorter than two positions are returned untouched.
    pub fn run<C: CostModel>(
        batch: &RequestBatch,
        model: &C,
        config: &AnnealConfig,
        schedule: &mut Schedule,
    ) -> AnnealResult {
        config.validate().expect("invalid AnnealConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let n = schedule.len();
        let mut best_cost = model.total_access_time(batch, schedule).total() as f64;
        let mut temperature = config.initial_temperature;
        let mut cost_history = vec![best_cost];

        if n < 2 {
            return AnnealResult {
                best_cost,
                iterations: 0,
                final_temperature: temperature,
                accepted_moves: 0,
                improving_moves: 0,
                cost_history,
            };
        }

        // Three distinct buffers: the working order, the perturbed candidate,
        // and the best order seen.
        let mut current = schedule.clone();
        let mut candidate = schedule.clone();
        let mut best = schedule.clone();

        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        while iterations < config.max_iterations && temperature > config.min_temperature {
            candidate.order.copy_from_slice(&current.order);

            // Reverse a random contiguous block; bounds clamp to the
            // sequence length.
            let max_block = config.max_block_len.min(n);
            let min_block = config.min_block_len.min(max_block);
            let block = rng.random_range(min_block..=max_block);
            let start = rng.random_range(0..=n - block);
            candidate.order[start..start + block].reverse();

            // Cost of the freshly perturbed candidate.
            let candidate_cost = model.total_access_time(batch, &candidate).total() as f64;

            let exponent =
                ((best_cost - candidate_cost) / temperature).clamp(-MAX_EXPONENT, MAX_EXPONENT);
            let accept =
                candidate_cost < best_cost || rng.random_range(0.0..1.0) < exponent.exp();

            if accept {
                current.order.copy_from_slice(&candidate.order);
                accepted_moves += 1;

                if candidate_cost < best_cost {
                    best.order.copy_from_slice(&candidate.order);
                    best_cost = candidate_cost;
                    improving_moves += 1;
                }
            }

            temperature *= if temperature > config.cold_threshold {
                config.cooling_rate
            } else {
                config.cold_cooling_rate
            };
            iterations += 1;

            if iterations.is_multiple_of(HISTORY_INTERVAL) {
                cost_history.push(best_cost);
            }
        }

        if cost_history
            .last()
            .is_none_or(|&last| (last - best_cost).abs() > 1e-12)
        {
            cost_history.push(best_cost);
        }

        schedule.order.copy_from_slice(&best.order);

        tracing::debug!(
            iterations,
            accepted_moves,
            improving_moves,
            best_cost,
            final_temperature = temperature,
            "annealing refinement complete"
        );

        AnnealResult {
            best_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        }
    }
}
