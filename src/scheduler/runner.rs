//! Orchestration of the two scheduling phases.

use std::time::Instant;

use crate::anneal::{AnnealConfig, AnnealRunner};
use crate::cost::CostModel;
use crate::greedy::GreedyRunner;
use crate::model::{RequestBatch, Schedule};

use super::error::ScheduleError;
use super::metrics::RunMetrics;

/// Drives greedy construction and annealing refinement end to end.
pub struct ScheduleRunner;

impl ScheduleRunner {
    /// Schedules `batch` into `out` and reports the run's metrics.
    ///
    /// On success `out` holds a permutation of every request id in the
    /// batch. An empty batch succeeds with an empty order and zero-valued
    /// metrics. On error the contents of `out` are unspecified.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::InvalidArgument`] when the annealing configuration
    /// fails validation or the batch contains duplicate request ids;
    /// [`ScheduleError::OutOfResources`] when the order buffer cannot be
    /// reserved.
    pub fn run<C: CostModel>(
        batch: &RequestBatch,
        model: &C,
        config: &AnnealConfig,
        out: &mut Schedule,
    ) -> Result<RunMetrics, ScheduleError> {
        config.validate().map_err(ScheduleError::InvalidArgument)?;
        if !batch.has_unique_ids() {
            return Err(ScheduleError::InvalidArgument(
                "request ids must be unique within a batch".into(),
            ));
        }

        out.order.clear();
        out.order.try_reserve_exact(batch.len())?;

        let started = Instant::now();
        GreedyRunner::run(batch, model, out);
        let refinement = AnnealRunner::run(batch, model, config, out);
        let run_duration = started.elapsed();

        debug_assert!(out.is_permutation_of(batch));

        let access = model.total_access_time(batch, out);
        let belt = model.total_belt_wear(batch, out);
        let motor_wear = model.total_motor_wear(batch, out);

        tracing::debug!(
            requests = batch.len(),
            best_cost = refinement.best_cost,
            iterations = refinement.iterations,
            ?run_duration,
            "scheduling run complete"
        );

        Ok(RunMetrics {
            run_duration,
            addressing_duration: access.addressing,
            read_duration: access.read,
            belt_wear: belt.total,
            motor_wear,
            lpos_passes: belt.lpos_passes,
        })
    }
}
