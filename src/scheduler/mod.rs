//! End-to-end scheduling pipeline.
//!
//! [`ScheduleRunner`] validates the inputs, sizes the output order, runs
//! greedy construction followed by annealing refinement, and reports
//! [`RunMetrics`] (access time, wear, wall-clock duration) for the finalized
//! schedule. Failures are terminal for the run and are reported as
//! [`ScheduleError`]; no partial schedule is guaranteed valid after an error.

mod error;
mod metrics;
mod runner;

pub use error::ScheduleError;
pub use metrics::RunMetrics;
pub use runner::ScheduleRunner;
