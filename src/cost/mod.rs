//! Physical cost model of the drive.
//!
//! The scheduling core never hard-codes seek physics: it consumes the
//! [`CostModel`] contract, which maps head movements and full schedules to
//! durations and wear figures. [`LinearCostModel`] is the built-in reference
//! implementation, weighting a wrap switch three orders of magnitude above a
//! single lpos step.
//!
//! Every method is a pure function of its inputs: evaluating the same
//! (batch, schedule) pair twice yields identical results.

mod linear;
mod types;

pub use linear::LinearCostModel;
pub use types::{AccessTime, BeltWear, CostModel};
