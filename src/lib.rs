//! Seek-optimizing I/O scheduler for linear tape drives.
//!
//! Given a batch of pending I/O requests against a serpentine tape medium,
//! produces an execution order that minimizes cumulative head-seek time.
//! The head moves across two coordinates, a wrap (track loop) and a linear
//! position (lpos) within the wrap; wrap switches and long lpos travel
//! dominate access latency.
//!
//! Scheduling runs in two phases:
//!
//! - **Greedy construction**: nearest-neighbor ordering by single-move seek
//!   cost from the current head position.
//! - **Annealing refinement**: simulated annealing over the greedy order,
//!   perturbing by random contiguous-block reversal under a Metropolis-style
//!   acceptance criterion with two-regime geometric cooling.
//!
//! The physical cost formulas are pluggable through the [`cost::CostModel`]
//! trait; [`cost::LinearCostModel`] is the built-in reference model. The
//! [`scheduler`] module drives both phases end-to-end and reports access-time
//! and wear metrics for the finalized order.
//!
//! # Concurrency
//!
//! Scheduling is single-threaded, synchronous, and compute-bound: all working
//! buffers are owned by the call stack of one run, so concurrent runs over
//! independent batches need no coordination. Randomness is confined to the
//! annealing phase and is fully determined by an explicit seed.

pub mod anneal;
pub mod cost;
pub mod greedy;
pub mod model;
pub mod scheduler;
