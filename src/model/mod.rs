//! Data model shared by every scheduling phase.
//!
//! A [`RequestBatch`] pairs the initial [`HeadPosition`] with the full set of
//! pending [`IoRequest`]s; it is read-only to the scheduling core. The
//! [`Schedule`] is the single mutable work product: an ordering of request
//! ids that a downstream executor follows literally.

mod request;
mod schedule;

pub use request::{HeadMode, HeadPosition, IoRequest, RequestBatch};
pub use schedule::Schedule;
