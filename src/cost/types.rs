//! Cost-model contract and derived metrics.

use std::collections::BTreeMap;

use crate::model::{HeadPosition, IoRequest, RequestBatch, Schedule};

/// Access-time breakdown for a full schedule, in milliseconds.
///
/// Derived on demand; never stored across runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessTime {
    /// Time spent repositioning the head between transfers.
    pub addressing: u64,
    /// Time spent on the transfers themselves.
    pub read: u64,
}

impl AccessTime {
    /// Combined addressing and read duration.
    pub fn total(&self) -> u64 {
        self.addressing + self.read
    }
}

/// Tape-belt wear accumulated by a schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeltWear {
    /// Total lpos cells crossed by the head over the whole run.
    pub total: u64,
    /// Pass count per lpos cell.
    pub lpos_passes: BTreeMap<u32, u64>,
}

/// Maps head movements and schedules to durations and wear figures.
///
/// `seek_time` is non-negative by its return type; symmetry is not assumed.
/// The wear methods are called once per run, after the schedule is
/// finalized, purely for reporting.
pub trait CostModel {
    /// Cost of a single head move, in milliseconds.
    fn seek_time(&self, from: &HeadPosition, to: &HeadPosition) -> u64;

    /// Transfer cost of one request, in milliseconds.
    fn read_time(&self, request: &IoRequest) -> u64;

    /// Access time of a full schedule, replayed from the batch's initial
    /// head position.
    ///
    /// Each step seeks to the request's start position and leaves the head
    /// at its end position. Ids with no matching request in the batch
    /// contribute nothing.
    fn total_access_time(&self, batch: &RequestBatch, schedule: &Schedule) -> AccessTime {
        let mut head = batch.head();
        let mut time = AccessTime::default();
        for &id in &schedule.order {
            let Some(request) = batch.get(id) else {
                continue;
            };
            time.addressing += self.seek_time(&head, &request.start_position());
            time.read += self.read_time(request);
            head = request.end_position();
        }
        time
    }

    /// Belt wear of a finalized schedule.
    fn total_belt_wear(&self, batch: &RequestBatch, schedule: &Schedule) -> BeltWear;

    /// Motor wear of a finalized schedule.
    fn total_motor_wear(&self, batch: &RequestBatch, schedule: &Schedule) -> u64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::LinearCostModel;
    use crate::model::{HeadMode, IoRequest};

    #[test]
    fn test_access_time_total() {
        let time = AccessTime {
            addressing: 30,
            read: 12,
        };
        assert_eq!(time.total(), 42);
    }

    #[test]
    fn test_empty_schedule_costs_nothing() {
        let batch = RequestBatch::new(HeadPosition::new(0, 50, HeadMode::Idle), vec![]);
        let schedule = Schedule::new();
        let time = LinearCostModel::default().total_access_time(&batch, &schedule);
        assert_eq!(time, AccessTime::default());
    }

    #[test]
    fn test_unknown_ids_contribute_nothing() {
        let batch = RequestBatch::new(
            HeadPosition::new(0, 0, HeadMode::Idle),
            vec![IoRequest::new(0, 0, 0, 10)],
        );
        let with_ghost = Schedule {
            order: vec![0, 99],
        };
        let without = Schedule { order: vec![0] };
        let model = LinearCostModel::default();
        assert_eq!(
            model.total_access_time(&batch, &with_ghost),
            model.total_access_time(&batch, &without)
        );
    }
}
