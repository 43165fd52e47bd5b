//! Reference cost model with linear seek physics.

use super::types::{BeltWear, CostModel};
use crate::model::{HeadPosition, IoRequest, RequestBatch, Schedule};

/// Linear-weight cost model.
///
/// Seek time is `wrap_switch_ms` per wrap crossed plus `lpos_step_ms` per
/// lpos step; a transfer costs `read_lpos_ms` per lpos covered. The default
/// weighting treats a wrap switch as a thousand times the cost of one lpos
/// step, so the greedy phase strongly prefers staying on the current wrap.
///
/// Belt wear counts one pass per lpos cell the tape crosses under the head,
/// for seeks and reads alike; the total equals the full belt travel
/// distance. Motor wear counts tape-direction reversals between consecutive
/// movements.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearCostModel {
    /// Cost of crossing one wrap, in milliseconds.
    pub wrap_switch_ms: u64,
    /// Cost of one lpos step while seeking, in milliseconds.
    pub lpos_step_ms: u64,
    /// Cost of one lpos step while transferring, in milliseconds.
    pub read_lpos_ms: u64,
}

impl Default for LinearCostModel {
    fn default() -> Self {
        Self {
            wrap_switch_ms: 1000,
            lpos_step_ms: 1,
            read_lpos_ms: 1,
        }
    }
}

impl CostModel for LinearCostModel {
    fn seek_time(&self, from: &HeadPosition, to: &HeadPosition) -> u64 {
        let wraps = u64::from(from.wrap.abs_diff(to.wrap));
        let steps = u64::from(from.lpos.abs_diff(to.lpos));
        wraps * self.wrap_switch_ms + steps * self.lpos_step_ms
    }

    fn read_time(&self, request: &IoRequest) -> u64 {
        u64::from(request.span()) * self.read_lpos_ms
    }

    fn total_belt_wear(&self, batch: &RequestBatch, schedule: &Schedule) -> BeltWear {
        let mut wear = BeltWear::default();
        let mut lpos = batch.head().lpos;
        for &id in &schedule.order {
            let Some(request) = batch.get(id) else {
                continue;
            };
            record_travel(&mut wear, lpos, request.start_lpos);
            record_travel(&mut wear, request.start_lpos, request.end_lpos);
            lpos = request.end_lpos;
        }
        wear
    }

    fn total_motor_wear(&self, batch: &RequestBatch, schedule: &Schedule) -> u64 {
        let mut reversals = 0;
        let mut lpos = batch.head().lpos;
        let mut forward: Option<bool> = None;
        for &id in &schedule.order {
            let Some(request) = batch.get(id) else {
                continue;
            };
            for target in [request.start_lpos, request.end_lpos] {
                if target != lpos {
                    let up = target > lpos;
                    if forward.is_some_and(|was_up| was_up != up) {
                        reversals += 1;
                    }
                    forward = Some(up);
                    lpos = target;
                }
            }
        }
        reversals
    }
}

/// One pass per lpos cell crossed, destination cell excluded.
fn record_travel(wear: &mut BeltWear, from: u32, to: u32) {
    if from == to {
        return;
    }
    let (lo, hi) = if from < to { (from, to) } else { (to, from) };
    for cell in lo..hi {
        *wear.lpos_passes.entry(cell).or_insert(0) += 1;
    }
    wear.total += u64::from(hi - lo);
}
