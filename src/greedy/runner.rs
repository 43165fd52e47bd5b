//! Nearest-neighbor construction loop.

use crate::cost::CostModel;
use crate::model::{RequestBatch, Schedule};

/// Builds the initial schedule by repeated nearest-neighbor selection.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Fills `schedule` with a visiting order for `batch`.
    ///
    /// Starting from the batch's initial head position, each step scans the
    /// unvisited requests, picks the one with the minimum seek time to its
    /// start position (ties go to the lowest index), and advances the head
    /// to that request's end position. O(n²) in the batch length. The result
    /// is a permutation of all request ids; an empty batch yields an empty
    /// order.
    pub fn run<C: CostModel>(batch: &RequestBatch, model: &C, schedule: &mut Schedule) {
        let requests = batch.requests();
        schedule.order.clear();

        let mut visited = vec![false; requests.len()];
        let mut head = batch.head();

        for _ in 0..requests.len() {
            let mut nearest: Option<usize> = None;
            let mut nearest_time = u64::MAX;

            for (index, request) in requests.iter().enumerate() {
                if visited[index] {
                    continue;
                }
                let seek = model.seek_time(&head, &request.start_position());
                if seek < nearest_time {
                    nearest_time = seek;
                    nearest = Some(index);
                }
            }

            if let Some(index) = nearest {
                visited[index] = true;
                schedule.order.push(requests[index].id);
                head = requests[index].end_position();
            }
        }

        tracing::debug!(requests = requests.len(), "greedy construction complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::LinearCostModel;
    use crate::model::{HeadMode, HeadPosition, IoRequest};

    fn batch(head_lpos: u32, requests: Vec<IoRequest>) -> RequestBatch {
        RequestBatch::new(HeadPosition::new(0, head_lpos, HeadMode::Idle), requests)
    }

    #[test]
    fn test_empty_batch_yields_empty_order() {
        let mut schedule = Schedule::new();
        GreedyRunner::run(&batch(0, vec![]), &LinearCostModel::default(), &mut schedule);
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_picks_nearest_request_first() {
        // Request 0 sits exactly under the head; request 2 is a wrap away.
        let batch = batch(
            0,
            vec![
                IoRequest::new(0, 0, 0, 10),
                IoRequest::new(1, 0, 20, 30),
                IoRequest::new(2, 1, 0, 5),
            ],
        );
        let mut schedule = Schedule::new();
        GreedyRunner::run(&batch, &LinearCostModel::default(), &mut schedule);
        assert_eq!(schedule.order, vec![0, 1, 2]);
        assert!(schedule.is_permutation_of(&batch));
    }

    #[test]
    fn test_tie_breaks_on_first_index() {
        let batch = batch(
            0,
            vec![
                IoRequest::new(5, 0, 50, 60),
                IoRequest::new(6, 0, 50, 60),
                IoRequest::new(7, 0, 50, 60),
            ],
        );
        let mut schedule = Schedule::new();
        GreedyRunner::run(&batch, &LinearCostModel::default(), &mut schedule);
        assert_eq!(schedule.order, vec![5, 6, 7]);
    }

    #[test]
    fn test_head_advances_to_end_position() {
        // After reading request 0 the head sits at lpos 100, making
        // request 1 (start 90) nearer than request 2 (start 10).
        let batch = batch(
            0,
            vec![
                IoRequest::new(0, 0, 0, 100),
                IoRequest::new(1, 0, 90, 95),
                IoRequest::new(2, 0, 10, 15),
            ],
        );
        let mut schedule = Schedule::new();
        GreedyRunner::run(&batch, &LinearCostModel::default(), &mut schedule);
        assert_eq!(schedule.order, vec![0, 1, 2]);
    }

    #[test]
    fn test_opaque_ids_are_returned_unchanged() {
        let batch = batch(
            0,
            vec![
                IoRequest::new(900, 0, 5, 6),
                IoRequest::new(17, 0, 300, 310),
                IoRequest::new(3, 2, 0, 1),
            ],
        );
        let mut schedule = Schedule::new();
        GreedyRunner::run(&batch, &LinearCostModel::default(), &mut schedule);
        assert_eq!(schedule.order, vec![900, 17, 3]);
        assert!(schedule.is_permutation_of(&batch));
    }

    #[test]
    fn test_reuses_dirty_output_buffer() {
        let batch = batch(0, vec![IoRequest::new(0, 0, 0, 1)]);
        let mut schedule = Schedule {
            order: vec![9, 9, 9],
        };
        GreedyRunner::run(&batch, &LinearCostModel::default(), &mut schedule);
        assert_eq!(schedule.order, vec![0]);
    }
}
