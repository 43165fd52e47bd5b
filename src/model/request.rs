//! Head state and request primitives.

use std::collections::HashMap;

/// Operating mode of the tape head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeadMode {
    /// Parked, no transfer in progress.
    #[default]
    Idle,
    /// Engaged for reading or writing.
    ReadWrite,
}

/// Physical tape-head state at a point in time.
///
/// Mutated only by replaying a sequence of movements; never persisted
/// across scheduling runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeadPosition {
    /// Track loop the head sits on.
    pub wrap: u32,
    /// Linear position within the wrap.
    pub lpos: u32,
    /// Current operating mode.
    pub mode: HeadMode,
}

impl HeadPosition {
    pub fn new(wrap: u32, lpos: u32, mode: HeadMode) -> Self {
        Self { wrap, lpos, mode }
    }
}

/// A single pending I/O request.
///
/// Immutable once read from input: scheduling only reorders requests, it
/// never creates or destroys them. The `id` is opaque and is returned to the
/// caller unchanged in the final order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IoRequest {
    pub id: u32,
    pub wrap: u32,
    pub start_lpos: u32,
    pub end_lpos: u32,
}

impl IoRequest {
    pub fn new(id: u32, wrap: u32, start_lpos: u32, end_lpos: u32) -> Self {
        Self {
            id,
            wrap,
            start_lpos,
            end_lpos,
        }
    }

    /// Head position the drive must seek to before the transfer starts.
    pub fn start_position(&self) -> HeadPosition {
        HeadPosition::new(self.wrap, self.start_lpos, HeadMode::ReadWrite)
    }

    /// Head position once the transfer completes.
    pub fn end_position(&self) -> HeadPosition {
        HeadPosition::new(self.wrap, self.end_lpos, HeadMode::ReadWrite)
    }

    /// Lpos distance covered by the transfer itself.
    pub fn span(&self) -> u32 {
        self.start_lpos.abs_diff(self.end_lpos)
    }
}

/// The unit of scheduling work: an initial head position plus every pending
/// request, indexed 0..n-1 in arrival order.
///
/// Owned by the caller and read-only to the scheduling core. An id → index
/// lookup is built once so that cost evaluation over an id sequence stays
/// O(1) per element.
#[derive(Debug, Clone)]
pub struct RequestBatch {
    head: HeadPosition,
    requests: Vec<IoRequest>,
    index_by_id: HashMap<u32, usize>,
}

impl RequestBatch {
    pub fn new(head: HeadPosition, requests: Vec<IoRequest>) -> Self {
        let index_by_id = requests
            .iter()
            .enumerate()
            .map(|(index, request)| (request.id, index))
            .collect();
        Self {
            head,
            requests,
            index_by_id,
        }
    }

    /// Head position before the first scheduled movement.
    pub fn head(&self) -> HeadPosition {
        self.head
    }

    /// All pending requests in arrival order.
    pub fn requests(&self) -> &[IoRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Looks up a request by id.
    pub fn get(&self, id: u32) -> Option<&IoRequest> {
        self.index_by_id.get(&id).map(|&index| &self.requests[index])
    }

    /// True when no two requests share an id.
    pub fn has_unique_ids(&self) -> bool {
        self.index_by_id.len() == self.requests.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_positions() {
        let request = IoRequest::new(3, 2, 100, 40);
        assert_eq!(
            request.start_position(),
            HeadPosition::new(2, 100, HeadMode::ReadWrite)
        );
        assert_eq!(
            request.end_position(),
            HeadPosition::new(2, 40, HeadMode::ReadWrite)
        );
        assert_eq!(request.span(), 60);
    }

    #[test]
    fn test_batch_lookup_by_id() {
        let batch = RequestBatch::new(
            HeadPosition::new(0, 0, HeadMode::Idle),
            vec![IoRequest::new(7, 0, 0, 10), IoRequest::new(42, 1, 5, 5)],
        );
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.get(42).map(|r| r.wrap), Some(1));
        assert!(batch.get(9).is_none());
        assert!(batch.has_unique_ids());
    }

    #[test]
    fn test_batch_detects_duplicate_ids() {
        let batch = RequestBatch::new(
            HeadPosition::new(0, 0, HeadMode::Idle),
            vec![IoRequest::new(1, 0, 0, 10), IoRequest::new(1, 1, 5, 5)],
        );
        assert!(!batch.has_unique_ids());
    }
}
