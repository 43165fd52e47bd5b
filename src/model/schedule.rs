//! The schedule work product.

use std::collections::HashSet;

use super::RequestBatch;

/// Execution order for a request batch.
///
/// Holds request ids in the order the executor must service them. A
/// finalized schedule is a permutation of every id in its batch: no
/// duplicates, no omissions, length equal to the batch length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    /// Request ids in execution order.
    pub order: Vec<u32>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True when this order visits every request in `batch` exactly once.
    pub fn is_permutation_of(&self, batch: &RequestBatch) -> bool {
        if self.order.len() != batch.len() {
            return false;
        }
        let mut seen = HashSet::with_capacity(self.order.len());
        self.order
            .iter()
            .all(|&id| batch.get(id).is_some() && seen.insert(id))
    }
}
