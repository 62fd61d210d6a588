use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::features::graph_builder::NodeIndex;

/// Min-priority frontier keyed by tentative cost
///
/// `Reverse` turns the max-heap into a min-heap. The secondary key is the
/// node index, which follows identifier order, so equal costs pop the
/// lexicographically smaller id first.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<(OrderedFloat<f64>, NodeIndex)>>,
}

impl Frontier {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, cost: f64, node: NodeIndex) {
        self.heap.push(Reverse((OrderedFloat(cost), node)));
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<(f64, NodeIndex)> {
        self.heap
            .pop()
            .map(|Reverse((OrderedFloat(cost), node))| (cost, node))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
