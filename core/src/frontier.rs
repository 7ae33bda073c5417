use std::{cmp::Ordering, collections::BinaryHeap};

struct FrontierEntry<T> {
    priority: f64,
    sequence: u64,
    item: T,
}

impl<T> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for FrontierEntry<T> {}

impl<T> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap and we want the
        // lowest priority first, oldest entry first among equals.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority queue with FIFO ordering between equal priorities.
///
/// There is no decrease-key: callers push an item again with its new
/// priority and skip stale copies when they come out.
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<FrontierEntry<T>>,
    next_sequence: u64,
}

impl<T> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, item: T, priority: f64) {
        self.heap.push(FrontierEntry {
            priority,
            sequence: self.next_sequence,
            item,
        });
        self.next_sequence += 1;
    }

    /// Removes and returns the item with the lowest priority.
    ///
    /// # Panics
    ///
    /// Panics if the frontier is empty. Search loops check
    /// [`is_empty`](Self::is_empty) before every pop.
    pub fn pop(&mut self) -> T {
        match self.heap.pop() {
            Some(entry) => entry.item,
            None => panic!("pop called on an empty frontier"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
