use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Heap slot ordered by priority only; `seq` gives equal priorities FIFO order
#[derive(Debug)]
struct Entry<V, P> {
    priority: P,
    seq: u64,
    value: V,
}

impl<V, P: Ord> PartialEq for Entry<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, P: Ord> Eq for Entry<V, P> {}

impl<V, P: Ord> PartialOrd for Entry<V, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, P: Ord> Ord for Entry<V, P> {
    // Reversed so the std max-heap pops the smallest priority, then the oldest push
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A min-priority queue over `BinaryHeap` for best-first searches.
///
/// Only the priority is compared, never the payload, so values need no
/// ordering of their own. Pops are deterministic: among equal priorities
/// the earliest pushed value comes out first.
#[derive(Debug)]
pub struct MinPriorityQueue<V, P>
where
    P: Ord + Copy + Debug,
{
    heap: BinaryHeap<Entry<V, P>>,
    next_seq: u64,
}

impl<V, P> MinPriorityQueue<V, P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a value with the given priority
    pub fn push(&mut self, value: V, priority: P) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { priority, seq, value });
    }

    /// Removes the value with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|entry| (entry.value, entry.priority))
    }

    /// Returns the smallest priority without removing its value
    pub fn peek_priority(&self) -> Option<P> {
        self.heap.peek().map(|entry| entry.priority)
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for MinPriorityQueue<V, P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
