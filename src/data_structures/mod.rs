pub mod leftist_heap;
pub mod priority_queue;

pub use leftist_heap::{Deviation, HeapNode, LeftistHeap};
pub use priority_queue::MinPriorityQueue;
