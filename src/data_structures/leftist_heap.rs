//! Persistent leftist heap of deviations.
//!
//! Nodes are immutable once built and shared through `Rc`. `merge` and
//! `insert` copy only the nodes on the merge path (the right spines, length
//! `O(log n)`) and point at every other subtree of the inputs. Both inputs stay
//! valid and unchanged, which lets a vertex's heap be built on top of its tree
//! parent's heap without disturbing it.

use std::fmt::Debug;
use std::rc::Rc;

/// Choosing edge `origin -> value` instead of the tree edge out of `origin`.
///
/// `key` is the extra cost `w + d[value] - d[origin]` of the detour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deviation<W> {
    pub key: W,
    pub origin: usize,
    pub value: usize,
}

type Link<W> = Option<Rc<HeapNode<W>>>;

/// One immutable node of a [`LeftistHeap`]
#[derive(Debug)]
pub struct HeapNode<W> {
    deviation: Deviation<W>,
    rank: usize,
    left: Link<W>,
    right: Link<W>,
}

fn rank<W>(link: &Link<W>) -> usize {
    link.as_ref().map_or(0, |node| node.rank)
}

impl<W> HeapNode<W> {
    /// Builds a node, placing the higher-ranked child on the left
    fn join(deviation: Deviation<W>, a: Link<W>, b: Link<W>) -> Self
    where
        W: PartialOrd,
    {
        debug_assert!(
            [&a, &b].into_iter().flatten().all(|c| deviation.key <= c.deviation.key),
            "heap order violated"
        );
        let (left, right) = if rank(&a) >= rank(&b) { (a, b) } else { (b, a) };
        HeapNode {
            deviation,
            rank: 1 + rank(&right),
            left,
            right,
        }
    }

    pub fn deviation(&self) -> &Deviation<W> {
        &self.deviation
    }

    pub fn key(&self) -> W
    where
        W: Copy,
    {
        self.deviation.key
    }

    /// `1 + min(rank(left), rank(right))`; an empty subtree has rank 0
    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn left(&self) -> Option<&Rc<HeapNode<W>>> {
        self.left.as_ref()
    }

    pub fn right(&self) -> Option<&Rc<HeapNode<W>>> {
        self.right.as_ref()
    }
}

/// Handle to a persistent leftist heap; cloning it is `O(1)`
#[derive(Debug)]
pub struct LeftistHeap<W> {
    root: Link<W>,
}

impl<W> Clone for LeftistHeap<W> {
    fn clone(&self) -> Self {
        LeftistHeap {
            root: self.root.clone(),
        }
    }
}

impl<W> Default for LeftistHeap<W> {
    fn default() -> Self {
        LeftistHeap { root: None }
    }
}

impl<W> LeftistHeap<W>
where
    W: PartialOrd + Copy + Debug,
{
    /// Creates an empty heap
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a heap holding one deviation
    pub fn singleton(deviation: Deviation<W>) -> Self {
        LeftistHeap {
            root: Some(Rc::new(HeapNode::join(deviation, None, None))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Root node, holding a deviation of minimum key
    pub fn root(&self) -> Option<&Rc<HeapNode<W>>> {
        self.root.as_ref()
    }

    /// Deviation of minimum key
    pub fn peek(&self) -> Option<&Deviation<W>> {
        self.root.as_deref().map(HeapNode::deviation)
    }

    /// Merges two heaps into a new one; neither input is modified
    pub fn merge(&self, other: &Self) -> Self {
        LeftistHeap {
            root: merge_links(&self.root, &other.root),
        }
    }

    /// Returns a new heap with `deviation` added
    pub fn insert(&self, deviation: Deviation<W>) -> Self {
        self.merge(&Self::singleton(deviation))
    }

    /// Splits off the minimum, returning it with the heap of the remaining
    /// deviations
    pub fn pop(&self) -> Option<(Deviation<W>, Self)> {
        let root = self.root.as_ref()?;
        let rest = LeftistHeap {
            root: merge_links(&root.left, &root.right),
        };
        Some((root.deviation, rest))
    }

    /// Number of deviations reachable from the root
    pub fn len(&self) -> usize {
        fn count<W>(link: &Link<W>) -> usize {
            link.as_ref()
                .map_or(0, |node| 1 + count(&node.left) + count(&node.right))
        }
        count(&self.root)
    }

    /// True if both handles point at the same root node
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// Checks heap order, the leftist property and every stored rank
    pub fn is_valid(&self) -> bool {
        fn check<W: PartialOrd + Copy>(link: &Link<W>) -> bool {
            let Some(node) = link else { return true };
            let ordered = [&node.left, &node.right].into_iter().all(|child| {
                child
                    .as_ref()
                    .map_or(true, |c| node.deviation.key <= c.deviation.key)
            });
            ordered
                && rank(&node.left) >= rank(&node.right)
                && node.rank == 1 + rank(&node.right)
                && check(&node.left)
                && check(&node.right)
        }
        check(&self.root)
    }
}

/// Recursive persistent merge: the smaller root is copied with the same left
/// child and a right child merged with the other heap.
fn merge_links<W>(a: &Link<W>, b: &Link<W>) -> Link<W>
where
    W: PartialOrd + Copy,
{
    match (a, b) {
        (None, _) => b.clone(),
        (_, None) => a.clone(),
        (Some(x), Some(y)) => {
            let (small, large) = if y.deviation.key < x.deviation.key {
                (y, x)
            } else {
                (x, y)
            };
            let right = merge_links(&small.right, &Some(Rc::clone(large)));
            Some(Rc::new(HeapNode::join(
                small.deviation,
                small.left.clone(),
                right,
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dev(key: u32, origin: usize) -> Deviation<u32> {
        Deviation {
            key,
            origin,
            value: origin + 100,
        }
    }

    fn build(keys: &[u32]) -> LeftistHeap<u32> {
        keys.iter()
            .enumerate()
            .fold(LeftistHeap::new(), |heap, (i, &k)| heap.insert(dev(k, i)))
    }

    fn drain(heap: &LeftistHeap<u32>) -> Vec<u32> {
        let mut keys = Vec::new();
        let mut current = heap.clone();
        while let Some((d, rest)) = current.pop() {
            keys.push(d.key);
            current = rest;
        }
        keys
    }

    #[test]
    fn empty_heap() {
        let heap: LeftistHeap<u32> = LeftistHeap::new();
        assert!(heap.is_empty());
        assert!(heap.peek().is_none());
        assert!(heap.pop().is_none());
        assert_eq!(heap.len(), 0);
        assert!(heap.is_valid());
    }

    #[test]
    fn pops_in_key_order_with_duplicates() {
        let heap = build(&[5, 3, 8, 3, 0, 9, 1, 5]);
        assert!(heap.is_valid());
        assert_eq!(heap.len(), 8);
        assert_eq!(heap.peek().map(|d| d.key), Some(0));
        assert_eq!(drain(&heap), vec![0, 1, 3, 3, 5, 5, 8, 9]);
    }

    #[test]
    fn merge_leaves_inputs_untouched() {
        let a = build(&[4, 2, 7]);
        let b = build(&[1, 6, 3, 5]);
        let merged = a.merge(&b);

        assert!(merged.is_valid());
        assert_eq!(drain(&merged), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(drain(&a), vec![2, 4, 7]);
        assert_eq!(drain(&b), vec![1, 3, 5, 6]);
        assert!(a.merge(&LeftistHeap::new()).ptr_eq(&a));
        assert!(LeftistHeap::new().merge(&b).ptr_eq(&b));
    }

    #[test]
    fn insert_shares_untouched_subtrees() {
        let base = build(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let left_before = base.root().and_then(|r| r.left()).map(Rc::clone).unwrap();
        let grown = base.insert(dev(10, 99));

        // The new key sinks down the right spine; the root's left child is reused
        let left_after = grown.root().and_then(|r| r.left()).unwrap();
        assert!(Rc::ptr_eq(&left_before, left_after));
        assert!(!grown.ptr_eq(&base));
        assert_eq!(base.len(), 8);
        assert_eq!(grown.len(), 9);
    }

    #[test]
    fn ranks_follow_leftist_rule() {
        let keys: Vec<u32> = (0..64).map(|i| (i * 37) % 64).collect();
        let heap = build(&keys);
        let root = heap.root().unwrap();
        assert!(heap.is_valid());
        // n >= 2^rank - 1
        assert!(root.rank() <= 6);
        let mut spine = 0;
        let mut node = Some(root);
        while let Some(n) = node {
            spine += 1;
            node = n.right();
        }
        assert_eq!(spine, root.rank());
    }
}
