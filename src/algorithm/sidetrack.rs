use std::collections::VecDeque;
use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::ShortestPathResult;
use crate::data_structures::{Deviation, LeftistHeap};
use crate::graph::Graph;

/// Shortest-path tree towards a destination plus one deviation heap per vertex.
///
/// `heap(v)` holds every sidetrack available on the tree path from `v` to the
/// destination: the non-tree edges leaving `v` and, shared by reference, the
/// heap of `v`'s tree parent.
#[derive(Debug, Clone)]
pub struct SidetrackGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    tree: ShortestPathResult<W>,
    heaps: Vec<LeftistHeap<W>>,
}

impl<W> SidetrackGraph<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Builds the heaps from the original graph and the tree obtained by solving
    /// the reversed graph from the destination.
    ///
    /// Vertices are processed breadth-first from the destination along tree
    /// children, so a parent's heap is final before any child extends it.
    pub fn build<G: Graph<W>>(graph: &G, tree: ShortestPathResult<W>) -> Self {
        let n = graph.vertex_count();
        let children = tree.tree_children();
        let mut heaps = vec![LeftistHeap::new(); n];
        let mut private_deviations = 0usize;
        let mut tree_vertices = 0usize;

        let mut queue = VecDeque::from([tree.root]);
        while let Some(u) = queue.pop_front() {
            tree_vertices += 1;
            let Some(d_u) = tree.distance(u) else { continue };

            let mut heap = std::mem::take(&mut heaps[u]);
            let mut tree_edge_skipped = false;
            for (v, weight) in graph.outgoing_edges(u) {
                let Some(d_v) = tree.distance(v) else { continue };
                let key = weight + d_v - d_u;
                debug_assert!(key >= W::zero(), "negative deviation key on {} -> {}", u, v);

                // Only the first zero-cost copy of the tree edge is the tree edge
                if !tree_edge_skipped && tree.predecessors[u] == Some(v) && key == W::zero() {
                    tree_edge_skipped = true;
                    continue;
                }

                heap = heap.insert(Deviation { key, origin: u, value: v });
                private_deviations += 1;
            }
            debug_assert!(heap.is_valid(), "deviation heap of {} breaks the leftist invariants", u);

            for &child in &children[u] {
                heaps[child] = heap.clone();
                queue.push_back(child);
            }
            heaps[u] = heap;
        }

        log::debug!(
            "sidetrack graph towards {}: {} tree vertices, {} deviations",
            tree.root,
            tree_vertices,
            private_deviations
        );

        SidetrackGraph { tree, heaps }
    }

    pub fn destination(&self) -> usize {
        self.tree.root
    }

    pub fn vertex_count(&self) -> usize {
        self.heaps.len()
    }

    /// Shortest distance from `vertex` to the destination
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.tree.distance(vertex)
    }

    /// Next vertex on the tree path from `vertex` to the destination
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.tree.predecessors.get(vertex).copied().flatten()
    }

    /// Deviation heap of `vertex`; empty for vertices that cannot reach the destination
    pub fn heap(&self, vertex: usize) -> &LeftistHeap<W> {
        &self.heaps[vertex]
    }
}
