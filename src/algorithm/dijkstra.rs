use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::{DirectedGraph, Graph};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinPriorityQueue;
use crate::{Error, Result};

/// Dijkstra's algorithm with lazy deletion: a vertex may sit in the frontier
/// several times, and only its first pop is expanded
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Shortest-path tree directed towards `destination`.
    ///
    /// Solves the reversed graph from `destination`, so `distance(v)` is the
    /// cost from `v` to `destination` and `predecessors[v]` is the next vertex
    /// on a shortest way there.
    pub fn towards<W>(
        &self,
        graph: &DirectedGraph<W>,
        destination: usize,
    ) -> Result<ShortestPathResult<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
    {
        self.compute_shortest_paths(&graph.reversed(), destination)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn compute_shortest_paths(&self, graph: &G, root: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(root) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut settled_count = 0usize;

        let mut frontier = MinPriorityQueue::new();
        distances[root] = Some(W::zero());
        frontier.push(root, W::zero());

        while let Some((u, dist_u)) = frontier.pop() {
            // Later pops of a vertex carry stale, larger distances
            if std::mem::replace(&mut settled[u], true) {
                continue;
            }
            settled_count += 1;

            for (v, weight) in graph.outgoing_edges(u) {
                if settled[v] {
                    continue;
                }
                let candidate = dist_u + weight;
                if distances[v].map_or(true, |best| candidate < best) {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    frontier.push(v, candidate);
                }
            }
        }

        log::debug!("dijkstra from {}: {} of {} vertices settled", root, settled_count, n);

        Ok(ShortestPathResult {
            distances,
            predecessors,
            root,
        })
    }
}
