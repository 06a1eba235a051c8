use std::fmt::Debug;
use num_traits::{Float, Zero};
use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from the root to each vertex; `None` means unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Root vertex ID
    pub root: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distance of `vertex` from the root, `None` if unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Inverts the predecessor array: `children[u]` lists every `v` with `pred[v] = u`,
    /// in increasing vertex order
    pub fn tree_children(&self) -> Vec<Vec<usize>> {
        let mut children = vec![Vec::new(); self.predecessors.len()];
        for (v, pred) in self.predecessors.iter().enumerate() {
            if let Some(u) = *pred {
                children[u].push(v);
            }
        }
        children
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a root vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, root: usize) -> Result<ShortestPathResult<W>>;

    /// Get the shortest path from the root to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        if target >= result.predecessors.len() || result.distances[target].is_none() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;

        // Build path in reverse order
        while current != result.root {
            path.push(current);

            // A tree path never revisits a vertex
            if path.len() > result.predecessors.len() {
                log::warn!("cycle in predecessor tree while tracing vertex {}", target);
                return None;
            }

            match result.predecessors[current] {
                Some(pred) => current = pred,
                None => {
                    log::warn!("vertex {} is reached but has no predecessor", current);
                    return None;
                }
            }
        }

        path.push(result.root);
        path.reverse();

        Some(path)
    }
}
