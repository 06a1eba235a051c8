use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::k_best::{KBestEnumerator, RankedPath, Sidetrack};
use crate::algorithm::reconstruct::reconstruct_path;
use crate::algorithm::sidetrack::SidetrackGraph;
use crate::graph::{DirectedGraph, Graph};
use crate::{Error, Result};

/// The k-th distinct-cost path as an explicit vertex sequence
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPath<W> {
    /// Rank actually reached; below the requested k when fewer distinct costs exist
    pub rank: usize,
    pub cost: W,
    /// Vertices from source to destination, both included
    pub nodes: Vec<usize>,
    pub sidetracks: Vec<Sidetrack>,
}

/// K-th shortest path solver: shortest-path tree towards the destination,
/// sidetrack heaps, then best-first enumeration of distinct costs
#[derive(Debug, Clone, Default)]
pub struct KShortestPaths {
    expansion_limit: Option<usize>,
}

impl KShortestPaths {
    /// Create a solver without an expansion limit
    pub fn new() -> Self {
        KShortestPaths {
            expansion_limit: None,
        }
    }

    /// Bound the number of frontier entries the enumerator may pop per query.
    ///
    /// Needed only when the graph has zero-cost cycles on the way to the
    /// destination; the search stops with the results found so far.
    pub fn with_expansion_limit(mut self, limit: usize) -> Self {
        self.expansion_limit = Some(limit);
        self
    }

    pub fn expansion_limit(&self) -> Option<usize> {
        self.expansion_limit
    }

    /// Solve the reversed graph from `target` and build every vertex's deviation heap
    pub fn build_sidetracks<W>(
        &self,
        graph: &DirectedGraph<W>,
        target: usize,
    ) -> Result<SidetrackGraph<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
    {
        if !graph.has_vertex(target) {
            return Err(Error::InvalidVertex(target));
        }
        debug_assert!(graph.validate_non_negative());

        let tree = Dijkstra::new().towards(graph, target)?;
        Ok(SidetrackGraph::build(graph, tree))
    }

    /// Up to `k` paths of strictly increasing cost, shortest first.
    /// Empty when `target` is unreachable from `source`.
    pub fn ranked_paths<W>(
        &self,
        graph: &DirectedGraph<W>,
        source: usize,
        target: usize,
        k: usize,
    ) -> Result<Vec<RankedPath<W>>>
    where
        W: Float + Zero + Debug + Copy + Ord,
    {
        self.validate(graph, source, k)?;
        let sidetracks = self.build_sidetracks(graph, target)?;
        Ok(self.enumerate(&sidetracks, source, k))
    }

    /// The `k`-th distinct-cost path from `source` to `target`, or the costliest
    /// one found when fewer than `k` distinct costs exist.
    ///
    /// `Ok(None)` means `target` is unreachable from `source`.
    pub fn kth_path<W>(
        &self,
        graph: &DirectedGraph<W>,
        source: usize,
        target: usize,
        k: usize,
    ) -> Result<Option<ResolvedPath<W>>>
    where
        W: Float + Zero + Debug + Copy + Ord,
    {
        self.solve(graph, source, target, k).map(|(_, best)| best)
    }

    /// Every ranked cost up to `k` together with the resolved last one
    pub fn solve<W>(
        &self,
        graph: &DirectedGraph<W>,
        source: usize,
        target: usize,
        k: usize,
    ) -> Result<(Vec<RankedPath<W>>, Option<ResolvedPath<W>>)>
    where
        W: Float + Zero + Debug + Copy + Ord,
    {
        self.validate(graph, source, k)?;
        let sidetracks = self.build_sidetracks(graph, target)?;
        let ranked = self.enumerate(&sidetracks, source, k);

        let Some(best) = ranked.last() else {
            log::debug!("no path from {} to {}", source, target);
            return Ok((ranked, None));
        };
        if best.rank < k {
            log::debug!(
                "only {} distinct costs from {} to {}; wanted {}",
                best.rank,
                source,
                target,
                k
            );
        }

        let nodes = match reconstruct_path(&sidetracks, source, &best.sidetracks) {
            Ok(nodes) => nodes,
            Err(err) => {
                log::warn!("cannot rebuild rank {} path from {}: {}", best.rank, source, err);
                return Err(err);
            }
        };
        let resolved = ResolvedPath {
            rank: best.rank,
            cost: best.cost,
            nodes,
            sidetracks: best.sidetracks.clone(),
        };
        Ok((ranked, Some(resolved)))
    }

    fn validate<W>(&self, graph: &DirectedGraph<W>, source: usize, k: usize) -> Result<()>
    where
        W: Float + Zero + Debug + Copy,
    {
        if k == 0 {
            return Err(Error::InvalidRank(k));
        }
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        Ok(())
    }

    fn enumerate<W>(
        &self,
        sidetracks: &SidetrackGraph<W>,
        source: usize,
        k: usize,
    ) -> Vec<RankedPath<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
    {
        match KBestEnumerator::new(sidetracks, source) {
            Some(enumerator) => {
                let results: Vec<_> = enumerator
                    .with_expansion_limit(self.expansion_limit)
                    .take(k)
                    .collect();
                log::debug!("enumerated {} of {} requested costs", results.len(), k);
                results
            }
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    type W = OrderedFloat<f64>;

    fn diamond() -> DirectedGraph<W> {
        DirectedGraph::from_edges(
            4,
            vec![
                (0, 1, OrderedFloat(1.0)),
                (1, 3, OrderedFloat(1.0)),
                (0, 2, OrderedFloat(2.0)),
                (2, 3, OrderedFloat(1.0)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn diamond_ranks() {
        let g = diamond();
        let solver = KShortestPaths::new();

        let first = solver.kth_path(&g, 0, 3, 1).unwrap().unwrap();
        assert_eq!(first.cost, OrderedFloat(2.0));
        assert_eq!(first.nodes, vec![0, 1, 3]);

        let second = solver.kth_path(&g, 0, 3, 2).unwrap().unwrap();
        assert_eq!(second.cost, OrderedFloat(3.0));
        assert_eq!(second.nodes, vec![0, 2, 3]);

        let third = solver.kth_path(&g, 0, 3, 3).unwrap().unwrap();
        assert_eq!(third, second);
    }

    #[test]
    fn rejects_bad_queries() {
        let g = diamond();
        let solver = KShortestPaths::new();
        assert!(matches!(solver.kth_path(&g, 0, 3, 0), Err(Error::InvalidRank(0))));
        assert!(matches!(solver.kth_path(&g, 4, 3, 1), Err(Error::InvalidVertex(4))));
        assert!(matches!(solver.kth_path(&g, 0, 9, 1), Err(Error::InvalidVertex(9))));
    }

    #[test]
    fn unreachable_is_none() {
        let g = diamond();
        let solver = KShortestPaths::new();
        assert_eq!(solver.kth_path(&g, 3, 0, 1).unwrap(), None);
        assert!(solver.ranked_paths(&g, 3, 0, 4).unwrap().is_empty());
    }

    #[test]
    fn expansion_limit_is_applied() {
        let g: DirectedGraph<W> = DirectedGraph::from_edges(
            3,
            vec![
                (0, 1, OrderedFloat(1.0)),
                (0, 2, OrderedFloat(0.0)),
                (2, 0, OrderedFloat(0.0)),
                (1, 1, OrderedFloat(1.0)),
            ],
        )
        .unwrap();
        let solver = KShortestPaths::new().with_expansion_limit(100);
        assert_eq!(solver.expansion_limit(), Some(100));
        let best = solver.kth_path(&g, 0, 1, 3).unwrap().unwrap();
        assert_eq!(best.rank, 1);
        assert_eq!(best.nodes, vec![0, 1]);
    }
}
