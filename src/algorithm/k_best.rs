use std::fmt::Debug;
use std::rc::Rc;
use num_traits::{Float, Zero};

use crate::algorithm::sidetrack::SidetrackGraph;
use crate::data_structures::{HeapNode, MinPriorityQueue};

/// A non-tree edge taken by a path: it leaves the tree at `origin` for `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sidetrack {
    pub origin: usize,
    pub target: usize,
}

/// The `rank`-th distinct path cost, with the sidetracks of one path achieving it
/// in the order the path takes them
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPath<W> {
    pub rank: usize,
    pub cost: W,
    pub sidetracks: Vec<Sidetrack>,
}

/// Frontier entry: a heap node to try as the last sidetrack, after `path`
#[derive(Debug)]
struct Candidate<W> {
    node: Rc<HeapNode<W>>,
    path: Vec<Sidetrack>,
}

/// Lazily yields paths from a source to the sidetrack graph's destination in
/// strictly increasing cost order, one per distinct cost.
///
/// The first item is the shortest path itself (no sidetracks). Each later
/// item comes from a best-first search where a frontier entry stands for
/// "the sidetracks of `path`, then the deviation at `node`". From an entry
/// the search moves to the root of the heap at the sidetrack's target (one
/// more sidetrack) or to either heap child of `node` (a different last
/// sidetrack). Entries of equal cost to the last emitted item are expanded
/// but not emitted.
///
/// On graphs with cycles the sequence is unbounded; bound it with `take(k)`.
/// A zero-cost cycle yields endless equal-cost entries, which
/// [`with_expansion_limit`](Self::with_expansion_limit) guards against.
#[derive(Debug)]
pub struct KBestEnumerator<'a, W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    sidetracks: &'a SidetrackGraph<W>,
    source: usize,
    frontier: MinPriorityQueue<Candidate<W>, W>,
    last_cost: Option<W>,
    emitted: usize,
    expansions: usize,
    expansion_limit: Option<usize>,
}

impl<'a, W> KBestEnumerator<'a, W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Returns `None` when the destination is unreachable from `source`
    pub fn new(sidetracks: &'a SidetrackGraph<W>, source: usize) -> Option<Self> {
        sidetracks.distance(source)?;
        Some(KBestEnumerator {
            sidetracks,
            source,
            frontier: MinPriorityQueue::new(),
            last_cost: None,
            emitted: 0,
            expansions: 0,
            expansion_limit: None,
        })
    }

    /// Stop after popping `limit` frontier entries
    pub fn with_expansion_limit(mut self, limit: Option<usize>) -> Self {
        self.expansion_limit = limit;
        self
    }

    /// Frontier entries popped so far
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    fn emit(&mut self, cost: W, sidetracks: Vec<Sidetrack>) -> RankedPath<W> {
        self.last_cost = Some(cost);
        self.emitted += 1;
        RankedPath {
            rank: self.emitted,
            cost,
            sidetracks,
        }
    }

    fn shortest(&mut self) -> Option<RankedPath<W>> {
        let cost = self.sidetracks.distance(self.source)?;
        if let Some(root) = self.sidetracks.heap(self.source).root() {
            self.frontier.push(
                Candidate {
                    node: Rc::clone(root),
                    path: Vec::new(),
                },
                cost + root.key(),
            );
        }
        Some(self.emit(cost, Vec::new()))
    }
}

impl<'a, W> Iterator for KBestEnumerator<'a, W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    type Item = RankedPath<W>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted == 0 {
            return self.shortest();
        }

        while let Some((candidate, cost)) = self.frontier.pop() {
            if self.expansion_limit.map_or(false, |limit| self.expansions >= limit) {
                log::warn!(
                    "k-best search stopped after {} expansions with {} results",
                    self.expansions,
                    self.emitted
                );
                self.frontier.clear();
                return None;
            }
            self.expansions += 1;

            let Candidate { node, path } = candidate;
            let deviation = *node.deviation();
            log::trace!(
                "pop cost {:?}: sidetrack {} -> {} after {} others",
                cost,
                deviation.origin,
                deviation.value,
                path.len()
            );

            let mut extended = path.clone();
            extended.push(Sidetrack {
                origin: deviation.origin,
                target: deviation.value,
            });

            // One more sidetrack, taken somewhere after arriving at the target
            if let Some(next) = self.sidetracks.heap(deviation.value).root() {
                self.frontier.push(
                    Candidate {
                        node: Rc::clone(next),
                        path: extended.clone(),
                    },
                    cost + next.key(),
                );
            }

            // Same prefix, next-best choice of final sidetrack
            for child in [node.left(), node.right()].into_iter().flatten() {
                self.frontier.push(
                    Candidate {
                        node: Rc::clone(child),
                        path: path.clone(),
                    },
                    cost + child.key() - deviation.key,
                );
            }

            if self.last_cost.map_or(true, |last| cost > last) {
                return Some(self.emit(cost, extended));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::dijkstra::Dijkstra;
    use crate::graph::DirectedGraph;
    use ordered_float::OrderedFloat;

    type W = OrderedFloat<f64>;

    fn sidetracks(n: usize, edges: &[(usize, usize, f64)], target: usize) -> SidetrackGraph<W> {
        let graph = DirectedGraph::from_edges(
            n,
            edges.iter().map(|&(u, v, w)| (u, v, OrderedFloat(w))),
        )
        .unwrap();
        let tree = Dijkstra::new().towards(&graph, target).unwrap();
        SidetrackGraph::build(&graph, tree)
    }

    fn costs(enumerator: KBestEnumerator<'_, W>, k: usize) -> Vec<f64> {
        enumerator.take(k).map(|p| p.cost.into_inner()).collect()
    }

    #[test]
    fn diamond_yields_both_paths() {
        let st = sidetracks(4, &[(0, 1, 1.0), (1, 3, 1.0), (0, 2, 2.0), (2, 3, 1.0)], 3);
        let results: Vec<_> = KBestEnumerator::new(&st, 0).unwrap().take(5).collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].rank, 1);
        assert_eq!(results[0].cost, OrderedFloat(2.0));
        assert!(results[0].sidetracks.is_empty());
        assert_eq!(results[1].rank, 2);
        assert_eq!(results[1].cost, OrderedFloat(3.0));
        assert_eq!(results[1].sidetracks, vec![Sidetrack { origin: 0, target: 2 }]);
    }

    #[test]
    fn equal_costs_collapse() {
        // Three routes of cost 2 and one of cost 5
        let st = sidetracks(
            5,
            &[
                (0, 1, 1.0),
                (1, 4, 1.0),
                (0, 2, 1.0),
                (2, 4, 1.0),
                (0, 3, 1.0),
                (3, 4, 1.0),
                (0, 4, 5.0),
            ],
            4,
        );
        let enumerator = KBestEnumerator::new(&st, 0).unwrap();
        assert_eq!(costs(enumerator, 10), vec![2.0, 5.0]);
    }

    #[test]
    fn chained_sidetracks() {
        // Tree 0 -> 1 -> 2 -> 3 (cost 3); detours 0 -> 2 (+1) and 1 -> 3 (+2)
        let st = sidetracks(
            4,
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (1, 3, 4.0), (0, 2, 3.0)],
            3,
        );
        let results: Vec<_> = KBestEnumerator::new(&st, 0).unwrap().collect();
        let summary: Vec<_> = results.iter().map(|r| r.cost.into_inner()).collect();
        // 0-1-2-3 = 3, 0-2-3 = 4, 0-1-3 = 5
        assert_eq!(summary, vec![3.0, 4.0, 5.0]);
        assert_eq!(results[2].sidetracks, vec![Sidetrack { origin: 1, target: 3 }]);
    }

    #[test]
    fn cycle_through_destination_keeps_growing() {
        // 0 -> 1 (1), 1 -> 0 (2): every loop adds 3
        let st = sidetracks(2, &[(0, 1, 1.0), (1, 0, 2.0)], 1);
        let enumerator = KBestEnumerator::new(&st, 0).unwrap();
        assert_eq!(costs(enumerator, 4), vec![1.0, 4.0, 7.0, 10.0]);
    }

    #[test]
    fn source_equal_to_destination() {
        let st = sidetracks(2, &[(0, 1, 1.0)], 0);
        let results: Vec<_> = KBestEnumerator::new(&st, 0).unwrap().collect();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].cost, OrderedFloat(0.0));
    }

    #[test]
    fn unreachable_source_gives_no_enumerator() {
        let st = sidetracks(3, &[(0, 1, 1.0)], 1);
        assert!(KBestEnumerator::new(&st, 2).is_none());
        assert!(KBestEnumerator::new(&st, 0).is_some());
    }

    #[test]
    fn expansion_limit_stops_zero_cost_cycle() {
        // 0 <-> 2 costs nothing, so there are endless walks of cost 1
        let st = sidetracks(3, &[(0, 1, 1.0), (0, 2, 0.0), (2, 0, 0.0), (1, 1, 1.0)], 1);
        let mut enumerator = KBestEnumerator::new(&st, 0)
            .unwrap()
            .with_expansion_limit(Some(50));
        assert_eq!(enumerator.next().map(|p| p.cost), Some(OrderedFloat(1.0)));
        // The self-loop at 1 would give cost 2, but equal-cost walks come first
        // and are never exhausted
        assert_eq!(enumerator.next(), None);
        assert_eq!(enumerator.expansions(), 50);
    }
}
