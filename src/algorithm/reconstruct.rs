use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::k_best::Sidetrack;
use crate::algorithm::sidetrack::SidetrackGraph;
use crate::graph::Graph;
use crate::{Error, Result};

/// Replays a path from `source`: take the next pending sidetrack when standing
/// at its origin, otherwise follow the tree towards the destination.
///
/// The walk ends at the destination once every sidetrack is consumed, so
/// walks that pass through the destination and come back are rebuilt whole.
pub fn reconstruct_path<W>(
    sidetracks: &SidetrackGraph<W>,
    source: usize,
    chosen: &[Sidetrack],
) -> Result<Vec<usize>>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    let n = sidetracks.vertex_count();
    if source >= n {
        return Err(Error::InvalidVertex(source));
    }

    let destination = sidetracks.destination();
    let mut pending = chosen.iter().peekable();
    let mut path = Vec::new();
    let mut current = source;
    let mut tree_steps = 0;

    loop {
        path.push(current);

        if let Some(sidetrack) = pending.next_if(|s| s.origin == current) {
            current = sidetrack.target;
            tree_steps = 0;
            continue;
        }
        if current == destination {
            break;
        }

        // Between two sidetracks the walk is a simple tree path
        tree_steps += 1;
        if tree_steps > n {
            return Err(Error::InconsistentTree(format!(
                "predecessor cycle reached from vertex {}",
                current
            )));
        }
        current = sidetracks.predecessor(current).ok_or_else(|| {
            Error::InconsistentTree(format!("vertex {} has no tree edge", current))
        })?;
    }

    if let Some(sidetrack) = pending.next() {
        return Err(Error::InconsistentTree(format!(
            "sidetrack {} -> {} is never reached",
            sidetrack.origin, sidetrack.target
        )));
    }

    Ok(path)
}

/// Sums edge weights along `nodes`, using the cheapest of any parallel edges.
/// `None` if two consecutive nodes are not joined by an edge.
pub fn path_cost<W, G>(graph: &G, nodes: &[usize]) -> Option<W>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    nodes.windows(2).try_fold(W::zero(), |total, pair| {
        graph.get_edge_weight(pair[0], pair[1]).map(|w| total + w)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::dijkstra::Dijkstra;
    use crate::algorithm::ShortestPathResult;
    use crate::graph::DirectedGraph;
    use ordered_float::OrderedFloat;

    type W = OrderedFloat<f64>;

    fn graph(n: usize, edges: &[(usize, usize, f64)]) -> DirectedGraph<W> {
        DirectedGraph::from_edges(n, edges.iter().map(|&(u, v, w)| (u, v, OrderedFloat(w))))
            .unwrap()
    }

    fn sidetracks(g: &DirectedGraph<W>, target: usize) -> SidetrackGraph<W> {
        let tree = Dijkstra::new().towards(&g, target).unwrap();
        SidetrackGraph::build(g, tree)
    }

    #[test]
    fn follows_tree_without_sidetracks() {
        let g = graph(4, &[(0, 1, 1.0), (1, 3, 1.0), (0, 2, 2.0), (2, 3, 1.0)]);
        let st = sidetracks(&g, 3);
        assert_eq!(reconstruct_path(&st, 0, &[]).unwrap(), vec![0, 1, 3]);
        assert_eq!(reconstruct_path(&st, 3, &[]).unwrap(), vec![3]);
    }

    #[test]
    fn splices_sidetracks() {
        let g = graph(4, &[(0, 1, 1.0), (1, 3, 1.0), (0, 2, 2.0), (2, 3, 1.0)]);
        let st = sidetracks(&g, 3);
        let nodes = reconstruct_path(&st, 0, &[Sidetrack { origin: 0, target: 2 }]).unwrap();
        assert_eq!(nodes, vec![0, 2, 3]);
        assert_eq!(path_cost(&g, &nodes), Some(OrderedFloat(3.0)));
    }

    #[test]
    fn loops_through_destination() {
        let g = graph(2, &[(0, 1, 1.0), (1, 0, 2.0)]);
        let st = sidetracks(&g, 1);
        let loop_once = [Sidetrack { origin: 1, target: 0 }];
        let nodes = reconstruct_path(&st, 0, &loop_once).unwrap();
        assert_eq!(nodes, vec![0, 1, 0, 1]);
        assert_eq!(path_cost(&g, &nodes), Some(OrderedFloat(4.0)));
    }

    #[test]
    fn unmatched_sidetrack_is_an_error() {
        let g = graph(4, &[(0, 1, 1.0), (1, 3, 1.0), (0, 2, 2.0), (2, 3, 1.0)]);
        let st = sidetracks(&g, 3);
        let err = reconstruct_path(&st, 0, &[Sidetrack { origin: 2, target: 3 }]).unwrap_err();
        assert!(matches!(err, Error::InconsistentTree(_)));
        assert!(matches!(
            reconstruct_path(&st, 7, &[]),
            Err(Error::InvalidVertex(7))
        ));
    }

    #[test]
    fn predecessor_cycle_is_an_error() {
        let g = graph(3, &[(0, 1, 1.0), (1, 0, 1.0), (2, 2, 1.0)]);
        let broken = ShortestPathResult {
            distances: vec![
                Some(OrderedFloat(1.0)),
                Some(OrderedFloat(1.0)),
                Some(OrderedFloat(0.0)),
            ],
            predecessors: vec![Some(1), Some(0), None],
            root: 2,
        };
        let st = SidetrackGraph::build(&g, broken);
        let err = reconstruct_path(&st, 0, &[]).unwrap_err();
        assert!(matches!(err, Error::InconsistentTree(_)));
    }

    #[test]
    fn path_cost_rejects_missing_edges() {
        let g = graph(3, &[(0, 1, 1.0), (1, 2, 2.0), (0, 1, 0.5)]);
        assert_eq!(path_cost(&g, &[0, 1, 2]), Some(OrderedFloat(2.5)));
        assert_eq!(path_cost(&g, &[0, 2]), None);
        assert_eq!(path_cost(&g, &[1]), Some(OrderedFloat(0.0)));
    }
}
