use crate::graph::{DirectedGraph, Graph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a random directed graph with up to `edge_factor * n` edges.
/// Self-loops may appear but parallel edges are skipped, so a vertex sequence
/// names a unique edge sequence. Weights are whole numbers in `1..=max_weight`,
/// so path sums stay exact.
pub fn generate_random_graph<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: u32,
    rng: &mut R,
) -> DirectedGraph<OrderedFloat<f64>> {
    assert!(n > 0, "n must be positive");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = DirectedGraph::with_capacity(n);
    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = OrderedFloat(rng.gen_range(1..=max_weight) as f64);
        if !graph.has_edge(u, v) {
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a random DAG: every edge goes from a lower to a higher vertex id.
///
/// Each vertex gets up to `out_degree` extra forward edges (no parallel edges),
/// and a spine `i -> i + 1` keeps every vertex connected to `n - 1`. Weights lie
/// in `0..=max_weight`, so zero-cost edges and cost ties show up regularly.
pub fn generate_random_dag<R: Rng>(
    n: usize,
    out_degree: usize,
    max_weight: u32,
    rng: &mut R,
) -> DirectedGraph<OrderedFloat<f64>> {
    assert!(n > 0, "n must be positive");

    let mut graph = DirectedGraph::with_capacity(n);

    for u in 0..n.saturating_sub(1) {
        let weight = OrderedFloat(rng.gen_range(0..=max_weight) as f64);
        graph.add_edge(u, u + 1, weight);

        for _ in 0..out_degree {
            let v = rng.gen_range(u + 1..n);
            let weight = OrderedFloat(rng.gen_range(0..=max_weight) as f64);
            if !graph.has_edge(u, v) {
                graph.add_edge(u, v, weight);
            }
        }
    }

    graph
}

/// Generates a `width * height` grid with right and down edges of random weight.
/// Vertex `(x, y)` has id `y * width + x`; the only sink is the bottom-right corner.
pub fn generate_grid<R: Rng>(
    width: usize,
    height: usize,
    max_weight: u32,
    rng: &mut R,
) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                let weight = OrderedFloat(rng.gen_range(1..=max_weight) as f64);
                graph.add_edge(vertex, vertex + 1, weight);
            }
            if y + 1 < height {
                let weight = OrderedFloat(rng.gen_range(1..=max_weight) as f64);
                graph.add_edge(vertex, vertex + width, weight);
            }
        }
    }

    debug_assert_eq!(graph.vertex_count(), width * height);
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn dag_edges_point_forward() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = generate_random_dag(30, 3, 5, &mut rng);
        for u in 0..g.vertex_count() {
            for (v, w) in g.outgoing_edges(u) {
                assert!(v > u);
                assert!(w.into_inner() >= 0.0);
            }
        }
        assert!(g.has_edge(28, 29));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate_random_graph(50, 4.0, 9, &mut StdRng::seed_from_u64(42));
        let b = generate_random_graph(50, 4.0, 9, &mut StdRng::seed_from_u64(42));
        assert!(a.edge_count() <= 200);
        assert_eq!(a.edge_count(), b.edge_count());
        for u in 0..50 {
            let ea: Vec<_> = a.outgoing_edges(u).collect();
            let eb: Vec<_> = b.outgoing_edges(u).collect();
            assert_eq!(ea, eb);
        }
    }

    #[test]
    fn grid_has_expected_shape() {
        let g = generate_grid(4, 3, 5, &mut StdRng::seed_from_u64(1));
        assert_eq!(g.vertex_count(), 12);
        // (w-1)*h right edges plus w*(h-1) down edges
        assert_eq!(g.edge_count(), 3 * 3 + 4 * 2);
        assert_eq!(g.outgoing_edges(11).count(), 0);
    }
}
