use std::fmt::Debug;
use num_traits::{Float, Zero};

/// Trait representing a weighted directed graph
///
/// Edges are reported in insertion order and parallel edges are kept, so an
/// algorithm walking `outgoing_edges` sees the same sequence on every run.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns an iterator over the incoming edges to a vertex
    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of the cheapest edge between two vertices, if any
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

/// Trait for growing a graph
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Appends a directed edge with the given weight.
    ///
    /// Returns false if an endpoint is missing or the weight is negative or NaN.
    /// An existing edge between the same endpoints is kept; the new one is a
    /// parallel edge.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool;
}
