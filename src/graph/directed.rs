use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed multigraph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,

    /// Incoming edges for each vertex: vertex_id -> [(source_vertex, weight)]
    incoming_edges: Vec<Vec<(usize, W)>>,

    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new directed graph with the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            outgoing_edges: vec![Vec::new(); vertices],
            incoming_edges: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, reporting the first bad edge
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_capacity(vertices);
        for (from, to, weight) in edges {
            if !graph.has_vertex(from) {
                return Err(Error::InvalidVertex(from));
            }
            if !graph.has_vertex(to) {
                return Err(Error::InvalidVertex(to));
            }
            if weight.is_nan() || weight < W::zero() {
                return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
            }
            graph.add_edge(from, to, weight);
        }
        Ok(graph)
    }

    /// Returns the graph with every edge flipped.
    ///
    /// The reversed out-edges of `v` are the in-edges of `v` in the order they
    /// were added, so solving the reversed graph relaxes edges deterministically.
    pub fn reversed(&self) -> Self {
        let vertices = 0..self.vertex_count();
        DirectedGraph {
            outgoing_edges: vertices
                .clone()
                .map(|v| self.incoming_edges(v).collect())
                .collect(),
            incoming_edges: vertices
                .map(|v| self.outgoing_edges(v).collect())
                .collect(),
            edge_count: self.edge_count,
        }
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing_edges
            .iter()
            .flatten()
            .all(|(_target, weight)| !weight.is_nan() && *weight >= W::zero())
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing_edges.get(vertex) {
            Some(edges) => Box::new(edges.iter().cloned()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.incoming_edges.get(vertex) {
            Some(edges) => Box::new(edges.iter().cloned()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.outgoing_edges.len()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges
            .get(from)
            .map_or(false, |edges| edges.iter().any(|(target, _)| *target == to))
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges.get(from)?.iter()
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
            .fold(None, |best: Option<W>, w| match best {
                Some(b) if b <= w => Some(b),
                _ => Some(w),
            })
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) || weight.is_nan() || weight < W::zero() {
            return false;
        }

        self.outgoing_edges[from].push((to, weight));
        self.incoming_edges[to].push((from, weight));
        self.edge_count += 1;
        true
    }
}
