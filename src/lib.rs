//! Eppstein KSP - k-th distinct-cost shortest path
//!
//! This library answers "what is the k-th shortest path from `s` to `t`" on a
//! weighted directed graph, where two paths arriving with the same total cost
//! count once. It follows the sidetrack formulation of Eppstein's algorithm:
//! a shortest-path tree towards the destination, one persistent leftist heap
//! of detours per node sharing structure along the tree, and a best-first
//! search over those heaps that yields path costs in non-decreasing order.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;
pub mod web;

// Re-export main types for convenient use
pub use algorithm::{
    dijkstra::Dijkstra,
    k_shortest::{KShortestPaths, ResolvedPath},
    k_best::{KBestEnumerator, RankedPath, Sidetrack},
    ShortestPathAlgorithm, ShortestPathResult,
};
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Invalid rank {0}: ranks start at 1")]
    InvalidRank(usize),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Inconsistent shortest-path tree: {0}")]
    InconsistentTree(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
