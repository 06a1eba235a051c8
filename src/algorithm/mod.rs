pub mod traits;
pub mod dijkstra;
pub mod sidetrack;
pub mod k_best;
pub mod reconstruct;
pub mod k_shortest;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
