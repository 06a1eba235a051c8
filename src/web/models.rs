use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One weighted edge of a submitted graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

/// Query body for `POST /api/kth-path`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KthPathRequest {
    pub node_count: usize,
    pub edges: Vec<WebEdge>,
    pub source: usize,
    pub target: usize,
    #[serde(default = "default_k")]
    pub k: usize,
}

fn default_k() -> usize {
    1
}

/// Cost of one distinct-cost path, by rank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCost {
    pub rank: usize,
    pub cost: f64,
}

/// Answer to a k-th path query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KthPathResponse {
    pub execution_id: Uuid,
    pub computed_at: DateTime<Utc>,
    /// False when the target is unreachable; `path` is then empty
    pub found: bool,
    pub rank: Option<usize>,
    pub cost: Option<f64>,
    pub path: Vec<usize>,
    /// Every distinct cost up to the returned rank
    pub ranked_costs: Vec<RankedCost>,
    pub execution_time_ms: f64,
}

/// Health probe body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
