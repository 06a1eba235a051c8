use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use ordered_float::OrderedFloat;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::k_shortest::KShortestPaths;
use crate::graph::DirectedGraph;
use crate::web::models::*;
use crate::web::server::ServerConfig;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/kth-path", post(kth_path))
        .route("/api/health", get(health_check))
}

fn error_response(status: StatusCode, error: &str, message: String) -> ApiError {
    (status, Json(ErrorResponse {
        error: error.to_string(),
        message,
        details: None,
    }))
}

fn solver_error(err: Error) -> ApiError {
    match err {
        Error::InconsistentTree(_) => {
            log::warn!("internal solver error: {}", err);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", err.to_string())
        }
        Error::InvalidRank(_) => {
            error_response(StatusCode::BAD_REQUEST, "invalid_rank", err.to_string())
        }
        _ => error_response(StatusCode::BAD_REQUEST, "invalid_graph", err.to_string()),
    }
}

/// Solve the request on the calling thread; the solver's heaps never leave it
fn solve(config: &ServerConfig, request: &KthPathRequest) -> Result<KthPathResponse, ApiError> {
    if request.node_count > config.max_nodes || request.edges.len() > config.max_edges {
        return Err(error_response(
            StatusCode::PAYLOAD_TOO_LARGE,
            "graph_too_large",
            format!(
                "Graph has {} nodes and {} edges; limits are {} and {}",
                request.node_count,
                request.edges.len(),
                config.max_nodes,
                config.max_edges
            ),
        ));
    }

    let start_time = Instant::now();
    let graph = DirectedGraph::from_edges(
        request.node_count,
        request
            .edges
            .iter()
            .map(|e| (e.source, e.target, OrderedFloat(e.weight))),
    )
    .map_err(solver_error)?;

    let mut solver = KShortestPaths::new();
    if let Some(limit) = config.expansion_limit {
        solver = solver.with_expansion_limit(limit);
    }

    let (ranked, best) = solver
        .solve(&graph, request.source, request.target, request.k)
        .map_err(solver_error)?;

    let execution_time = start_time.elapsed();

    Ok(KthPathResponse {
        execution_id: Uuid::new_v4(),
        computed_at: Utc::now(),
        found: best.is_some(),
        rank: best.as_ref().map(|p| p.rank),
        cost: best.as_ref().map(|p| p.cost.into_inner()),
        path: best.map(|p| p.nodes).unwrap_or_default(),
        ranked_costs: ranked
            .iter()
            .map(|r| RankedCost {
                rank: r.rank,
                cost: r.cost.into_inner(),
            })
            .collect(),
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
    })
}

/// Find the k-th distinct-cost path in a submitted graph
pub async fn kth_path(
    State(state): State<AppState>,
    Json(request): Json<KthPathRequest>,
) -> Result<Json<KthPathResponse>, ApiError> {
    log::debug!(
        "kth-path request: {} nodes, {} edges, {} -> {} rank {}",
        request.node_count,
        request.edges.len(),
        request.source,
        request.target,
        request.k
    );
    let config = Arc::clone(&state.config);
    let response = tokio::task::spawn_blocking(move || solve(&config, &request))
        .await
        .map_err(|err| {
            log::warn!("kth-path worker failed: {}", err);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                err.to_string(),
            )
        })??;
    Ok(Json(response))
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
