use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use ordered_float::OrderedFloat;
use std::sync::Arc;

use crate::algorithm::find_shortest_path;
use crate::graph::RouteGraph;
use crate::web::models::{ErrorResponse, PointsResponse, RouteResponse, UsageResponse};

/// Shared application state: an immutable snapshot of the route network.
///
/// Every in-flight search borrows the same snapshot, so no locking is
/// needed; replacing the network means building a new state, never mutating
/// this one.
#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<RouteGraph<OrderedFloat<f64>>>,
}

impl AppState {
    pub fn new(graph: RouteGraph<OrderedFloat<f64>>) -> Self {
        Self {
            graph: Arc::new(graph),
        }
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(usage))
        .route("/api/route/:from/:to", get(route_between))
        .route("/api/points", get(list_points))
        .route("/api/health", get(health_check))
}

/// Compute the shortest route between two named points.
///
/// Both labels are validated against the known point set before the search
/// runs; an unreachable destination is a normal response, not an error.
pub async fn route_between(
    State(state): State<AppState>,
    Path((from, to)): Path<(String, String)>,
) -> Result<Json<RouteResponse>, (StatusCode, Json<ErrorResponse>)> {
    let graph = &state.graph;

    let start = graph
        .point_id(&from)
        .ok_or_else(|| unknown_point(graph, &from))?;
    let end = graph
        .point_id(&to)
        .ok_or_else(|| unknown_point(graph, &to))?;

    let result = find_shortest_path(graph.as_ref(), start, end);

    let path: Vec<String> = result
        .path
        .iter()
        .filter_map(|&id| graph.label(id))
        .map(str::to_string)
        .collect();
    let distance = result.distance.map(|d| d.into_inner());

    match distance {
        Some(d) => log::info!("route {} -> {}: distance {}, {} stops", from, to, d, path.len()),
        None => log::info!("route {} -> {}: unreachable", from, to),
    }

    Ok(Json(RouteResponse {
        from,
        to,
        distance,
        path,
    }))
}

/// List every point the network knows
pub async fn list_points(State(state): State<AppState>) -> Json<PointsResponse> {
    Json(PointsResponse {
        points: state.graph.points().map(str::to_string).collect(),
    })
}

/// Describe the API and the known point set
pub async fn usage(State(state): State<AppState>) -> Json<UsageResponse> {
    Json(UsageResponse {
        service: "route_planner".to_string(),
        endpoints: vec![
            "GET /api/route/:from/:to".to_string(),
            "GET /api/points".to_string(),
            "GET /api/health".to_string(),
        ],
        points: state.graph.points().map(str::to_string).collect(),
    })
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn unknown_point(
    graph: &RouteGraph<OrderedFloat<f64>>,
    label: &str,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "unknown_point".to_string(),
            message: format!("Unknown point: {}", label),
            details: Some(serde_json::json!({
                "known_points": graph.points().collect::<Vec<_>>(),
            })),
        }),
    )
}
