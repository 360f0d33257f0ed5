use serde::{Deserialize, Serialize};

/// Response for a computed route between two points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponse {
    pub from: String,
    pub to: String,
    /// Total weight of the route; absent when `to` is unreachable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Points along the route, empty when unreachable
    pub path: Vec<String>,
}

/// Listing of every point the network knows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Vec<String>,
}

/// Usage summary served at the API root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageResponse {
    pub service: String,
    pub endpoints: Vec<String>,
    pub points: Vec<String>,
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
