//! Route planner - shortest routes over a fixed network of named points
//!
//! This library answers point-to-point shortest-route queries on a small
//! directed graph with non-negative edge weights. A label-setting (Dijkstra)
//! search produces the minimum-total-weight path and its distance; the
//! [`web`] module exposes the search as a request/response HTTP service.

pub mod algorithm;
pub mod graph;
pub mod web;

pub use algorithm::{find_shortest_path, PathResult};
/// Re-export main types for convenient use
pub use graph::route_graph::RouteGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown point: {0}")]
    UnknownPoint(String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
