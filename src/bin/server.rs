use ordered_float::OrderedFloat;
use route_planner::web::server::{start_server, ServerConfig};
use route_planner::RouteGraph;
use std::env;

/// The point network served by default.
///
/// Edges are directed: the return leg of a connection has to be listed
/// explicitly. Point F never appears as a target, so no route reaches it.
fn default_network() -> route_planner::Result<RouteGraph<OrderedFloat<f64>>> {
    RouteGraph::from_edges(&[
        ("A", "B", OrderedFloat(2.0)),
        ("A", "C", OrderedFloat(5.0)),
        ("B", "C", OrderedFloat(1.0)),
        ("B", "D", OrderedFloat(4.0)),
        ("C", "D", OrderedFloat(1.0)),
        ("C", "E", OrderedFloat(6.0)),
        ("D", "E", OrderedFloat(3.0)),
        ("E", "B", OrderedFloat(2.0)),
        ("F", "A", OrderedFloat(4.0)),
    ])
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let port = if args.len() > 1 {
        args[1].parse().unwrap_or(3005)
    } else {
        3005
    };

    let graph = default_network()?;

    println!("🚀 Route planner starting on http://127.0.0.1:{}", port);
    println!("📍 Known points: {}", graph.points().collect::<Vec<_>>().join(", "));

    let config = ServerConfig {
        port,
        ..Default::default()
    };

    start_server(graph, config).await?;

    Ok(())
}
