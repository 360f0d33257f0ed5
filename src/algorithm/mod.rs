pub mod dijkstra;

pub use dijkstra::{find_shortest_path, PathResult};
