use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Trait representing a weighted directed graph over a dense point domain
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of points in the graph's domain
    fn node_count(&self) -> usize;

    /// Returns the number of directed edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges of a point
    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the point belongs to the graph's domain
    fn has_node(&self, node: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: usize, to: usize) -> Option<W>;
}
