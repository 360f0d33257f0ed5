use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::{Float, ToPrimitive, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

/// A directed route network over named points.
///
/// Point labels are interned to dense ids on registration; adjacency is
/// stored as one outgoing edge list per point. The network is built once by
/// its supplier and treated as read-only by every search. Edges are
/// directed: a connection from A to B says nothing about B to A.
#[derive(Debug, Clone)]
pub struct RouteGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Point labels, indexed by dense id
    labels: Vec<String>,

    /// Label -> dense id
    index: HashMap<String, usize>,

    /// Outgoing edges for each point: id -> [(target id, weight)]
    outgoing: Vec<Vec<(usize, W)>>,
}

impl<W> RouteGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty network
    pub fn new() -> Self {
        RouteGraph {
            labels: Vec::new(),
            index: HashMap::new(),
            outgoing: Vec::new(),
        }
    }

    /// Builds a network from `(from, to, weight)` triples, registering every
    /// endpoint along the way
    pub fn from_edges(edges: &[(&str, &str, W)]) -> Result<Self> {
        let mut graph = RouteGraph::new();
        for &(from, to, weight) in edges {
            graph.add_point(from);
            graph.add_point(to);
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Registers a point and returns its dense id.
    ///
    /// Registering an already-known label returns the existing id.
    pub fn add_point(&mut self, label: &str) -> usize {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), id);
        self.outgoing.push(Vec::new());
        id
    }

    /// Adds a directed edge between two registered points.
    ///
    /// Both endpoints must already be registered and the weight must be
    /// non-negative; the search's correctness guarantee only holds for
    /// non-negative weights, so violations are rejected here at the supply
    /// boundary. Adding an edge that already exists replaces its weight.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: W) -> Result<()> {
        let from_id = self
            .point_id(from)
            .ok_or_else(|| Error::UnknownPoint(from.to_string()))?;
        let to_id = self
            .point_id(to)
            .ok_or_else(|| Error::UnknownPoint(to.to_string()))?;

        if weight < W::zero() {
            return Err(Error::NegativeWeight(
                weight.to_f64().unwrap_or(f64::NEG_INFINITY),
            ));
        }

        let edges = &mut self.outgoing[from_id];
        if let Some(edge) = edges.iter_mut().find(|(target, _)| *target == to_id) {
            edge.1 = weight;
        } else {
            edges.push((to_id, weight));
        }

        Ok(())
    }

    /// Looks up the dense id of a point label
    pub fn point_id(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Looks up the label of a dense id
    pub fn label(&self, id: usize) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Returns an iterator over all registered point labels in id order
    pub fn points(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

impl<W> Default for RouteGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for RouteGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.labels.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing.get(node) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_node(&self, node: usize) -> bool {
        node < self.labels.len()
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing
            .get(from)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|&(_, weight)| weight)
    }
}
