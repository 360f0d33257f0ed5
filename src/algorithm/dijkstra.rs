use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::graph::Graph;

/// Outcome of a point-to-point search.
///
/// `distance` is `None` when `end` cannot be reached from `start`, and the
/// path is empty in that case. Otherwise `path` runs from `start` to `end`
/// inclusive and its edge weights sum to `distance`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Total weight of the route, `None` if `end` is unreachable
    pub distance: Option<W>,

    /// Points along the route, start and end inclusive
    pub path: Vec<usize>,
}

/// Distance and predecessor tables produced by one search
#[derive(Debug)]
struct SearchTables<W> {
    distance: Vec<Option<W>>,
    predecessor: Vec<Option<usize>>,
}

/// Selects the unvisited node with the smallest finite distance.
///
/// Ties resolve to the lowest id, which keeps repeated searches over the
/// same network deterministic. Returns `None` once every remaining
/// unvisited node is unreachable.
fn frontier_min<W>(distance: &[Option<W>], visited: &[bool]) -> Option<(usize, W)>
where
    W: Float + Zero + Debug + Copy,
{
    let mut best: Option<(usize, W)> = None;

    for (node, dist) in distance.iter().enumerate() {
        if visited[node] {
            continue;
        }
        if let Some(dist) = *dist {
            match best {
                Some((_, best_dist)) if best_dist <= dist => {}
                _ => best = Some((node, dist)),
            }
        }
    }

    best
}

/// Runs the label-setting search from `start` over the whole domain
fn run_search<W, G>(graph: &G, start: usize) -> SearchTables<W>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    let n = graph.node_count();

    let mut distance: Vec<Option<W>> = vec![None; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];

    // Distance to start is 0
    distance[start] = Some(W::zero());

    while let Some((u, dist_u)) = frontier_min(&distance, &visited) {
        // Relax all outgoing edges. Strict inequality only: a tie never
        // overwrites an existing predecessor, so the first-found route
        // survives.
        for (v, weight) in graph.outgoing_edges(u) {
            let new_dist = dist_u + weight;

            let should_update = match distance[v] {
                None => true,
                Some(current_dist) => new_dist < current_dist,
            };

            if should_update {
                distance[v] = Some(new_dist);
                predecessor[v] = Some(u);
            }
        }

        visited[u] = true;
    }

    SearchTables {
        distance,
        predecessor,
    }
}

/// Walks the predecessor chain backward from `end` and reverses it.
///
/// Returns the empty path when `end` was never reached, or when the chain
/// breaks before arriving at `start`.
fn extract_path<W>(tables: &SearchTables<W>, start: usize, end: usize) -> Vec<usize>
where
    W: Float + Zero + Debug + Copy,
{
    if tables.distance[end].is_none() {
        return Vec::new();
    }

    let mut path = vec![end];
    let mut current = end;

    while current != start {
        match tables.predecessor[current] {
            Some(pred) => {
                path.push(pred);
                current = pred;
            }
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}

/// Computes the minimum-total-weight route between two points.
///
/// Label-setting search: repeatedly finalize the unvisited node holding the
/// smallest tentative distance, relax its outgoing edges, and stop once no
/// unvisited node is reachable. The distance and predecessor tables live on
/// this call's stack; the graph is never mutated and there are no side
/// effects beyond the returned value. The frontier scan is O(V^2), which is
/// fine at the network sizes this service works with.
///
/// An unreachable `end` yields `distance: None` with an empty path and is a
/// normal result, not an error. `start == end` yields distance zero and the
/// single-point path, even for a point with no edges. Ids outside the
/// graph's domain are reported as unreachable. Correctness requires
/// non-negative edge weights; the search does not check for violations, so
/// enforce that where the network is built.
pub fn find_shortest_path<W, G>(graph: &G, start: usize, end: usize) -> PathResult<W>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    if !graph.has_node(start) || !graph.has_node(end) {
        return PathResult {
            distance: None,
            path: Vec::new(),
        };
    }

    let tables = run_search(graph, start);
    let path = extract_path(&tables, start, end);

    PathResult {
        distance: tables.distance[end],
        path,
    }
}
