//! Concentric BFS-level layout around a focus node.

use crate::graph::{Edge, Node, Point, Topology, index_of, with_positions};
use crate::options::RadialOptions;
use std::collections::VecDeque;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Lays out `nodes` on rings around a centre node.
///
/// Ring `L` holds the nodes at BFS distance `L` from the centre and has radius
/// `L * level_spacing`; nodes not reachable from the centre share one extra outer ring.
/// Edges are treated as undirected.
pub fn layout<P: Clone>(nodes: &[Node<P>], edges: &[Edge], opts: &RadialOptions) -> Vec<Node<P>> {
    if nodes.is_empty() {
        return Vec::new();
    }

    let adjacency = Topology::new(nodes, edges).neighbors();
    let center = opts
        .focus_node_id
        .as_deref()
        .and_then(|id| index_of(nodes, id))
        .unwrap_or_else(|| highest_degree(&adjacency));

    let levels = bfs_levels(&adjacency, center);
    let positions = ring_positions(&levels, opts);
    with_positions(nodes, &positions)
}

/// Index of the node with the most distinct neighbours; the first maximum wins.
pub(crate) fn highest_degree(adjacency: &[Vec<usize>]) -> usize {
    let mut best = 0;
    for (v, ns) in adjacency.iter().enumerate() {
        if ns.len() > adjacency[best].len() {
            best = v;
        }
    }
    best
}

/// Nodes grouped by ring, each ring in placement order.
///
/// Ring 0 is `[center]`. Reached nodes appear in BFS visit order; unreachable nodes
/// form the last ring in input order.
pub(crate) fn bfs_levels(adjacency: &[Vec<usize>], center: usize) -> Vec<Vec<usize>> {
    let mut depth: Vec<Option<usize>> = vec![None; adjacency.len()];
    let mut levels: Vec<Vec<usize>> = vec![vec![center]];
    depth[center] = Some(0);

    let mut queue = VecDeque::from([center]);
    while let Some(v) = queue.pop_front() {
        let next = depth[v].unwrap_or(0) + 1;
        for &w in &adjacency[v] {
            if depth[w].is_some() {
                continue;
            }
            depth[w] = Some(next);
            if levels.len() <= next {
                levels.push(Vec::new());
            }
            levels[next].push(w);
            queue.push_back(w);
        }
    }

    let unreachable: Vec<usize> = (0..adjacency.len()).filter(|&v| depth[v].is_none()).collect();
    if !unreachable.is_empty() {
        tracing::trace!(
            count = unreachable.len(),
            ring = levels.len(),
            "placing unreachable nodes on the outer ring"
        );
        levels.push(unreachable);
    }
    levels
}

fn ring_positions(levels: &[Vec<usize>], opts: &RadialOptions) -> Vec<Point> {
    let node_count = levels.iter().map(Vec::len).sum();
    let mut out = vec![Point::ORIGIN; node_count];
    let (half_w, half_h) = (opts.node_width / 2.0, opts.node_height / 2.0);

    for (level, members) in levels.iter().enumerate() {
        let radius = level as f64 * opts.level_spacing;
        let step = TAU / members.len() as f64;
        for (i, &v) in members.iter().enumerate() {
            let (x, y) = if level == 0 {
                (opts.center.x, opts.center.y)
            } else {
                let angle = i as f64 * step - FRAC_PI_2;
                (
                    opts.center.x + radius * angle.cos(),
                    opts.center.y + radius * angle.sin(),
                )
            };
            out[v] = Point::new(x - half_w, y - half_h);
        }
    }
    out
}
