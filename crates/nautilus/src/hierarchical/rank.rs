//! Rank assignment on an acyclic [`LayerGraph`].

use super::LayerGraph;
use std::collections::VecDeque;

/// Longest-path ranking from the sources, followed by [`tighten_sources`].
///
/// Every edge ends at least one rank below its source. Isolated nodes stay at rank 0.
pub(crate) fn rank(g: &LayerGraph) -> Vec<usize> {
    let mut ranks = longest_path(g);
    tighten_sources(g, &mut ranks);
    ranks
}

pub(crate) fn longest_path(g: &LayerGraph) -> Vec<usize> {
    let succ = g.successors();
    let mut indegree = vec![0usize; g.node_count];
    for &(_, w) in &g.edges {
        indegree[w] += 1;
    }

    let mut queue: VecDeque<usize> = (0..g.node_count).filter(|&v| indegree[v] == 0).collect();
    let mut ranks = vec![0usize; g.node_count];
    while let Some(v) = queue.pop_front() {
        for &w in &succ[v] {
            ranks[w] = ranks[w].max(ranks[v] + 1);
            indegree[w] -= 1;
            if indegree[w] == 0 {
                queue.push_back(w);
            }
        }
    }
    ranks
}

/// Pulls each source down to sit directly above its nearest successor, shortening
/// edges that longest-path ranking would stretch from rank 0.
fn tighten_sources(g: &LayerGraph, ranks: &mut [usize]) {
    let succ = g.successors();
    let pred = g.predecessors();
    for v in 0..g.node_count {
        if !pred[v].is_empty() {
            continue;
        }
        if let Some(min) = succ[v].iter().map(|&w| ranks[w]).min() {
            ranks[v] = min - 1;
        }
    }
}
