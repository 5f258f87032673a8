//! Crossing reduction: order nodes within each rank.
//!
//! Initial order comes from a depth-first walk; it is then refined with alternating
//! barycenter sweeps (down uses predecessors, up uses successors). The ordering with
//! the fewest crossings seen is kept.

use super::LayerGraph;

const MAX_SWEEPS: usize = 24;
const MAX_SWEEPS_WITHOUT_IMPROVEMENT: usize = 4;

/// Returns one `Vec` per rank holding node indices left to right.
///
/// Assumes every edge joins adjacent ranks (see `normalize`).
pub(crate) fn order(g: &LayerGraph) -> Vec<Vec<usize>> {
    let succ = g.successors();
    let pred = g.predecessors();

    let mut layers = init_order(g, &succ);
    let mut best = layers.clone();
    let mut best_cc = cross_count(&layers, &succ, g.node_count);

    let mut sweep = 0;
    let mut since_best = 0;
    while best_cc > 0 && sweep < MAX_SWEEPS && since_best < MAX_SWEEPS_WITHOUT_IMPROVEMENT {
        if sweep % 2 == 0 {
            sweep_down(&mut layers, &pred, g.node_count);
        } else {
            sweep_up(&mut layers, &succ, g.node_count);
        }
        let cc = cross_count(&layers, &succ, g.node_count);
        if cc < best_cc {
            best_cc = cc;
            best = layers.clone();
            since_best = 0;
        } else {
            since_best += 1;
        }
        sweep += 1;
    }
    tracing::trace!(sweeps = sweep, crossings = best_cc, "ordering settled");
    best
}

/// Depth-first walk from nodes sorted by rank; each node is appended to its rank's
/// layer when first visited.
pub(crate) fn init_order(g: &LayerGraph, succ: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let max_rank = g.ranks.iter().copied().max().unwrap_or(0);
    let mut layers: Vec<Vec<usize>> = vec![Vec::new(); max_rank + 1];
    let mut visited = vec![false; g.node_count];

    let mut starts: Vec<usize> = (0..g.node_count).collect();
    starts.sort_by_key(|&v| g.ranks[v]);

    let mut stack = Vec::new();
    for s in starts {
        stack.push(s);
        while let Some(v) = stack.pop() {
            if visited[v] {
                continue;
            }
            visited[v] = true;
            layers[g.ranks[v]].push(v);
            for &w in succ[v].iter().rev() {
                if !visited[w] {
                    stack.push(w);
                }
            }
        }
    }
    layers
}

fn positions(layers: &[Vec<usize>], node_count: usize) -> Vec<usize> {
    let mut pos = vec![0usize; node_count];
    for layer in layers {
        for (i, &v) in layer.iter().enumerate() {
            pos[v] = i;
        }
    }
    pos
}

fn sweep_down(layers: &mut [Vec<usize>], pred: &[Vec<usize>], node_count: usize) {
    let mut pos = positions(layers, node_count);
    for r in 1..layers.len() {
        sort_layer(&mut layers[r], pred, &mut pos);
    }
}

fn sweep_up(layers: &mut [Vec<usize>], succ: &[Vec<usize>], node_count: usize) {
    let mut pos = positions(layers, node_count);
    for r in (0..layers.len().saturating_sub(1)).rev() {
        sort_layer(&mut layers[r], succ, &mut pos);
    }
}

/// Sorts `layer` by the mean position of each node's neighbours in the fixed layer.
///
/// Nodes without neighbours keep their current slot; ties keep their current
/// relative order.
fn sort_layer(layer: &mut Vec<usize>, neighbors: &[Vec<usize>], pos: &mut [usize]) {
    let mut sortable: Vec<(f64, usize, usize)> = Vec::with_capacity(layer.len());
    let mut unsortable: Vec<(usize, usize)> = Vec::new();
    for (i, &v) in layer.iter().enumerate() {
        let ns = &neighbors[v];
        if ns.is_empty() {
            unsortable.push((i, v));
        } else {
            let sum: f64 = ns.iter().map(|&u| pos[u] as f64).sum();
            sortable.push((sum / ns.len() as f64, i, v));
        }
    }
    sortable.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    let mut out = Vec::with_capacity(layer.len());
    let mut pending = unsortable.into_iter().peekable();
    let mut sorted = sortable.into_iter().map(|(_, _, v)| v);
    loop {
        while let Some(&(i, v)) = pending.peek() {
            if i > out.len() {
                break;
            }
            out.push(v);
            pending.next();
        }
        match sorted.next() {
            Some(v) => out.push(v),
            None => break,
        }
    }
    out.extend(pending.map(|(_, v)| v));

    for (i, &v) in out.iter().enumerate() {
        pos[v] = i;
    }
    *layer = out;
}

/// Counts edge crossings between adjacent layers using dagre's accumulator tree.
pub(crate) fn cross_count(layers: &[Vec<usize>], succ: &[Vec<usize>], node_count: usize) -> usize {
    let pos = positions(layers, node_count);
    let mut total = 0;
    for pair in layers.windows(2) {
        let (north, south) = (&pair[0], &pair[1]);
        if south.is_empty() {
            continue;
        }

        let mut south_entries: Vec<(usize, usize)> = Vec::new();
        for &v in north {
            for &w in &succ[v] {
                south_entries.push((pos[v], pos[w]));
            }
        }
        south_entries.sort_unstable();

        let mut first_index = 1;
        while first_index < south.len() {
            first_index <<= 1;
        }
        let tree_size = 2 * first_index - 1;
        first_index -= 1;
        let mut tree = vec![0usize; tree_size];

        for (_, south_pos) in south_entries {
            let mut index = south_pos + first_index;
            tree[index] += 1;
            let mut weight_sum = 0;
            while index > 0 {
                if index % 2 == 1 {
                    weight_sum += tree[index + 1];
                }
                index = (index - 1) >> 1;
                tree[index] += 1;
            }
            total += weight_sum;
        }
    }
    total
}
