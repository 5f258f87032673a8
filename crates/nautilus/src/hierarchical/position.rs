//! Coordinate assignment in top-to-bottom space.
//!
//! Rows are centred independently; there is no Brandes-Köpf alignment with parents.

use super::LayerGraph;
use crate::graph::Point;

/// Returns node centres for every node of `g` (dummies included).
///
/// Rank `r` is a row at `y = r * (height + rank_sep) + height / 2`. Nodes of a row are
/// packed left to right with `node_sep` between boxes and every row is centred on
/// `x = 0`. Dummy nodes are zero-width.
pub(crate) fn position(
    g: &LayerGraph,
    layers: &[Vec<usize>],
    width: f64,
    height: f64,
    rank_sep: f64,
    node_sep: f64,
) -> Vec<Point> {
    let mut out = vec![Point::ORIGIN; g.node_count];
    let node_width = |v: usize| if g.is_dummy(v) { 0.0 } else { width };

    for (rank, layer) in layers.iter().enumerate() {
        let y = rank as f64 * (height + rank_sep) + height / 2.0;

        let mut xs = Vec::with_capacity(layer.len());
        let mut right = 0.0;
        for (i, &v) in layer.iter().enumerate() {
            let w = node_width(v);
            let left = if i == 0 { 0.0 } else { right + node_sep };
            xs.push(left + w / 2.0);
            right = left + w;
        }

        let shift = right / 2.0;
        for (&v, x) in layer.iter().zip(xs) {
            out[v] = Point::new(x - shift, y);
        }
    }
    out
}
