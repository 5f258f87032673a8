//! Layered (Sugiyama / dagre-style) layout.
//!
//! The pipeline mirrors dagre's phases on a compact index graph:
//! `acyclic` -> `rank` -> `normalize` -> `order` -> `position`, with
//! `coordinate_system` handling the four rank directions.

use crate::graph::{Edge, Node, Point, Topology, with_positions};
use crate::options::HierarchicalOptions;

pub(crate) mod acyclic;
pub(crate) mod coordinate_system;
pub(crate) mod normalize;
pub(crate) mod order;
pub(crate) mod position;
pub(crate) mod rank;

/// Working graph for the layered pipeline.
///
/// Indices below `real_count` are caller nodes (in input order); indices at or above it
/// are dummy nodes inserted by [`normalize`] to break long edges.
#[derive(Debug, Clone, Default)]
pub(crate) struct LayerGraph {
    pub(crate) real_count: usize,
    pub(crate) node_count: usize,
    pub(crate) edges: Vec<(usize, usize)>,
    /// Rank per node; empty until [`rank::rank`] has run.
    pub(crate) ranks: Vec<usize>,
}

impl LayerGraph {
    pub(crate) fn from_topology(topo: &Topology) -> Self {
        Self {
            real_count: topo.node_count,
            node_count: topo.node_count,
            edges: topo.edges.iter().copied().filter(|(v, w)| v != w).collect(),
            ranks: Vec::new(),
        }
    }

    pub(crate) fn is_dummy(&self, v: usize) -> bool {
        v >= self.real_count
    }

    pub(crate) fn add_dummy(&mut self, rank: usize) -> usize {
        let v = self.node_count;
        self.node_count += 1;
        self.ranks.push(rank);
        v
    }

    /// Outgoing edge indices per node.
    pub(crate) fn out_edges(&self) -> Vec<Vec<usize>> {
        let mut out = vec![Vec::new(); self.node_count];
        for (ix, &(v, _)) in self.edges.iter().enumerate() {
            out[v].push(ix);
        }
        out
    }

    /// Successors per node; parallel edges appear once per edge.
    pub(crate) fn successors(&self) -> Vec<Vec<usize>> {
        let mut out = vec![Vec::new(); self.node_count];
        for &(v, w) in &self.edges {
            out[v].push(w);
        }
        out
    }

    pub(crate) fn predecessors(&self) -> Vec<Vec<usize>> {
        let mut out = vec![Vec::new(); self.node_count];
        for &(v, w) in &self.edges {
            out[w].push(v);
        }
        out
    }
}

/// Lays out `nodes` in ranks following edge direction.
///
/// Returned positions are top-left corners of `node_width` x `node_height` boxes; the
/// bounding box of all nodes starts at the origin.
pub fn layout<P: Clone>(
    nodes: &[Node<P>],
    edges: &[Edge],
    opts: &HierarchicalOptions,
) -> Vec<Node<P>> {
    if nodes.is_empty() {
        return Vec::new();
    }

    let topo = Topology::new(nodes, edges);
    let mut g = LayerGraph::from_topology(&topo);

    let reversed = acyclic::run(&mut g);
    g.ranks = rank::rank(&g);
    normalize::run(&mut g);
    let layers = order::order(&g);
    tracing::trace!(
        reversed,
        ranks = layers.len(),
        dummies = g.node_count - g.real_count,
        "hierarchical ranking done"
    );

    let (width, height) =
        coordinate_system::adjust(opts.direction, opts.node_width, opts.node_height);
    let mut centers = position::position(
        &g,
        &layers,
        width,
        height,
        opts.rank_separation,
        opts.node_separation,
    );
    centers.truncate(g.real_count);
    coordinate_system::undo(opts.direction, &mut centers);

    with_positions(nodes, &to_top_left(&centers))
}

/// Shifts centre anchors so the union of node boxes starts at (0, 0), which is the
/// same as reporting each box by its top-left corner.
fn to_top_left(centers: &[Point]) -> Vec<Point> {
    let min_x = centers.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let min_y = centers.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    centers
        .iter()
        .map(|p| Point::new(p.x - min_x, p.y - min_y))
        .collect()
}
