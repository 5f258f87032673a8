use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A graph node as supplied by the caller.
///
/// `position` is only read by the force layout (as a starting point); every strategy
/// overwrites it in its output. `payload` is never inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<P = serde_json::Value> {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<P>,
}

impl<P> Node<P> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position: None,
            payload: None,
        }
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_payload(mut self, payload: P) -> Self {
        self.payload = Some(payload);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph<P = serde_json::Value> {
    #[serde(default)]
    pub nodes: Vec<Node<P>>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl<P> Default for Graph<P> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<P> Graph<P> {
    pub fn new(nodes: Vec<Node<P>>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }
}

/// Index-based view of a caller graph shared by all strategies.
///
/// Node `i` is the `i`-th input node. Edges whose endpoints are unknown are dropped;
/// duplicate ids resolve to their first occurrence.
#[derive(Debug, Clone)]
pub(crate) struct Topology {
    pub(crate) node_count: usize,
    /// Resolved `(source, target)` pairs in input order. Self loops are kept.
    pub(crate) edges: Vec<(usize, usize)>,
}

impl Topology {
    pub(crate) fn new<P>(nodes: &[Node<P>], edges: &[Edge]) -> Self {
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        for (ix, n) in nodes.iter().enumerate() {
            index.entry(n.id.as_str()).or_insert(ix);
        }

        let mut resolved = Vec::with_capacity(edges.len());
        let mut dangling = 0usize;
        for e in edges {
            match (index.get(e.source.as_str()), index.get(e.target.as_str())) {
                (Some(&v), Some(&w)) => resolved.push((v, w)),
                _ => dangling += 1,
            }
        }
        if dangling > 0 {
            tracing::trace!(dangling, "ignoring edges with unknown endpoints");
        }

        Self {
            node_count: nodes.len(),
            edges: resolved,
        }
    }

    /// Undirected adjacency with distinct neighbours, in first-seen edge order.
    pub(crate) fn neighbors(&self) -> Vec<Vec<usize>> {
        let mut adj: Vec<Vec<usize>> = vec![Vec::new(); self.node_count];
        let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();
        for &(v, w) in &self.edges {
            if v == w || !seen.insert((v.min(w), v.max(w))) {
                continue;
            }
            adj[v].push(w);
            adj[w].push(v);
        }
        adj
    }
}

pub(crate) fn index_of<P>(nodes: &[Node<P>], id: &str) -> Option<usize> {
    nodes.iter().position(|n| n.id == id)
}

/// Copies `nodes`, attaching `positions[i]` to the `i`-th node.
pub(crate) fn with_positions<P: Clone>(nodes: &[Node<P>], positions: &[Point]) -> Vec<Node<P>> {
    debug_assert_eq!(nodes.len(), positions.len());
    nodes
        .iter()
        .zip(positions)
        .map(|(n, p)| Node {
            id: n.id.clone(),
            position: Some(*p),
            payload: n.payload.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_drops_dangling_edges() {
        let nodes: Vec<Node> = vec![Node::new("a"), Node::new("b")];
        let edges = vec![
            Edge::new("a", "b"),
            Edge::new("a", "ghost"),
            Edge::new("ghost", "b"),
        ];
        let topo = Topology::new(&nodes, &edges);
        assert_eq!(topo.edges, vec![(0, 1)]);
    }

    #[test]
    fn duplicate_ids_resolve_to_first_occurrence() {
        let nodes: Vec<Node> = vec![Node::new("a"), Node::new("b"), Node::new("a")];
        let topo = Topology::new(&nodes, &[Edge::new("b", "a")]);
        assert_eq!(topo.node_count, 3);
        assert_eq!(topo.edges, vec![(1, 0)]);
    }

    #[test]
    fn neighbors_are_distinct_and_skip_self_loops() {
        let nodes: Vec<Node> = vec![Node::new("a"), Node::new("b"), Node::new("c")];
        let edges = vec![
            Edge::new("a", "b"),
            Edge::new("b", "a"),
            Edge::new("c", "c"),
            Edge::new("c", "a"),
        ];
        let adj = Topology::new(&nodes, &edges).neighbors();
        assert_eq!(adj[0], vec![1, 2]);
        assert_eq!(adj[1], vec![0]);
        assert_eq!(adj[2], vec![0]);
    }

    #[test]
    fn neighbors_of_a_hub_keep_first_seen_order() {
        let nodes: Vec<Node> = ["hub", "a", "b", "c"].into_iter().map(Node::new).collect();
        let edges = vec![
            Edge::new("c", "hub"),
            Edge::new("hub", "a"),
            Edge::new("hub", "c"),
            Edge::new("b", "hub"),
            Edge::new("a", "hub"),
        ];
        let adj = Topology::new(&nodes, &edges).neighbors();
        assert_eq!(adj[0], vec![3, 1, 2]);
        assert_eq!(adj[3], vec![0]);
    }

    #[test]
    fn node_json_omits_absent_fields() {
        let n: Node = Node::new("a");
        assert_eq!(serde_json::to_string(&n).unwrap(), r#"{"id":"a"}"#);
        let parsed: Node = serde_json::from_str(r#"{"id":"b","payload":{"title":"x"}}"#).unwrap();
        assert_eq!(parsed.payload, Some(serde_json::json!({"title": "x"})));
        assert_eq!(parsed.position, None);
    }
}
