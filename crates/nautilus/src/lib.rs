#![forbid(unsafe_code)]

//! Headless layout algorithms for knowledge graphs.
//!
//! `nautilus` takes a plain node/edge graph and assigns a 2D position to every node
//! using one of three strategies:
//!
//! - [`Strategy::Hierarchical`]: layered, dagre-style ranking along a [`Direction`].
//! - [`Strategy::Force`]: spring-electrical simulation for organic clustering.
//! - [`Strategy::Radial`]: BFS rings around a focus node.
//!
//! Layout is a pure function of its inputs. Node ids and payloads are returned
//! untouched, edges with unknown endpoints are ignored, and nothing is random.
//!
//! Cost per call: hierarchical and radial are close to linear in the graph size; the
//! force layout is `O(iterations * n^2)`.

pub mod error;
pub mod force;
pub mod graph;
pub mod hierarchical;
pub mod options;
pub mod radial;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, Node, Point};
pub use options::{
    Algorithm, Direction, ForceOptions, HierarchicalOptions, LayoutOptions, RadialOptions,
    Strategy,
};

/// Typed entry point.
pub fn layout<P: Clone>(graph: &Graph<P>, algorithm: &Algorithm) -> Vec<Node<P>> {
    run(&graph.nodes, &graph.edges, algorithm)
}

/// Lays out with a known `strategy`; invalid option values fall back to defaults.
pub fn layout_with<P: Clone>(
    nodes: &[Node<P>],
    edges: &[Edge],
    strategy: Strategy,
    options: &LayoutOptions,
) -> Vec<Node<P>> {
    run(nodes, edges, &options.algorithm(strategy))
}

/// Lays out by strategy name.
///
/// Unknown strategy names are not an error: the input nodes are returned unchanged,
/// without positions being computed. Use [`apply_layout_strict`] to reject them.
pub fn apply_layout<P: Clone>(
    nodes: &[Node<P>],
    edges: &[Edge],
    strategy: &str,
    options: &LayoutOptions,
) -> Vec<Node<P>> {
    match strategy.parse::<Strategy>() {
        Ok(strategy) => layout_with(nodes, edges, strategy, options),
        Err(err) => {
            tracing::debug!(%err, "returning nodes without layout");
            nodes.to_vec()
        }
    }
}

/// Like [`apply_layout`], but unknown strategy names and invalid option values are
/// reported as errors.
pub fn apply_layout_strict<P: Clone>(
    nodes: &[Node<P>],
    edges: &[Edge],
    strategy: &str,
    options: &LayoutOptions,
) -> Result<Vec<Node<P>>> {
    let strategy = strategy.parse::<Strategy>()?;
    let algorithm = options.try_algorithm(strategy)?;
    Ok(run(nodes, edges, &algorithm))
}

fn run<P: Clone>(nodes: &[Node<P>], edges: &[Edge], algorithm: &Algorithm) -> Vec<Node<P>> {
    tracing::debug!(
        strategy = %algorithm.strategy(),
        nodes = nodes.len(),
        edges = edges.len(),
        "layout"
    );
    match algorithm {
        Algorithm::Hierarchical(opts) => hierarchical::layout(nodes, edges, opts),
        Algorithm::Force(opts) => force::layout(nodes, edges, opts),
        Algorithm::Radial(opts) => radial::layout(nodes, edges, opts),
    }
}
