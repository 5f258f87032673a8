use nautilus::hierarchical;
use nautilus::{Direction, Edge, HierarchicalOptions, Node, Point};

fn nodes(ids: &[&str]) -> Vec<Node> {
    ids.iter().map(|id| Node::new(*id)).collect()
}

fn edges(pairs: &[(&str, &str)]) -> Vec<Edge> {
    pairs.iter().map(|(s, t)| Edge::new(*s, *t)).collect()
}

fn pos(out: &[Node], id: &str) -> Point {
    out.iter()
        .find(|n| n.id == id)
        .and_then(|n| n.position)
        .unwrap_or_else(|| panic!("missing position for {id}"))
}

fn opts(direction: Direction) -> HierarchicalOptions {
    HierarchicalOptions {
        direction,
        ..Default::default()
    }
}

#[test]
fn hierarchical_ranks_follow_edge_direction_top_to_bottom() {
    let out = hierarchical::layout(
        &nodes(&["a", "b", "c"]),
        &edges(&[("a", "b"), ("b", "c")]),
        &opts(Direction::TB),
    );
    let (a, b, c) = (pos(&out, "a"), pos(&out, "b"), pos(&out, "c"));
    assert!(a.y < b.y && b.y < c.y, "{a:?} {b:?} {c:?}");
    assert_eq!(a, Point::new(0.0, 0.0));
    assert_eq!(b, Point::new(0.0, 36.0 + 50.0));
    assert_eq!(c, Point::new(0.0, 2.0 * (36.0 + 50.0)));
}

#[test]
fn hierarchical_bottom_to_top_mirrors_the_rank_axis() {
    let out = hierarchical::layout(
        &nodes(&["a", "b", "c"]),
        &edges(&[("a", "b"), ("b", "c")]),
        &opts(Direction::BT),
    );
    let (a, b, c) = (pos(&out, "a"), pos(&out, "b"), pos(&out, "c"));
    assert!(a.y > b.y && b.y > c.y, "{a:?} {b:?} {c:?}");
    assert_eq!(c.y, 0.0);
}

#[test]
fn hierarchical_left_to_right_ranks_along_x() {
    let out = hierarchical::layout(
        &nodes(&["a", "b", "c"]),
        &edges(&[("a", "b"), ("b", "c")]),
        &opts(Direction::LR),
    );
    let (a, b, c) = (pos(&out, "a"), pos(&out, "b"), pos(&out, "c"));
    assert_eq!(a, Point::new(0.0, 0.0));
    assert_eq!(b, Point::new(172.0 + 50.0, 0.0));
    assert_eq!(c, Point::new(2.0 * (172.0 + 50.0), 0.0));
}

#[test]
fn hierarchical_right_to_left_ranks_against_x() {
    let out = hierarchical::layout(
        &nodes(&["a", "b"]),
        &edges(&[("a", "b")]),
        &opts(Direction::RL),
    );
    let (a, b) = (pos(&out, "a"), pos(&out, "b"));
    assert!(a.x > b.x, "{a:?} {b:?}");
    assert_eq!(a.y, b.y);
}

#[test]
fn hierarchical_siblings_share_a_rank_and_respect_node_separation() {
    let o = HierarchicalOptions {
        node_width: 100.0,
        node_height: 40.0,
        node_separation: 30.0,
        rank_separation: 60.0,
        ..Default::default()
    };
    let out = hierarchical::layout(
        &nodes(&["root", "left", "right"]),
        &edges(&[("root", "left"), ("root", "right")]),
        &o,
    );
    let (root, l, r) = (pos(&out, "root"), pos(&out, "left"), pos(&out, "right"));
    assert_eq!(l.y, r.y);
    assert_eq!(l.y - root.y, 40.0 + 60.0);
    assert_eq!((r.x - l.x).abs(), 100.0 + 30.0);
    // The single-node rank is centred over its children.
    assert_eq!(root.x, (l.x + r.x) / 2.0);
}

#[test]
fn hierarchical_single_node_is_placed_at_origin() {
    let out = hierarchical::layout(&nodes(&["solo"]), &[], &HierarchicalOptions::default());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].position, Some(Point::ORIGIN));
}

#[test]
fn hierarchical_isolated_nodes_share_the_first_rank() {
    let out = hierarchical::layout(
        &nodes(&["a", "b", "island"]),
        &edges(&[("a", "b")]),
        &HierarchicalOptions::default(),
    );
    assert_eq!(pos(&out, "island").y, pos(&out, "a").y);
    assert_ne!(pos(&out, "island").x, pos(&out, "a").x);
}

#[test]
fn hierarchical_handles_cycles_and_self_loops() {
    let out = hierarchical::layout(
        &nodes(&["a", "b", "c"]),
        &edges(&[("a", "b"), ("b", "c"), ("c", "a"), ("b", "b")]),
        &HierarchicalOptions::default(),
    );
    let (a, b, c) = (pos(&out, "a"), pos(&out, "b"), pos(&out, "c"));
    assert!(a.y < b.y && b.y < c.y, "{a:?} {b:?} {c:?}");
}

#[test]
fn hierarchical_long_edges_do_not_collapse_ranks() {
    // a -> b -> c -> d plus a shortcut a -> d routed through dummy nodes.
    let out = hierarchical::layout(
        &nodes(&["a", "b", "c", "d"]),
        &edges(&[("a", "b"), ("b", "c"), ("c", "d"), ("a", "d")]),
        &HierarchicalOptions::default(),
    );
    let ys: Vec<f64> = ["a", "b", "c", "d"].iter().map(|id| pos(&out, id).y).collect();
    assert!(ys.windows(2).all(|w| w[0] < w[1]), "{ys:?}");
}

#[test]
fn hierarchical_bounding_box_starts_at_origin() {
    let out = hierarchical::layout(
        &nodes(&["a", "b", "c", "d", "e"]),
        &edges(&[("a", "b"), ("a", "c"), ("a", "d"), ("d", "e")]),
        &HierarchicalOptions::default(),
    );
    let min_x = out.iter().map(|n| n.position.unwrap().x).fold(f64::INFINITY, f64::min);
    let min_y = out.iter().map(|n| n.position.unwrap().y).fold(f64::INFINITY, f64::min);
    assert_eq!((min_x, min_y), (0.0, 0.0));
}
