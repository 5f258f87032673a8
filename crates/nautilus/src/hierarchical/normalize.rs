//! Split edges spanning several ranks into chains of dummy nodes.

use super::LayerGraph;

pub(crate) fn run(g: &mut LayerGraph) {
    let edges = std::mem::take(&mut g.edges);
    for (v, w) in edges {
        let (v_rank, w_rank) = (g.ranks[v], g.ranks[w]);
        if w_rank <= v_rank + 1 {
            g.edges.push((v, w));
            continue;
        }

        let mut prev = v;
        for r in v_rank + 1..w_rank {
            let dummy = g.add_dummy(r);
            g.edges.push((prev, dummy));
            prev = dummy;
        }
        g.edges.push((prev, w));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_short_edges_alone() {
        let mut g = LayerGraph {
            real_count: 2,
            node_count: 2,
            edges: vec![(0, 1)],
            ranks: vec![0, 1],
        };
        run(&mut g);
        assert_eq!(g.edges, vec![(0, 1)]);
        assert_eq!(g.node_count, 2);
    }

    #[test]
    fn inserts_one_dummy_per_skipped_rank() {
        let mut g = LayerGraph {
            real_count: 2,
            node_count: 2,
            edges: vec![(0, 1)],
            ranks: vec![0, 3],
        };
        run(&mut g);
        assert_eq!(g.node_count, 4);
        assert_eq!(g.ranks, vec![0, 3, 1, 2]);
        assert_eq!(g.edges, vec![(0, 2), (2, 3), (3, 1)]);
        assert!(g.is_dummy(2) && g.is_dummy(3));
        for &(v, w) in &g.edges {
            assert_eq!(g.ranks[w], g.ranks[v] + 1);
        }
    }
}
