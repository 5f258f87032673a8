//! Break cycles by reversing a depth-first feedback arc set.

use super::LayerGraph;

/// Reverses every back edge found by [`dfs_fas`]. Returns the number of reversed edges.
pub(crate) fn run(g: &mut LayerGraph) -> usize {
    let fas = dfs_fas(g);
    for &ix in &fas {
        let (v, w) = g.edges[ix];
        g.edges[ix] = (w, v);
    }
    fas.len()
}

/// Edge indices closing a cycle, found by DFS in node order (input order).
fn dfs_fas(g: &LayerGraph) -> Vec<usize> {
    let out = g.out_edges();
    let mut visited = vec![false; g.node_count];
    let mut on_stack = vec![false; g.node_count];
    let mut fas = Vec::new();
    // (node, next out-edge slot)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..g.node_count {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        on_stack[root] = true;
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let (v, slot) = *top;
            match out[v].get(slot) {
                Some(&ix) => {
                    top.1 += 1;
                    let w = g.edges[ix].1;
                    if on_stack[w] {
                        fas.push(ix);
                    } else if !visited[w] {
                        visited[w] = true;
                        on_stack[w] = true;
                        stack.push((w, 0));
                    }
                }
                None => {
                    on_stack[v] = false;
                    stack.pop();
                }
            }
        }
    }
    fas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(n: usize, edges: &[(usize, usize)]) -> LayerGraph {
        LayerGraph {
            real_count: n,
            node_count: n,
            edges: edges.to_vec(),
            ranks: Vec::new(),
        }
    }

    fn is_acyclic(g: &LayerGraph) -> bool {
        dfs_fas(g).is_empty()
    }

    #[test]
    fn does_not_change_an_acyclic_graph() {
        let mut g = graph(4, &[(0, 1), (1, 2), (0, 3), (3, 2)]);
        assert_eq!(run(&mut g), 0);
        assert_eq!(g.edges, vec![(0, 1), (1, 2), (0, 3), (3, 2)]);
    }

    #[test]
    fn breaks_a_simple_cycle() {
        let mut g = graph(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(run(&mut g), 1);
        assert_eq!(g.edges, vec![(0, 1), (1, 2), (0, 2)]);
        assert!(is_acyclic(&g));
    }

    #[test]
    fn breaks_two_cycles_sharing_a_node() {
        let mut g = graph(5, &[(0, 1), (1, 0), (1, 2), (2, 3), (3, 4), (4, 2)]);
        assert_eq!(run(&mut g), 2);
        assert!(is_acyclic(&g));
        assert_eq!(g.edges.len(), 6);
    }
}
