//! Spring-electrical force-directed layout.
//!
//! Every ordered pair of nodes repels with an inverse-square force, every edge pulls
//! its endpoints together with a linear spring, and both are scaled by a cooling
//! factor `alpha` that decays linearly to zero. Velocities are integrated and damped
//! each iteration. There is no randomness: nodes without a seed position start evenly
//! spaced on a circle, so identical input always yields identical output.
//!
//! Cost is `O(iterations * n^2)`; this is meant for graphs of up to a few hundred
//! nodes.

use crate::graph::{Edge, Node, Point, Topology, with_positions};
use crate::options::ForceOptions;
use std::f64::consts::TAU;

/// Lays out `nodes` with the spring-electrical simulation.
///
/// Output positions are in the same coordinate space as the seed positions.
pub fn layout<P: Clone>(nodes: &[Node<P>], edges: &[Edge], opts: &ForceOptions) -> Vec<Node<P>> {
    if nodes.is_empty() {
        return Vec::new();
    }
    let topo = Topology::new(nodes, edges);
    let mut sim = Simulation::new(nodes, &topo);
    sim.run(opts);
    with_positions(nodes, &sim.positions)
}

#[derive(Debug, Clone)]
struct Simulation {
    positions: Vec<Point>,
    velocities: Vec<Point>,
    springs: Vec<(usize, usize)>,
}

impl Simulation {
    fn new<P>(nodes: &[Node<P>], topo: &Topology) -> Self {
        let n = nodes.len();
        let radius = (n as f64 * 30.0).max(200.0);
        let positions = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| match node.position {
                Some(p) if p.is_finite() => p,
                _ => {
                    let angle = TAU * i as f64 / n as f64;
                    Point::new(radius * angle.cos(), radius * angle.sin())
                }
            })
            .collect();

        Self {
            positions,
            velocities: vec![Point::ORIGIN; n],
            springs: topo.edges.iter().copied().filter(|(v, w)| v != w).collect(),
        }
    }

    fn run(&mut self, opts: &ForceOptions) {
        let total = opts.iterations as f64;
        for iteration in 0..opts.iterations {
            let alpha = 1.0 - iteration as f64 / total;
            self.apply_repulsion(opts.repulsion * alpha, opts.min_distance);
            self.apply_attraction(opts.attraction * alpha);
            self.integrate(opts.damping);
        }
    }

    fn apply_repulsion(&mut self, strength: f64, min_distance: f64) {
        let n = self.positions.len();
        for i in 0..n {
            let (mut fx, mut fy) = (0.0, 0.0);
            for j in 0..n {
                if i == j {
                    continue;
                }
                let dx = self.positions[i].x - self.positions[j].x;
                let dy = self.positions[i].y - self.positions[j].y;
                let distance = dx.hypot(dy);
                let (ux, uy) = if distance > 0.0 {
                    (dx / distance, dy / distance)
                } else {
                    coincident_direction(i, j, n)
                };
                let d = distance.max(min_distance);
                let force = strength / (d * d);
                fx += ux * force;
                fy += uy * force;
            }
            self.velocities[i].x += fx;
            self.velocities[i].y += fy;
        }
    }

    fn apply_attraction(&mut self, strength: f64) {
        for &(s, t) in &self.springs {
            let dx = self.positions[t].x - self.positions[s].x;
            let dy = self.positions[t].y - self.positions[s].y;
            let distance = dx.hypot(dy);
            if distance == 0.0 {
                continue;
            }
            let force = distance * strength;
            let fx = dx / distance * force;
            let fy = dy / distance * force;
            self.velocities[s].x += fx;
            self.velocities[s].y += fy;
            self.velocities[t].x -= fx;
            self.velocities[t].y -= fy;
        }
    }

    fn integrate(&mut self, damping: f64) {
        for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
            p.x += v.x;
            p.y += v.y;
            v.x *= damping;
            v.y *= damping;
        }
    }
}

/// Unit vector pushing `i` away from `j` when both sit on the same point.
///
/// Antisymmetric in `(i, j)` so the pair separates along one deterministic axis.
fn coincident_direction(i: usize, j: usize, n: usize) -> (f64, f64) {
    let angle = TAU * i.min(j) as f64 / n as f64;
    let sign = if i < j { 1.0 } else { -1.0 };
    (sign * angle.cos(), sign * angle.sin())
}
