//! Force-directed (Fruchterman-Reingold) layout.
//!
//! Attractive forces act along edges, repulsive forces between all node
//! pairs, with a linear cooling schedule capping per-iteration displacement.
//! All randomness comes from a seeded xorshift64* stream, so positions are
//! reproducible per seed.

use ideamap_core::MindmapGraph;
use rustc_hash::FxHashSet;

use crate::{LayoutOptions, LayoutResult, Point};

pub(crate) fn layout(graph: &MindmapGraph, options: &LayoutOptions) -> LayoutResult {
    let n = graph.node_count();
    let mut rng = XorShift64Star::new(options.random_seed);

    if n == 0 {
        return LayoutResult::new(Vec::new());
    }
    if n == 1 {
        return LayoutResult::new(vec![Point { x: 0.0, y: 0.0 }]);
    }

    // Scatter over the unit square; the ideal edge length keeps the node
    // density constant as the graph grows.
    let mut pos: Vec<Point> = (0..n)
        .map(|_| Point {
            x: rng.next_f64_signed(),
            y: rng.next_f64_signed(),
        })
        .collect();
    let k = (1.0 / n as f64).sqrt();

    let iterations = options.spring_iterations.max(1);
    // Initial temperature is 10% of the scatter extent ([-1, 1] squared).
    let mut temperature = 0.2;
    let cooling = temperature / (iterations as f64 + 1.0);

    let mut disp = vec![(0.0f64, 0.0f64); n];
    for _ in 0..iterations {
        for d in disp.iter_mut() {
            *d = (0.0, 0.0);
        }

        // Pairwise repulsion: f_r(d) = k^2 / d.
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = pos[i].x - pos[j].x;
                let dy = pos[i].y - pos[j].y;
                let dist_sq = (dx * dx + dy * dy).max(1e-12);
                let force = k * k / dist_sq;
                disp[i].0 += dx * force;
                disp[i].1 += dy * force;
                disp[j].0 -= dx * force;
                disp[j].1 -= dy * force;
            }
        }

        // Attraction along edges: f_a(d) = d^2 / k.
        for edge in graph.edges() {
            let a = edge.parent.index();
            let b = edge.child.index();
            let dx = pos[a].x - pos[b].x;
            let dy = pos[a].y - pos[b].y;
            let dist = (dx * dx + dy * dy).sqrt().max(1e-6);
            let force = dist / k;
            disp[a].0 -= dx * force;
            disp[a].1 -= dy * force;
            disp[b].0 += dx * force;
            disp[b].1 += dy * force;
        }

        // Move, capped by the current temperature.
        for (p, (dx, dy)) in pos.iter_mut().zip(disp.iter()) {
            let len = (dx * dx + dy * dy).sqrt();
            if len <= 1e-12 {
                continue;
            }
            let step = len.min(temperature);
            p.x += dx / len * step;
            p.y += dy / len * step;
        }
        temperature = (temperature - cooling).max(0.0);
    }

    separate_coincident(&mut pos, k, &mut rng);
    LayoutResult::new(pos)
}

/// Symmetric inputs can leave two nodes exactly coincident after the force
/// loop; every node must end at a distinct coordinate, so nudge duplicates
/// apart with fresh jitter.
fn separate_coincident(pos: &mut [Point], k: f64, rng: &mut XorShift64Star) {
    let jitter = k * 0.01;
    loop {
        let mut seen: FxHashSet<(u64, u64)> = FxHashSet::default();
        let mut clean = true;
        for p in pos.iter_mut() {
            if !seen.insert((p.x.to_bits(), p.y.to_bits())) {
                p.x += rng.next_f64_signed() * jitter;
                p.y += rng.next_f64_signed() * jitter;
                clean = false;
            }
        }
        if clean {
            return;
        }
    }
}

/// Seeded xorshift64* stream with a 53-bit float mapping.
#[derive(Debug, Clone)]
struct XorShift64Star {
    state: u64,
}

impl XorShift64Star {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D_u64)
    }

    /// Map to [-1, 1] (exclusive).
    fn next_f64_signed(&mut self) -> f64 {
        let u = self.next_u64() >> 11;
        let v = (u as f64) / ((1u64 << 53) as f64);
        (v * 2.0) - 1.0
    }
}
