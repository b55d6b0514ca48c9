//! Fruchterman-Reingold force-directed layout.
//!
//! Positions are returned in [-1, 1] on both axes.

use crate::analysis::BigramGraph;

const GOLDEN_ANGLE: f32 = 2.399_963;
const MIN_DISTANCE: f32 = 0.01;

/// Lay out the nodes of `graph`. `k` is the optimal node distance.
pub fn spring_layout(graph: &BigramGraph, k: f32, iterations: usize) -> Vec<(f32, f32)> {
    let n = graph.nodes.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![(0.0, 0.0)],
        _ => {}
    }

    // Sunflower seed pattern: deterministic and free of symmetric deadlocks.
    let mut pos: Vec<(f32, f32)> = (0..n)
        .map(|i| {
            let r = ((i as f32 + 0.5) / n as f32).sqrt() * 0.5;
            let theta = i as f32 * GOLDEN_ANGLE;
            (0.5 + r * theta.cos(), 0.5 + r * theta.sin())
        })
        .collect();

    let mut adjacency = vec![vec![0.0f32; n]; n];
    for edge in graph.edges.iter().filter(|e| !e.is_self_loop()) {
        adjacency[edge.source][edge.target] += edge.weight as f32;
        adjacency[edge.target][edge.source] += edge.weight as f32;
    }

    let iterations = iterations.max(1);
    let mut temperature = 0.1f32;
    let cooling = temperature / (iterations as f32 + 1.0);

    for _ in 0..iterations {
        let mut displacement = vec![(0.0f32, 0.0f32); n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let dx = pos[i].0 - pos[j].0;
                let dy = pos[i].1 - pos[j].1;
                let distance = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                let force = k * k / (distance * distance) - adjacency[i][j] * distance / k;
                displacement[i].0 += dx * force;
                displacement[i].1 += dy * force;
            }
        }
        for (p, d) in pos.iter_mut().zip(&displacement) {
            let length = (d.0 * d.0 + d.1 * d.1).sqrt().max(MIN_DISTANCE);
            p.0 += d.0 * temperature / length;
            p.1 += d.1 * temperature / length;
        }
        temperature -= cooling;
    }

    rescale(pos)
}

/// Centre on the origin and scale so the largest coordinate is 1.
fn rescale(mut pos: Vec<(f32, f32)>) -> Vec<(f32, f32)> {
    let n = pos.len() as f32;
    let cx = pos.iter().map(|p| p.0).sum::<f32>() / n;
    let cy = pos.iter().map(|p| p.1).sum::<f32>() / n;
    let extent = pos
        .iter()
        .map(|p| (p.0 - cx).abs().max((p.1 - cy).abs()))
        .fold(0.0f32, f32::max);
    let scale = if extent > 0.0 { 1.0 / extent } else { 1.0 };
    for p in &mut pos {
        p.0 = (p.0 - cx) * scale;
        p.1 = (p.1 - cy) * scale;
    }
    pos
}
