//! Bigram co-occurrence graph drawing.

use image::Rgb;
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut};

use super::canvas::{Anchor, Canvas, BLACK, WHITE};
use super::spring::spring_layout;
use crate::analysis::BigramGraph;

const NODE_COLOR: Rgb<u8> = Rgb([135, 206, 235]);
const EDGE_COLOR: Rgb<u8> = Rgb([60, 60, 60]);
const EDGE_LABEL_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const NODE_RADIUS: i32 = 20;
const PADDING: f32 = 60.0;

/// Layout parameters for the graph drawing.
pub struct GraphStyle {
    pub spring_k: f32,
    pub iterations: usize,
    pub font_size: f32,
}

pub fn draw(canvas: &mut Canvas, graph: &BigramGraph, style: &GraphStyle) {
    let positions = spring_layout(graph, style.spring_k, style.iterations);
    let (width, height) = (canvas.width() as f32, canvas.height() as f32);
    let half_w = (width / 2.0 - PADDING).max(1.0);
    let half_h = (height / 2.0 - PADDING).max(1.0);
    let points: Vec<(f32, f32)> = positions
        .iter()
        .map(|(x, y)| (width / 2.0 + x * half_w, height / 2.0 - y * half_h))
        .collect();

    for edge in &graph.edges {
        let a = points[edge.source];
        if edge.is_self_loop() {
            let center = (a.0.round() as i32, (a.1 - NODE_RADIUS as f32).round() as i32);
            draw_hollow_circle_mut(&mut canvas.image, center, NODE_RADIUS, EDGE_COLOR);
        } else {
            canvas.line(a, points[edge.target], 1, EDGE_COLOR);
        }
    }

    for &(x, y) in &points {
        draw_filled_circle_mut(&mut canvas.image, (x.round() as i32, y.round() as i32), NODE_RADIUS, NODE_COLOR);
    }

    let small = style.font_size * 0.85;
    for edge in &graph.edges {
        let a = points[edge.source];
        let (lx, ly) = if edge.is_self_loop() {
            (a.0, a.1 - 2.0 * NODE_RADIUS as f32 - small / 2.0)
        } else {
            let b = points[edge.target];
            ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
        };
        let text = edge.weight.to_string();
        let (w, h) = canvas.measure(&text, small);
        if w > 0 {
            canvas.fill_rect(
                (lx - w as f32 / 2.0 - 2.0).round() as i32,
                (ly - h as f32 / 2.0 - 2.0).round() as i32,
                w + 4,
                h + 4,
                WHITE,
            );
        }
        canvas.label(&text, lx, ly, small, Anchor::Center, EDGE_LABEL_COLOR);
    }

    for (word, &(x, y)) in graph.nodes.iter().zip(&points) {
        canvas.label(word, x, y, style.font_size, Anchor::Center, BLACK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::bigram_graph;

    #[test]
    fn test_every_node_drawn() {
        let graph = bigram_graph("a b c a b d", 10);
        let mut canvas = Canvas::new(400, 400, None);
        let style = GraphStyle {
            spring_k: 0.8,
            iterations: 50,
            font_size: 12.0,
        };
        draw(&mut canvas, &graph, &style);

        let node_pixels = canvas.image.pixels().filter(|p| **p == NODE_COLOR).count();
        // Each disc covers roughly pi * r^2 pixels; overlap can hide some.
        assert!(node_pixels > 1000);
    }
}
