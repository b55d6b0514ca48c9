//! Three-slice sentiment pie chart.

use std::f32::consts::TAU;

use image::Rgb;
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut, draw_polygon_mut};
use imageproc::point::Point;

use super::canvas::{Anchor, Canvas, BLACK};
use crate::analysis::SentimentTally;

pub const POSITIVE_COLOR: Rgb<u8> = Rgb([0, 128, 0]);
pub const NEUTRAL_COLOR: Rgb<u8> = Rgb([255, 215, 0]);
pub const NEGATIVE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Arc segments per full turn.
const ARC_STEPS: f32 = 360.0;

/// Non-empty slices as (label, fraction, colour), counter-clockwise from east.
pub fn slices(tally: &SentimentTally) -> Vec<(&'static str, f32, Rgb<u8>)> {
    let total = tally.total();
    if total == 0 {
        return Vec::new();
    }
    [
        ("Positive", tally.positive, POSITIVE_COLOR),
        ("Neutral", tally.neutral, NEUTRAL_COLOR),
        ("Negative", tally.negative, NEGATIVE_COLOR),
    ]
    .into_iter()
    .filter(|(_, count, _)| *count > 0)
    .map(|(label, count, color)| (label, count as f32 / total as f32, color))
    .collect()
}

/// `%1.1f%%` style percentage.
pub fn percent_label(fraction: f32) -> String {
    format!("{:.1}%", fraction * 100.0)
}

pub fn draw(canvas: &mut Canvas, tally: &SentimentTally, font_size: f32) {
    let (width, height) = (canvas.width() as f32, canvas.height() as f32);
    let (cx, cy) = (width / 2.0, height / 2.0);
    let radius = (width.min(height) / 2.0 - font_size * 3.0).max(4.0);
    let center = (cx.round() as i32, cy.round() as i32);

    let slices = slices(tally);
    if slices.is_empty() {
        draw_hollow_circle_mut(&mut canvas.image, center, radius.round() as i32, BLACK);
        return;
    }

    let mut start = 0.0f32;
    for &(_, fraction, color) in &slices {
        let sweep = fraction * TAU;
        if fraction >= 1.0 {
            draw_filled_circle_mut(&mut canvas.image, center, radius.round() as i32, color);
        } else {
            let steps = ((sweep / TAU) * ARC_STEPS).ceil().max(2.0) as usize;
            let mut polygon = vec![Point::new(center.0, center.1)];
            for s in 0..=steps {
                let angle = start + sweep * s as f32 / steps as f32;
                // Screen y grows downwards, so counter-clockwise is -sin.
                polygon.push(Point::new(
                    (cx + radius * angle.cos()).round() as i32,
                    (cy - radius * angle.sin()).round() as i32,
                ));
            }
            polygon.dedup();
            if polygon.len() >= 3 && polygon.first() != polygon.last() {
                draw_polygon_mut(&mut canvas.image, &polygon, color);
            }
        }
        start += sweep;
    }

    let mut start = 0.0f32;
    for &(label, fraction, _) in &slices {
        let mid = start + fraction * TAU / 2.0;
        let (dx, dy) = (mid.cos(), -mid.sin());
        let anchor = if dx < -0.1 {
            Anchor::Right
        } else if dx > 0.1 {
            Anchor::Left
        } else {
            Anchor::Center
        };
        canvas.label(label, cx + dx * radius * 1.1, cy + dy * radius * 1.1, font_size, anchor, BLACK);
        canvas.label(
            &percent_label(fraction),
            cx + dx * radius * 0.6,
            cy + dy * radius * 0.6,
            font_size,
            Anchor::Center,
            BLACK,
        );
        start += fraction * TAU;
    }
}
