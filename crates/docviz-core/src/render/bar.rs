//! Horizontal bar chart of word counts.

use super::canvas::{hex, Anchor, Canvas, BLACK};
use crate::analysis::WordCount;

const BAR_COLOR: &str = "#1f77b4";
const GRID_COLOR: [u8; 3] = [220, 220, 220];
const MARGIN: f32 = 30.0;
const FALLBACK_LABEL_WIDTH: f32 = 20.0;

/// Draw one bar per word, largest at the top, with a count axis below.
pub fn draw(canvas: &mut Canvas, counts: &[WordCount], font_size: f32) {
    let (width, height) = (canvas.width() as f32, canvas.height() as f32);

    let label_width = counts
        .iter()
        .map(|c| canvas.measure(&c.word, font_size).0 as f32)
        .fold(FALLBACK_LABEL_WIDTH, f32::max)
        .min(width / 3.0);

    let left = MARGIN + label_width + 8.0;
    let right = width - MARGIN;
    let top = MARGIN;
    let bottom = height - MARGIN - font_size * 1.5;
    if right <= left || bottom <= top {
        return;
    }

    let max_count = counts.iter().map(|c| c.count).max().unwrap_or(0).max(1);
    let ticks = tick_step(max_count);
    let axis_max = max_count.div_ceil(ticks) * ticks;
    let scale = (right - left) / axis_max as f32;

    // Grid and tick labels.
    let grid = image::Rgb(GRID_COLOR);
    let mut tick = 0;
    while tick <= axis_max {
        let x = left + tick as f32 * scale;
        canvas.line((x, top), (x, bottom), 1, grid);
        canvas.line((x, bottom), (x, bottom + 4.0), 1, BLACK);
        canvas.label(&tick.to_string(), x, bottom + 6.0 + font_size / 2.0, font_size, Anchor::Center, BLACK);
        tick += ticks;
    }

    let slot = (bottom - top) / counts.len().max(1) as f32;
    let bar_height = (slot * 0.8).max(1.0);
    let color = hex(BAR_COLOR);

    for (i, entry) in counts.iter().enumerate() {
        let center = top + slot * (i as f32 + 0.5);
        let bar_width = entry.count as f32 * scale;
        canvas.fill_rect(
            left.round() as i32,
            (center - bar_height / 2.0).round() as i32,
            bar_width.round() as u32,
            bar_height.round() as u32,
            color,
        );
        canvas.label(&entry.word, left - 6.0, center, font_size, Anchor::Right, BLACK);
    }

    // Axes drawn last so bars do not cover them.
    canvas.line((left, top), (left, bottom), 1, BLACK);
    canvas.line((left, bottom), (right, bottom), 1, BLACK);
}

/// A round tick spacing giving at most ten ticks.
fn tick_step(max: usize) -> usize {
    let mut step = 1;
    loop {
        for factor in [1, 2, 5] {
            if max / (step * factor) <= 10 {
                return step * factor;
            }
        }
        step *= 10;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(values: &[(&str, usize)]) -> Vec<WordCount> {
        values
            .iter()
            .map(|(w, c)| WordCount {
                word: w.to_string(),
                count: *c,
            })
            .collect()
    }

    #[test]
    fn test_tick_step() {
        assert_eq!(tick_step(1), 1);
        assert_eq!(tick_step(10), 1);
        assert_eq!(tick_step(11), 2);
        assert_eq!(tick_step(45), 5);
        assert_eq!(tick_step(300), 50);
    }

    #[test]
    fn test_top_bar_is_longest() {
        let mut canvas = Canvas::new(400, 300, None);
        draw(&mut canvas, &counts(&[("cat", 4), ("sat", 1)]), 12.0);

        let color = hex(BAR_COLOR);
        let row_len = |y: u32| (0..400).filter(|&x| *canvas.image.get_pixel(x, y) == color).count();
        let rows: Vec<usize> = (0..300).map(row_len).filter(|&n| n > 0).collect();
        assert!(!rows.is_empty());
        assert!(rows.first() > rows.last());
    }
}
