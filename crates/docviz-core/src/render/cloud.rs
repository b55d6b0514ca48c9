//! Word cloud bitmap.

use image::Rgb;

use super::canvas::Canvas;
use crate::analysis::WordCloudLayout;

/// Samples along the viridis colour map.
const PALETTE: [Rgb<u8>; 8] = [
    Rgb([68, 1, 84]),
    Rgb([70, 50, 126]),
    Rgb([54, 92, 141]),
    Rgb([39, 127, 142]),
    Rgb([31, 161, 135]),
    Rgb([74, 193, 109]),
    Rgb([160, 218, 57]),
    Rgb([190, 200, 38]),
];

/// Colour for a word, stable across renders.
fn color_for(word: &str) -> Rgb<u8> {
    let hash = word
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
    PALETTE[hash % PALETTE.len()]
}

/// Draw each placed word at its position and size.
pub fn draw(canvas: &mut Canvas, layout: &WordCloudLayout) {
    for placed in &layout.words {
        canvas.text_at(
            &placed.word,
            placed.x as i32,
            placed.y as i32,
            placed.font_size,
            color_for(&placed.word),
        );
    }
}
