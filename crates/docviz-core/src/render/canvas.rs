//! Fresh white drawing surface per render.

use std::io::Cursor;

use ab_glyph::{FontVec, PxScale};
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut, draw_text_mut};
use imageproc::rect::Rect;

use crate::error::RenderError;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Where a label sits relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Center,
    Right,
}

pub struct Canvas<'f> {
    pub image: RgbImage,
    font: Option<&'f FontVec>,
}

impl<'f> Canvas<'f> {
    pub fn new(width: u32, height: u32, font: Option<&'f FontVec>) -> Self {
        Self {
            image: RgbImage::from_pixel(width.max(1), height.max(1), WHITE),
            font,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Text box at `size`, or zero without a font.
    pub fn measure(&self, text: &str, size: f32) -> (u32, u32) {
        match self.font {
            Some(font) => super::font::measure(font, text, size),
            None => (0, 0),
        }
    }

    /// Draw `text` vertically centred on `y`. No-op without a font.
    pub fn label(&mut self, text: &str, x: f32, y: f32, size: f32, anchor: Anchor, color: Rgb<u8>) {
        let Some(font) = self.font else {
            return;
        };
        let (w, h) = super::font::measure(font, text, size);
        let left = match anchor {
            Anchor::Left => x,
            Anchor::Center => x - w as f32 / 2.0,
            Anchor::Right => x - w as f32,
        };
        let top = y - h as f32 / 2.0;
        draw_text_mut(
            &mut self.image,
            color,
            left.round() as i32,
            top.round() as i32,
            PxScale::from(size),
            font,
            text,
        );
    }

    /// Draw text with its top-left corner at (x, y).
    pub fn text_at(&mut self, text: &str, x: i32, y: i32, size: f32, color: Rgb<u8>) {
        if let Some(font) = self.font {
            draw_text_mut(&mut self.image, color, x, y, PxScale::from(size), font, text);
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb<u8>) {
        if width > 0 && height > 0 {
            draw_filled_rect_mut(&mut self.image, Rect::at(x, y).of_size(width, height), color);
        }
    }

    /// Line of the given pixel thickness.
    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), thickness: u32, color: Rgb<u8>) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let length = (dx * dx + dy * dy).sqrt();
        let (nx, ny) = if length > 0.0 {
            (-dy / length, dx / length)
        } else {
            (0.0, 0.0)
        };
        let half = (thickness.max(1) - 1) as f32 / 2.0;
        for i in 0..thickness.max(1) {
            let offset = i as f32 - half;
            draw_line_segment_mut(
                &mut self.image,
                (from.0 + nx * offset, from.1 + ny * offset),
                (to.0 + nx * offset, to.1 + ny * offset),
                color,
            );
        }
    }

    /// Encode the canvas as PNG.
    pub fn into_png(self) -> Result<Vec<u8>, RenderError> {
        let mut png = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| RenderError::Encode(e.to_string()))?;
        Ok(png)
    }
}

/// Parse `#rrggbb`.
pub fn hex(color: &str) -> Rgb<u8> {
    let color = color.trim_start_matches('#');
    let channel = |i: usize| {
        color
            .get(i..i + 2)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
            .unwrap_or(0)
    };
    Rgb([channel(0), channel(2), channel(4)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_white() {
        let canvas = Canvas::new(10, 5, None);
        assert_eq!(canvas.width(), 10);
        assert!(canvas.image.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn test_png_signature() {
        let mut canvas = Canvas::new(4, 4, None);
        canvas.fill_rect(0, 0, 2, 2, BLACK);
        let png = canvas.into_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_hex() {
        assert_eq!(hex("#1f77b4"), Rgb([0x1f, 0x77, 0xb4]));
        assert_eq!(hex("87ceeb"), Rgb([135, 206, 235]));
    }

    #[test]
    fn test_labels_without_font_are_skipped() {
        let mut canvas = Canvas::new(20, 20, None);
        canvas.label("hidden", 10.0, 10.0, 12.0, Anchor::Center, BLACK);
        assert!(canvas.image.pixels().all(|p| *p == WHITE));
        assert_eq!(canvas.measure("hidden", 12.0), (0, 0));
    }
}
