//! Word cloud layout: sizes proportional to frequency, placed along a spiral.

use serde::Serialize;
use tracing::{debug, trace};

use super::frequency::{count_in_order, most_common};
use crate::models::config::WordCloudConfig;

const SPIRAL_STEP: f32 = 0.1;
const SPIRAL_GROWTH: f32 = 2.0;

/// A word placed on the canvas. `x`/`y` is the top-left corner of its box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedWord {
    pub word: String,
    pub count: usize,
    pub font_size: f32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PlacedWord {
    fn overlaps(&self, x: u32, y: u32, width: u32, height: u32, margin: u32) -> bool {
        x < self.x + self.width + margin
            && self.x < x + width + margin
            && y < self.y + self.height + margin
            && self.y < y + height + margin
    }
}

/// Words placed on a canvas of the given size.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WordCloudLayout {
    pub width: u32,
    pub height: u32,
    pub words: Vec<PlacedWord>,
}

/// Count cloud words: edge punctuation trimmed, words shorter than two
/// characters dropped, at most `max_words`, most frequent first.
pub fn cloud_words(text: &str, max_words: usize) -> Vec<(String, usize)> {
    let words = text
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| word.chars().count() >= 2)
        .map(str::to_string);
    most_common(count_in_order(words), max_words)
}

/// Lay out the words of `text`.
///
/// `measure` returns the pixel box of a word at a font size. Words that do not
/// fit anywhere even at the minimum size are left out.
pub fn layout<F>(text: &str, config: &WordCloudConfig, measure: F) -> WordCloudLayout
where
    F: Fn(&str, f32) -> (u32, u32),
{
    let mut layout = WordCloudLayout {
        width: config.width,
        height: config.height,
        words: Vec::new(),
    };

    let words = cloud_words(text, config.max_words);
    let Some(top_count) = words.first().map(|(_, count)| *count) else {
        return layout;
    };

    let min_size = config.min_font_size;
    let max_size = config.effective_max_font_size().max(min_size);
    let step = config.font_step.max(1.0);

    for (word, count) in words {
        let relative = count as f32 / top_count as f32;
        let mut size = min_size + (max_size - min_size) * relative;

        loop {
            let (width, height) = measure(&word, size);
            if let Some((x, y)) = find_position(&layout, width, height, config.margin) {
                trace!("Placed '{}' at ({}, {}) size {:.1}", word, x, y, size);
                layout.words.push(PlacedWord {
                    word: word.clone(),
                    count,
                    font_size: size,
                    x,
                    y,
                    width,
                    height,
                });
                break;
            }
            if size <= min_size {
                trace!("No room for '{}'", word);
                break;
            }
            size = (size - step).max(min_size);
        }
    }

    debug!("Word cloud placed {} words", layout.words.len());
    layout
}

/// Walk an Archimedean spiral out from the centre until the box fits.
fn find_position(layout: &WordCloudLayout, width: u32, height: u32, margin: u32) -> Option<(u32, u32)> {
    if width == 0 || height == 0 || width > layout.width || height > layout.height {
        return None;
    }

    let cx = layout.width as f32 / 2.0;
    let cy = layout.height as f32 / 2.0;
    let max_radius = (cx * cx + cy * cy).sqrt();

    let mut t = 0.0f32;
    loop {
        let r = SPIRAL_GROWTH * t;
        if r > max_radius {
            return None;
        }
        let left = cx + r * t.cos() - width as f32 / 2.0;
        let top = cy + r * t.sin() - height as f32 / 2.0;
        t += SPIRAL_STEP;

        if left < 0.0 || top < 0.0 {
            continue;
        }
        let (x, y) = (left as u32, top as u32);
        if x + width > layout.width || y + height > layout.height {
            continue;
        }
        if layout
            .words
            .iter()
            .all(|placed| !placed.overlaps(x, y, width, height, margin))
        {
            return Some((x, y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Fixed-pitch stand-in for a font: 0.6em per char, 1.2em line.
    fn monospace(word: &str, size: f32) -> (u32, u32) {
        let width = (word.chars().count() as f32 * size * 0.6).ceil() as u32;
        (width.max(1), (size * 1.2).ceil() as u32)
    }

    #[test]
    fn test_cloud_words_trims_and_filters() {
        let words = cloud_words("\"rust,\" rust! a (rust) go. x go", 10);
        assert_eq!(words, vec![("rust".to_string(), 3), ("go".to_string(), 2)]);
    }

    #[test]
    fn test_layout_no_overlap_inside_canvas() {
        let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu \
                    alpha alpha beta beta gamma delta delta delta alpha";
        let config = WordCloudConfig::default();
        let layout = layout(text, &config, monospace);

        assert!(!layout.words.is_empty());
        for (i, a) in layout.words.iter().enumerate() {
            assert!(a.x + a.width <= config.width);
            assert!(a.y + a.height <= config.height);
            for b in &layout.words[i + 1..] {
                assert!(!a.overlaps(b.x, b.y, b.width, b.height, 0), "{} overlaps {}", a.word, b.word);
            }
        }
    }

    #[test]
    fn test_most_frequent_word_is_largest() {
        let layout = layout("big big big small", &WordCloudConfig::default(), monospace);
        assert_eq!(layout.words[0].word, "big");
        assert!(layout.words[0].font_size > layout.words[1].font_size);
    }

    #[test]
    fn test_unplaceable_words_are_skipped() {
        let config = WordCloudConfig {
            width: 40,
            height: 20,
            ..WordCloudConfig::default()
        };
        let layout = layout("enormously lengthy sentences everywhere", &config, monospace);
        assert!(layout.words.is_empty());
    }

    #[test]
    fn test_empty_text() {
        let layout = layout("", &WordCloudConfig::default(), monospace);
        assert!(layout.words.is_empty());
        assert_eq!(layout.width, 800);
    }
}
