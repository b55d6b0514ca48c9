//! PNG rendering of analysis results.
//!
//! Every call to [`Renderer::render`] draws onto a new canvas.

mod bar;
mod canvas;
mod cloud;
pub mod font;
mod graph;
mod pie;
mod spring;

use ab_glyph::FontVec;
use serde::Serialize;
use tracing::debug;

use crate::analysis::{word_cloud_layout, Analysis, WordCloudLayout};
use crate::error::RenderError;
use crate::models::config::{RenderConfig, WordCloudConfig};
use canvas::Canvas;

/// File name offered for download.
pub const PLOT_FILE_NAME: &str = "plot.png";

/// MIME type of every rendered image.
pub const PLOT_MIME_TYPE: &str = "image/png";

/// An encoded chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedImage {
    #[serde(skip)]
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RenderedImage {
    pub fn file_name(&self) -> &'static str {
        PLOT_FILE_NAME
    }

    pub fn mime_type(&self) -> &'static str {
        PLOT_MIME_TYPE
    }
}

/// Draws analysis results with an optional label font.
pub struct Renderer {
    config: RenderConfig,
    font: Option<FontVec>,
}

impl Renderer {
    /// Create a renderer, loading the configured font, a system font or the
    /// bundled DejaVu Sans, in that order.
    ///
    /// A configured font that cannot be read is an error.
    pub fn new(config: &RenderConfig) -> Result<Self, RenderError> {
        let font = match &config.font_path {
            Some(path) => font::from_path(path)?,
            None => match font::discover() {
                Some(font) => font,
                None => {
                    debug!("No system font found, using bundled DejaVu Sans");
                    font::bundled()?
                }
            },
        };
        Ok(Self::with_font(config, font))
    }

    /// Create a renderer with the bundled DejaVu Sans.
    pub fn bundled(config: &RenderConfig) -> Result<Self, RenderError> {
        Ok(Self::with_font(config, font::bundled()?))
    }

    /// Create a renderer with an already parsed font.
    pub fn with_font(config: &RenderConfig, font: FontVec) -> Self {
        Self {
            config: config.clone(),
            font: Some(font),
        }
    }

    /// Create a renderer that draws no text.
    pub fn without_font(config: &RenderConfig) -> Self {
        Self {
            config: config.clone(),
            font: None,
        }
    }

    /// Place the words of `text` using this renderer's font metrics.
    pub fn layout_word_cloud(&self, text: &str, config: &WordCloudConfig) -> Result<WordCloudLayout, RenderError> {
        let font = self.font.as_ref().ok_or(RenderError::FontUnavailable)?;
        Ok(word_cloud_layout(text, config, |word, size| {
            font::measure(font, word, size)
        }))
    }

    /// Draw `analysis` and encode it as PNG.
    pub fn render(&self, analysis: &Analysis) -> Result<RenderedImage, RenderError> {
        let font = self.font.as_ref();
        let label_size = self.config.label_font_size;

        let canvas = match analysis {
            Analysis::WordCloud(layout) => {
                if font.is_none() {
                    return Err(RenderError::FontUnavailable);
                }
                let mut canvas = Canvas::new(layout.width, layout.height, font);
                cloud::draw(&mut canvas, layout);
                canvas
            }
            Analysis::Frequency(counts) => {
                let (w, h) = self.config.bar_chart_size;
                let mut canvas = Canvas::new(w, h, font);
                bar::draw(&mut canvas, counts, label_size);
                canvas
            }
            Analysis::Bigrams(bigrams) => {
                let (w, h) = self.config.graph_size;
                let mut canvas = Canvas::new(w, h, font);
                let style = graph::GraphStyle {
                    spring_k: self.config.graph_spring_k,
                    iterations: self.config.graph_iterations,
                    font_size: label_size,
                };
                graph::draw(&mut canvas, bigrams, &style);
                canvas
            }
            Analysis::Sentiment(tally) => {
                let (w, h) = self.config.pie_size;
                let mut canvas = Canvas::new(w, h, font);
                pie::draw(&mut canvas, tally, label_size);
                canvas
            }
        };

        let (width, height) = (canvas.width(), canvas.height());
        let png = canvas.into_png()?;
        debug!("Rendered {}x{} PNG ({} bytes)", width, height, png.len());
        Ok(RenderedImage { png, width, height })
    }
}
