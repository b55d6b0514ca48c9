//! Configuration structures for the analysis pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the docviz pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocvizConfig {
    /// Default analysis options.
    pub analysis: AnalysisConfig,

    /// Word cloud layout configuration.
    pub word_cloud: WordCloudConfig,

    /// Sentiment scoring configuration.
    pub sentiment: SentimentConfig,

    /// Chart rendering configuration.
    pub render: RenderConfig,
}

/// Default analysis options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Drop English stopwords before counting.
    pub remove_stopwords: bool,

    /// Keep original casing instead of lowercasing.
    pub case_sensitive: bool,

    /// Bars in the frequency chart (1 - 100).
    pub max_words: usize,

    /// Word pairs in the bigram graph (1 - 100).
    pub max_bigrams: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            remove_stopwords: true,
            case_sensitive: false,
            max_words: 10,
            max_bigrams: 10,
        }
    }
}

/// Word cloud layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WordCloudConfig {
    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// Maximum number of words placed.
    pub max_words: usize,

    /// Smallest font size in pixels.
    pub min_font_size: f32,

    /// Largest font size in pixels (0 = derived from canvas height).
    pub max_font_size: f32,

    /// Step used when shrinking a word that does not fit.
    pub font_step: f32,

    /// Padding around each word in pixels.
    pub margin: u32,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            max_words: 200,
            min_font_size: 10.0,
            max_font_size: 0.0,
            font_step: 2.0,
            margin: 2,
        }
    }
}

impl WordCloudConfig {
    /// Effective largest font size.
    pub fn effective_max_font_size(&self) -> f32 {
        if self.max_font_size > 0.0 {
            self.max_font_size
        } else {
            self.height as f32 * 0.4
        }
    }
}

/// Sentiment scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    /// Lines with polarity above this are positive.
    pub positive_threshold: f32,

    /// Lines with polarity below this are negative.
    pub negative_threshold: f32,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            positive_threshold: 0.1,
            negative_threshold: -0.1,
        }
    }
}

/// Chart rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// TrueType/OpenType font used for labels. Discovered when unset.
    pub font_path: Option<PathBuf>,

    /// Bar chart canvas (width, height).
    pub bar_chart_size: (u32, u32),

    /// Bigram graph canvas (width, height).
    pub graph_size: (u32, u32),

    /// Pie chart canvas (width, height).
    pub pie_size: (u32, u32),

    /// Label font size in pixels.
    pub label_font_size: f32,

    /// Spring layout iterations for the bigram graph.
    pub graph_iterations: usize,

    /// Optimal node distance for the spring layout.
    pub graph_spring_k: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_path: None,
            bar_chart_size: (800, 600),
            graph_size: (800, 800),
            pie_size: (640, 480),
            label_font_size: 14.0,
            graph_iterations: 50,
            graph_spring_k: 0.8,
        }
    }
}

impl DocvizConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
