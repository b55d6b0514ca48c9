//! Explicit request passed from an input-collection surface into the pipeline.

use serde::{Deserialize, Serialize};

use super::config::AnalysisConfig;
use super::document::UploadedDocument;

/// Smallest accepted value for `max_words` / `max_bigrams`.
pub const MIN_TOP_K: usize = 1;

/// Largest accepted value for `max_words` / `max_bigrams`.
pub const MAX_TOP_K: usize = 100;

/// The analysis to run on a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Word cloud bitmap.
    #[default]
    WordCloud,
    /// Horizontal bar chart of the most frequent words.
    WordFrequency,
    /// Co-occurrence graph of the most frequent adjacent word pairs.
    Bigrams,
    /// Pie chart of positive/neutral/negative lines.
    Sentiment,
}

impl Operation {
    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::WordCloud => "Word Cloud",
            Operation::WordFrequency => "Word Frequency",
            Operation::Bigrams => "Bigrams",
            Operation::Sentiment => "Sentiment Analysis",
        }
    }

    /// Whether stopword removal and case folding apply to this operation.
    pub fn uses_normalization(&self) -> bool {
        !matches!(self, Operation::Sentiment)
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', ' '], "-").as_str() {
            "word-cloud" | "wordcloud" | "cloud" => Ok(Operation::WordCloud),
            "word-frequency" | "frequency" | "freq" => Ok(Operation::WordFrequency),
            "bigrams" | "bigram" => Ok(Operation::Bigrams),
            "sentiment" | "sentiment-analysis" => Ok(Operation::Sentiment),
            other => Err(format!("unknown operation: {}", other)),
        }
    }
}

/// Text normalization switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Drop English stopwords.
    pub remove_stopwords: bool,
    /// Keep the original casing. When false the text is lowercased.
    pub case_sensitive: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            remove_stopwords: true,
            case_sensitive: false,
        }
    }
}

/// Everything the pipeline needs for one interaction.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Document to analyze.
    pub document: UploadedDocument,
    /// Selected analysis.
    pub operation: Operation,
    /// Normalization switches (ignored for sentiment).
    pub options: NormalizeOptions,
    /// Number of bars in the frequency chart.
    pub max_words: usize,
    /// Number of word pairs in the bigram graph.
    pub max_bigrams: usize,
}

impl AnalysisRequest {
    /// Create a request with default options.
    pub fn new(document: UploadedDocument, operation: Operation) -> Self {
        Self {
            document,
            operation,
            options: NormalizeOptions::default(),
            max_words: 10,
            max_bigrams: 10,
        }
    }

    /// Create a request using the defaults from configuration.
    pub fn from_config(document: UploadedDocument, operation: Operation, config: &AnalysisConfig) -> Self {
        Self {
            document,
            operation,
            options: NormalizeOptions {
                remove_stopwords: config.remove_stopwords,
                case_sensitive: config.case_sensitive,
            },
            max_words: config.max_words,
            max_bigrams: config.max_bigrams,
        }
    }

    /// Set stopword removal.
    pub fn with_stopword_removal(mut self, remove: bool) -> Self {
        self.options.remove_stopwords = remove;
        self
    }

    /// Set case sensitivity.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.options.case_sensitive = case_sensitive;
        self
    }

    /// Set the frequency chart size.
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Set the bigram graph size.
    pub fn with_max_bigrams(mut self, max_bigrams: usize) -> Self {
        self.max_bigrams = max_bigrams;
        self
    }
}

/// Clamp a top-K value into the accepted range.
pub fn clamp_top_k(k: usize) -> usize {
    k.clamp(MIN_TOP_K, MAX_TOP_K)
}
