//! Analyzers: exactly one runs per request.

mod bigrams;
mod frequency;
mod sentiment;
mod wordcloud;

pub use bigrams::{bigram_graph, top_bigrams, BigramEdge, BigramGraph};
pub use frequency::{word_frequencies, WordCount};
pub use sentiment::{polarity, sentiment_tally, SentimentTally};
pub use wordcloud::{cloud_words, layout as word_cloud_layout, PlacedWord, WordCloudLayout};

use serde::Serialize;

/// Output of one analyzer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "result", rename_all = "snake_case")]
pub enum Analysis {
    /// Placed words of a word cloud.
    WordCloud(WordCloudLayout),
    /// Most frequent words, descending.
    Frequency(Vec<WordCount>),
    /// Co-occurrence graph of the most frequent pairs.
    Bigrams(BigramGraph),
    /// Lines per sentiment class.
    Sentiment(SentimentTally),
}

impl Analysis {
    /// Short summary for status lines.
    pub fn summary(&self) -> String {
        match self {
            Analysis::WordCloud(layout) => format!("{} words placed", layout.words.len()),
            Analysis::Frequency(counts) => format!("{} words", counts.len()),
            Analysis::Bigrams(graph) => {
                format!("{} words, {} pairs", graph.nodes.len(), graph.edges.len())
            }
            Analysis::Sentiment(tally) => format!(
                "{} positive, {} neutral, {} negative",
                tally.positive, tally.neutral, tally.negative
            ),
        }
    }
}
