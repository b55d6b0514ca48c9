//! End-to-end processing of one request: load, normalize, analyze, render.

use tracing::{debug, info, instrument};

use crate::analysis::{bigram_graph, sentiment_tally, word_frequencies, Analysis};
use crate::error::{DocvizError, Result};
use crate::loader;
use crate::models::config::DocvizConfig;
use crate::models::document::ExtractedText;
use crate::models::request::{clamp_top_k, AnalysisRequest, Operation};
use crate::render::{RenderedImage, Renderer};
use crate::text::normalize;

/// Everything produced for one request.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub extracted: ExtractedText,
    pub analysis: Analysis,
    pub image: RenderedImage,
}

/// Runs requests against a fixed configuration and renderer.
pub struct Pipeline {
    config: DocvizConfig,
    renderer: Renderer,
}

impl Pipeline {
    /// Create a pipeline, resolving the label font from configuration.
    pub fn new(config: DocvizConfig) -> Result<Self> {
        let renderer = Renderer::new(&config.render)?;
        Ok(Self { config, renderer })
    }

    /// Create a pipeline with an explicit renderer.
    pub fn with_renderer(config: DocvizConfig, renderer: Renderer) -> Self {
        Self { config, renderer }
    }

    pub fn config(&self) -> &DocvizConfig {
        &self.config
    }

    /// Run the full pipeline.
    #[instrument(skip_all, fields(operation = ?request.operation))]
    pub fn run(&self, request: &AnalysisRequest) -> Result<PipelineOutput> {
        let extracted = loader::load(&request.document);
        let analysis = self.analyze(&extracted, request)?;
        let image = self.renderer.render(&analysis)?;
        info!("{}: {}", request.operation.label(), analysis.summary());
        Ok(PipelineOutput {
            extracted,
            analysis,
            image,
        })
    }

    /// Normalize and analyze already extracted text.
    ///
    /// Fails with [`DocvizError::NoText`] before any analyzer runs when the
    /// text to analyze is blank.
    pub fn analyze(&self, extracted: &ExtractedText, request: &AnalysisRequest) -> Result<Analysis> {
        let text = if request.operation.uses_normalization() {
            normalize(&extracted.text, &request.options)
        } else {
            extracted.text.clone()
        };

        if text.trim().is_empty() {
            debug!("Nothing to analyze after normalization");
            return Err(DocvizError::NoText);
        }

        let analysis = match request.operation {
            Operation::WordCloud => {
                Analysis::WordCloud(self.renderer.layout_word_cloud(&text, &self.config.word_cloud)?)
            }
            Operation::WordFrequency => {
                Analysis::Frequency(word_frequencies(&text, clamp_top_k(request.max_words)))
            }
            Operation::Bigrams => {
                Analysis::Bigrams(bigram_graph(&text, clamp_top_k(request.max_bigrams)))
            }
            Operation::Sentiment => Analysis::Sentiment(sentiment_tally(&text, &self.config.sentiment)),
        };
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::WordCount;
    use crate::error::NO_TEXT_MESSAGE;
    use crate::models::document::{DocumentFormat, UploadedDocument};
    use pretty_assertions::assert_eq;

    fn pipeline() -> Pipeline {
        let config = DocvizConfig::default();
        let renderer = Renderer::bundled(&config.render).unwrap();
        Pipeline::with_renderer(config, renderer)
    }

    fn text_request(text: &str, operation: Operation) -> AnalysisRequest {
        let doc = UploadedDocument::new(text.as_bytes().to_vec(), DocumentFormat::PlainText);
        AnalysisRequest::new(doc, operation)
    }

    #[test]
    fn test_cat_frequency_scenario() {
        let request = text_request("The cat sat. The cat ran.", Operation::WordFrequency).with_max_words(5);
        let output = pipeline().run(&request).unwrap();
        let expected = vec![
            WordCount { word: "cat".into(), count: 2 },
            WordCount { word: "sat.".into(), count: 1 },
            WordCount { word: "ran.".into(), count: 1 },
        ];
        assert_eq!(output.analysis, Analysis::Frequency(expected));
        assert_eq!(output.image.file_name(), "plot.png");
    }

    #[test]
    fn test_only_stopwords_is_no_text() {
        let request = text_request("the and of it is", Operation::Bigrams);
        let err = pipeline().run(&request).unwrap_err();
        assert!(matches!(err, DocvizError::NoText));
        assert_eq!(err.to_string(), NO_TEXT_MESSAGE);
    }

    #[test]
    fn test_keeping_stopwords_has_text() {
        let request = text_request("the and of it is", Operation::WordFrequency).with_stopword_removal(false);
        assert!(pipeline().run(&request).is_ok());
    }

    #[test]
    fn test_empty_document_is_no_text_for_sentiment() {
        let request = text_request(" \n\n ", Operation::Sentiment);
        assert!(matches!(pipeline().run(&request), Err(DocvizError::NoText)));
    }

    #[test]
    fn test_sentiment_ignores_normalization() {
        // "not" is a stopword; sentiment must still see it.
        let request = text_request("This is not good", Operation::Sentiment);
        let output = pipeline().run(&request).unwrap();
        match output.analysis {
            Analysis::Sentiment(tally) => assert_eq!(tally.negative, 1),
            other => panic!("unexpected analysis: {:?}", other),
        }
    }

    #[test]
    fn test_top_k_is_clamped() {
        let request = text_request("alpha beta gamma", Operation::WordFrequency).with_max_words(0);
        match pipeline().run(&request).unwrap().analysis {
            Analysis::Frequency(counts) => assert_eq!(counts.len(), 1),
            other => panic!("unexpected analysis: {:?}", other),
        }
    }

    #[test]
    fn test_case_sensitive_bigrams() {
        let request = text_request("Rust rust Rust", Operation::Bigrams).with_case_sensitive(true);
        match pipeline().run(&request).unwrap().analysis {
            Analysis::Bigrams(graph) => {
                assert_eq!(graph.nodes, vec!["Rust", "rust"]);
                assert_eq!(graph.weight("Rust", "rust"), Some(2));
            }
            other => panic!("unexpected analysis: {:?}", other),
        }
    }

    #[test]
    fn test_word_cloud_with_default_font() {
        let request = text_request("words for a cloud words", Operation::WordCloud);
        let output = pipeline().run(&request).unwrap();
        match output.analysis {
            Analysis::WordCloud(layout) => {
                assert_eq!(layout.words[0].word, "words");
                assert_eq!(layout.words.len(), 2);
            }
            other => panic!("unexpected analysis: {:?}", other),
        }
        assert_eq!((output.image.width, output.image.height), (800, 400));
    }

    #[test]
    fn test_word_cloud_without_font_fails_cleanly() {
        let config = DocvizConfig::default();
        let pipeline = Pipeline::with_renderer(config.clone(), Renderer::without_font(&config.render));
        let request = text_request("words for a cloud", Operation::WordCloud);
        let err = pipeline.run(&request).unwrap_err();
        assert!(matches!(err, DocvizError::Render(_)));
    }
}
