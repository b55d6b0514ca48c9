//! Core library for visual document analysis.
//!
//! This crate provides:
//! - Text extraction from plain text, Word (`.docx`) and PDF documents
//! - Stopword removal and case folding
//! - Word frequency, bigram, word cloud and sentiment analyzers
//! - PNG rendering of bar charts, co-occurrence graphs, word clouds and pie charts

pub mod analysis;
pub mod error;
pub mod loader;
pub mod models;
pub mod pdf;
pub mod pipeline;
pub mod render;
pub mod text;

pub use analysis::{Analysis, BigramGraph, SentimentTally, WordCloudLayout, WordCount};
pub use error::{DocvizError, LoadError, RenderError, Result, NO_TEXT_MESSAGE};
pub use loader::{load, load_with_media_type, TextExtractor};
pub use models::{
    AnalysisRequest, DocumentFormat, DocvizConfig, ExtractedText, NormalizeOptions, Operation,
    UploadedDocument,
};
pub use pipeline::{Pipeline, PipelineOutput};
pub use render::{RenderedImage, Renderer, PLOT_FILE_NAME, PLOT_MIME_TYPE};
