//! Error types for the docviz-core library.

use thiserror::Error;

/// Message shown when there is nothing left to visualize.
pub const NO_TEXT_MESSAGE: &str =
    "No text found to generate Visualization. Try another file or disable stopword filtering.";

/// Main error type for the docviz library.
#[derive(Error, Debug)]
pub enum DocvizError {
    /// Document loading error.
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// Chart rendering error.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// I/O error while reading an input file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The text to analyze is empty after extraction and filtering.
    #[error("{}", NO_TEXT_MESSAGE)]
    NoText,
}

/// Errors related to document loading.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The declared media type or extension is not one of the supported formats.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Pdf(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// Failed to read the Word document archive or its XML.
    #[error("failed to read Word document: {0}")]
    Docx(String),
}

/// Errors related to chart rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    /// No font could be found and the chart cannot be drawn without text.
    #[error("no font available; pass a TrueType font path")]
    FontUnavailable,

    /// The font file could not be parsed.
    #[error("invalid font: {0}")]
    Font(String),

    /// PNG encoding failed.
    #[error("failed to encode PNG: {0}")]
    Encode(String),
}

/// Result type for the docviz library.
pub type Result<T> = std::result::Result<T, DocvizError>;
