//! Data models shared across the pipeline.

pub mod config;
pub mod document;
pub mod request;

pub use config::DocvizConfig;
pub use document::{DocumentFormat, ExtractedText, UploadedDocument};
pub use request::{AnalysisRequest, NormalizeOptions, Operation};
