//! Document loading: one text extractor per supported format.

mod docx;
mod text;

pub use docx::DocxExtractor;
pub use text::PlainTextExtractor;

use tracing::{debug, warn};

use crate::error::LoadError;
use crate::models::document::{DocumentFormat, ExtractedText, UploadedDocument};
use crate::pdf::{PdfExtractor, PdfProcessor};

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Trait for format-specific text extractors.
pub trait TextExtractor {
    /// Extract all text from the document bytes.
    fn extract(&self, data: &[u8]) -> Result<ExtractedText>;
}

/// PDF adapter over [`PdfExtractor`].
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, data: &[u8]) -> Result<ExtractedText> {
        let mut extractor = PdfExtractor::new();
        extractor.load(data)?;
        let content = extractor.extract_pages()?;
        Ok(ExtractedText {
            text: content.text,
            warnings: content.warnings,
        })
    }
}

/// Pick the extractor for a format.
pub fn extractor_for(format: DocumentFormat) -> Box<dyn TextExtractor> {
    match format {
        DocumentFormat::PlainText => Box::new(PlainTextExtractor),
        DocumentFormat::WordDoc => Box::new(DocxExtractor),
        DocumentFormat::Pdf => Box::new(PdfTextExtractor),
    }
}

/// Extract text from an uploaded document.
///
/// Never fails: unreadable or malformed content yields empty text and a
/// warning describing what went wrong.
pub fn load(document: &UploadedDocument) -> ExtractedText {
    debug!(
        "Extracting {:?} document ({} bytes)",
        document.format,
        document.bytes.len()
    );

    match extractor_for(document.format).extract(&document.bytes) {
        Ok(extracted) => {
            for warning in &extracted.warnings {
                warn!("Partial extraction: {}", warning);
            }
            debug!("Extracted {} chars", extracted.text.len());
            extracted
        }
        Err(e) => {
            warn!("Could not read {:?} document: {}", document.format, e);
            ExtractedText::failed(e.to_string())
        }
    }
}

/// Extract text from bytes with a declared media type.
///
/// Fails only when the media type is not one of the supported formats.
pub fn load_with_media_type(data: &[u8], media_type: &str) -> Result<ExtractedText> {
    let document = UploadedDocument::from_media_type(data.to_vec(), media_type)?;
    Ok(load(&document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::{MEDIA_TYPE_DOCX, MEDIA_TYPE_PDF};

    #[test]
    fn test_load_plain_text() {
        let doc = UploadedDocument::new(b"first line\nsecond line".to_vec(), DocumentFormat::PlainText);
        let extracted = load(&doc);
        assert_eq!(extracted.text, "first line\nsecond line");
        assert!(extracted.warnings.is_empty());
    }

    #[test]
    fn test_load_pdf_scenario() {
        let data = crate::pdf::tests_support::build_pdf(&["Hello", "World"]);
        let extracted = load_with_media_type(&data, MEDIA_TYPE_PDF).unwrap();
        assert_eq!(extracted.text, "Hello\nWorld\n");
    }

    #[test]
    fn test_malformed_documents_yield_empty_text() {
        for format in [DocumentFormat::WordDoc, DocumentFormat::Pdf] {
            let doc = UploadedDocument::new(b"\x00\x01garbage".to_vec(), format);
            let extracted = load(&doc);
            assert_eq!(extracted.text, "");
            assert_eq!(extracted.warnings.len(), 1);
        }
    }

    #[test]
    fn test_empty_documents_yield_empty_text() {
        for media_type in ["text/plain", MEDIA_TYPE_DOCX, MEDIA_TYPE_PDF] {
            let extracted = load_with_media_type(b"", media_type).unwrap();
            assert!(extracted.is_blank(), "{} should be blank", media_type);
        }
    }

    #[test]
    fn test_unsupported_media_type() {
        let err = load_with_media_type(b"GIF89a", "image/gif").unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(_)));
    }
}
