//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, warn};

use super::{PdfProcessor, Result};
use crate::error::LoadError;

/// PDF content extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

/// Extracted content from a PDF.
#[derive(Debug, Clone, Default)]
pub struct PdfContent {
    /// Page texts, each followed by a newline.
    pub text: String,
    /// Pages with their content.
    pub pages: Vec<PdfPage>,
    /// Pages that could not be read.
    pub warnings: Vec<String>,
}

/// Content from a single PDF page.
#[derive(Debug, Clone)]
pub struct PdfPage {
    /// Page number (1-indexed).
    pub number: u32,
    /// Extracted text from this page, trimmed.
    pub text: String,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Run pdf-extract over the whole document, one string per page.
    ///
    /// pdf-extract panics on some malformed font programs, so the panic is
    /// contained and reported as an extraction error.
    fn extract_with_pdf_extract(&self) -> Result<Vec<String>> {
        let data = &self.raw_data;
        match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(data)) {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(LoadError::Pdf(e.to_string())),
            Err(_) => Err(LoadError::Pdf("text extractor panicked".to_string())),
        }
    }

    /// Fall back to lopdf page by page; failing pages are skipped with a warning.
    fn extract_page_by_page(&self, warnings: &mut Vec<String>) -> Vec<PdfPage> {
        let mut pages = Vec::new();
        for number in 1..=self.page_count() {
            match self.extract_page_text(number) {
                Ok(text) => pages.push(PdfPage { number, text }),
                Err(e) => {
                    warn!("Skipping PDF page {}: {}", number, e);
                    warnings.push(format!("page {}: {}", number, e));
                    pages.push(PdfPage {
                        number,
                        text: String::new(),
                    });
                }
            }
        }
        pages
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| LoadError::Pdf(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(LoadError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // Save decrypted document to raw_data for pdf_extract
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| LoadError::Pdf(format!("failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        debug!("Loaded PDF with {} pages", doc.get_pages().len());
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_pages(&self) -> Result<PdfContent> {
        if self.document.is_none() {
            return Err(LoadError::Pdf("no document loaded".to_string()));
        }

        let page_count = self.page_count();
        let mut warnings = Vec::new();

        let pages = match self.extract_with_pdf_extract() {
            Ok(texts) if texts.len() == page_count as usize => texts
                .into_iter()
                .zip(1..)
                .map(|(text, number)| PdfPage {
                    number,
                    text: text.trim().to_string(),
                })
                .collect(),
            Ok(texts) => {
                debug!(
                    "pdf-extract returned {} pages for a {} page document, using lopdf",
                    texts.len(),
                    page_count
                );
                self.extract_page_by_page(&mut warnings)
            }
            Err(e) => {
                debug!("pdf-extract failed ({}), using lopdf", e);
                self.extract_page_by_page(&mut warnings)
            }
        };

        let mut text = String::new();
        for page in &pages {
            text.push_str(&page.text);
            text.push('\n');
        }

        debug!(
            "PDF extraction: {} pages, {} chars, {} warnings",
            pages.len(),
            text.len(),
            warnings.len()
        );

        Ok(PdfContent {
            text,
            pages,
            warnings,
        })
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        let doc = self
            .document
            .as_ref()
            .ok_or_else(|| LoadError::Pdf("no document loaded".to_string()))?;

        let text = doc
            .extract_text(&[page])
            .map_err(|e| LoadError::Pdf(e.to_string()))?;
        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::tests_support::build_pdf;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
        assert!(extractor.extract_pages().is_err());
    }

    #[test]
    fn test_two_pages_end_with_newlines() {
        let data = build_pdf(&["Hello", "World"]);
        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();

        assert_eq!(extractor.page_count(), 2);
        let content = extractor.extract_pages().unwrap();
        assert_eq!(content.text, "Hello\nWorld\n");
        assert_eq!(content.pages.len(), 2);
        assert_eq!(content.pages[1].number, 2);
    }

    #[test]
    fn test_extract_single_page() {
        let data = build_pdf(&["First", "Second"]);
        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();
        assert_eq!(extractor.extract_page_text(2).unwrap(), "Second");
    }

    #[test]
    fn test_load_garbage_fails() {
        let mut extractor = PdfExtractor::new();
        assert!(matches!(extractor.load(b"definitely not a pdf"), Err(LoadError::Pdf(_))));
    }
}
