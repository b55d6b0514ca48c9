//! Plain text documents.

use super::{Result, TextExtractor};
use crate::models::document::ExtractedText;

/// Decodes bytes as UTF-8.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, data: &[u8]) -> Result<ExtractedText> {
        // Invalid sequences become U+FFFD rather than failing the upload.
        let text = String::from_utf8_lossy(data);
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text).to_string();
        Ok(ExtractedText::new(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        let extracted = PlainTextExtractor.extract("zażółć gęślą jaźń\n".as_bytes()).unwrap();
        assert_eq!(extracted.text, "zażółć gęślą jaźń\n");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let extracted = PlainTextExtractor.extract(b"ok \xff\xfe end").unwrap();
        assert!(extracted.text.starts_with("ok "));
        assert!(extracted.text.ends_with(" end"));
        assert!(extracted.text.contains('\u{fffd}'));
    }

    #[test]
    fn test_byte_order_mark_stripped() {
        let extracted = PlainTextExtractor.extract(b"\xef\xbb\xbfhello").unwrap();
        assert_eq!(extracted.text, "hello");
    }
}
