//! Uploaded documents and the text extracted from them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Media type for plain text files.
pub const MEDIA_TYPE_TEXT: &str = "text/plain";

/// Media type for Office Open XML word processing documents.
pub const MEDIA_TYPE_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Media type for PDF files.
pub const MEDIA_TYPE_PDF: &str = "application/pdf";

/// The closed set of document formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    /// UTF-8 text.
    PlainText,
    /// Word `.docx` document.
    WordDoc,
    /// PDF document.
    Pdf,
}

impl DocumentFormat {
    /// Resolve a format from a declared media type.
    ///
    /// Parameters such as `; charset=utf-8` are ignored.
    pub fn from_media_type(media_type: &str) -> Result<Self, LoadError> {
        let essence = media_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            MEDIA_TYPE_TEXT => Ok(Self::PlainText),
            MEDIA_TYPE_DOCX => Ok(Self::WordDoc),
            MEDIA_TYPE_PDF => Ok(Self::Pdf),
            _ => Err(LoadError::UnsupportedFormat(media_type.to_string())),
        }
    }

    /// Resolve a format from a file extension (without the dot).
    pub fn from_extension(extension: &str) -> Result<Self, LoadError> {
        match extension.to_lowercase().as_str() {
            "txt" => Ok(Self::PlainText),
            "docx" => Ok(Self::WordDoc),
            "pdf" => Ok(Self::Pdf),
            _ => Err(LoadError::UnsupportedFormat(format!(".{}", extension))),
        }
    }

    /// Resolve a format from a file path's extension.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(extension)
    }

    /// Canonical media type for this format.
    pub fn media_type(&self) -> &'static str {
        match self {
            Self::PlainText => MEDIA_TYPE_TEXT,
            Self::WordDoc => MEDIA_TYPE_DOCX,
            Self::Pdf => MEDIA_TYPE_PDF,
        }
    }
}

/// Raw bytes of an uploaded file plus its declared format.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    /// File contents.
    pub bytes: Vec<u8>,
    /// Declared format.
    pub format: DocumentFormat,
}

impl UploadedDocument {
    pub fn new(bytes: impl Into<Vec<u8>>, format: DocumentFormat) -> Self {
        Self {
            bytes: bytes.into(),
            format,
        }
    }

    /// Build a document from bytes and a media type string.
    pub fn from_media_type(bytes: impl Into<Vec<u8>>, media_type: &str) -> Result<Self, LoadError> {
        Ok(Self::new(bytes, DocumentFormat::from_media_type(media_type)?))
    }

    /// Read a document from disk, picking the format from the extension.
    pub fn open(path: &Path) -> crate::Result<Self> {
        let format = DocumentFormat::from_path(path)?;
        let bytes = std::fs::read(path)?;
        Ok(Self::new(bytes, format))
    }
}

/// Text extracted from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedText {
    /// All text found, paragraphs/pages separated by `\n`. Empty if none.
    pub text: String,
    /// Parts of the document that could not be read.
    pub warnings: Vec<String>,
}

impl ExtractedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            warnings: Vec::new(),
        }
    }

    /// Empty text with a single warning.
    pub fn failed(warning: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            warnings: vec![warning.into()],
        }
    }

    /// Whether any non-whitespace text was found.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_media_type() {
        assert_eq!(DocumentFormat::from_media_type("text/plain").unwrap(), DocumentFormat::PlainText);
        assert_eq!(
            DocumentFormat::from_media_type("text/plain; charset=utf-8").unwrap(),
            DocumentFormat::PlainText
        );
        assert_eq!(DocumentFormat::from_media_type(MEDIA_TYPE_DOCX).unwrap(), DocumentFormat::WordDoc);
        assert_eq!(DocumentFormat::from_media_type("Application/PDF").unwrap(), DocumentFormat::Pdf);
    }

    #[test]
    fn test_format_unsupported() {
        let err = DocumentFormat::from_media_type("image/png").unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(ref t) if t == "image/png"));
        assert!(DocumentFormat::from_extension("doc").is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(DocumentFormat::from_path(Path::new("notes.TXT")).unwrap(), DocumentFormat::PlainText);
        assert_eq!(DocumentFormat::from_path(Path::new("a/b/report.docx")).unwrap(), DocumentFormat::WordDoc);
        assert!(DocumentFormat::from_path(Path::new("README")).is_err());
    }

    #[test]
    fn test_media_type_round_trip() {
        for format in [DocumentFormat::PlainText, DocumentFormat::WordDoc, DocumentFormat::Pdf] {
            assert_eq!(DocumentFormat::from_media_type(format.media_type()).unwrap(), format);
        }
    }
}
