//! Word (`.docx`) documents.
//!
//! Only top-level body paragraphs are read. Tables, headers, footers, text
//! boxes and embedded objects are skipped.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use tracing::trace;
use zip::ZipArchive;

use super::{Result, TextExtractor};
use crate::error::LoadError;
use crate::models::document::ExtractedText;

const DOCUMENT_PART: &str = "word/document.xml";

/// Reads paragraph text from the main document part of an OOXML archive.
pub struct DocxExtractor;

impl DocxExtractor {
    fn read_document_part(data: &[u8]) -> Result<String> {
        let mut archive =
            ZipArchive::new(Cursor::new(data)).map_err(|e| LoadError::Docx(e.to_string()))?;
        let mut part = archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| LoadError::Docx(format!("{}: {}", DOCUMENT_PART, e)))?;

        let mut xml = String::new();
        part.read_to_string(&mut xml)
            .map_err(|e| LoadError::Docx(format!("{}: {}", DOCUMENT_PART, e)))?;
        Ok(xml)
    }
}

impl TextExtractor for DocxExtractor {
    fn extract(&self, data: &[u8]) -> Result<ExtractedText> {
        let xml = Self::read_document_part(data)?;
        let paragraphs = body_paragraphs(&xml)?;
        trace!("Read {} body paragraphs", paragraphs.len());
        Ok(ExtractedText::new(paragraphs.join("\n")))
    }
}

/// Tracks where the reader is relative to the current body paragraph.
struct ParagraphState {
    stack: Vec<Vec<u8>>,
    paragraph_depth: Option<usize>,
    current: String,
    paragraphs: Vec<String>,
}

impl ParagraphState {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            paragraph_depth: None,
            current: String::new(),
            paragraphs: Vec::new(),
        }
    }

    fn parent_is(&self, name: &[u8]) -> bool {
        self.stack.last().is_some_and(|n| n.as_slice() == name)
    }

    /// True when the innermost open elements are `.. w:r` (plus `leaf` if
    /// given) belonging to the current body paragraph rather than to a
    /// nested one inside a text box.
    fn in_paragraph_run(&self, leaf: Option<&[u8]>) -> bool {
        let Some(depth) = self.paragraph_depth else {
            return false;
        };
        let inner = &self.stack[depth.min(self.stack.len())..];
        if inner.iter().any(|n| n.as_slice() == b"w:p") {
            return false;
        }
        match leaf {
            Some(leaf) => {
                let n = inner.len();
                n >= 2 && inner[n - 1].as_slice() == leaf && inner[n - 2].as_slice() == b"w:r"
            }
            None => inner.last().is_some_and(|n| n.as_slice() == b"w:r"),
        }
    }

    fn start(&mut self, name: &[u8]) {
        if name == b"w:p" && self.paragraph_depth.is_none() && self.parent_is(b"w:body") {
            self.stack.push(name.to_vec());
            self.paragraph_depth = Some(self.stack.len());
            self.current.clear();
            return;
        }
        self.stack.push(name.to_vec());
    }

    fn empty(&mut self, name: &[u8]) {
        match name {
            b"w:p" if self.paragraph_depth.is_none() && self.parent_is(b"w:body") => {
                self.paragraphs.push(String::new());
            }
            b"w:tab" if self.in_paragraph_run(None) => self.current.push('\t'),
            b"w:br" | b"w:cr" if self.in_paragraph_run(None) => self.current.push('\n'),
            _ => {}
        }
    }

    fn end(&mut self) {
        if self.paragraph_depth == Some(self.stack.len()) {
            self.paragraphs.push(std::mem::take(&mut self.current));
            self.paragraph_depth = None;
        }
        self.stack.pop();
    }

    fn text(&mut self, text: &str) {
        if self.in_paragraph_run(Some(b"w:t")) {
            self.current.push_str(text);
        }
    }
}

/// Collect the text of each `w:body/w:p` in document order.
pub fn body_paragraphs(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut state = ParagraphState::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => state.start(e.name().as_ref()),
            Ok(Event::Empty(e)) => state.empty(e.name().as_ref()),
            Ok(Event::End(_)) => state.end(),
            Ok(Event::Text(e)) => {
                let text = e.unescape().map_err(|e| LoadError::Docx(e.to_string()))?;
                state.text(&text);
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e);
                state.text(&text);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(LoadError::Docx(format!(
                    "XML error at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
        }
    }

    Ok(state.paragraphs)
}
