//! DOCX decoding: paragraphs of `word/document.xml`

use crate::decoder::ParagraphDecoder;
use clauseguard_core::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

const DOCUMENT_PART: &str = "word/document.xml";

/// Reads body paragraphs out of an Office Open XML word document
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxDecoder;

impl DocxDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl ParagraphDecoder for DocxDecoder {
    fn decode_paragraphs(&self, bytes: &[u8]) -> Result<Vec<String>> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| Error::extraction(format!("not a DOCX archive: {}", e)))?;

        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| Error::extraction(format!("missing {}: {}", DOCUMENT_PART, e)))?
            .read_to_string(&mut xml)
            .map_err(|e| Error::extraction(format!("unreadable {}: {}", DOCUMENT_PART, e)))?;

        parse_paragraphs(&xml)
    }

    fn name(&self) -> &str {
        "docx"
    }
}

/// Collect the text of every paragraph that is a direct child of `w:body`.
///
/// Run text (`w:t`) is concatenated, `w:tab` becomes a tab and `w:br` /
/// `w:cr` become newlines. Table cells are not body paragraphs. Text box
/// content and `mc:Fallback` renditions are not part of the enclosing
/// paragraph.
pub fn parse_paragraphs(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut in_text = false;
    // Depth of the element being skipped, if any
    let mut skip_depth: Option<usize> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| Error::extraction(format!("malformed document XML: {}", e)))?;

        match event {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                if skip_depth.is_none() {
                    if is_detached(&name) {
                        skip_depth = Some(stack.len());
                    } else if name == b"p" && parent_is_body(&stack) {
                        current = Some(String::new());
                    } else if name == b"t" && current.is_some() {
                        in_text = true;
                    }
                }
                stack.push(name);
            }
            Event::Empty(_) if skip_depth.is_some() => {}
            Event::Empty(e) => {
                let name = e.local_name();
                match (name.as_ref(), current.as_mut()) {
                    (b"p", None) if parent_is_body(&stack) => paragraphs.push(String::new()),
                    (b"tab", Some(text)) => text.push('\t'),
                    (b"br" | b"cr", Some(text)) => text.push('\n'),
                    _ => {}
                }
            }
            Event::Text(e) if in_text => {
                let text = e
                    .unescape()
                    .map_err(|e| Error::extraction(format!("bad text in document XML: {}", e)))?;
                if let Some(paragraph) = current.as_mut() {
                    paragraph.push_str(&text);
                }
            }
            Event::End(e) => {
                stack.pop();
                if let Some(depth) = skip_depth {
                    if stack.len() == depth {
                        skip_depth = None;
                    }
                    continue;
                }

                let name = e.local_name();
                if name.as_ref() == b"t" {
                    in_text = false;
                } else if name.as_ref() == b"p" && parent_is_body(&stack) {
                    if let Some(paragraph) = current.take() {
                        paragraphs.push(paragraph);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn is_detached(name: &[u8]) -> bool {
    matches!(name, b"txbxContent" | b"Fallback")
}

fn parent_is_body(stack: &[Vec<u8>]) -> bool {
    stack.last().is_some_and(|name| name == b"body")
}
