//! PDF decoding with lopdf

use crate::decoder::PdfDecoder;
use clauseguard_core::{Error, Result};
use lopdf::Document;
use tracing::debug;

/// Pure-Rust PDF text decoder
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfDecoder;

impl LopdfDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl PdfDecoder for LopdfDecoder {
    fn decode_pages(&self, bytes: &[u8]) -> Result<Vec<Option<String>>> {
        let document = Document::load_mem(bytes)
            .map_err(|e| Error::extraction(format!("failed to parse PDF: {}", e)))?;

        let pages = document.get_pages();
        debug!(pages = pages.len(), "Decoding PDF pages");

        let texts = pages
            .keys()
            .map(|&page_number| match document.extract_text(&[page_number]) {
                Ok(text) => {
                    let text = text.trim_end();
                    (!text.is_empty()).then(|| text.to_string())
                }
                Err(e) => {
                    debug!(page = page_number, error = %e, "Page text not extractable");
                    None
                }
            })
            .collect();

        Ok(texts)
    }

    fn name(&self) -> &str {
        "lopdf"
    }
}
