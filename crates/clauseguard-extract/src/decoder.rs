//! Decoder traits for binary document formats

use clauseguard_core::Result;

/// Produces the text of each page of a PDF
pub trait PdfDecoder: Send + Sync {
    /// One entry per page, in page order; `None` when a page has no
    /// extractable text
    fn decode_pages(&self, bytes: &[u8]) -> Result<Vec<Option<String>>>;

    fn name(&self) -> &str;
}

/// Produces the text of each paragraph of a word-processor document
pub trait ParagraphDecoder: Send + Sync {
    /// One entry per paragraph, in document order, empty paragraphs included
    fn decode_paragraphs(&self, bytes: &[u8]) -> Result<Vec<String>>;

    fn name(&self) -> &str;
}
