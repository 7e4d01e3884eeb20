//! ClauseGuard Extraction
//!
//! Converts an uploaded contract into one plain-text string.
//!
//! The format is chosen from the file name suffix alone:
//! - `.pdf`: page texts joined by newlines ([`pdf::LopdfDecoder`])
//! - `.docx`: paragraph texts joined by newlines ([`docx::DocxDecoder`])
//! - anything else: the bytes decoded as UTF-8
//!
//! Decoders sit behind the [`PdfDecoder`] and [`ParagraphDecoder`] traits
//! so the extractor can be driven by other backends.

pub mod decoder;
pub mod docx;
pub mod extractor;
pub mod pdf;

pub use decoder::{ParagraphDecoder, PdfDecoder};
pub use docx::DocxDecoder;
pub use extractor::{EmptyPagePolicy, ExtractedDocument, TextExtractor};
pub use pdf::LopdfDecoder;
