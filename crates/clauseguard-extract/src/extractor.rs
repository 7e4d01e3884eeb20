//! Format dispatch and newline joining

use crate::decoder::{ParagraphDecoder, PdfDecoder};
use crate::docx::DocxDecoder;
use crate::pdf::LopdfDecoder;
use clauseguard_core::{DocumentFormat, Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

/// What to do with a PDF page that has no extractable text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyPagePolicy {
    /// Abort the whole extraction
    #[default]
    Fail,
    /// Leave the page out and continue
    Skip,
}

impl FromStr for EmptyPagePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "skip" => Ok(Self::Skip),
            other => Err(format!("unknown empty-page policy '{}' (expected fail or skip)", other)),
        }
    }
}

/// Text extracted from one upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub file_name: String,
    pub format: DocumentFormat,
    pub text: String,
}

/// Turns uploaded bytes into plain text, choosing the decoder by file suffix
#[derive(Clone)]
pub struct TextExtractor {
    pdf: Arc<dyn PdfDecoder>,
    paragraphs: Arc<dyn ParagraphDecoder>,
    empty_page: EmptyPagePolicy,
}

impl TextExtractor {
    /// Extractor backed by the bundled lopdf and DOCX decoders
    pub fn new(empty_page: EmptyPagePolicy) -> Self {
        Self::with_decoders(
            Arc::new(LopdfDecoder::new()),
            Arc::new(DocxDecoder::new()),
            empty_page,
        )
    }

    /// Extractor backed by caller-supplied decoders
    pub fn with_decoders(
        pdf: Arc<dyn PdfDecoder>,
        paragraphs: Arc<dyn ParagraphDecoder>,
        empty_page: EmptyPagePolicy,
    ) -> Self {
        Self {
            pdf,
            paragraphs,
            empty_page,
        }
    }

    pub fn empty_page_policy(&self) -> EmptyPagePolicy {
        self.empty_page
    }

    /// Extract the text of `bytes`, uploaded under `file_name`
    pub fn extract(&self, file_name: &str, bytes: &[u8]) -> Result<ExtractedDocument> {
        let format = DocumentFormat::from_file_name(file_name);

        let text = match format {
            DocumentFormat::Pdf => self.extract_pdf(bytes)?,
            DocumentFormat::Docx => self.extract_paragraphs(bytes)?,
            DocumentFormat::Text => decode_utf8(bytes)?,
        };

        metrics::counter!("clauseguard_documents_total", "format" => format.as_str()).increment(1);
        info!(
            file = %file_name,
            format = %format,
            bytes = bytes.len(),
            chars = text.chars().count(),
            "Extracted document text"
        );

        Ok(ExtractedDocument {
            file_name: file_name.to_string(),
            format,
            text,
        })
    }

    fn extract_pdf(&self, bytes: &[u8]) -> Result<String> {
        let pages = self.pdf.decode_pages(bytes)?;
        let mut text = String::new();

        for (idx, page) in pages.into_iter().enumerate() {
            match (page, self.empty_page) {
                (Some(page), _) => {
                    text.push_str(&page);
                    text.push('\n');
                }
                (None, EmptyPagePolicy::Fail) => {
                    return Err(Error::extraction(format!(
                        "page {} has no extractable text",
                        idx + 1
                    )));
                }
                (None, EmptyPagePolicy::Skip) => {
                    warn!(page = idx + 1, decoder = self.pdf.name(), "Skipping page without text");
                }
            }
        }

        Ok(text)
    }

    fn extract_paragraphs(&self, bytes: &[u8]) -> Result<String> {
        let paragraphs = self.paragraphs.decode_paragraphs(bytes)?;
        let mut text = String::new();
        for paragraph in paragraphs {
            text.push_str(&paragraph);
            text.push('\n');
        }
        Ok(text)
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new(EmptyPagePolicy::default())
    }
}

fn decode_utf8(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| Error::extraction(format!("text is not valid UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePdf(Vec<Option<&'static str>>);

    impl PdfDecoder for FakePdf {
        fn decode_pages(&self, _bytes: &[u8]) -> Result<Vec<Option<String>>> {
            Ok(self.0.iter().map(|p| p.map(str::to_string)).collect())
        }

        fn name(&self) -> &str {
            "fake-pdf"
        }
    }

    struct FakeParagraphs(Vec<&'static str>);

    impl ParagraphDecoder for FakeParagraphs {
        fn decode_paragraphs(&self, _bytes: &[u8]) -> Result<Vec<String>> {
            Ok(self.0.iter().map(|p| p.to_string()).collect())
        }

        fn name(&self) -> &str {
            "fake-docx"
        }
    }

    fn extractor(pages: Vec<Option<&'static str>>, policy: EmptyPagePolicy) -> TextExtractor {
        TextExtractor::with_decoders(
            Arc::new(FakePdf(pages)),
            Arc::new(FakeParagraphs(vec!["Heading", "", "Body text."])),
            policy,
        )
    }

    #[test]
    fn test_pdf_pages_joined_with_newlines() {
        let extractor = extractor(vec![Some("Page one."), Some("Page two.")], EmptyPagePolicy::Fail);
        let doc = extractor.extract("contract.pdf", b"%PDF").unwrap();
        assert_eq!(doc.format, DocumentFormat::Pdf);
        assert_eq!(doc.text, "Page one.\nPage two.\n");
    }

    #[test]
    fn test_empty_page_fails_by_default() {
        let extractor = extractor(vec![Some("Page one."), None], EmptyPagePolicy::default());
        let err = extractor.extract("contract.pdf", b"%PDF").unwrap_err();
        assert!(matches!(err, Error::Extraction(ref msg) if msg.contains("page 2")));
    }

    #[test]
    fn test_empty_page_skipped_when_configured() {
        let extractor = extractor(vec![None, Some("Page two.")], EmptyPagePolicy::Skip);
        let doc = extractor.extract("contract.pdf", b"%PDF").unwrap();
        assert_eq!(doc.text, "Page two.\n");
    }

    #[test]
    fn test_paragraphs_keep_blank_lines() {
        let extractor = extractor(Vec::new(), EmptyPagePolicy::Fail);
        let doc = extractor.extract("agreement.docx", b"PK").unwrap();
        assert_eq!(doc.format, DocumentFormat::Docx);
        assert_eq!(doc.text, "Heading\n\nBody text.\n");
    }

    #[test]
    fn test_plain_text_verbatim() {
        let extractor = TextExtractor::default();
        let doc = extractor.extract("terms.txt", "  Clause one.\r\nClause two.".as_bytes()).unwrap();
        assert_eq!(doc.text, "  Clause one.\r\nClause two.");
    }

    #[test]
    fn test_unknown_suffix_uses_plain_text() {
        let extractor = TextExtractor::default();
        let doc = extractor.extract("notes.xyz", b"Party B must pay rent monthly.").unwrap();
        assert_eq!(doc.format, DocumentFormat::Text);
        assert_eq!(doc.text, "Party B must pay rent monthly.");
    }

    #[test]
    fn test_invalid_utf8() {
        let extractor = TextExtractor::default();
        let err = extractor.extract("terms.txt", &[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }

    #[test]
    fn test_empty_text_file() {
        let doc = TextExtractor::default().extract("empty.txt", b"").unwrap();
        assert_eq!(doc.text, "");
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("skip".parse::<EmptyPagePolicy>(), Ok(EmptyPagePolicy::Skip));
        assert_eq!("FAIL".parse::<EmptyPagePolicy>(), Ok(EmptyPagePolicy::Fail));
        assert!("ignore".parse::<EmptyPagePolicy>().is_err());
    }
}
