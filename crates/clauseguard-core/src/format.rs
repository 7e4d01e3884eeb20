//! Document format detection

use serde::{Deserialize, Serialize};
use std::fmt;

/// File suffixes accepted by the upload form
pub const ACCEPTED_SUFFIXES: &[&str] = &[".pdf", ".docx", ".txt"];

/// Decoder selected for an uploaded file.
///
/// Dispatch looks only at the file name suffix. Anything that is not
/// `.pdf` or `.docx` is decoded as plain text, including unknown suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
}

impl DocumentFormat {
    /// Pick a decoder from the file name (case-sensitive suffix match)
    pub fn from_file_name(name: &str) -> Self {
        if name.ends_with(".pdf") {
            Self::Pdf
        } else if name.ends_with(".docx") {
            Self::Docx
        } else {
            Self::Text
        }
    }

    /// Whether the name carries one of the accepted suffixes
    pub fn is_declared(name: &str) -> bool {
        ACCEPTED_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
