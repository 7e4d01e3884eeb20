//! Server and reviewer configuration

use crate::cli::CommonArgs;
use clauseguard_core::{Error, Result};
use clauseguard_extract::EmptyPagePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ClauseGuard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// Listen address
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Rule table file; built-in rules when absent
    #[serde(default)]
    pub rules_path: Option<PathBuf>,

    /// Handling of PDF pages without extractable text
    #[serde(default)]
    pub empty_page: EmptyPagePolicy,

    /// Reject uploads whose name does not end in .pdf, .docx or .txt
    #[serde(default)]
    pub strict_formats: bool,

    /// Maximum accepted upload size
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl ReviewConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(args: &CommonArgs) -> Result<Self> {
        let mut config = Self::from_file_or_default(&args.config)?;

        if let Some(rules) = &args.rules {
            config.rules_path = Some(rules.clone());
        }

        if let Some(policy) = args.empty_page {
            config.empty_page = policy;
        }

        if args.strict_formats {
            config.strict_formats = true;
        }

        Ok(config)
    }

    /// Parse `path` when it exists, otherwise use defaults
    pub fn from_file_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))
    }
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            port: default_port(),
            rules_path: None,
            empty_page: EmptyPagePolicy::default(),
            strict_formats: false,
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_listen() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}
