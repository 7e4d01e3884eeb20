use clap::{Args, Parser, Subcommand, ValueEnum};
use clauseguard_extract::EmptyPagePolicy;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clauseguard")]
#[command(
    author,
    version,
    about = "Contract review with risk highlights and suggested rewrites"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the review server with web UI
    Serve {
        #[command(flatten)]
        common: CommonArgs,

        /// Listen address
        #[arg(short, long)]
        address: Option<String>,

        /// Listen port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Review a single contract file and print the report
    Review {
        /// Contract file (.pdf, .docx or .txt)
        file: PathBuf,

        #[command(flatten)]
        common: CommonArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Disable ANSI colors in text output
        #[arg(long)]
        plain: bool,
    },

    /// Print the active rule table
    Rules {
        #[command(flatten)]
        common: CommonArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = RulesFormat::Yaml)]
        format: RulesFormat,
    },
}

/// Flags shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "clauseguard.yaml")]
    pub config: PathBuf,

    /// Rule table file (YAML); the built-in table is used when omitted
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// What to do with PDF pages without text: fail or skip
    #[arg(long, value_parser = parse_empty_page)]
    pub empty_page: Option<EmptyPagePolicy>,

    /// Reject files not ending in .pdf, .docx or .txt
    #[arg(long)]
    pub strict_formats: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Highlighted text and numbered review list
    Text,
    /// Extracted text and report as JSON
    Json,
    /// Standalone HTML page
    Html,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesFormat {
    Yaml,
    Json,
}

fn parse_empty_page(s: &str) -> Result<EmptyPagePolicy, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_review_command() {
        let cli = Cli::parse_from([
            "clauseguard",
            "review",
            "lease.pdf",
            "--empty-page",
            "skip",
            "--format",
            "json",
        ]);

        match cli.command {
            Commands::Review {
                file,
                common,
                format,
                plain,
            } => {
                assert_eq!(file, PathBuf::from("lease.pdf"));
                assert_eq!(common.empty_page, Some(EmptyPagePolicy::Skip));
                assert_eq!(format, ReportFormat::Json);
                assert!(!plain);
            }
            _ => panic!("Wrong command"),
        }
    }

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::parse_from(["clauseguard", "serve", "--port", "9000"]);
        match cli.command {
            Commands::Serve {
                common,
                address,
                port,
            } => {
                assert_eq!(common.config, PathBuf::from("clauseguard.yaml"));
                assert_eq!(address, None);
                assert_eq!(port, Some(9000));
            }
            _ => panic!("Wrong command"),
        }
    }

    #[test]
    fn test_invalid_empty_page_policy() {
        let result = Cli::try_parse_from(["clauseguard", "rules", "--empty-page", "maybe"]);
        assert!(result.is_err());
    }
}
