//! Command-line review and rule listing

use crate::cli::{ReportFormat, RulesFormat};
use crate::config::ReviewConfig;
use crate::render;
use clauseguard_classifiers::ReviewPipeline;
use clauseguard_core::{ContractReport, DocumentFormat, Error, Result};
use clauseguard_extract::{ExtractedDocument, TextExtractor};
use clauseguard_rules::RuleTable;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    document: &'a ExtractedDocument,
    report: &'a ContractReport,
}

/// Extract and review one file according to `config`
pub fn review_file(config: &ReviewConfig, path: &Path) -> Result<(ExtractedDocument, ContractReport)> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| Error::config(format!("{} is not a file", path.display())))?;

    if config.strict_formats && !DocumentFormat::is_declared(&file_name) {
        return Err(Error::unsupported_format(format!(
            "'{}' is not a .pdf, .docx or .txt file",
            file_name
        )));
    }

    let bytes = std::fs::read(path)?;
    let rules = Arc::new(RuleTable::load_or_builtin(config.rules_path.as_deref())?);
    let pipeline = ReviewPipeline::from_rules(rules)?;

    let document = TextExtractor::new(config.empty_page).extract(&file_name, &bytes)?;
    let report = pipeline.analyze(&document.text);
    Ok((document, report))
}

/// Write the report for `document` in the requested format
pub fn write_report(
    out: &mut impl Write,
    document: &ExtractedDocument,
    report: &ContractReport,
    format: ReportFormat,
    plain: bool,
) -> Result<()> {
    match format {
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &JsonReport { document, report })?;
            writeln!(out)?;
        }
        ReportFormat::Html => {
            write!(
                out,
                "{}",
                render::render_report_page(&document.file_name, &document.text, report)
            )?;
        }
        ReportFormat::Text => {
            let summary = report.summary();
            writeln!(out, "📄 Original Contract ({})", document.file_name)?;
            writeln!(out, "{}", document.text.trim_end())?;
            writeln!(out)?;
            writeln!(out, "✅ Reviewed Contract with Highlights")?;
            writeln!(
                out,
                "{} clauses: {} high risk, {} medium risk, {} OK",
                summary.clauses, summary.high, summary.medium, summary.ok
            )?;
            if plain {
                writeln!(out, "{}", render::render_annotated_plain(&report.spans))?;
            } else {
                writeln!(out, "{}", render::render_annotated_ansi(&report.spans))?;
            }
            writeln!(out)?;
            writeln!(out, "📋 Detailed Review & Suggestions")?;
            if report.reviews.is_empty() {
                writeln!(out, "No risky clauses found.")?;
            } else {
                write!(out, "{}", render::render_reviews_markdown(&report.reviews))?;
            }
        }
    }
    Ok(())
}

/// Write the active rule table
pub fn write_rules(out: &mut impl Write, config: &ReviewConfig, format: RulesFormat) -> Result<()> {
    let rules = RuleTable::load_or_builtin(config.rules_path.as_deref())?;
    match format {
        RulesFormat::Yaml => write!(out, "{}", rules.to_yaml()?)?,
        RulesFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &rules)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
