//! Rendering of annotated spans and review entries
//!
//! Shared by the command-line reviewer and the HTML report.

use clauseguard_core::{AnnotationSpan, ContractReport, ReviewEntry};
use std::fmt::Write;

const ANSI_RESET: &str = "\x1b[0m";
const ANSI_DIM: &str = "\x1b[2m";

fn ansi_color(color: &str) -> &'static str {
    match color {
        "red" => "\x1b[31m",
        "orange" | "yellow" | "gold" => "\x1b[33m",
        "green" => "\x1b[32m",
        "blue" => "\x1b[34m",
        _ => "\x1b[35m",
    }
}

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Spans as terminal text, each clause colored with its label appended
pub fn render_annotated_ansi(spans: &[AnnotationSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        let _ = write!(
            out,
            "{}{}{}{}[{}]{} ",
            ansi_color(&span.color),
            span.text.trim_end(),
            ANSI_RESET,
            ANSI_DIM,
            span.label,
            ANSI_RESET
        );
    }
    out.trim_end().to_string()
}

/// Spans as plain text, one labelled clause per line
pub fn render_annotated_plain(spans: &[AnnotationSpan]) -> String {
    spans
        .iter()
        .map(|span| format!("[{}] {}", span.label, span.text.trim_end()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Spans as inline HTML highlights
pub fn render_annotated_html(spans: &[AnnotationSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        let _ = write!(
            out,
            r#"<span class="annotation" style="background-color: {}">{}<span class="label">{}</span></span>"#,
            escape_html(&span.color),
            escape_html(&span.text),
            escape_html(&span.label)
        );
    }
    out
}

/// Numbered review list in Markdown
pub fn render_reviews_markdown(reviews: &[ReviewEntry]) -> String {
    let mut out = String::new();
    for (idx, review) in reviews.iter().enumerate() {
        let _ = writeln!(out, "**Clause {}:** {}", idx + 1, review.clause);
        let _ = writeln!(out, "- ⚠️ **Issue:** {}", review.issue);
        let _ = writeln!(out, "- 💡 **Suggestion:** {}", review.suggestion);
        let _ = writeln!(out, "- 🛑 **Risk Level:** {}", review.risk);
        let _ = writeln!(out, "---");
    }
    out
}

/// Numbered review list as HTML
pub fn render_reviews_html(reviews: &[ReviewEntry]) -> String {
    let mut out = String::from(r#"<ol class="reviews">"#);
    for review in reviews {
        let _ = write!(
            out,
            "<li><p class=\"clause\">{}</p><ul>\
             <li><strong>Issue:</strong> {}</li>\
             <li><strong>Suggestion:</strong> {}</li>\
             <li><strong>Risk Level:</strong> {}</li></ul></li>",
            escape_html(&review.clause),
            escape_html(&review.issue),
            escape_html(&review.suggestion),
            escape_html(&review.risk)
        );
    }
    out.push_str("</ol>");
    out
}

/// Standalone HTML page with original text, highlights and review list
pub fn render_report_page(title: &str, text: &str, report: &ContractReport) -> String {
    let summary = report.summary();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>{title}</title>
<style>{css}</style>
</head>
<body>
<h1>{title}</h1>
<h2>Original Contract</h2>
<pre class="original">{text}</pre>
<h2>Reviewed Contract with Highlights</h2>
<p class="summary">{clauses} clauses: {high} high risk, {medium} medium risk, {ok} OK</p>
<div class="highlighted">{highlighted}</div>
<h2>Detailed Review &amp; Suggestions</h2>
{reviews}
</body>
</html>
"#,
        title = escape_html(title),
        css = REPORT_CSS,
        text = escape_html(text),
        clauses = summary.clauses,
        high = summary.high,
        medium = summary.medium,
        ok = summary.ok,
        highlighted = render_annotated_html(&report.spans),
        reviews = render_reviews_html(&report.reviews),
    )
}

pub const REPORT_CSS: &str = "body{font-family:sans-serif;max-width:60rem;margin:2rem auto;line-height:1.6}\
pre.original{white-space:pre-wrap;background:#f6f6f6;padding:1rem;max-height:20rem;overflow:auto}\
.annotation{padding:0.1rem 0.3rem;margin:0 0.1rem;border-radius:0.3rem;color:#111}\
.annotation .label{font-size:0.7rem;opacity:0.7;margin-left:0.4rem;text-transform:uppercase}\
ol.reviews li{margin-bottom:1rem}";
