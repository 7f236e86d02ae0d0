//! Result formatting: JSON, Table, and Markdown output.

use std::fmt;
use std::str::FromStr;

use designdex_core::{DocumentRecord, Result};

use crate::report::SearchReport;

/// Output format for search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
            OutputFormat::Markdown => "markdown",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

const COLUMNS: [&str; 4] = ["path", "status", "title", "uuid"];

/// Format a report in the specified output format.
///
/// # Errors
///
/// Only JSON rendering can fail; see [`SearchReport::to_json`].
pub fn format_report(report: &SearchReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => report.to_json(),
        OutputFormat::Table => Ok(format_table(report)),
        OutputFormat::Markdown => Ok(format_markdown(report)),
    }
}

fn row(doc: &DocumentRecord) -> [String; 4] {
    [
        doc.location.display().to_string(),
        doc.status.to_string(),
        doc.title.clone(),
        doc.identifier.clone().unwrap_or_else(|| "null".to_string()),
    ]
}

fn format_table(report: &SearchReport) -> String {
    let docs = &report.results;
    if docs.is_empty() {
        return match &report.message {
            Some(message) => format!("({message})"),
            None => "(no results)".to_string(),
        };
    }

    let rows: Vec<[String; 4]> = docs.iter().map(row).collect();

    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.len()).collect();
    for r in &rows {
        for (i, val) in r.iter().enumerate() {
            widths[i] = widths[i].max(val.chars().count());
        }
    }

    let mut output = String::new();

    // Header
    let header: Vec<String> = COLUMNS
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:width$}", c, width = widths[i]))
        .collect();
    output.push_str(&header.join(" | "));
    output.push('\n');

    // Separator
    let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    output.push_str(&sep.join("-+-"));
    output.push('\n');

    for r in &rows {
        let vals: Vec<String> = r
            .iter()
            .enumerate()
            .map(|(i, val)| format!("{:width$}", val, width = widths[i]))
            .collect();
        output.push_str(&vals.join(" | "));
        output.push('\n');
    }

    output
}

fn format_markdown(report: &SearchReport) -> String {
    let docs = &report.results;
    if docs.is_empty() {
        return match &report.message {
            Some(message) => format!("*{message}*\n"),
            None => "*No results*\n".to_string(),
        };
    }

    let mut output = String::new();

    output.push_str("| ");
    output.push_str(&COLUMNS.join(" | "));
    output.push_str(" |\n");

    output.push_str("| ");
    let seps: Vec<&str> = COLUMNS.iter().map(|_| "---").collect();
    output.push_str(&seps.join(" | "));
    output.push_str(" |\n");

    for doc in docs {
        let cells: Vec<String> = row(doc).iter().map(|c| c.replace('|', "\\|")).collect();
        output.push_str("| ");
        output.push_str(&cells.join(" | "));
        output.push_str(" |\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use designdex_core::Status;
    use std::path::PathBuf;

    fn sample_report() -> SearchReport {
        let alpha = DocumentRecord {
            location: PathBuf::from("design/alpha.md"),
            identifier: Some("1234abcd".to_string()),
            title: "Alpha | Design".to_string(),
            status: Status::Approved,
            created_at: None,
            modified_at: None,
            keywords: Default::default(),
            summary: String::new(),
        };
        let beta = DocumentRecord {
            location: PathBuf::from("specs/beta.md"),
            identifier: None,
            title: "Beta".to_string(),
            status: Status::Draft,
            ..alpha.clone()
        };
        SearchReport {
            count: 2,
            results: vec![alpha, beta],
            total_scanned: Some(2),
            project_dir: Some("/proj".to_string()),
            message: None,
        }
    }

    #[test]
    fn format_as_json() {
        let output = format_report(&sample_report(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["count"], 2);
        assert!(parsed["results"][1]["uuid"].is_null());
    }

    #[test]
    fn format_as_table() {
        let output = format_report(&sample_report(), OutputFormat::Table).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("path"));
        assert!(lines[1].contains("-+-"));
        assert!(lines[2].contains("approved"));
        assert!(lines[3].contains("null"));
    }

    #[test]
    fn format_as_markdown_escapes_pipes() {
        let output = format_report(&sample_report(), OutputFormat::Markdown).unwrap();
        assert!(output.starts_with("| path | status | title | uuid |\n| --- |"));
        assert!(output.contains("Alpha \\| Design"));
    }

    #[test]
    fn format_empty_result() {
        let mut report = sample_report();
        report.results.clear();
        report.count = 0;
        assert_eq!(format_report(&report, OutputFormat::Table).unwrap(), "(no results)");
        assert_eq!(
            format_report(&report, OutputFormat::Markdown).unwrap(),
            "*No results*\n"
        );
    }

    #[test]
    fn empty_corpus_message_survives_table_and_markdown() {
        let report = SearchReport::no_documents();
        assert_eq!(
            format_report(&report, OutputFormat::Table).unwrap(),
            "(No design documents found)"
        );
        assert_eq!(
            format_report(&report, OutputFormat::Markdown).unwrap(),
            "*No design documents found*\n"
        );
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("TABLE".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert_eq!("md".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
