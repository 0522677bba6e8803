use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::format::criteria::format_criteria;
use crate::record::QuizRecord;

pub mod template;

/// Column order of the tabular rendering.
pub const CSV_HEADER: [&str; 4] = ["question", "answer", "spell", "criteria"];

/// Rendering targets supported by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Html,
    Markdown,
    Template,
}

/// Decide the output format. A user-supplied template always wins; otherwise
/// the output file extension decides, falling back to `Template` (which the
/// caller must reject when no template file was given).
pub fn detect_output_format(output: &Path, template: Option<&Path>) -> OutputFormat {
    if template.is_some() {
        return OutputFormat::Template;
    }
    let ext = output
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("csv") => OutputFormat::Csv,
        Some("html") | Some("htm") => OutputFormat::Html,
        Some("md") | Some("markdown") => OutputFormat::Markdown,
        _ => OutputFormat::Template,
    }
}

/// Render records as a CSV table with the fixed four-field header. The
/// judgement field is empty for records without criteria.
#[instrument(skip(records), fields(records = records.len()))]
pub fn render_csv(records: &[QuizRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(CSV_HEADER)
        .context("failed to write CSV header")?;

    for record in records {
        let criteria = record
            .criteria
            .as_ref()
            .map(format_criteria)
            .unwrap_or_default();
        writer
            .write_record([
                record.question.as_str(),
                record.answer.as_str(),
                record.spell.as_deref().unwrap_or(""),
                criteria.as_str(),
            ])
            .with_context(|| {
                format!("failed to write CSV row for question `{}`", record.question)
            })?;
    }

    writer.flush().context("failed to flush CSV output")?;
    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("failed to recover CSV buffer: {err}"))?;
    let out = String::from_utf8(bytes).context("CSV output was not valid UTF-8")?;
    debug!(rows = records.len(), "tabular rendering completed");
    Ok(out)
}
