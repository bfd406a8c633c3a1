use crate::domain::model::{OutputFormat, OutputRow, TransformResult, OUTPUT_HEADERS};
use crate::utils::error::{EtlError, Result};
use chrono::{DateTime, Local};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Local>,
    filled_by: &'a str,
    row_count: usize,
    rows: &'a [OutputRow],
}

fn write_delimited(rows: &[OutputRow], delimiter: u8, quote_style: QuoteStyle) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(quote_style)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(OUTPUT_HEADERS)?;
    for row in rows {
        writer.write_record(row.cells())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EtlError::ProcessingError {
            message: format!("Failed to flush output: {}", e.error()),
        })?;
    let mut text = String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
        message: format!("Output is not valid UTF-8: {}", e),
    })?;

    // 貼到試算表時不需要最後的換行
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Spreadsheet paste format: plain tab-joined cells, never quoted.
pub fn to_tsv(rows: &[OutputRow]) -> Result<String> {
    write_delimited(rows, b'\t', QuoteStyle::Never)
}

pub fn to_csv(rows: &[OutputRow]) -> Result<String> {
    write_delimited(rows, b',', QuoteStyle::Necessary)
}

pub fn to_json_report(result: &TransformResult) -> Result<String> {
    let report = JsonReport {
        generated_at: result.processed_at,
        filled_by: &result.filled_by,
        row_count: result.rows.len(),
        rows: &result.rows,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn render_output(format: OutputFormat, result: &TransformResult) -> Result<String> {
    match format {
        OutputFormat::Tsv => Ok(result.tsv_output.clone()),
        OutputFormat::Csv => to_csv(&result.rows),
        OutputFormat::Json => to_json_report(result),
    }
}
