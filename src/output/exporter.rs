//! Writers for the three export formats
//!
//! Each format writes `data.<ext>` into the output directory, overwriting
//! files from earlier runs. An empty record list writes nothing anywhere.

use crate::output::record::ArticleRecord;
use crate::output::{ExportError, ExportResult};
use rust_xlsxwriter::{Format, Workbook};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Column headers shared by the CSV and spreadsheet writers
const COLUMNS: [&str; 3] = ["url", "title", "content"];

/// The closed set of supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Xlsx,
}

impl ExportFormat {
    /// Every format, in the order files are written
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Json, ExportFormat::Csv, ExportFormat::Xlsx];

    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Output path for this format inside `dir`
    pub fn path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("data.{}", self.extension()))
    }

    /// Writes `records` to `path`
    ///
    /// An empty record list is a no-op: no file is created and no error is
    /// raised.
    pub fn write(&self, records: &[ArticleRecord], path: &Path) -> ExportResult<()> {
        if records.is_empty() {
            return Ok(());
        }

        match self {
            ExportFormat::Json => write_json(records, path),
            ExportFormat::Csv => write_csv(records, path),
            ExportFormat::Xlsx => write_xlsx(records, path),
        }
    }
}

/// Writes every export format into `dir`, returning the created paths
///
/// # Arguments
///
/// * `records` - The extracted article records
/// * `dir` - Directory the `data.*` files are written into
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Paths written; empty when `records` is empty
/// * `Err(ExportError)` - The first write failure
pub fn export_records(records: &[ArticleRecord], dir: &Path) -> ExportResult<Vec<PathBuf>> {
    if records.is_empty() {
        tracing::warn!("No records extracted, skipping export");
        return Ok(Vec::new());
    }

    let mut written = Vec::with_capacity(ExportFormat::ALL.len());
    for format in ExportFormat::ALL {
        let path = format.path(dir);
        format.write(records, &path)?;
        tracing::info!("Wrote {} records to {}", records.len(), path.display());
        written.push(path);
    }

    Ok(written)
}

/// Pretty-printed JSON array, non-ASCII preserved verbatim
fn write_json(records: &[ArticleRecord], path: &Path) -> ExportResult<()> {
    let json = serde_json::to_string_pretty(records)?;

    let mut file = File::create(path).map_err(|e| io_error(path, e))?;
    file.write_all(json.as_bytes())
        .map_err(|e| io_error(path, e))?;

    Ok(())
}

/// Header row from the record fields, one row per record
fn write_csv(records: &[ArticleRecord], path: &Path) -> ExportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for record in records {
        // serialize writes the url,title,content header ahead of the
        // first row
        writer.serialize(record)?;
    }

    writer.flush().map_err(|e| io_error(path, e))?;
    Ok(())
}

/// One sheet named "data": bold header row, then one row per record
fn write_xlsx(records: &[ArticleRecord], path: &Path) -> ExportResult<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name("data")?;

    for (col, header) in COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }

    for (row, record) in records.iter().enumerate() {
        let row = row as u32 + 1;
        sheet.write_string(row, 0, &record.url)?;
        sheet.write_string(row, 1, &record.title)?;
        sheet.write_string(row, 2, &record.content)?;
    }

    workbook.save(path)?;
    Ok(())
}

fn io_error(path: &Path, source: std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.display().to_string(),
        source,
    }
}
