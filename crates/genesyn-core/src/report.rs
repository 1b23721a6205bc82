//! Report — result records and their delimited on-disk form.
//!
//! The report always has a header row and exactly three columns:
//! `Gene`, `Synonyms` (separator-joined, sorted, possibly empty) and
//! `Present_in_A` (`True` / `False`).

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::config::OutputConfig;
use crate::error::{Error, Result};
use crate::types::GeneName;

pub const HEADER: [&str; 3] = ["Gene", "Synonyms", "Present_in_A"];

/// Verdict for one list-B gene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub gene: GeneName,
    /// Equivalence class minus `gene`, sorted and unique.
    pub synonyms: Vec<GeneName>,
    pub present_in_a: bool,
}

impl ResultRecord {
    pub fn synonyms_joined(&self, separator: char) -> String {
        self.synonyms
            .iter()
            .map(GeneName::as_str)
            .collect::<Vec<_>>()
            .join(&separator.to_string())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ReportRow {
    #[serde(rename = "Gene")]
    gene: String,
    #[serde(rename = "Synonyms")]
    synonyms: String,
    #[serde(rename = "Present_in_A")]
    present_in_a: String,
}

fn render_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "True" => Some(true),
        "False" => Some(false),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Write `records` to `path`, replacing any existing file.
pub fn write_report(path: &Path, records: &[ResultRecord], settings: &OutputConfig) -> Result<()> {
    tracing::info!(path = %path.display(), rows = records.len(), "writing report");
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    write_to(file, records, settings).map_err(|source| Error::Report {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the report to any writer. Flushes before returning. A non-ASCII
/// delimiter fails with an `InvalidInput` I/O error before anything is
/// written.
pub fn write_to<W: Write>(
    writer: W,
    records: &[ResultRecord],
    settings: &OutputConfig,
) -> std::result::Result<(), csv::Error> {
    let delimiter = settings
        .delimiter_byte()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(HEADER)?;
    for record in records {
        wtr.serialize(ReportRow {
            gene: record.gene.to_string(),
            synonyms: record.synonyms_joined(settings.synonym_separator),
            present_in_a: render_bool(record.present_in_a).to_string(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Parse a report previously produced by [`write_to`].
pub fn read_from<R: Read>(reader: R, settings: &OutputConfig) -> Result<Vec<ResultRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(settings.delimiter_byte()?)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| Error::MalformedReport(e.to_string()))?;
    if headers.iter().ne(HEADER) {
        return Err(Error::MalformedReport(format!(
            "unexpected header {:?}",
            headers.iter().collect::<Vec<_>>()
        )));
    }

    rdr.deserialize::<ReportRow>()
        .map(|row| -> Result<ResultRecord> {
            let row = row.map_err(|e| Error::MalformedReport(e.to_string()))?;
            let present_in_a = parse_bool(&row.present_in_a).ok_or_else(|| {
                Error::MalformedReport(format!("Present_in_A must be True or False, got {:?}", row.present_in_a))
            })?;
            Ok(ResultRecord {
                gene: GeneName::new(&row.gene),
                synonyms: row
                    .synonyms
                    .split(settings.synonym_separator)
                    .filter(|s| !s.is_empty())
                    .map(GeneName::new)
                    .collect(),
                present_in_a,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
