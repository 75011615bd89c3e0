use std::fs;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while reading a batch of records.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Failed to read the input file.
    #[error("failed to read batch file: {0}")]
    Io(#[from] std::io::Error),
    /// Input could not be tokenized as CSV.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Strategy used to split an input source into rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// Comma-separated records; each cell is trimmed and blank records are skipped.
    Csv,
    /// One row per line, holding the raw line as a single cell. Blank lines are
    /// kept so that row positions line up with a paired source.
    Lines,
}

impl RecordFormat {
    /// Pick a strategy from the file extension: `.csv` reads as CSV, anything
    /// else as plain lines.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Lines,
        }
    }
}

/// One record and the 1-based source line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line: u64,
    pub cells: Vec<String>,
}

impl Row {
    pub fn new(line: u64, cells: Vec<String>) -> Self {
        Self { line, cells }
    }
}

/// Rows read from one input source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub format: RecordFormat,
    pub rows: Vec<Row>,
}

impl Batch {
    /// Wrap already-collected values as a line-oriented batch, one row per value.
    pub fn from_lines<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            format: RecordFormat::Lines,
            rows: (1..)
                .zip(values)
                .map(|(line, v)| Row::new(line, vec![v.into()]))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read a batch file, choosing the strategy from its extension.
pub fn read_batch(path: &Path) -> Result<Batch, ReadError> {
    let text = fs::read_to_string(path)?;
    parse_batch(&text, RecordFormat::from_path(path))
}

/// Split in-memory text into rows using `format`.
pub fn parse_batch(text: &str, format: RecordFormat) -> Result<Batch, ReadError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let rows = match format {
        RecordFormat::Csv => csv_rows(text)?,
        RecordFormat::Lines => (1..)
            .zip(split_lines(text))
            .map(|(line, text)| Row::new(line, vec![text.to_string()]))
            .collect(),
    };
    Ok(Batch { format, rows })
}

/// Split on `\n`, `\r\n` or a lone `\r`. A final terminator does not start an
/// extra line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(idx) => {
                lines.push(&rest[..idx]);
                let width = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + width..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

fn csv_rows(text: &str) -> Result<Vec<Row>, ReadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        if record.is_empty() {
            continue;
        }
        let line = record
            .position()
            .map_or(idx as u64 + 1, |pos| record_start_line(text, pos));
        rows.push(Row::new(line, record.iter().map(str::to_string).collect()));
    }
    Ok(rows)
}

/// A record's position is taken before the reader skips blank lines, so step
/// over any leading terminators to reach the line the record is actually on.
fn record_start_line(text: &str, pos: &csv::Position) -> u64 {
    let start = usize::try_from(pos.byte()).unwrap_or(usize::MAX);
    let skipped = text
        .as_bytes()
        .get(start..)
        .unwrap_or_default()
        .iter()
        .take_while(|&&b| matches!(b, b'\r' | b'\n'))
        .filter(|&&b| b == b'\n')
        .count();
    pos.line() + skipped as u64
}
