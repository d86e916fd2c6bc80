use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, AsArray};
use arrow::datatypes::DataType;
use arrow::util::display::array_value_to_string;
use log::{debug, warn};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::model::{JobDataset, JobListing};

// ---------------------------------------------------------------------------
// Reader options
// ---------------------------------------------------------------------------

/// How delimited text files are parsed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    /// Field separator. Must be a single ASCII character.
    pub delimiter: char,
    /// Whether the first line names the columns.
    pub has_headers: bool,
    /// Accept lines with a different number of fields than the header.
    pub flexible: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_headers: true,
            flexible: true,
        }
    }
}

impl ReaderOptions {
    /// Defaults for tab-separated files.
    pub fn tsv() -> Self {
        Self {
            delimiter: '\t',
            ..Self::default()
        }
    }

    /// Parse options from a JSON object. Missing keys take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing reader options")
    }

    fn delimiter_byte(&self) -> Result<u8> {
        if !self.delimiter.is_ascii() {
            bail!("Delimiter {:?} is not a single ASCII character", self.delimiter);
        }
        Ok(self.delimiter as u8)
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a job dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.txt` – comma-separated, header row names the columns
/// * `.tsv`          – tab-separated, header row names the columns
/// * `.json`         – `[{ "job_title": "...", "min_salary": "...", ... }, ...]`
/// * `.parquet`      – any flat schema; every cell is rendered as text
pub fn read(path: &Path) -> Result<JobDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" | "txt" => load_csv(path, &ReaderOptions::default()),
        "tsv" => load_csv(path, &ReaderOptions::tsv()),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }?;

    debug!(
        "loaded {} listings ({} columns) from {}",
        dataset.len(),
        dataset.column_names.len(),
        path.display()
    );
    Ok(dataset)
}

/// Load a delimited text file with explicit options, whatever its extension.
pub fn read_with(path: &Path, options: &ReaderOptions) -> Result<JobDataset> {
    let dataset = load_csv(path, options)?;
    debug!(
        "loaded {} listings from {} with {:?}",
        dataset.len(),
        path.display(),
        options
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Every cell is kept as text.  A line shorter than the header simply lacks
/// the trailing keys; cells past the header are dropped.
fn load_csv(path: &Path, options: &ReaderOptions) -> Result<JobDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter_byte()?)
        .has_headers(options.has_headers)
        .flexible(options.flexible)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Option<Vec<String>> = if options.has_headers {
        let headers = reader
            .headers()
            .context("reading CSV headers")?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        Some(headers)
    } else {
        None
    };

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    let headers = headers.unwrap_or_else(|| {
        let width = records.iter().map(|r| r.len()).max().unwrap_or(0);
        (0..width).map(|i| format!("column_{i}")).collect()
    });

    let mut listings = Vec::with_capacity(records.len());
    for (row_no, record) in records.iter().enumerate() {
        if record.len() != headers.len() {
            warn!(
                "CSV row {row_no}: {} fields, header has {}",
                record.len(),
                headers.len()
            );
        }
        let listing: JobListing = headers
            .iter()
            .zip(record.iter())
            .map(|(col, value)| (col.as_str(), value))
            .collect();
        listings.push(listing);
    }

    Ok(JobDataset::from_listings(headers, listings))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "job_title": "Data Engineer", "min_salary": "50000", "max_salary": 90000 },
///   ...
/// ]
/// ```
///
/// Numbers and booleans keep their JSON text, `null` becomes an empty string.
fn load_json(path: &Path) -> Result<JobDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let mut column_names: Vec<String> = Vec::new();
    let mut listings = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        if i == 0 {
            column_names = obj.keys().cloned().collect();
        }

        let listing: JobListing = obj
            .iter()
            .map(|(key, val)| (key.as_str(), json_to_text(val)))
            .collect();
        listings.push(listing);
    }

    Ok(JobDataset::from_listings(column_names, listings))
}

fn json_to_text(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of job listings.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`). Each column is rendered to text, so an
/// `Int64` salary column reads the same as a string one.
fn load_parquet(path: &Path) -> Result<JobDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let column_names: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build().context("building parquet reader")?;

    let mut listings = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let offset = listings.len();

        for row in 0..batch.num_rows() {
            let mut listing = JobListing::new();
            for (col_idx, col_name) in column_names.iter().enumerate() {
                let value = extract_cell_text(batch.column(col_idx), row).with_context(|| {
                    format!("Row {}: failed to read '{col_name}'", offset + row)
                })?;
                listing.insert(col_name.as_str(), value);
            }
            listings.push(listing);
        }
    }

    Ok(JobDataset::from_listings(column_names, listings))
}

/// Render a single cell of an Arrow column as text.
fn extract_cell_text(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        return Ok(String::new());
    }
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        _ => array_value_to_string(col, row).context("formatting parquet value"),
    }
}
