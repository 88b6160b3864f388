//! CSV file reading into Polars DataFrames.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use polars::prelude::*;
use tracing::{debug, info_span, warn};

use crate::error::{IngestError, Result};

use super::header::{CsvHeaders, normalize_header, parse_csv_line};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Rows sampled by Polars when inferring column types.
const INFER_SCHEMA_ROWS: usize = 100;

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped from the header)
    Ok(())
}

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Reads the first non-blank line of a file.
fn read_header_line(path: &Path) -> Result<Option<String>> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let reader = BufReader::new(file);

    for line_result in reader.lines() {
        let line = line_result.map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let cleaned = line.strip_prefix('\u{feff}').unwrap_or(&line);
        if !cleaned.trim().is_empty() {
            return Ok(Some(cleaned.to_string()));
        }
    }

    Ok(None)
}

/// Reads the header row of a CSV file.
pub fn read_csv_schema(path: &Path) -> Result<CsvHeaders> {
    let Some(line) = read_header_line(path)? else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };

    let columns = parse_csv_line(&line);
    if columns.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }
    let headers = CsvHeaders::new(columns);
    if headers.has_blank() {
        return Err(IngestError::EmptyColumnName {
            path: path.to_path_buf(),
        });
    }
    Ok(headers)
}

/// Reads a CSV file into a Polars DataFrame.
///
/// Column types are inferred from the first rows of the file. A file with a
/// header but no data rows yields an empty table with that header, and every
/// column of it is text.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    read_csv_table_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Reads a CSV file, rejecting files larger than `max_size` bytes.
pub fn read_csv_table_with_limit(path: &Path, max_size: u64) -> Result<DataFrame> {
    let span = info_span!("load_csv", path = %path.display());
    let _guard = span.enter();

    check_file_size_with_limit(path, max_size)?;
    validate_encoding(path)?;
    read_csv_schema(path)?;

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    normalize_column_names(&mut df)?;
    validate_dataframe_shape(&df, path);

    debug!(rows = df.height(), columns = df.width(), "loaded CSV table");
    Ok(df)
}

/// Trims whitespace and BOM remnants from column names in place.
fn normalize_column_names(df: &mut DataFrame) -> Result<()> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    for name in names {
        let normalized = normalize_header(&name);
        if normalized == name || df.get_column_index(&normalized).is_some() {
            continue;
        }
        df.rename(&name, normalized.as_str().into())?;
    }
    Ok(())
}

/// Logs shape conditions that do not prevent summarizing.
fn validate_dataframe_shape(df: &DataFrame, path: &Path) {
    if df.height() == 0 {
        warn!(path = %path.display(), "CSV file has a header but no data rows");
    }

    if df.width() > 500 {
        warn!(
            path = %path.display(),
            columns = df.width(),
            "Dataset has more than 500 columns - may impact performance"
        );
    }
}
