// ============================================================
// Layer 4 — Tabular Loader
// ============================================================
// Reads a delimited file with a header row into a RawTable.
//
// Unlike a directory loader, a single bad source is fatal here:
// a processor built from half a file would silently produce the
// wrong label space. So:
//   - a path that is not *.csv fails BEFORE any read
//   - an unreadable file fails with ProcessorError::Io
//   - malformed CSV / invalid UTF-8 fails with ProcessorError::Csv
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use crate::domain::{error::ProcessorError, row::RawTable, traits::RowSource};

/// Loads one CSV file.
/// Implements the RowSource trait from Layer 3.
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Fail with `UnsupportedFormat` unless the extension is `.csv`
/// (any case).
pub fn check_csv_extension(path: &Path) -> Result<(), ProcessorError> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    if is_csv {
        Ok(())
    } else {
        Err(ProcessorError::UnsupportedFormat { path: path.to_path_buf() })
    }
}

impl RowSource for CsvLoader {
    fn load_table(&self) -> Result<RawTable, ProcessorError> {
        check_csv_extension(&self.path)?;

        let file = File::open(&self.path).map_err(|source| ProcessorError::Io {
            path: self.path.clone(),
            source,
        })?;

        let csv_error = |source| ProcessorError::Csv {
            path: self.path.clone(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        let mut headers: Vec<String> = reader
            .headers()
            .map_err(csv_error)?
            .iter()
            .map(str::to_string)
            .collect();

        // Spreadsheet exports often start with a UTF-8 byte order mark
        if let Some(first) = headers.first_mut() {
            if let Some(stripped) = first.strip_prefix('\u{FEFF}') {
                *first = stripped.to_string();
            }
        }

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result.map_err(csv_error)?;
            records.push(record.iter().map(str::to_string).collect());
        }

        tracing::info!(
            "Loaded {} rows ({} columns) from '{}'",
            records.len(),
            headers.len(),
            self.path.display()
        );

        Ok(RawTable::new(headers, records))
    }
}
