//! CSV Data Loader Module
//! Loads the booking dataset from disk using Polars.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Fixed relative path of the booking dataset.
pub const DATA_FILE: &str = "hotel_booking.csv";

#[derive(Error, Debug)]
pub enum DataError {
    #[error("data source not found: {path}")]
    SourceMissing { path: String },
    #[error("failed to read CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Load a booking CSV into an eager DataFrame.
///
/// A missing file is the one failure callers are expected to handle; it is
/// detected before touching the reader so no partial report can come out of it.
pub fn load_csv(path: impl AsRef<Path>) -> Result<DataFrame, DataError> {
    let path = path.as_ref();
    if !path.exists() {
        log::error!("booking data file missing: {}", path.display());
        return Err(DataError::SourceMissing {
            path: path.display().to_string(),
        });
    }

    log::info!("loading booking data from {}", path.display());

    // Use lazy evaluation for memory efficiency, then collect
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    log::info!("loaded {} rows, {} columns", df.height(), df.width());
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_reports_source_missing() {
        let err = load_csv("no_such_booking_file.csv").unwrap_err();
        assert!(matches!(err, DataError::SourceMissing { .. }));
    }

    #[test]
    fn loads_rows_and_columns_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "hotel,is_canceled,adr").unwrap();
        writeln!(file, "Resort Hotel,0,75.5").unwrap();
        writeln!(file, "City Hotel,1,120.0").unwrap();
        drop(file);

        let df = load_csv(&path).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
    }
}
