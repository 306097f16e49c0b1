//! Workout CSV Loader
//! Reads the header-less five-column workout file into a `RawTable` using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::model::{RawRecord, RawTable, COLUMN_NAMES};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("the file '{}' was not found", .path.display())]
    FileNotFound { path: PathBuf },
    #[error("failed to read CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },
    #[error("row {row}: column {column} has no value")]
    MissingValue { row: usize, column: &'static str },
}

/// Loads the workout CSV from a configured path.
///
/// The path is injected at construction time; callers default it to
/// `health_data.csv` but any location works.
pub struct WorkoutLoader {
    path: PathBuf,
}

impl WorkoutLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file into a `RawTable`, preserving file order.
    ///
    /// The file has no header row and exactly five columns (Duration, Date,
    /// Pulse, Maxpulse, Calories). Column count is the only schema check at
    /// load time; unparseable cells surface as nulls and are left to the
    /// cleaner.
    pub fn load(&self) -> Result<RawTable, LoaderError> {
        if !self.path.is_file() {
            return Err(LoaderError::FileNotFound {
                path: self.path.clone(),
            });
        }

        let mut df = LazyCsvReader::new(&self.path)
            .with_has_header(false)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        if df.width() != COLUMN_NAMES.len() {
            return Err(LoaderError::ColumnCount {
                expected: COLUMN_NAMES.len(),
                found: df.width(),
            });
        }
        df.set_column_names(COLUMN_NAMES)?;

        Self::extract_records(&df)
    }

    /// Pull typed rows out of the DataFrame column by column.
    fn extract_records(df: &DataFrame) -> Result<RawTable, LoaderError> {
        let durations = df.column("Duration")?.cast(&DataType::Int64)?;
        let durations = durations.i64()?;
        let dates = df.column("Date")?.cast(&DataType::String)?;
        let dates = dates.str()?;
        let pulses = df.column("Pulse")?.cast(&DataType::Int64)?;
        let pulses = pulses.i64()?;
        let maxpulses = df.column("Maxpulse")?.cast(&DataType::Int64)?;
        let maxpulses = maxpulses.i64()?;
        let calories = df.column("Calories")?.cast(&DataType::Float64)?;
        let calories = calories.f64()?;

        let required = |value: Option<i64>, row: usize, column: &'static str| {
            value.ok_or(LoaderError::MissingValue { row, column })
        };

        let mut records = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            records.push(RawRecord {
                duration: required(durations.get(row), row, "Duration")?,
                date: dates.get(row).map(str::to_string),
                pulse: required(pulses.get(row), row, "Pulse")?,
                maxpulse: required(maxpulses.get(row), row, "Maxpulse")?,
                calories: calories.get(row),
            });
        }

        Ok(RawTable { records })
    }
}
