//! Workout Table Model
//! Record and table types shared by the loader, cleaner and aggregator.

use chrono::NaiveDate;
use polars::prelude::*;

/// Column names of the workout CSV, in file order. The file itself carries
/// no header row.
pub const COLUMN_NAMES: [&str; 5] = ["Duration", "Date", "Pulse", "Maxpulse", "Calories"];

/// Duration value known to be a data-entry artifact, never a real workout.
pub const DURATION_SENTINEL: i64 = 450;

/// One observation as it appears in the file: the date is raw text (possibly
/// wrapped in quotes) and calories may be missing.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub duration: i64,
    pub date: Option<String>,
    pub pulse: i64,
    pub maxpulse: i64,
    pub calories: Option<f64>,
}

/// Rows in file order, straight from the loader.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub records: Vec<RawRecord>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rebuild a DataFrame for preview printing.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let durations: Vec<i64> = self.records.iter().map(|r| r.duration).collect();
        let dates: Vec<Option<String>> = self.records.iter().map(|r| r.date.clone()).collect();
        let pulses: Vec<i64> = self.records.iter().map(|r| r.pulse).collect();
        let maxpulses: Vec<i64> = self.records.iter().map(|r| r.maxpulse).collect();
        let calories: Vec<Option<f64>> = self.records.iter().map(|r| r.calories).collect();

        DataFrame::new(vec![
            Column::new("Duration".into(), durations),
            Column::new("Date".into(), dates),
            Column::new("Pulse".into(), pulses),
            Column::new("Maxpulse".into(), maxpulses),
            Column::new("Calories".into(), calories),
        ])
    }
}

/// One cleaned observation. The cleaner guarantees a parsed date and a
/// non-null calories value, so neither is optional here.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    pub duration: i64,
    pub date: NaiveDate,
    pub pulse: i64,
    pub maxpulse: i64,
    pub calories: f64,
}

/// Cleaned rows. The zero-based row index is the position in `records`;
/// the cleaner rebuilds the vector, so positions are always dense.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanTable {
    pub records: Vec<WorkoutRecord>,
}

impl CleanTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rebuild a DataFrame for preview printing, with the row index
    /// materialized as a leading `index` column.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let durations: Vec<i64> = self.records.iter().map(|r| r.duration).collect();
        let dates: Vec<String> = self
            .records
            .iter()
            .map(|r| r.date.format("%Y-%m-%d").to_string())
            .collect();
        let pulses: Vec<i64> = self.records.iter().map(|r| r.pulse).collect();
        let maxpulses: Vec<i64> = self.records.iter().map(|r| r.maxpulse).collect();
        let calories: Vec<f64> = self.records.iter().map(|r| r.calories).collect();

        let df = DataFrame::new(vec![
            Column::new("Duration".into(), durations),
            Column::new("Date".into(), dates),
            Column::new("Pulse".into(), pulses),
            Column::new("Maxpulse".into(), maxpulses),
            Column::new("Calories".into(), calories),
        ])?;
        df.with_row_index("index".into(), None)
    }
}
