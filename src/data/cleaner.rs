//! Workout Table Cleaner
//! Applies the anomaly corrections that turn a `RawTable` into a `CleanTable`.

use chrono::NaiveDate;
use std::collections::HashSet;
use thiserror::Error;

use super::model::{CleanTable, RawTable, WorkoutRecord, DURATION_SENTINEL};
use crate::stats;

/// Date layout used by the data source.
pub const DATE_FORMAT: &str = "%Y/%m/%d";

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("row {row}: date {value:?} does not match the %Y/%m/%d format")]
    DateFormat {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Row that survived date cleanup but may still miss its calories value.
struct DatedRow {
    duration: i64,
    date: NaiveDate,
    pulse: i64,
    maxpulse: i64,
    calories: Option<f64>,
}

/// Clean the table, in order:
///
/// 1. Replace every sentinel duration (450) with the mode of the Duration
///    column, computed over all loaded rows. Ties go to the smallest value.
///    If the mode is itself 450 the substitution leaves those rows as they
///    are.
/// 2. Drop rows with a null date; a workout without a date cannot be placed
///    on a timeline.
/// 3. Strip enclosing quotes from the date text and parse it as `%Y/%m/%d`.
///    A non-null date that fails to parse is fatal.
/// 4. Fill missing calories with the mean of the known values among the
///    remaining rows, so the divisor only counts dated rows.
/// 5. Remove exact duplicates, keeping the first occurrence.
/// 6. Rebuild the row index densely (the position in the output vector).
///
/// Sentinel replacement runs before deduplication, so duplicates are
/// detected on corrected values.
pub fn clean(table: RawTable) -> Result<CleanTable, CleanError> {
    let durations: Vec<i64> = table.records.iter().map(|r| r.duration).collect();
    let duration_mode = stats::mode(&durations);

    let mut dated = Vec::with_capacity(table.records.len());
    for (row, record) in table.records.into_iter().enumerate() {
        let Some(raw_date) = record.date else {
            continue;
        };
        let duration = match (record.duration, duration_mode) {
            (DURATION_SENTINEL, Some(mode)) => mode,
            (duration, _) => duration,
        };
        dated.push(DatedRow {
            duration,
            date: parse_date(&raw_date, row)?,
            pulse: record.pulse,
            maxpulse: record.maxpulse,
            calories: record.calories,
        });
    }

    // Mean over the known values only, before any filling. An all-null
    // column yields NaN and is filled as NaN.
    let known: Vec<f64> = dated.iter().filter_map(|r| r.calories).collect();
    let mean_calories = stats::mean(&known).unwrap_or(f64::NAN);

    let mut records: Vec<WorkoutRecord> = dated
        .into_iter()
        .map(|r| WorkoutRecord {
            duration: r.duration,
            date: r.date,
            pulse: r.pulse,
            maxpulse: r.maxpulse,
            calories: r.calories.unwrap_or(mean_calories),
        })
        .collect();

    let mut seen = HashSet::new();
    records.retain(|r| seen.insert((r.duration, r.date, r.pulse, r.maxpulse, r.calories.to_bits())));

    Ok(CleanTable { records })
}

fn parse_date(raw: &str, row: usize) -> Result<NaiveDate, CleanError> {
    let trimmed = raw.trim().trim_matches(|c| c == '\'' || c == '"');
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|source| CleanError::DateFormat {
        row,
        value: raw.to_string(),
        source,
    })
}
