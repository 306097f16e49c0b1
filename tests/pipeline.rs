//! End-to-end pipeline tests over CSV fixtures.

use std::path::PathBuf;

use chrono::NaiveDate;
use fitreport::data::{clean, CleanError, LoaderError, WorkoutLoader, DURATION_SENTINEL};
use fitreport::stats;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

/// Mean of the 17 non-null calorie readings among the dated fixture rows,
/// which is what the cleaner fills into the one missing reading.
const IMPUTED_CALORIES: f64 = 5366.6 / 17.0;

#[test]
fn loads_rows_in_file_order() {
    let raw = WorkoutLoader::new(fixture("health_data.csv"))
        .load()
        .expect("fixture load failed");

    assert_eq!(raw.len(), 19);
    assert_eq!(raw.records[0].duration, 60);
    assert_eq!(raw.records[0].date.as_deref(), Some("'2020/12/01'"));
    assert_eq!(raw.records[7].duration, DURATION_SENTINEL);
    assert_eq!(raw.records[13].date, None);
    assert_eq!(raw.records[17].calories, None);
}

#[test]
fn missing_file_is_reported_as_file_not_found() {
    let result = WorkoutLoader::new(fixture("no_such_file.csv")).load();
    assert!(matches!(result, Err(LoaderError::FileNotFound { .. })));
}

#[test]
fn wrong_column_count_is_rejected() {
    let result = WorkoutLoader::new(fixture("wrong_shape.csv")).load();
    assert!(matches!(
        result,
        Err(LoaderError::ColumnCount { found: 3, .. })
    ));
}

#[test]
fn unparseable_date_aborts_cleaning() {
    let raw = WorkoutLoader::new(fixture("bad_date.csv"))
        .load()
        .expect("fixture load failed");
    let result = clean(raw);
    assert!(matches!(result, Err(CleanError::DateFormat { row: 1, .. })));
}

#[test]
fn full_pipeline_over_the_fixture() {
    let raw = WorkoutLoader::new(fixture("health_data.csv"))
        .load()
        .expect("fixture load failed");
    let cleaned = clean(raw).expect("cleaning failed");

    // 19 rows, minus the dateless row, minus one exact duplicate.
    assert_eq!(cleaned.len(), 17);
    assert!(cleaned
        .records
        .iter()
        .all(|r| r.duration != DURATION_SENTINEL));

    let imputed = cleaned
        .records
        .iter()
        .find(|r| r.date == NaiveDate::from_ymd_opt(2020, 12, 17).unwrap())
        .expect("imputed row missing");
    assert!((imputed.calories - IMPUTED_CALORIES).abs() < 1e-9);

    let sorted = stats::sort_by_date(cleaned);
    assert!(sorted
        .records
        .windows(2)
        .all(|pair| pair[0].date <= pair[1].date));

    let summary = stats::mean_calories_by_duration(&sorted);
    let keys: Vec<i64> = summary.keys().copied().collect();
    assert_eq!(keys, vec![30, 45, 60]);

    // Single-row group: the mean is the reading itself.
    assert!((summary[&30] - 195.1).abs() < 1e-9);
    // 45-minute group: three readings plus the imputed one.
    let expected_45 = (282.4 + 406.0 + 250.7 + IMPUTED_CALORIES) / 4.0;
    assert!((summary[&45] - expected_45).abs() < 1e-9);
}

#[test]
fn cleaned_preview_has_a_dense_index() {
    let raw = WorkoutLoader::new(fixture("health_data.csv"))
        .load()
        .expect("fixture load failed");
    let cleaned = clean(raw).expect("cleaning failed");

    let df = cleaned.to_dataframe().expect("dataframe rebuild failed");
    assert_eq!(df.height(), cleaned.len());

    let index = df.column("index").expect("index column missing");
    let index = index.u32().expect("index dtype");
    let positions: Vec<u32> = index.into_iter().flatten().collect();
    assert_eq!(positions, (0..cleaned.len() as u32).collect::<Vec<u32>>());
}
