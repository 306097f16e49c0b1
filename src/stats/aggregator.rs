//! Duration Aggregator
//! Orders the cleaned table by date and computes mean calories per duration.

use std::collections::BTreeMap;

use crate::data::CleanTable;

/// Sort the table by date, ascending. The sort is stable: rows sharing a
/// date keep their relative order. The sorted table is what the time-series
/// chart consumes.
pub fn sort_by_date(mut table: CleanTable) -> CleanTable {
    table.records.sort_by_key(|r| r.date);
    table
}

/// Group rows by duration and average their calories. The map iterates in
/// ascending duration order; an empty table yields an empty map.
pub fn mean_calories_by_duration(table: &CleanTable) -> BTreeMap<i64, f64> {
    let mut sums: BTreeMap<i64, (f64, usize)> = BTreeMap::new();
    for record in &table.records {
        let entry = sums.entry(record.duration).or_insert((0.0, 0));
        entry.0 += record.calories;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(duration, (sum, count))| (duration, sum / count as f64))
        .collect()
}
