//! Static Chart Renderer
//! Draws the two report charts as PNG files with plotters.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::CleanTable;

const TEAL: RGBColor = RGBColor(0, 128, 128);
const SALMON: RGBColor = RGBColor(250, 128, 114);

/// Renders charts into a configured output directory.
///
/// The renderer owns all drawing side effects; callers decide what to do
/// with the returned file paths (the binary opens them with the system
/// image viewer).
pub struct ChartRenderer {
    out_dir: PathBuf,
}

impl ChartRenderer {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    fn prepare(&self, file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.out_dir).with_context(|| {
            format!("failed to create chart directory '{}'", self.out_dir.display())
        })?;
        Ok(self.out_dir.join(file_name))
    }

    /// Line chart with point markers: one point per cleaned record,
    /// X = date, Y = calories. Expects the table in date-ascending order.
    pub fn render_calories_over_time(&self, table: &CleanTable) -> Result<PathBuf> {
        let path = self.prepare("calories_over_time.png")?;

        let series: Vec<(NaiveDate, f64)> = table
            .records
            .iter()
            .map(|r| (r.date, r.calories))
            .collect();
        let Some(&(first_date, _)) = series.first() else {
            bail!("no rows to plot");
        };
        let Some(&(last_date, _)) = series.last() else {
            bail!("no rows to plot");
        };

        let (y_min, y_max) = series.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), &(_, c)| (lo.min(c), hi.max(c)),
        );
        let y_pad = ((y_max - y_min) * 0.1).max(1.0);
        // A single-day range still needs a non-empty axis.
        let x_end = if last_date > first_date {
            last_date
        } else {
            first_date.succ_opt().unwrap_or(first_date)
        };

        {
            let root = BitMapBackend::new(&path, (1200, 600)).into_drawing_area();
            root.fill(&WHITE)?;

            let mut chart = ChartBuilder::on(&root)
                .caption("Calories Burned Over Time (Dec 2020)", ("sans-serif", 30))
                .margin(12)
                .x_label_area_size(48)
                .y_label_area_size(60)
                .build_cartesian_2d(first_date..x_end, (y_min - y_pad)..(y_max + y_pad))?;

            chart
                .configure_mesh()
                .x_desc("Date")
                .y_desc("Calories Burned")
                .x_labels(10)
                .x_label_formatter(&|d| d.format("%Y-%m-%d").to_string())
                .draw()?;

            chart.draw_series(LineSeries::new(series.iter().copied(), &TEAL))?;
            chart.draw_series(
                series
                    .iter()
                    .map(|&point| Circle::new(point, 3, TEAL.filled())),
            )?;

            root.present()
                .with_context(|| format!("failed to write chart '{}'", path.display()))?;
        }

        Ok(path)
    }

    /// Bar chart: one bar per aggregate entry, X = duration (categorical,
    /// ascending), Y = mean calories.
    pub fn render_mean_calories_by_duration(
        &self,
        summary: &BTreeMap<i64, f64>,
    ) -> Result<PathBuf> {
        let path = self.prepare("mean_calories_by_duration.png")?;

        if summary.is_empty() {
            bail!("no rows to plot");
        }
        let labels: Vec<String> = summary.keys().map(|d| d.to_string()).collect();
        let bar_count = labels.len() as i32;
        let y_max = summary.values().fold(f64::NEG_INFINITY, |hi, &m| hi.max(m)) * 1.15;

        {
            let root = BitMapBackend::new(&path, (1000, 600)).into_drawing_area();
            root.fill(&WHITE)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(
                    "Average Calories Burned per Workout Duration",
                    ("sans-serif", 30),
                )
                .margin(12)
                .x_label_area_size(48)
                .y_label_area_size(60)
                .build_cartesian_2d((0..bar_count).into_segmented(), 0.0..y_max)?;

            chart
                .configure_mesh()
                .x_desc("Workout Duration (Minutes)")
                .y_desc("Average Calories Burned")
                .disable_x_mesh()
                .x_label_formatter(&|position| match position {
                    SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => labels
                        .get(*i as usize)
                        .cloned()
                        .unwrap_or_default(),
                    SegmentValue::Last => String::new(),
                })
                .draw()?;

            chart.draw_series(summary.values().enumerate().map(|(i, &mean)| {
                Rectangle::new(
                    [
                        (SegmentValue::Exact(i as i32), 0.0),
                        (SegmentValue::Exact(i as i32 + 1), mean),
                    ],
                    SALMON.filled(),
                )
            }))?;
            chart.draw_series(summary.values().enumerate().map(|(i, &mean)| {
                Rectangle::new(
                    [
                        (SegmentValue::Exact(i as i32), 0.0),
                        (SegmentValue::Exact(i as i32 + 1), mean),
                    ],
                    &BLACK,
                )
            }))?;

            root.present()
                .with_context(|| format!("failed to write chart '{}'", path.display()))?;
        }

        Ok(path)
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}
