use std::collections::BTreeMap;

use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("failed to render histogram: {0}")]
    Render(String),
}

/// Counts of values per bucket of `bin_width`, keyed by bucket index.
fn bucket_counts(values: &[f64], bin_width: f64) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        let bucket = (*value / bin_width).floor() as i64;
        *counts.entry(bucket).or_insert(0usize) += 1;
    }
    counts
}

/// Square-root rule over the observed range, never narrower than one case.
fn bin_width(values: &[f64]) -> f64 {
    let min_value = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_value = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let width = (max_value - min_value) / (values.len() as f64).sqrt();
    width.max(1.0)
}

/// Renders the distribution of ending backlogs across trials as a PNG.
/// An empty slice writes nothing.
pub fn write_backlog_histogram_png(output_path: &str, backlogs: &[f64]) -> Result<(), HistogramError> {
    if backlogs.is_empty() {
        return Ok(());
    }

    let width = bin_width(backlogs);
    let counts = bucket_counts(backlogs, width);
    let max_count = counts.values().copied().max().unwrap_or(1);
    let min_bucket = counts.keys().next().copied().unwrap_or(0);
    let max_bucket = counts.keys().next_back().copied().unwrap_or(0) + 1;

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Ending Backlog Across Trials", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(min_bucket..max_bucket, 0..(max_count + 1))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Cases waiting at end of window")
        .y_desc("Trials")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|bucket| format!("{:.0}", *bucket as f64 * width))
        .draw()
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(counts.iter().map(|(bucket, count)| {
            Rectangle::new([(*bucket, 0), (*bucket + 1, *count)], bar_style)
        }))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| HistogramError::Render(e.to_string()))?;
    Ok(())
}
