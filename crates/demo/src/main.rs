// File: crates/demo/src/main.rs
// Summary: Demo loads a labeled CSV series and prints its gridlines, bar layout and line layout.
//
// Usage: touchchart-demo [data.csv] [track_height] [width]
// CSV headers: `label` or `date` (YYYY-MM-DD), `value`, optional `provisional`.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;
use touchchart_core::axis::format_tick;
use touchchart_core::types::DEFAULT_CHART_HEIGHT;
use touchchart_core::{BarChart, DataPoint, LineChart, Series};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let series = match args.next() {
        Some(raw) => {
            let path = Path::new(&raw);
            load_series_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            info!("no input file given, using built-in sample");
            sample_series()
        }
    };
    let height = parse_arg(args.next(), DEFAULT_CHART_HEIGHT).context("invalid track height")?;
    let width = parse_arg(args.next(), 320.0).context("invalid width")?;
    info!(points = series.len(), height, width, "series loaded");

    let mut line = LineChart::new(series.clone());
    line.appear();
    line.tick(f32::MAX);
    let layout = line.layout(width, height);

    println!("Range: [{}, {}]  step {}", layout.scale.min_value, layout.scale.max_value, layout.scale.step);
    println!("Gridlines:");
    for g in &layout.gridlines {
        println!("  {:>8}  y={:>8.2}  {:?}", g.label, g.y, g.stroke);
    }
    println!("Line points (content min width {:.0}):", layout.content_min_width);
    for p in &layout.points {
        println!("  {:<10} x={:>8.2} y={:>8.2} {:?}", p.label, p.position.x, p.position.y, p.marker);
    }

    let mut bars = BarChart::new(series);
    bars.appear();
    bars.tick(f32::MAX);
    let bar_layout = bars.layout(height);
    println!("Bars (available height {:.2}):", bar_layout.available_height);
    for b in &bar_layout.bars {
        println!("  {:<10} {:>10} h={:>8.2}", b.label, format_tick(b.value), b.height);
    }

    Ok(())
}

fn parse_arg(raw: Option<String>, default: f64) -> Result<f64> {
    match raw {
        Some(s) => s.trim().parse::<f64>().with_context(|| format!("not a number: '{s}'")),
        None => Ok(default),
    }
}

/// Load `label|date, value[, provisional]` rows; rows with unparsable values are skipped.
fn load_series_csv(path: &Path) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_label = idx(&["label", "name"]);
    let i_date = idx(&["date", "day"]);
    let i_value = idx(&["value", "amount", "y"]).context("no value column")?;
    let i_provisional = idx(&["provisional", "forecast"]);

    let mut series = Series::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let Some(value) = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok()).filter(|v| v.is_finite()) else {
            warn!(row, "skipping row without a numeric value");
            continue;
        };
        let provisional = i_provisional
            .and_then(|i| rec.get(i))
            .map(|s| matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let date = i_date
            .and_then(|i| rec.get(i))
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok());
        let point = match (date, i_label.and_then(|i| rec.get(i))) {
            (Some(d), _) => DataPoint::dated(d, "%d %b", value),
            (None, Some(label)) => DataPoint::try_new(label.trim(), value, false)?,
            (None, None) => DataPoint::try_new(format!("#{row}"), value, false)?,
        };
        series.push(point.with_provisional(provisional));
    }
    Ok(series)
}

fn sample_series() -> Series {
    let mut series: Series = [("Jan", 12.0), ("Feb", -8.0), ("Mar", 31.0), ("Apr", 44.0), ("May", 27.0)]
        .into_iter()
        .map(DataPoint::from)
        .collect();
    series.push(DataPoint::provisional("Jun", 38.0));
    series
}
