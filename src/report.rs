//! Export of spot sweeps: CSV tables and SVG line charts of call and put
//! prices against spot.

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use plotters::prelude::*;

use crate::pricing::types::SweepPoint;

/// Layout of a sensitivity chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 640,
            title: "Option Price Sensitivity (Spot Price)".to_string(),
        }
    }
}

/// Write `spot,call_price,put_price` rows, one per sweep point, with a header.
pub fn write_csv<W: Write>(points: &[SweepPoint], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["spot", "call_price", "put_price"])?;
    for p in points {
        wtr.write_record(&[p.spot.to_string(), p.call.to_string(), p.put.to_string()])?;
    }
    wtr.flush().context("failed to flush sweep csv")?;
    Ok(())
}

/// Render the sweep as an SVG document.
///
/// Requires at least two points with finite values and a non-degenerate spot
/// span. Points are drawn in the order given.
pub fn sensitivity_chart_svg(points: &[SweepPoint], options: &ChartOptions) -> Result<String> {
    if points.len() < 2 {
        bail!("need at least two sweep points to chart, got {}", points.len());
    }
    if let Some(p) = points
        .iter()
        .find(|p| !(p.spot.is_finite() && p.call.is_finite() && p.put.is_finite()))
    {
        bail!("non-finite sweep point: {:?}", p);
    }

    let x_min = points.iter().map(|p| p.spot).fold(f64::INFINITY, f64::min);
    let x_max = points
        .iter()
        .map(|p| p.spot)
        .fold(f64::NEG_INFINITY, f64::max);
    if x_max <= x_min {
        bail!("sweep spans a single spot value ({})", x_min);
    }
    let y_max = points
        .iter()
        .map(|p| p.call.max(p.put))
        .fold(0.0_f64, f64::max);
    // 5% headroom; a flat zero curve still gets a visible axis
    let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (options.width, options.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption(options.title.as_str(), ("sans-serif", 26))
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;

        chart
            .configure_mesh()
            .x_desc("Spot Price ($)")
            .y_desc("Option Price ($)")
            .draw()?;

        let call_line: Vec<(f64, f64)> = points.iter().map(|p| (p.spot, p.call)).collect();
        let put_line: Vec<(f64, f64)> = points.iter().map(|p| (p.spot, p.put)).collect();

        chart.draw_series(vec![PathElement::new(call_line.clone(), BLUE.stroke_width(2))])?;
        chart.draw_series(vec![PathElement::new(put_line.clone(), RED.stroke_width(2))])?;
        chart.draw_series(call_line.iter().map(|pt| Circle::new(*pt, 3, BLUE.filled())))?;
        chart.draw_series(put_line.iter().map(|pt| Circle::new(*pt, 3, RED.filled())))?;

        root.present().context("failed to render sensitivity chart")?;
    }
    Ok(svg)
}

/// Render the sweep and write it to `path` as SVG.
pub fn write_sensitivity_chart(
    points: &[SweepPoint],
    path: impl AsRef<Path>,
    options: &ChartOptions,
) -> Result<()> {
    let path = path.as_ref();
    let svg = sensitivity_chart_svg(points, options)?;
    std::fs::write(path, svg).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), points = points.len(), "wrote sensitivity chart");
    Ok(())
}
