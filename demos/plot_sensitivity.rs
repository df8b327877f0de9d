// Example: plot_sensitivity.rs
// Sweeps call and put prices across spot and writes the curve as an SVG chart
// and a CSV table.
//
// Usage:
//     cargo run --example plot_sensitivity -- [config.toml] [out_stem]
//
// Writes <out_stem>.svg and <out_stem>.csv (default stem: sensitivity).

use std::env;
use std::error::Error;
use std::fs::File;

use bs_pricing::{default_configs, report, sensitivity, ChartOptions, PricingConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => PricingConfig::from_path(path)?,
        None => default_configs::fine(),
    };
    let stem = args.get(2).map(String::as_str).unwrap_or("sensitivity");

    let points = sensitivity(&config.market, &config.sweep)?;
    println!(
        "Swept {} spots from {:.2} to {:.2}",
        points.len(),
        points.first().map_or(f64::NAN, |p| p.spot),
        points.last().map_or(f64::NAN, |p| p.spot)
    );

    let options = ChartOptions {
        title: format!(
            "Option Price Sensitivity | K={} T={}y r={} σ={}",
            config.market.strike,
            config.market.maturity,
            config.market.rate,
            config.market.volatility
        ),
        ..ChartOptions::default()
    };
    report::write_sensitivity_chart(&points, format!("{stem}.svg"), &options)?;
    report::write_csv(&points, File::create(format!("{stem}.csv"))?)?;

    println!("Chart saved to {stem}.svg, table saved to {stem}.csv");
    Ok(())
}
