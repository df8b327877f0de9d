// Example: pricing_demo.rs
// Prices the calculator's default option, prints both legs, then prints the
// spot-sensitivity table around it.
//
// Usage:
//     cargo run --example pricing_demo -- [config.toml]
//
// Set RUST_LOG=bs_pricing=debug to see sweep diagnostics.

use std::env;
use std::error::Error;

use bs_pricing::{price, quote, sensitivity, OptionType, PricingConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match env::args().nth(1) {
        Some(path) => PricingConfig::from_path(path)?,
        None => PricingConfig::standard(),
    };
    let inputs = config.market;

    println!("Black-Scholes Pricing Model\n");
    println!("  Current Asset Price (S):  {:.2}", inputs.spot);
    println!("  Strike Price (K):         {:.2}", inputs.strike);
    println!("  Time to Maturity (Years): {:.4}", inputs.maturity);
    println!("  Volatility (σ):           {:.4}", inputs.volatility);
    println!("  Risk-Free Interest Rate:  {:.4}\n", inputs.rate);

    let both = quote(&inputs)?;
    println!("  {}", both);
    println!(
        "  Selected leg ({}): ${:.2}",
        inputs.option_type,
        price(&inputs)?
    );
    println!(
        "  Parity gap: {:.3e}\n",
        both.parity_gap(inputs.spot, &inputs.market())
    );

    println!("Option Price Sensitivity (Spot Price)");
    println!("{:>10} | {:>10} | {:>10}", "Spot", "Call", "Put");
    for p in sensitivity(&inputs, &config.sweep)? {
        println!("{:>10.2} | {:>10.4} | {:>10.4}", p.spot, p.call, p.put);
    }

    // Put leg of the base option on its own
    let put_only = inputs.with_option_type(OptionType::Put);
    println!("\nPut at spot {:.2}: ${:.2}", put_only.spot, price(&put_only)?);
    Ok(())
}
