//! # bs-pricing: Black-Scholes Option Calculator
//!
//! `bs-pricing` computes theoretical prices of European calls and puts with the
//! Black-Scholes closed form, and evaluates that price across a range of spot
//! prices to produce a sensitivity curve.
//!
//! ## Core Features
//!
//! - **Closed-form pricing**: call and put prices from spot, strike, maturity,
//!   rate and volatility
//! - **Spot sweeps**: lazy or eager evaluation over any ordered spot sequence
//! - **Configuration**: TOML-driven defaults for the base option and the grid
//! - **Reporting**: CSV tables and SVG charts of a sweep
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_pricing::{price, quote, sweep, OptionType, PricingInputs};
//!
//! let inputs = PricingInputs::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
//! let call = price(&inputs)?;
//! assert!((call - 10.45).abs() < 0.01);
//!
//! let both = quote(&inputs)?;
//! println!("{both}"); // Call $10.45 | Put $5.57
//!
//! let curve = sweep(&inputs.market(), &[80.0, 100.0, 120.0])?;
//! assert_eq!(curve.len(), 3);
//! # Ok::<(), bs_pricing::DomainError>(())
//! ```
//!
//! ## Domain Errors
//!
//! Spot, strike, maturity and volatility must be finite and strictly
//! positive, and the rate must be finite. Anything else is rejected with a
//! [`DomainError`] before the formula is evaluated. Inputs that pass those
//! checks but overflow an intermediate term (a discount factor of `e^1000`,
//! say) are rejected with [`Parameter::Evaluation`]. The engine never hands
//! back NaN or infinity in place of an error.
//!
//! ## Negative Prices
//!
//! Prices are returned exactly as computed and are not clamped at zero. Deep
//! out-of-the-money legs can show rounding noise of order `1e-15 * (S + K)`,
//! in exchange for put-call parity holding on the computed values.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod errors;
pub mod models;
pub mod pricing;
pub mod report;

// ================================================================================================
// IMPORTS
// ================================================================================================

use models::bs::{black_scholes_price, black_scholes_quote};

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use errors::{DomainError, ParseOptionTypeError, Parameter};

pub use pricing::{
    config::{PricingConfig, SweepConfig},
    sweep::{spot_range, sweep_iter},
    types::{MarketParams, OptionType, PriceQuote, PricingInputs, SweepPoint},
};

pub use report::ChartOptions;

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured sweep settings.
///
/// - [`standard()`]: 10 points over ±50% of spot
/// - [`fine()`]: 101 points over ±50% of spot
/// - [`wide()`]: 41 points from 10% to 200% of spot
pub mod default_configs {
    use crate::pricing::config::PricingConfig;

    /// Ten spots over ±50% of the base spot.
    ///
    /// ```rust
    /// use bs_pricing::{default_configs, spot_range};
    ///
    /// let config = default_configs::standard();
    /// let grid = spot_range(config.market.spot, &config.sweep);
    /// assert_eq!(grid.first(), Some(&50.0));
    /// assert_eq!(grid.last(), Some(&150.0));
    /// ```
    pub fn standard() -> PricingConfig {
        PricingConfig::standard()
    }

    /// Dense grid for smooth charts.
    pub fn fine() -> PricingConfig {
        PricingConfig::fine()
    }

    /// Wide grid from deep out-of-the-money to deep in-the-money.
    pub fn wide() -> PricingConfig {
        PricingConfig::wide()
    }
}

/// Price a single European option.
///
/// # Errors
///
/// [`DomainError`] if spot, strike, maturity or volatility is not finite and
/// strictly positive, or the rate is not finite. [`Parameter::Evaluation`]
/// if the inputs overflow the closed form.
pub fn price(inputs: &PricingInputs) -> Result<f64, DomainError> {
    black_scholes_price(inputs)
}

/// Call and put prices for the same inputs. `inputs.option_type` is ignored.
pub fn quote(inputs: &PricingInputs) -> Result<PriceQuote, DomainError> {
    black_scholes_quote(inputs.spot, &inputs.market())
}

/// Price calls and puts at every spot in `spots`, in the given order.
///
/// Strike, maturity, rate and volatility come from `market`. The sweep is
/// fail-fast: the first [`DomainError`] is returned and no partial result is
/// produced. Use [`sweep_iter`] for per-element results.
///
/// ```rust
/// use bs_pricing::{price, sweep, MarketParams, OptionType};
///
/// let market = MarketParams::new(100.0, 1.0, 0.05, 0.2);
/// let points = sweep(&market, &[90.0, 110.0])?;
/// let call_at_90 = price(&market.at_spot(90.0, OptionType::Call))?;
/// assert_eq!(points[0].call, call_at_90);
/// # Ok::<(), bs_pricing::DomainError>(())
/// ```
pub fn sweep(market: &MarketParams, spots: &[f64]) -> Result<Vec<SweepPoint>, DomainError> {
    pricing::sweep::sweep(market, spots)
}

/// [`sweep`] taking a full parameter set; its spot and option type are ignored.
pub fn sweep_from(base: &PricingInputs, spots: &[f64]) -> Result<Vec<SweepPoint>, DomainError> {
    sweep(&base.market(), spots)
}

/// Sweep the grid described by `config` around `inputs.spot`.
pub fn sensitivity(
    inputs: &PricingInputs,
    config: &SweepConfig,
) -> Result<Vec<SweepPoint>, DomainError> {
    inputs.validate()?;
    let spots = spot_range(inputs.spot, config);
    sweep_from(inputs, &spots)
}
