// Closed-form Black-Scholes pricing for European calls and puts on a
// non-dividend-paying underlying. Inputs are validated before the formula is
// evaluated, intermediate overflow is reported as a domain error, and prices
// are returned unclamped, so C - P = S - K·e^(-rT) holds for the computed
// values up to rounding.

use crate::errors::{DomainError, Parameter};
use crate::models::utils::{log_moneyness, norm_cdf};
use crate::pricing::types::{MarketParams, OptionType, PriceQuote, PricingInputs};

/// The two standardised moneyness terms of the closed form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct D1D2 {
    pub d1: f64,
    pub d2: f64,
}

/// Compute `d1` and `d2` for already-validated inputs.
#[allow(non_snake_case)]
pub fn d1_d2(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> D1D2 {
    let sig_sqrt_t = sigma * T.sqrt();
    let d1 = (log_moneyness(S, K) + (r + 0.5 * sigma.powi(2)) * T) / sig_sqrt_t;
    D1D2 {
        d1,
        d2: d1 - sig_sqrt_t,
    }
}

/// Price of a European call option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> Result<f64, DomainError> {
    let inputs = PricingInputs::new(S, K, T, r, sigma, OptionType::Call);
    black_scholes_price(&inputs)
}

/// Price of a European put option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> Result<f64, DomainError> {
    let inputs = PricingInputs::new(S, K, T, r, sigma, OptionType::Put);
    black_scholes_price(&inputs)
}

/// d1/d2 and the discounted strike, each checked for overflow.
fn checked_terms(spot: f64, market: &MarketParams) -> Result<(D1D2, f64), DomainError> {
    let terms = d1_d2(
        spot,
        market.strike,
        market.rate,
        market.maturity,
        market.volatility,
    );
    finite(terms.d1)?;
    finite(terms.d2)?;
    let df_strike = finite(market.discounted_strike())?;
    Ok((terms, df_strike))
}

fn finite(value: f64) -> Result<f64, DomainError> {
    DomainError::check_finite(Parameter::Evaluation, value)
}

/// Theoretical price of the option described by `inputs`.
pub fn black_scholes_price(inputs: &PricingInputs) -> Result<f64, DomainError> {
    inputs.validate()?;
    let (D1D2 { d1, d2 }, df_strike) = checked_terms(inputs.spot, &inputs.market())?;

    let price = finite(match inputs.option_type {
        OptionType::Call => inputs.spot * norm_cdf(d1) - df_strike * norm_cdf(d2),
        OptionType::Put => df_strike * norm_cdf(-d2) - inputs.spot * norm_cdf(-d1),
    })?;

    tracing::trace!(
        option_type = %inputs.option_type,
        spot = inputs.spot,
        d1,
        d2,
        price,
        "black-scholes price"
    );
    Ok(price)
}

/// Call and put prices at `spot`, sharing a single evaluation of d1/d2.
pub fn black_scholes_quote(spot: f64, market: &MarketParams) -> Result<PriceQuote, DomainError> {
    market.at_spot(spot, OptionType::Call).validate()?;
    let (D1D2 { d1, d2 }, df_strike) = checked_terms(spot, market)?;

    let quote = PriceQuote {
        call: finite(spot * norm_cdf(d1) - df_strike * norm_cdf(d2))?,
        put: finite(df_strike * norm_cdf(-d2) - spot * norm_cdf(-d1))?,
    };
    tracing::trace!(spot, d1, d2, call = quote.call, put = quote.put, "black-scholes quote");
    Ok(quote)
}
