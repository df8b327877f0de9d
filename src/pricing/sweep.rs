use crate::errors::DomainError;
use crate::models::bs::black_scholes_quote;
use crate::models::utils::linspace;
use crate::pricing::config::SweepConfig;
use crate::pricing::types::{MarketParams, SweepPoint};

/// Lazily price calls and puts at each spot, keeping input order.
///
/// Each item depends only on its own spot, so an invalid spot yields an `Err`
/// for that element and later elements are still produced.
pub fn sweep_iter<'a, I>(
    market: &'a MarketParams,
    spots: I,
) -> impl Iterator<Item = Result<SweepPoint, DomainError>> + 'a
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: 'a,
{
    spots.into_iter().map(move |spot| {
        black_scholes_quote(spot, market).map(|quote| SweepPoint {
            spot,
            call: quote.call,
            put: quote.put,
        })
    })
}

/// Eagerly price calls and puts at each spot.
///
/// Fail-fast: the market parameters are checked first (so a bad strike,
/// maturity, rate or volatility fails even for an empty range), then the first
/// invalid spot aborts the sweep.
pub fn sweep(market: &MarketParams, spots: &[f64]) -> Result<Vec<SweepPoint>, DomainError> {
    if let Err(err) = market.validate() {
        tracing::warn!(%err, "sweep rejected market parameters");
        return Err(err);
    }

    let points = sweep_iter(market, spots.iter().copied())
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|err| tracing::warn!(%err, "sweep aborted"))?;

    tracing::debug!(
        points = points.len(),
        first_spot = ?points.first().map(|p| p.spot),
        last_spot = ?points.last().map(|p| p.spot),
        strike = market.strike,
        "spot sweep complete"
    );
    Ok(points)
}

/// Spot grid around `spot`: `config.points` values spanning
/// `[lower_factor * spot, upper_factor * spot]` inclusive.
pub fn spot_range(spot: f64, config: &SweepConfig) -> Vec<f64> {
    linspace(
        spot * config.lower_factor,
        spot * config.upper_factor,
        config.points,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Parameter;

    fn market() -> MarketParams {
        MarketParams::new(100.0, 1.0, 0.05, 0.2)
    }

    #[test]
    fn default_range_matches_ui_convention() {
        let range = spot_range(100.0, &SweepConfig::default());
        assert_eq!(range.len(), 10);
        assert_eq!(range[0], 50.0);
        assert_eq!(range[9], 150.0);
    }

    #[test]
    fn preserves_caller_order() {
        let spots = [120.0, 80.0, 100.0];
        let points = sweep(&market(), &spots).unwrap();
        let got: Vec<f64> = points.iter().map(|p| p.spot).collect();
        assert_eq!(got, spots);
    }

    #[test]
    fn empty_range_is_empty_result() {
        assert!(sweep(&market(), &[]).unwrap().is_empty());
    }

    #[test]
    fn invalid_market_fails_even_when_empty() {
        let bad = MarketParams::new(100.0, 0.0, 0.05, 0.2);
        let err = sweep(&bad, &[]).unwrap_err();
        assert_eq!(err.parameter, Parameter::Maturity);
    }

    #[test]
    fn eager_sweep_fails_fast_on_bad_spot() {
        let err = sweep(&market(), &[90.0, -1.0, 0.0]).unwrap_err();
        assert_eq!(err.parameter, Parameter::Spot);
        assert_eq!(err.value, -1.0);
    }

    #[test]
    fn lazy_sweep_reports_per_element() {
        let m = market();
        let results: Vec<_> = sweep_iter(&m, vec![90.0, 0.0, 110.0]).collect();
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }
}
