pub mod bs;

/// Numeric helpers shared by the pricing models
pub mod utils {
    use std::f64::consts::SQRT_2;

    /// Standard normal cumulative distribution function Φ(x).
    ///
    /// Evaluated as `0.5 * erfc(-x / √2)`, which keeps full relative precision
    /// in the lower tail where `1 + erf(x)` would cancel.
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x / SQRT_2)
    }

    /// Calculate log-moneyness of the spot against the strike: ln(S/K)
    pub fn log_moneyness(spot: f64, strike: f64) -> f64 {
        (spot / strike).ln()
    }

    /// `n` evenly spaced values over `[start, stop]`, both endpoints included.
    ///
    /// `n == 0` gives an empty vector and `n == 1` gives `[start]`. The last
    /// element is exactly `stop` rather than an accumulated approximation.
    pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (stop - start) / (n - 1) as f64;
                let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
                values[n - 1] = stop;
                values
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn norm_cdf_known_values() {
            assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
            assert!((norm_cdf(1.0) - 0.841_344_746_068_542_9).abs() < 1e-14);
            assert!((norm_cdf(-1.96) - 0.024_997_895_148_220_43).abs() < 1e-14);
        }

        #[test]
        fn norm_cdf_symmetry_and_tails() {
            for &x in &[0.1, 0.5, 1.3, 2.7, 5.0] {
                assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-15);
            }
            assert!(norm_cdf(-40.0) >= 0.0);
            assert!(norm_cdf(-10.0) > 0.0);
            assert_eq!(norm_cdf(40.0), 1.0);
        }

        #[test]
        fn linspace_matches_inclusive_grid() {
            let grid = linspace(50.0, 150.0, 10);
            assert_eq!(grid.len(), 10);
            assert_eq!(grid[0], 50.0);
            assert_eq!(grid[9], 150.0);
            assert!((grid[1] - 61.111_111_111_111_11).abs() < 1e-9);
            assert!(grid.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn linspace_degenerate_counts() {
            assert!(linspace(1.0, 2.0, 0).is_empty());
            assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
            assert_eq!(linspace(1.0, 2.0, 2), vec![1.0, 2.0]);
        }
    }
}
