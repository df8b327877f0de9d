
use bs_pricing::{
    default_configs, price, report, sensitivity, spot_range, sweep, sweep_from, sweep_iter,
    ChartOptions, OptionType, Parameter, PricingConfig, SweepConfig,
};
use test_utils::{atm_inputs, atm_market};

/// Ten evenly spaced spots over [50, 150] against the ATM reference option
#[test]
fn test_ten_point_sweep_matches_standalone_prices() {
    let market = atm_market();
    let spots = spot_range(100.0, &SweepConfig::default());
    let points = sweep(&market, &spots).expect("sweep failed");

    assert_eq!(points.len(), 10);
    assert_eq!(points[0].spot, 50.0);
    assert_eq!(points[9].spot, 150.0);
    assert!(points.windows(2).all(|w| w[0].spot < w[1].spot));

    for (point, &spot) in points.iter().zip(&spots) {
        assert_eq!(point.spot, spot);
        let call = price(&market.at_spot(spot, OptionType::Call)).unwrap();
        let put = price(&market.at_spot(spot, OptionType::Put)).unwrap();
        assert_eq!(point.call, call);
        assert_eq!(point.put, put);
    }

    // Each triple satisfies put-call parity at its own spot
    for point in &points {
        let gap = point.quote().parity_gap(point.spot, &market);
        assert!(gap.abs() < 1e-9, "parity gap {} at spot {}", gap, point.spot);
    }

    // Call rises and put falls along the curve
    assert!(points.windows(2).all(|w| w[1].call > w[0].call));
    assert!(points.windows(2).all(|w| w[1].put < w[0].put));
}

#[test]
fn test_sweep_from_ignores_base_spot_and_type() {
    let spots = [75.0, 125.0];
    let a = sweep_from(&atm_inputs(OptionType::Call), &spots).unwrap();
    let b = sweep_from(&atm_inputs(OptionType::Put).with_spot(42.0), &spots).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_sweep_accepts_arbitrary_order_and_duplicates() {
    let spots = [130.0, 70.0, 70.0, 100.0];
    let points = sweep(&atm_market(), &spots).unwrap();
    let got: Vec<f64> = points.iter().map(|p| p.spot).collect();
    assert_eq!(got, spots);
    assert_eq!(points[1], points[2]);
}

#[test]
fn test_sweep_is_fail_fast() {
    let err = sweep(&atm_market(), &[80.0, 90.0, f64::NAN, -3.0]).unwrap_err();
    assert_eq!(err.parameter, Parameter::Spot);
    assert!(err.value.is_nan());
}

#[test]
fn test_lazy_sweep_matches_eager() {
    let market = atm_market();
    let spots = spot_range(100.0, &default_configs::fine().sweep);
    let eager = sweep(&market, &spots).unwrap();
    let lazy: Vec<_> = sweep_iter(&market, spots.iter().copied())
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(eager, lazy);
    assert_eq!(lazy.len(), 101);
}

#[test]
fn test_lazy_sweep_takes_only_what_is_asked() {
    let market = atm_market();
    let first_three: Vec<_> = sweep_iter(&market, (1..).map(|i| i as f64 * 10.0))
        .take(3)
        .map(|r| r.unwrap().spot)
        .collect();
    assert_eq!(first_three, vec![10.0, 20.0, 30.0]);
}

#[test]
fn test_sensitivity_from_config_fixture() {
    let config =
        PricingConfig::from_path("tests/data/pricing.toml").expect("Failed to load config");
    assert_eq!(config.market.option_type, OptionType::Put);

    let points = sensitivity(&config.market, &config.sweep).unwrap();
    assert_eq!(points.len(), 10);
    assert_eq!(points.first().map(|p| p.spot), Some(50.0));
    assert_eq!(points.last().map(|p| p.spot), Some(150.0));
}

#[test]
fn test_sensitivity_rejects_bad_base() {
    let bad = atm_inputs(OptionType::Call).with_spot(-1.0);
    let empty = SweepConfig {
        points: 0,
        ..SweepConfig::default()
    };
    let err = sensitivity(&bad, &empty).unwrap_err();
    assert_eq!(err.parameter, Parameter::Spot);
}

#[test]
fn test_wide_sweep_exports_csv_and_chart() {
    let config = default_configs::wide();
    let points = sensitivity(&config.market, &config.sweep).unwrap();
    assert_eq!(points.len(), 41);

    let mut buf = Vec::new();
    report::write_csv(&points, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().count(), 42);

    let svg = report::sensitivity_chart_svg(&points, &ChartOptions::default()).unwrap();
    assert!(svg.starts_with("<svg") || svg.contains("<svg"));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let err = PricingConfig::from_path("tests/data/does_not_exist.toml").unwrap_err();
    assert!(format!("{err:#}").contains("does_not_exist.toml"));
}
