//! Unit tests for moving-average and dispersion primitives

use sinaltrix::common::math;

#[test]
fn sma_averages_trailing_window() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(math::sma(&values, 3), Some(4.0));
    assert_eq!(math::sma(&values, 5), Some(3.0));
}

#[test]
fn sma_rejects_short_input_and_zero_period() {
    assert_eq!(math::sma(&[1.0, 2.0], 3), None);
    assert_eq!(math::sma(&[1.0, 2.0], 0), None);
}

#[test]
fn standard_deviation_matches_known_population() {
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let sigma = math::standard_deviation(&values, 8).unwrap();
    assert!((sigma - 2.0).abs() < 1e-12);
}

#[test]
fn standard_deviation_of_constant_series_is_zero() {
    let values = [3.0; 10];
    assert_eq!(math::standard_deviation(&values, 10), Some(0.0));
}

#[test]
fn ema_from_previous_applies_smoothing_factor() {
    // period 3 -> k = 0.5
    assert_eq!(math::ema_from_previous(10.0, 5.0, 3), 7.5);
}

#[test]
fn ema_is_seeded_with_sma_then_folds() {
    // seed = (1+2+3)/3 = 2, k = 0.5: +4 -> 3, +5 -> 4
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(math::ema(&values, 3), Some(4.0));
}

#[test]
fn ema_of_constant_series_is_the_constant() {
    let values = [42.0; 30];
    let ema = math::ema(&values, 9).unwrap();
    assert!((ema - 42.0).abs() < 1e-9);
}

#[test]
fn ema_series_has_one_entry_per_sample_from_seed() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    let series = math::ema_series(&values, 3).unwrap();
    assert_eq!(series, vec![2.0, 3.0, 4.0]);
    assert_eq!(series.last().copied(), math::ema(&values, 3));
}

#[test]
fn ema_needs_at_least_period_samples() {
    assert_eq!(math::ema(&[1.0, 2.0], 3), None);
    assert_eq!(math::ema_series(&[], 1), None);
}
