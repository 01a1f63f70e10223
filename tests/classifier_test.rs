//! Unit tests for the signal classifier

use scanner_ta::services::classifier;
use scanner_ta::Signal;

#[test]
fn test_recommend_boundaries() {
    assert_eq!(classifier::recommend(0.5), Signal::Buy);
    assert_eq!(classifier::recommend(0.50000001), Signal::StrongBuy);
    assert_eq!(classifier::recommend(0.1), Signal::Neutral);
    assert_eq!(classifier::recommend(-0.1), Signal::Neutral);
    assert_eq!(classifier::recommend(-0.10000001), Signal::Sell);
    assert_eq!(classifier::recommend(-0.5), Signal::Sell);
    assert_eq!(classifier::recommend(-0.50000001), Signal::StrongSell);
    assert_eq!(classifier::recommend(-1.0), Signal::StrongSell);
}

#[test]
fn test_recommend_sweep_is_monotonic() {
    let mut last = Signal::StrongSell;
    for i in -100..=100 {
        let signal = classifier::recommend(i as f64 / 100.0);
        assert!(signal >= last, "signal dropped at {}", i);
        last = signal;
    }
    assert_eq!(last, Signal::StrongBuy);
}

#[test]
fn test_rsi_examples() {
    assert_eq!(classifier::rsi(29.0, 28.0), Signal::Buy);
    assert_eq!(classifier::rsi(71.0, 72.0), Signal::Sell);
    assert_eq!(classifier::rsi(50.0, 50.0), Signal::Neutral);
}

#[test]
fn test_stoch_examples() {
    assert_eq!(classifier::stoch(19.0, 18.0, 17.0, 18.0), Signal::Buy);
    assert_eq!(classifier::stoch(81.0, 82.0, 83.0, 82.0), Signal::Sell);
    assert_eq!(classifier::stoch(50.0, 50.0, 50.0, 50.0), Signal::Neutral);
}

#[test]
fn test_cci20_examples() {
    assert_eq!(classifier::cci20(-101.0, -102.0), Signal::Buy);
    assert_eq!(classifier::cci20(101.0, 102.0), Signal::Sell);
    assert_eq!(classifier::cci20(0.0, 0.0), Signal::Neutral);
}

#[test]
fn test_moving_average_examples() {
    assert_eq!(classifier::moving_average(100.0, 101.0), Signal::Buy);
    assert_eq!(classifier::moving_average(101.0, 100.0), Signal::Sell);
    assert_eq!(classifier::moving_average(100.0, 100.0), Signal::Neutral);
}

#[test]
fn test_equal_operands_are_neutral() {
    assert_eq!(classifier::mom(3.0, 3.0), Signal::Neutral);
    assert_eq!(classifier::macd(-0.4, -0.4), Signal::Neutral);
    assert_eq!(classifier::adx(30.0, 20.0, 20.0, 20.0, 20.0), Signal::Neutral);
    assert_eq!(classifier::ao(2.0, 2.0, 2.0), Signal::Neutral);
}

#[test]
fn test_classifier_is_repeatable() {
    let inputs = [(-1.0, 0.3), (29.0, 28.0), (71.0, 72.0), (f64::NAN, 1.0)];
    for (a, b) in inputs {
        assert_eq!(classifier::rsi(a, b), classifier::rsi(a, b));
        assert_eq!(classifier::mom(a, b), classifier::mom(a, b));
        assert_eq!(classifier::recommend(a), classifier::recommend(a));
    }
}

#[test]
fn test_only_strong_signals_come_from_recommend() {
    let grid = [-150.0, -20.0, -1.0, 0.0, 1.0, 20.0, 150.0];
    for &a in &grid {
        for &b in &grid {
            for signal in [
                classifier::rsi(a, b),
                classifier::cci20(a, b),
                classifier::mom(a, b),
                classifier::macd(a, b),
                classifier::moving_average(a, b),
                classifier::ao(a, b, a),
                classifier::stoch(a, b, b, a),
                classifier::adx(a, a, b, b, a),
            ] {
                assert!(signal != Signal::StrongBuy && signal != Signal::StrongSell);
            }
        }
    }
}
