use approx::assert_relative_eq;
use augur_evaluate::{EvaluateError, Metric, evaluate, evaluate_with};

#[test]
fn test_identical_inputs_score_zero() {
    let x = [3.0, -1.5, 2.25, 10.0];
    let r = evaluate(&x, &x).unwrap();
    assert_eq!(r.value(), 0.0);
    assert_eq!(r.n(), 4);
    assert_eq!(r.metric(), Metric::Rmse);
}

#[test]
fn test_rmse_of_constant_offset() {
    let actual = [1.0, 2.0, 3.0, 4.0, 5.0];
    let forecast: Vec<f64> = actual.iter().map(|a| a + 2.0).collect();
    let r = evaluate(&actual, &forecast).unwrap();
    assert_relative_eq!(r.value(), 2.0, epsilon = 1e-12);
}

#[test]
fn test_rmse_at_least_mae() {
    let actual = [0.0, 0.0, 0.0, 0.0];
    let forecast = [1.0, -3.0, 0.5, 2.0];
    let rmse = evaluate_with(&actual, &forecast, Metric::Rmse).unwrap();
    let mae = evaluate_with(&actual, &forecast, Metric::Mae).unwrap();
    assert!(rmse.value() >= mae.value());
    assert_relative_eq!(mae.value(), 1.625, epsilon = 1e-12);
}

#[test]
fn test_length_mismatch() {
    assert_eq!(
        evaluate(&[1.0, 2.0], &[1.0]),
        Err(EvaluateError::LengthMismatch {
            actual: 2,
            forecast: 1
        })
    );
}

#[test]
fn test_empty_inputs() {
    assert_eq!(evaluate(&[], &[]), Err(EvaluateError::Empty));
    assert_eq!(evaluate(&[1.0], &[]), Err(EvaluateError::Empty));
}

#[test]
fn test_non_finite_rejected() {
    assert_eq!(
        evaluate(&[1.0, f64::NAN], &[1.0, 2.0]),
        Err(EvaluateError::NonFinite {
            which: "actual",
            index: 1
        })
    );
    assert_eq!(
        evaluate(&[1.0, 2.0], &[f64::INFINITY, 2.0]),
        Err(EvaluateError::NonFinite {
            which: "forecast",
            index: 0
        })
    );
}
