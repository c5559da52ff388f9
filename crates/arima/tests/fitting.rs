//! Parameter recovery on simulated series.

use augur_arima::{ArimaError, FitOptions, OrderSpec};
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

fn noise(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

fn generate_arma11(phi: f64, theta: f64, n: usize, seed: u64) -> Vec<f64> {
    let eps = noise(n, seed);
    let mut data = vec![0.0; n];
    for t in 0..n {
        let ar_part = if t > 0 { phi * data[t - 1] } else { 0.0 };
        let ma_part = if t > 0 { theta * eps[t - 1] } else { 0.0 };
        data[t] = ar_part + eps[t] + ma_part;
    }
    data
}

fn generate_seasonal_ar(phi: f64, m: usize, n: usize, seed: u64) -> Vec<f64> {
    let eps = noise(n + 10 * m, seed);
    let mut data = vec![0.0; eps.len()];
    for t in 0..eps.len() {
        data[t] = eps[t] + if t >= m { phi * data[t - m] } else { 0.0 };
    }
    data.split_off(10 * m)
}

#[test]
fn arma11_recovery() {
    let (phi, theta) = (0.6, 0.3);
    let data = generate_arma11(phi, theta, 2000, 300);
    let fit = OrderSpec::new(1, 0, 1)
        .fit(&data, &FitOptions::default())
        .unwrap();
    assert!(
        (fit.ar()[0] - phi).abs() < 0.15,
        "phi: expected ~{phi}, got {}",
        fit.ar()[0]
    );
    assert!(
        (fit.ma()[0] - theta).abs() < 0.15,
        "theta: expected ~{theta}, got {}",
        fit.ma()[0]
    );
    assert!(fit.sigma2() > 0.8 && fit.sigma2() < 1.2);
    assert_eq!(fit.n_used(), 2000);
}

#[test]
fn seasonal_ar_recovery() {
    let phi = 0.6;
    let data = generate_seasonal_ar(phi, 12, 600, 17);
    let order = OrderSpec::new(0, 0, 0).with_seasonal(1, 0, 0, 12);
    let fit = order.fit(&data, &FitOptions::default()).unwrap();
    assert!(
        (fit.seasonal_ar()[0] - phi).abs() < 0.1,
        "Phi: expected ~{phi}, got {}",
        fit.seasonal_ar()[0]
    );
    assert!(fit.ar().is_empty());
}

#[test]
fn seasonal_model_beats_white_noise_on_seasonal_data() {
    let data = generate_seasonal_ar(0.7, 4, 300, 5);
    let options = FitOptions::default();
    let seasonal = OrderSpec::new(0, 0, 0)
        .with_seasonal(1, 0, 0, 4)
        .fit(&data, &options)
        .unwrap();
    let plain = OrderSpec::new(0, 0, 0).fit(&data, &options).unwrap();
    assert!(seasonal.aic() < plain.aic());
    assert!(seasonal.bic() < plain.bic());
}

#[test]
fn differencing_shortens_likelihood_sample() {
    let data: Vec<f64> = noise(200, 9)
        .iter()
        .scan(0.0, |level, e| {
            *level += e;
            Some(*level)
        })
        .collect();
    let fit = OrderSpec::new(1, 1, 0)
        .fit(&data, &FitOptions::default())
        .unwrap();
    assert_eq!(fit.n_used(), 199);
    assert_eq!(fit.residuals().len(), 199);
    // d + D = 1: intercept included automatically.
    assert!(fit.intercept().is_some());
    assert_eq!(fit.n_params(), 2);
}

#[test]
fn no_intercept_after_two_differences() {
    // Twice-integrated white noise.
    let (mut slope, mut level) = (0.0, 0.0);
    let data: Vec<f64> = noise(120, 10)
        .into_iter()
        .map(|e| {
            slope += e;
            level += slope;
            level
        })
        .collect();
    let fit = OrderSpec::new(0, 2, 1)
        .fit(&data, &FitOptions::default())
        .unwrap();
    assert!(fit.intercept().is_none());
    assert_eq!(fit.n_params(), 1);
    assert_eq!(fit.n_used(), 118);
}

#[test]
fn constant_series_is_rejected() {
    let err = OrderSpec::new(1, 0, 0)
        .fit(&[5.0; 20], &FitOptions::default())
        .unwrap_err();
    assert_eq!(err, ArimaError::ConstantData);
}

#[test]
fn log_likelihood_is_deterministic() {
    let data = generate_arma11(0.5, -0.2, 300, 77);
    let order = OrderSpec::new(1, 0, 1);
    let a = order.fit(&data, &FitOptions::default()).unwrap();
    let b = order.fit(&data, &FitOptions::default()).unwrap();
    assert_eq!(a.log_likelihood(), b.log_likelihood());
    assert_eq!(a.ar(), b.ar());
}
