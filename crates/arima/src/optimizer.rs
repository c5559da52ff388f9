//! Nelder-Mead optimizer for seasonal ARIMA maximum-likelihood estimation.
//!
//! Wraps the `argmin` crate to minimize the negative concentrated
//! log-likelihood over unconstrained PACF parameters.
//!
//! **Not part of the public API.**

use argmin::core::{CostFunction, Executor, State, TerminationReason};
use argmin::solver::neldermead::NelderMead;
use tracing::trace;

use crate::diff::Differencing;
use crate::error::ArimaError;
use crate::fit::{FitParts, SarimaFit};
use crate::kalman;
use crate::options::FitOptions;
use crate::order::OrderSpec;
use crate::params::ParamLayout;
use crate::poly;
use crate::state_space::StateSpace;

/// Cost assigned to parameters for which the likelihood cannot be
/// evaluated.
const INFEASIBLE_COST: f64 = 1e12;

/// Fits a seasonal ARIMA model to data via exact MLE.
///
/// This is the full pipeline:
/// 1. Validate order and data
/// 2. Difference (seasonal, then regular) and remove the intercept
/// 3. Optimize concentrated log-likelihood via Nelder-Mead
/// 4. Reject boundary solutions
/// 5. Extract final parameters via full Kalman pass
pub(crate) fn fit_sarima(data: &[f64], order: OrderSpec, options: &FitOptions) -> Result<SarimaFit, ArimaError> {
    // 1. Validate
    order.validate()?;
    if data.is_empty() {
        return Err(ArimaError::EmptyData);
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(ArimaError::NonFiniteData);
    }
    let min = order.min_observations();
    if data.len() < min {
        return Err(ArimaError::InsufficientData { n: data.len(), min });
    }

    // 2. Difference and centre
    let (differenced, differencing) =
        Differencing::apply(data, order.d(), order.seasonal_d(), order.period()).ok_or(
            ArimaError::InsufficientData { n: data.len(), min },
        )?;
    if augur_stats::is_constant(&differenced) {
        return Err(ArimaError::ConstantData);
    }
    let intercept = options
        .resolve_intercept(order.d() + order.seasonal_d())
        .then(|| augur_stats::mean(&differenced));
    let offset = intercept.unwrap_or(0.0);
    let centred: Vec<f64> = differenced.iter().map(|x| x - offset).collect();

    // 3. Optimise (white noise needs no search)
    let layout = ParamLayout::new(&order);
    let dim = layout.dim();
    let best = if dim == 0 {
        Vec::new()
    } else {
        let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(dim + 1);
        simplex.push(vec![0.0; dim]);
        for i in 0..dim {
            let mut vertex = vec![0.0; dim];
            vertex[i] = 0.5;
            simplex.push(vertex);
        }

        let cost = SarimaCost {
            data: &centred,
            layout,
            period: order.period(),
        };
        let solver = NelderMead::new(simplex)
            .with_sd_tolerance(options.sd_tolerance())
            .map_err(|_| ArimaError::OptimizationFailed)?;
        let result = Executor::new(cost, solver)
            .configure(|state| state.max_iters(options.max_iters()))
            .run()
            .map_err(|_| ArimaError::OptimizationFailed)?;

        let state = result.state();
        trace!(
            order = %order,
            iters = state.get_iter(),
            cost = state.get_best_cost(),
            "optimiser finished"
        );
        if state.get_termination_reason() == Some(&TerminationReason::MaxItersReached) {
            return Err(ArimaError::OptimizationFailed);
        }
        state
            .get_best_param()
            .cloned()
            .ok_or(ArimaError::OptimizationFailed)?
    };

    // 4. Boundary check
    layout.check_boundary(&best)?;

    // 5. Final pass
    let coefficients = layout.coefficients(&best);
    let expanded_ar = poly::expand_ar(&coefficients.ar, &coefficients.seasonal_ar, order.period());
    let expanded_ma = poly::expand_ma(&coefficients.ma, &coefficients.seasonal_ma, order.period());
    let ss = StateSpace::new(&expanded_ar, &expanded_ma);
    let output = kalman::kalman_full(&ss, &centred)?;

    Ok(SarimaFit::new(FitParts {
        order,
        coefficients,
        intercept,
        sigma2: output.sigma2,
        residuals: output.residuals,
        log_likelihood: output.log_likelihood,
        expanded_ar,
        expanded_ma,
        predicted_state: output.predicted_state,
        differencing,
    }))
}

/// Cost function for argmin: negative concentrated log-likelihood.
struct SarimaCost<'a> {
    data: &'a [f64],
    layout: ParamLayout,
    period: usize,
}

impl CostFunction for SarimaCost<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        let c = self.layout.coefficients(params);
        let ar = poly::expand_ar(&c.ar, &c.seasonal_ar, self.period);
        let ma = poly::expand_ma(&c.ma, &c.seasonal_ma, self.period);
        let ss = StateSpace::new(&ar, &ma);

        match kalman::kalman_concentrated_loglik(&ss, self.data) {
            Ok(loglik) if loglik.is_finite() => Ok(-loglik),
            _ => Ok(INFEASIBLE_COST),
        }
    }
}
