use crate::domain::model::{DensitySeries, ForecastWindow};
use crate::utils::error::{ForecastError, Result};

/// Linear trend fitted over (time index, density) pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendFit {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendFit {
    pub fn predict(&self, index: usize) -> f64 {
        self.intercept + self.slope * index as f64
    }
}

/// Closed-form ordinary least squares over the series: slope is the
/// covariance of (index, value) divided by the variance of the index. The
/// input shape is tiny and regular, so no solver library is needed.
pub fn fit(series: &DensitySeries) -> Result<TrendFit> {
    let y = series.values();
    if y.len() < 2 {
        // a single point cannot determine a slope; fail instead of
        // producing a silent degenerate fit
        return Err(ForecastError::InsufficientData {
            required: 2,
            actual: y.len(),
        });
    }

    let n = y.len() as f64;
    let mean_t = (y.len() - 1) as f64 / 2.0;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance = 0.0;
    for (t, &value) in y.iter().enumerate() {
        let dt = t as f64 - mean_t;
        covariance += dt * (value - mean_y);
        variance += dt * dt;
    }

    let slope = covariance / variance;
    Ok(TrendFit {
        slope,
        intercept: mean_y - slope * mean_t,
    })
}

/// Extrapolates the fitted trend over the next `steps` time indices, clamping
/// each prediction into the series bounds. Deterministic: the same series and
/// horizon always yield the same window.
pub fn forecast(series: &DensitySeries, steps: usize) -> Result<ForecastWindow> {
    if steps == 0 {
        return Err(ForecastError::InvalidParameter {
            name: "steps".to_string(),
            reason: "forecast horizon must be at least 1".to_string(),
        });
    }

    let fit = fit(series)?;
    let bounds = series.bounds();
    let start = series.len();
    let values = (start..start + steps)
        .map(|t| bounds.clamp(fit.predict(t)))
        .collect();
    Ok(ForecastWindow::new(values, bounds))
}
