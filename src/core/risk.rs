use crate::domain::model::{ForecastWindow, RiskAssessment, RiskTier};
use crate::utils::error::{ForecastError, Result};
use chrono::Utc;

/// Probability at or above which a forecast is graded HIGH.
pub const HIGH_CUTOFF: f64 = 0.8;
/// Probability at or above which a forecast is graded MEDIUM.
pub const MEDIUM_CUTOFF: f64 = 0.5;

/// Fraction of forecast points at or above `threshold`, rounded to two
/// decimal places.
pub fn bottleneck_probability(forecast: &ForecastWindow, threshold: f64) -> Result<f64> {
    if forecast.is_empty() {
        return Err(ForecastError::EmptyForecast);
    }
    if !threshold.is_finite() {
        return Err(ForecastError::InvalidParameter {
            name: "threshold".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    let hits = forecast.values().iter().filter(|&&v| v >= threshold).count();
    let probability = hits as f64 / forecast.len() as f64;
    // ties round to even: 0.125 becomes 0.12, not 0.13
    Ok((probability * 100.0).round_ties_even() / 100.0)
}

/// Boundary values are inclusive to the higher tier: exactly 0.8 is HIGH,
/// exactly 0.5 is MEDIUM.
pub fn classify(probability: f64) -> RiskTier {
    if probability >= HIGH_CUTOFF {
        RiskTier::High
    } else if probability >= MEDIUM_CUTOFF {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}

/// Grades one forecast window for a zone, stamping the evaluation time.
pub fn assess(forecast: &ForecastWindow, threshold: f64, zone: &str) -> Result<RiskAssessment> {
    let probability = bottleneck_probability(forecast, threshold)?;
    Ok(RiskAssessment {
        probability,
        tier: classify(probability),
        zone: zone.to_string(),
        timestamp: Utc::now(),
    })
}
