use crate::utils::error::{ForecastError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Plausible crowd-density range in people per square meter. Every observed
/// and predicted value is clamped into this interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityBounds {
    pub min: f64,
    pub max: f64,
}

impl DensityBounds {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ForecastError::InvalidParameter {
                name: "density_bounds".to_string(),
                reason: format!("[{}, {}] is not a finite, non-empty interval", min, max),
            });
        }
        Ok(Self { min, max })
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

impl Default for DensityBounds {
    fn default() -> Self {
        Self { min: 0.2, max: 5.0 }
    }
}

/// Time-ordered crowd-density readings, one per fixed time step.
///
/// Construction clamps every value into the bounds and rejects non-finite
/// input; mutation is append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct DensitySeries {
    values: Vec<f64>,
    bounds: DensityBounds,
}

impl DensitySeries {
    pub fn new(values: Vec<f64>, bounds: DensityBounds) -> Result<Self> {
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(ForecastError::NonFiniteValue { index, value });
            }
        }
        let values = values.into_iter().map(|v| bounds.clamp(v)).collect();
        Ok(Self { values, bounds })
    }

    pub fn push(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(ForecastError::NonFiniteValue {
                index: self.values.len(),
                value,
            });
        }
        self.values.push(self.bounds.clamp(value));
        Ok(())
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn bounds(&self) -> DensityBounds {
        self.bounds
    }
}

/// Predicted density values beyond the end of an observed series. Derived and
/// read-only; recomputed on demand by the trend forecaster.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastWindow {
    values: Vec<f64>,
    bounds: DensityBounds,
}

impl ForecastWindow {
    pub(crate) fn new(values: Vec<f64>, bounds: DensityBounds) -> Self {
        Self { values, bounds }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn bounds(&self) -> DensityBounds {
        self.bounds
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one forecast evaluation. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    /// Fraction of forecast points at or above the threshold, rounded to
    /// two decimal places.
    pub probability: f64,
    pub tier: RiskTier,
    pub zone: String,
    pub timestamp: DateTime<Utc>,
}

/// Append-only record handed to the alert store when risk is MEDIUM or
/// higher. Never updated or deleted by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub zone: String,
    pub risk_level: RiskTier,
    pub prediction_time: String,
}

impl Alert {
    /// LOW-tier assessments produce no alert; quiet logs during normal
    /// operation are a policy decision, not an omission.
    pub fn from_assessment(assessment: &RiskAssessment) -> Option<Self> {
        if assessment.tier < RiskTier::Medium {
            return None;
        }
        Some(Self {
            zone: assessment.zone.clone(),
            risk_level: assessment.tier,
            prediction_time: assessment.timestamp.to_rfc3339(),
        })
    }
}
