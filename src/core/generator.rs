use crate::domain::model::{DensityBounds, DensitySeries};
use crate::utils::error::{ForecastError, Result};
use rand::Rng;
use rand_distr::Normal;

/// Upward drift per time step baked into every synthetic series. One step
/// corresponds to roughly one minute of wall-clock time.
pub const TREND_SLOPE: f64 = 0.01;

/// Builds a synthetic density series: `base_density + TREND_SLOPE * t` plus
/// gaussian noise, clamped into `bounds`.
///
/// The noise source is injected so callers control determinism; tests pass a
/// seeded `StdRng`. With `noise_std == 0` the result is the pure trend line.
pub fn generate<R: Rng>(
    n: usize,
    base_density: f64,
    noise_std: f64,
    rng: &mut R,
    bounds: DensityBounds,
) -> Result<DensitySeries> {
    if n == 0 {
        return Err(ForecastError::InvalidParameter {
            name: "n".to_string(),
            reason: "series length must be at least 1".to_string(),
        });
    }
    if !base_density.is_finite() {
        return Err(ForecastError::InvalidParameter {
            name: "base_density".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }
    if !noise_std.is_finite() || noise_std < 0.0 {
        return Err(ForecastError::InvalidParameter {
            name: "noise_std".to_string(),
            reason: "must be a finite, non-negative number".to_string(),
        });
    }

    let values: Vec<f64> = if noise_std == 0.0 {
        (0..n)
            .map(|t| base_density + TREND_SLOPE * t as f64)
            .collect()
    } else {
        // new() only fails on a negative or non-finite std dev, checked above
        let noise = Normal::new(0.0, noise_std).map_err(|e| ForecastError::InvalidParameter {
            name: "noise_std".to_string(),
            reason: e.to_string(),
        })?;
        (0..n)
            .map(|t| base_density + TREND_SLOPE * t as f64 + rng.sample(noise))
            .collect()
    };

    DensitySeries::new(values, bounds)
}
