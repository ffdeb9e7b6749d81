use crate::utils::error::{ForecastError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ForecastError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(ForecastError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ForecastError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    validate_finite(field_name, value)?;
    if value < 0.0 {
        return Err(ForecastError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ForecastError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// The plausible density range must be a well-formed, finite interval.
pub fn validate_bounds(min_field: &str, min: f64, max_field: &str, max: f64) -> Result<()> {
    validate_finite(min_field, min)?;
    validate_finite(max_field, max)?;
    if min >= max {
        return Err(ForecastError::InvalidConfigValue {
            field: min_field.to_string(),
            value: min.to_string(),
            reason: format!("Lower bound must be strictly below {} ({})", max_field, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("zone", "North Gate").is_ok());
        assert!(validate_non_empty_string("zone", "").is_err());
        assert!(validate_non_empty_string("zone", "   ").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("steps", 20, 1).is_ok());
        assert!(validate_positive_number("steps", 0, 1).is_err());
        assert!(validate_positive_number("series_len", 1, 2).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("threshold", 4.0).is_ok());
        assert!(validate_finite("threshold", f64::NAN).is_err());
        assert!(validate_finite("threshold", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("noise_std", 0.0).is_ok());
        assert!(validate_non_negative("noise_std", 0.6).is_ok());
        assert!(validate_non_negative("noise_std", -0.1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("threshold", 4.0, 0.2, 5.0).is_ok());
        assert!(validate_range("threshold", 5.5, 0.2, 5.0).is_err());
    }

    #[test]
    fn test_validate_bounds() {
        assert!(validate_bounds("min_density", 0.2, "max_density", 5.0).is_ok());
        assert!(validate_bounds("min_density", 5.0, "max_density", 0.2).is_err());
        assert!(validate_bounds("min_density", f64::NAN, "max_density", 5.0).is_err());
    }
}
