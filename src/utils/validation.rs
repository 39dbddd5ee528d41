use crate::utils::error::{LevainError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LevainError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LevainError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Weights: strictly positive and finite.
pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(LevainError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a positive number".to_string(),
        });
    }
    Ok(())
}

/// Rates entered as percentages live in (0, 100].
pub fn validate_percentage(field_name: &str, value: f64) -> Result<()> {
    validate_positive(field_name, value)?;
    validate_range(field_name, value, 0.0, 100.0)
}

/// Rates stored as fractions live in (0, 1].
pub fn validate_fraction(field_name: &str, value: f64) -> Result<()> {
    validate_positive(field_name, value)?;
    validate_range(field_name, value, 0.0, 1.0)
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(LevainError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "config.ini").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("weight", 920.0).is_ok());
        assert!(validate_positive("weight", 0.0).is_err());
        assert!(validate_positive("weight", -1.0).is_err());
        assert!(validate_positive("weight", f64::NAN).is_err());
        assert!(validate_positive("weight", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_percentage() {
        assert!(validate_percentage("dough hydration", 60.0).is_ok());
        assert!(validate_percentage("dough hydration", 100.0).is_ok());
        assert!(validate_percentage("dough hydration", 0.0).is_err());
        assert!(validate_percentage("dough hydration", 100.5).is_err());
        assert!(validate_percentage("dough hydration", -20.0).is_err());
    }

    #[test]
    fn test_validate_fraction() {
        assert!(validate_fraction("starter ratio", 0.3).is_ok());
        assert!(validate_fraction("starter ratio", 1.0).is_ok());
        assert!(validate_fraction("starter ratio", 0.0).is_err());
        assert!(validate_fraction("starter ratio", 1.2).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("steps", 5u32, 1, 30).is_ok());
        assert!(validate_range("steps", 0u32, 1, 30).is_err());
        assert!(validate_range("steps", 31u32, 1, 30).is_err());
    }
}
