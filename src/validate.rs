//! Field guards applied to DTOs before they are sent to the server

use crate::error::{ViewError, ViewResult};

/// Client-side field checks for a DTO.
///
/// `create` and `update` run these before any request is made, so a bad value
/// surfaces as [`ViewError::InvalidArgument`] at the call site.
pub trait Validate {
    fn validate(&self) -> ViewResult<()> {
        Ok(())
    }
}

pub(crate) fn require_non_empty(field: &str, value: &str) -> ViewResult<()> {
    if value.trim().is_empty() {
        return Err(ViewError::invalid(format!("{} must not be empty", field)));
    }
    Ok(())
}

pub(crate) fn require_min<T>(field: &str, value: T, min: T) -> ViewResult<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min {
        return Err(ViewError::invalid(format!(
            "{} must be at least {} (got {})",
            field, min, value
        )));
    }
    Ok(())
}

pub(crate) fn require_range<T>(field: &str, value: T, min: T, max: T) -> ViewResult<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min || value > max {
        return Err(ViewError::invalid(format!(
            "{} must be between {} and {} (got {})",
            field, min, max, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("Name", "bucket").is_ok());
        assert!(require_non_empty("Name", "").is_err());
        assert!(require_non_empty("Name", "   ").is_err());
    }

    #[test]
    fn test_require_bounds() {
        assert!(require_min("BatchSize", 1, 1).is_ok());
        assert!(require_min("BatchSize", 0, 1).is_err());
        assert!(require_range("TopP", 0.5, 0.0, 1.0).is_ok());
        assert!(require_range("TopP", 1.5, 0.0, 1.0).is_err());

        let err = require_range("MaxResults", 0, 1, 1000).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: MaxResults must be between 1 and 1000 (got 0)"
        );
    }
}
