//! Parameter validation errors for field operators.

use std::fmt;

/// A numeric operator parameter failed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamError {
    /// Parameter name as used by the builder method.
    pub name: &'static str,
    /// The rejected value.
    pub value: f64,
    /// What the value must satisfy.
    pub reason: &'static str,
}

impl ParamError {
    /// Reject `value` unless it is finite and `>= 0`.
    pub fn check_non_negative(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(Self {
                name,
                value,
                reason: "must be finite and >= 0",
            })
        }
    }

    /// Reject `value` unless it is finite and `> 0`.
    pub fn check_positive(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self {
                name,
                value,
                reason: "must be finite and > 0",
            })
        }
    }

    /// Reject `value` unless it is finite.
    pub fn check_finite(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self {
                name,
                value,
                reason: "must be finite",
            })
        }
    }
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} {}", self.name, self.value, self.reason)
    }
}

impl std::error::Error for ParamError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checks_reject_nan() {
        assert!(ParamError::check_non_negative("d", f64::NAN).is_err());
        assert!(ParamError::check_positive("dt", f64::NAN).is_err());
        assert!(ParamError::check_finite("chi", f64::NAN).is_err());
    }

    #[test]
    fn check_positive_rejects_zero() {
        let err = ParamError::check_positive("dt", 0.0).unwrap_err();
        assert_eq!(err.name, "dt");
        assert_eq!(err.to_string(), "dt = 0 must be finite and > 0");
        assert_eq!(ParamError::check_non_negative("d", 0.0), Ok(0.0));
    }
}
