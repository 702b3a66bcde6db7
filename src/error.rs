//! Errors raised by the conversion functions and the command builder. Unknown light models are not
//! errors: they quietly get the full-triangle gamut.

use std::error::Error;
use std::fmt;

/// An error in converting a color or building a command.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    /// A numeric input was outside its documented domain: NaN or infinite components, a
    /// non-positive Kelvin or Mired value, or a fraction outside [0, 1].
    InvalidArgument {
        /// The name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A builder configuration could not be read.
    InvalidConfig(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColorError::InvalidArgument { name, value } => {
                write!(f, "invalid argument {}: {}", name, value)
            }
            ColorError::InvalidConfig(ref reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl Error for ColorError {}

/// Rejects NaN and infinities.
pub fn check_finite(name: &'static str, value: f64) -> Result<f64, ColorError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ColorError::InvalidArgument { name, value })
    }
}

/// Rejects anything that is not a finite number in [0, 1].
pub fn check_fraction(name: &'static str, value: f64) -> Result<f64, ColorError> {
    if value.is_finite() && value >= 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(ColorError::InvalidArgument { name, value })
    }
}

/// Rejects anything that is not a finite, strictly positive number.
pub fn check_positive(name: &'static str, value: f64) -> Result<f64, ColorError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ColorError::InvalidArgument { name, value })
    }
}
