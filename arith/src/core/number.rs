//! Numeric values accepted and produced by the operations.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// An integer or floating-point scalar.
///
/// Integer inputs stay integers through `add`, `subtract` and `multiply`
/// unless the `i64` result would overflow; anything touching a float is a
/// float. Serializes as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(value) => value as f64,
            Number::Float(value) => value,
        }
    }

    /// Exact comparison with zero; `-0.0` is zero.
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(value) => value == 0,
            Number::Float(value) => value == 0.0,
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// Floats always render with a fractional part or exponent (`10.0`, `1e21`).
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{value}"),
            Number::Float(value) => write!(f, "{value:?}"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid number {0:?}")]
pub struct ParseNumberError(String);

/// Integer syntax parses to [`Number::Int`]; anything else `f64` accepts
/// (`2.5`, `1e3`, `inf`, `nan`) parses to [`Number::Float`].
impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(Number::Int(value));
        }
        trimmed
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|_| ParseNumberError(raw.to_string()))
    }
}
