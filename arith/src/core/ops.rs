//! The five arithmetic operations.
//!
//! Every call logs its inputs at debug level, its result at info level, and
//! each rejection at error level. Calls are independent and hold no state, so
//! they may run concurrently from any number of threads.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::core::error::ArithError;
use crate::core::number::Number;

/// How [`Calculator::power`] decides that an exponentiation is undefined.
///
/// The not-a-number guard on the computed result applies under every policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerCheck {
    /// Reject a negative base with a non-integral exponent, a zero base with a
    /// finite negative exponent, and finite operands that overflow to infinity.
    #[default]
    Strict,
    /// Only reject results that are not-a-number.
    NanOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Arithmetic operations parameterized by a [`PowerCheck`] policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator {
    power_check: PowerCheck,
}

impl Calculator {
    pub fn new(power_check: PowerCheck) -> Self {
        Self { power_check }
    }

    pub fn power_check(&self) -> PowerCheck {
        self.power_check
    }

    pub fn add(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        debug!(%a, %b, "add called");
        let result = int_or_float(a, b, i64::checked_add, |x, y| x + y);
        info!(%a, %b, %result, "add result");
        result
    }

    pub fn subtract(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        debug!(%a, %b, "subtract called");
        let result = int_or_float(a, b, i64::checked_sub, |x, y| x - y);
        info!(%a, %b, %result, "subtract result");
        result
    }

    pub fn multiply(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        debug!(%a, %b, "multiply called");
        let result = int_or_float(a, b, i64::checked_mul, |x, y| x * y);
        info!(%a, %b, %result, "multiply result");
        result
    }

    /// Returns `a / b` as a float.
    ///
    /// Fails with [`ArithError::DivisionByZero`] when `b` is exactly zero.
    pub fn divide(
        &self,
        a: impl Into<Number>,
        b: impl Into<Number>,
    ) -> Result<f64, ArithError> {
        let (a, b) = (a.into(), b.into());
        debug!(%a, %b, "divide called");
        if b.is_zero() {
            error!(%a, %b, "divide attempted with divisor 0");
            return Err(ArithError::DivisionByZero);
        }
        let result = a.as_f64() / b.as_f64();
        info!(%a, %b, result, "divide result");
        Ok(result)
    }

    /// Returns `a` raised to `b` as a float.
    ///
    /// Under [`PowerCheck::Strict`] operands with no real result (or whose
    /// result overflows) fail with [`ArithError::InvalidPower`]. A not-a-number
    /// result fails with [`ArithError::NotRealNumber`] under every policy.
    pub fn power(
        &self,
        a: impl Into<Number>,
        b: impl Into<Number>,
    ) -> Result<f64, ArithError> {
        let (a, b) = (a.into(), b.into());
        debug!(%a, %b, "power called");
        let (base, exponent) = (a.as_f64(), b.as_f64());
        let strict = self.power_check == PowerCheck::Strict;

        if strict && outside_real_domain(base, exponent) {
            error!(%a, %b, "power operation outside the real domain");
            return Err(ArithError::InvalidPower);
        }

        let result = base.powf(exponent);
        if result.is_nan() {
            error!(%a, %b, "power result is not a real number");
            return Err(ArithError::NotRealNumber);
        }
        if strict && result.is_infinite() && base.is_finite() && exponent.is_finite() {
            error!(%a, %b, "power result overflowed");
            return Err(ArithError::InvalidPower);
        }

        info!(%a, %b, result, "power result");
        Ok(result)
    }

    /// Run `op` on `a` and `b`. `divide` and `power` results come back as
    /// [`Number::Float`].
    pub fn apply(&self, op: Operation, a: Number, b: Number) -> Result<Number, ArithError> {
        match op {
            Operation::Add => Ok(self.add(a, b)),
            Operation::Subtract => Ok(self.subtract(a, b)),
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b).map(Number::Float),
            Operation::Power => self.power(a, b).map(Number::Float),
        }
    }
}

/// `a + b`.
pub fn add(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    Calculator::default().add(a, b)
}

/// `a - b`.
pub fn subtract(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    Calculator::default().subtract(a, b)
}

/// `a * b`.
pub fn multiply(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    Calculator::default().multiply(a, b)
}

/// `a / b`; see [`Calculator::divide`].
pub fn divide(a: impl Into<Number>, b: impl Into<Number>) -> Result<f64, ArithError> {
    Calculator::default().divide(a, b)
}

/// `a` to the power `b` under [`PowerCheck::Strict`]; see [`Calculator::power`].
pub fn power(a: impl Into<Number>, b: impl Into<Number>) -> Result<f64, ArithError> {
    Calculator::default().power(a, b)
}

/// Integer arithmetic when both operands are integers and the result fits,
/// float arithmetic otherwise.
fn int_or_float(
    a: Number,
    b: Number,
    checked: fn(i64, i64) -> Option<i64>,
    float: fn(f64, f64) -> f64,
) -> Number {
    if let (Number::Int(x), Number::Int(y)) = (a, b)
        && let Some(value) = checked(x, y)
    {
        return Number::Int(value);
    }
    Number::Float(float(a.as_f64(), b.as_f64()))
}

fn outside_real_domain(base: f64, exponent: f64) -> bool {
    let negative_base_fractional_exponent =
        base.is_finite() && base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0;
    let zero_base_negative_exponent = base == 0.0 && exponent.is_finite() && exponent < 0.0;
    negative_base_fractional_exponent || zero_base_negative_exponent
}
