//! Error types returned by the arithmetic operations.

use thiserror::Error;

/// Coarse classification shared by every [`ArithError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An operation's precondition on its operands was violated.
    InvalidArgument,
}

/// A rejected operation, with the failed precondition as its message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithError {
    #[error("Cannot divide by zero!")]
    DivisionByZero,

    /// The exponentiation has no real value (or overflows) for these operands.
    #[error("Invalid power operation")]
    InvalidPower,

    /// The computed result is not-a-number.
    #[error("Result is not a real number")]
    NotRealNumber,
}

impl ArithError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DivisionByZero | Self::InvalidPower | Self::NotRealNumber => {
                ErrorKind::InvalidArgument
            }
        }
    }
}
