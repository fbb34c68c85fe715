//! Basic arithmetic operations with diagnostic logging and typed errors.
//!
//! The crate keeps the same separation throughout:
//!
//! - **[`core`]**: Pure, deterministic arithmetic (numbers, operations, errors).
//!   No I/O; emits `tracing` events but never installs a subscriber.
//! - **[`io`]**: Side-effecting helpers (configuration on disk).
//!
//! [`logging`] and [`exit_codes`] serve the `arith` binary.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::error::{ArithError, ErrorKind};
pub use crate::core::number::Number;
pub use crate::core::ops::{
    Calculator, Operation, PowerCheck, add, divide, multiply, power, subtract,
};
