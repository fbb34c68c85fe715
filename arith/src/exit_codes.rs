//! Stable exit codes for the `arith` binary.

/// The operation succeeded and its result was printed.
pub const OK: i32 = 0;
/// Invalid usage or config, or any other failure outside the operation itself.
pub const INVALID: i32 = 1;
/// The operation rejected its operands (`InvalidArgument`).
pub const INVALID_ARGUMENT: i32 = 2;
