//! Deterministic, pure arithmetic shared by the library and the binary.
//!
//! Core modules must be free of I/O side effects. Diagnostic `tracing` events
//! are the only observable output; whoever installs the subscriber decides
//! where (and whether) they go.

pub mod error;
pub mod number;
pub mod ops;
