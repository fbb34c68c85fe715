//! I/O helpers for the `arith` binary.

pub mod config;
