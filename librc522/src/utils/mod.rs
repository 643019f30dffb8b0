//! Utilities for librc522: small, reusable helpers used across the crate.
//!
//! Hex formatting for identifiers and page dumps, and the bounded spin loop
//! every register poll goes through.

pub mod hex;
pub mod poll;

pub use hex::*;
pub use poll::*;
