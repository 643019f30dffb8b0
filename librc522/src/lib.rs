// librc522/src/lib.rs

//! librc522
//!
//! Pure Rust driver for the NXP MFRC522 contactless reader chip, reading and
//! writing short text on NTAG-style tags.
#![warn(missing_docs)]

pub mod chip;
pub mod constants;
/// Device handle, builder, configuration and text sessions
pub mod device;
/// Crate error type and `Result` alias
pub mod error;
/// Common imports
pub mod prelude;
/// Over-the-air commands and CRC_A
pub mod protocol;
/// Detected tags and page operations
pub mod tag;
pub mod test_support;
/// Register transports: SPI and the chip model
pub mod transport;
/// Identifier, page and status types
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available everywhere.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
