// librc522/src/error.rs

use thiserror::Error;

/// Common error type.
///
/// Protocol outcomes (no tag, chip-reported errors, poll exhaustion) are not
/// errors: they surface as [`crate::Status::Error`] or as `None` from the
/// session calls. This enum only covers failures the caller must act on.
#[derive(Error, Debug)]
pub enum Error {
    /// Builder was asked for a device without a transport
    #[error("device not found")]
    DeviceNotFound,

    /// Transport failure (SPI bus or chip-select pin)
    #[error("bus error: {0}")]
    Bus(String),

    /// Slice of the wrong size for a fixed-size type
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length
        expected: usize,
        /// Length supplied
        actual: usize,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
