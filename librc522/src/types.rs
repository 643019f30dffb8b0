// librc522/src/types.rs

use crate::Error;
use derive_more::Display;
use std::convert::TryFrom;

/// Single size UID - Newtype Pattern (4 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid([u8; 4]);

impl Uid {
    /// Wrap four raw bytes.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Lowercase hex, no separators
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }

    /// Block check character a tag sends after its UID (XOR of the 4 bytes).
    pub fn bcc(&self) -> u8 {
        self.0.iter().fold(0, |acc, &b| acc ^ b)
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 4 {
            return Err(Error::InvalidLength {
                expected: 4,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 4];
        arr.copy_from_slice(&bytes[..4]);
        Ok(Self(arr))
    }
}

/// PageData (4 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageData([u8; 4]);

impl PageData {
    /// Wrap one page worth of bytes.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Borrow the page bytes.
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Space-separated hex, for logs
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    /// Each byte as a single-byte character code (Latin-1).
    pub fn to_latin1(&self) -> String {
        self.0.iter().map(|&b| b as char).collect()
    }
}

impl TryFrom<&[u8]> for PageData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 4 {
            return Err(Error::InvalidLength {
                expected: 4,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 4];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Outcome of one exchange through the transceive engine.
///
/// Timeouts, chip-reported errors and absent tags all collapse into
/// `Error`; the numeric codes match what the chip driver has always
/// reported (0 and 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Status {
    /// Exchange completed without flagged errors
    #[display(fmt = "ok")]
    Ok,
    /// Timeout, chip-reported error or no tag
    #[display(fmt = "error")]
    Error,
}

impl Status {
    /// Numeric status code (0 or 2)
    pub fn code(&self) -> u8 {
        match self {
            Self::Ok => crate::constants::STATUS_OK,
            Self::Error => crate::constants::STATUS_ERROR,
        }
    }

    /// Shorthand for `status.is_ok()`.
    pub fn is_ok(&self) -> bool {
        *self == Self::Ok
    }
}
