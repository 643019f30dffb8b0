// librc522/src/protocol/frame.rs

use crate::constants::MAX_RECEIVE_LEN;
use crate::{Error, Result};

/// Frame helper. A transmit frame is the command bytes optionally followed
/// by the 2-byte CRC_A (low byte first):
/// [Payload(n)] [CRC_L] [CRC_H]
pub struct Frame;

impl Frame {
    /// Append a CRC (as produced by the chip coprocessor) to `payload`.
    pub fn seal(payload: &[u8], crc: [u8; 2]) -> Vec<u8> {
        let mut out = Vec::with_capacity(payload.len() + 2);
        out.extend_from_slice(payload);
        out.extend_from_slice(&crc);
        out
    }

    /// Split a received buffer into its first `len` bytes, failing when the
    /// tag returned fewer. Used to cut page data out of a READ response.
    pub fn take(received: &[u8], len: usize) -> Result<&[u8]> {
        if len > MAX_RECEIVE_LEN || received.len() < len {
            return Err(Error::InvalidLength {
                expected: len,
                actual: received.len(),
            });
        }
        Ok(&received[..len])
    }
}
