// librc522/src/tag/mod.rs

use crate::types::Uid;

/// Presence check, anticollision, page read and write
pub mod operations;
pub mod text;

/// A tag that answered the presence check and the anticollision probe.
///
/// Holds the raw anticollision response. The first four bytes are the UID;
/// the fifth, when present, is the tag's BCC. Nothing here validates the
/// BCC: any response the transceive engine accepted counts as an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    response: Vec<u8>,
    atqa_bits: usize,
}

impl Tag {
    /// Wrap an anticollision response and the presence answer's bit count.
    pub fn new(response: Vec<u8>, atqa_bits: usize) -> Self {
        Self {
            response,
            atqa_bits,
        }
    }

    /// UID from the anticollision response; `None` if it was shorter than 4 bytes.
    pub fn uid(&self) -> Option<Uid> {
        self.response
            .get(..4)
            .and_then(|b| Uid::try_from(b).ok())
    }

    /// BCC byte as received, if the response carried one.
    pub fn bcc(&self) -> Option<u8> {
        self.response.get(4).copied()
    }

    /// Whether the received BCC matches the UID. Advisory only.
    pub fn bcc_matches(&self) -> Option<bool> {
        Some(self.uid()?.bcc() == self.bcc()?)
    }

    /// Raw anticollision response.
    pub fn response(&self) -> &[u8] {
        &self.response
    }

    /// Valid-bit count of the answer to the presence request.
    pub fn atqa_bits(&self) -> usize {
        self.atqa_bits
    }
}
