// librc522/src/protocol/commands.rs

use crate::constants::{
    PICC_ANTICOLLISION_CL1, PICC_ANTICOLLISION_NVB, PICC_READ_PAGE, PICC_REQUEST_IDLE,
    PICC_WRITE_PAGE,
};
use crate::types::PageData;

/// Commands sent over the air to the tag. New commands should be added
/// here together with their op-code bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PiccCommand {
    /// REQA, sent as a 7-bit short frame
    RequestIdle,
    /// Cascade level 1 anticollision probe (SEL + NVB 0x20)
    Anticollision,
    /// NTAG READ: returns four pages starting at `page`
    ReadPage {
        /// First page returned
        page: u8,
    },
    /// NTAG WRITE: stores one page
    WritePage {
        /// Target page
        page: u8,
        /// Four bytes to store
        data: PageData,
    },
}

impl PiccCommand {
    /// First byte on air.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::RequestIdle => PICC_REQUEST_IDLE,
            Self::Anticollision => PICC_ANTICOLLISION_CL1,
            Self::ReadPage { .. } => PICC_READ_PAGE,
            Self::WritePage { .. } => PICC_WRITE_PAGE,
        }
    }

    /// Whether the frame carries a trailing CRC_A.
    pub fn needs_crc(&self) -> bool {
        matches!(self, Self::ReadPage { .. } | Self::WritePage { .. })
    }

    /// Encode the command bytes, without CRC.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::RequestIdle => vec![PICC_REQUEST_IDLE],
            Self::Anticollision => vec![PICC_ANTICOLLISION_CL1, PICC_ANTICOLLISION_NVB],
            Self::ReadPage { page } => vec![PICC_READ_PAGE, *page],
            Self::WritePage { page, data } => {
                let mut buf = Vec::with_capacity(6);
                buf.push(PICC_WRITE_PAGE);
                buf.push(*page);
                buf.extend_from_slice(data.as_bytes());
                buf
            }
        }
    }
}
