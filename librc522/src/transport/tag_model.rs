// librc522/src/transport/tag_model.rs

use crate::constants::{
    PAGE_SIZE, PICC_ANTICOLLISION_CL1, PICC_ANTICOLLISION_NVB, PICC_READ_PAGE, PICC_REQUEST_IDLE,
    PICC_WRITE_PAGE,
};
use crate::protocol::crc::{crc_a, crc_a_matches};
use crate::transport::mock::Reply;
use crate::types::Uid;

/// NTAG213 user memory size in pages
pub const NTAG213_PAGES: usize = 45;

/// WUPA, answered the same way as REQA
const PICC_WAKE_UP: u8 = 0x52;

/// ATQA of an NTAG21x
const ATQA: [u8; 2] = [0x44, 0x00];

/// 4-bit ACK / NAK answers
const ACK: u8 = 0x0A;
const NAK: u8 = 0x00;

/// First page a WRITE may touch; pages 0..=3 hold UID, lock bytes and CC.
const FIRST_WRITABLE_PAGE: usize = 4;

/// An NTAG-style tag sitting in the mock's RF field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedTag {
    uid: Uid,
    pages: Vec<[u8; 4]>,
}

impl SimulatedTag {
    /// NTAG213-sized tag with blank user memory.
    pub fn new(uid: Uid) -> Self {
        Self::with_page_count(uid, NTAG213_PAGES)
    }

    /// Tag with `page_count` pages (at least 4).
    pub fn with_page_count(uid: Uid, page_count: usize) -> Self {
        let mut pages = vec![[0u8; 4]; page_count.max(FIRST_WRITABLE_PAGE)];
        let u = uid.as_bytes();
        pages[0] = [u[0], u[1], u[2], uid.bcc()];
        pages[1] = [u[3], 0, 0, 0];
        Self { uid, pages }
    }

    /// Tag with `text` stored from page 4 on, one byte per character.
    pub fn with_text(uid: Uid, text: &[u8]) -> Self {
        let mut tag = Self::new(uid);
        for (i, chunk) in text.chunks(PAGE_SIZE).enumerate() {
            let mut page = [0u8; 4];
            page[..chunk.len()].copy_from_slice(chunk);
            tag.set_page(FIRST_WRITABLE_PAGE + i, page);
        }
        tag
    }

    /// UID answered during anticollision.
    pub fn uid(&self) -> Uid {
        self.uid
    }

    /// Number of pages in memory.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Contents of `page`, `None` past the end of memory.
    pub fn page(&self, page: usize) -> Option<[u8; 4]> {
        self.pages.get(page).copied()
    }

    /// Overwrite a page; out-of-range pages are ignored.
    pub fn set_page(&mut self, page: usize, data: [u8; 4]) {
        if let Some(slot) = self.pages.get_mut(page) {
            *slot = data;
        }
    }

    /// Answer one frame the reader sent.
    pub fn respond(&mut self, frame: &[u8]) -> Reply {
        match frame {
            [PICC_REQUEST_IDLE] | [PICC_WAKE_UP] => Reply::bytes(ATQA.to_vec()),
            [PICC_ANTICOLLISION_CL1, PICC_ANTICOLLISION_NVB] => {
                let mut out = self.uid.as_bytes().to_vec();
                out.push(self.uid.bcc());
                Reply::bytes(out)
            }
            [PICC_READ_PAGE, page, _, _] if crc_a_matches(frame) => self.read(*page as usize),
            [PICC_WRITE_PAGE, page, d0, d1, d2, d3, _, _] if crc_a_matches(frame) => {
                self.write(*page as usize, [*d0, *d1, *d2, *d3])
            }
            _ => Reply::Silent,
        }
    }

    fn read(&self, page: usize) -> Reply {
        if page >= self.pages.len() {
            return nak();
        }
        // READ returns four pages, wrapping at the end of memory, plus CRC_A
        let mut out = Vec::with_capacity(4 * PAGE_SIZE + 2);
        for i in 0..4 {
            out.extend_from_slice(&self.pages[(page + i) % self.pages.len()]);
        }
        let crc = crc_a(&out);
        out.extend_from_slice(&crc);
        Reply::bytes(out)
    }

    fn write(&mut self, page: usize, data: [u8; 4]) -> Reply {
        if page < FIRST_WRITABLE_PAGE || page >= self.pages.len() {
            return nak();
        }
        self.pages[page] = data;
        Reply::Data {
            bytes: vec![ACK],
            last_bits: 4,
        }
    }
}

fn nak() -> Reply {
    Reply::Data {
        bytes: vec![NAK],
        last_bits: 4,
    }
}
