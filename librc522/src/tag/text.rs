// librc522/src/tag/text.rs

//! Text <-> page bytes. One byte per character, Latin-1.

use log::warn;

use crate::constants::PAGE_SIZE;
use crate::types::PageData;

/// Replacement for characters with no single-byte code
const REPLACEMENT: u8 = b'?';

/// Encode `text` one byte per character. Characters above U+00FF become `?`.
pub fn encode_text(text: &str) -> Vec<u8> {
    let mut lossy = 0usize;
    let out = text
        .chars()
        .map(|c| match u8::try_from(u32::from(c)) {
            Ok(b) => b,
            Err(_) => {
                lossy += 1;
                REPLACEMENT
            }
        })
        .collect();
    if lossy > 0 {
        warn!("{} character(s) outside Latin-1 replaced with '?'", lossy);
    }
    out
}

/// Pad `bytes` with `pad` up to a multiple of the page size and cut it into pages.
pub fn pad_to_pages(bytes: &[u8], pad: u8) -> Vec<PageData> {
    bytes
        .chunks(PAGE_SIZE)
        .map(|chunk| {
            let mut page = [pad; 4];
            page[..chunk.len()].copy_from_slice(chunk);
            PageData::from_bytes(page)
        })
        .collect()
}

/// Each byte becomes the char with that code point.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
