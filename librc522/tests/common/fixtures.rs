// fixtures.rs: commonly used UIDs, page contents and expected frames

use librc522::protocol::crc_a;
use librc522::transport::SimulatedTag;
use librc522::types::Uid;

pub fn sample_uid_bytes() -> [u8; 4] {
    [0x04, 0xA1, 0xB2, 0xC3]
}

pub fn sample_uid() -> Uid {
    Uid::from_bytes(sample_uid_bytes())
}

/// Sixteen printable characters, exactly filling pages 4..=7.
pub const SIXTEEN_CHARS: &[u8; 16] = b"librc522 rocks!!";

pub fn tag_with_text(text: &[u8]) -> SimulatedTag {
    SimulatedTag::with_text(sample_uid(), text)
}

pub fn blank_tag() -> SimulatedTag {
    SimulatedTag::new(sample_uid())
}

/// Decode a hex fixture string ("a2 04 41 ...").
pub fn hex_bytes(s: &str) -> Vec<u8> {
    let compact: String = s.split_whitespace().collect();
    hex::decode(compact).expect("valid hex fixture")
}

/// A command body followed by its CRC_A.
pub fn sealed(body: &[u8]) -> Vec<u8> {
    let mut out = body.to_vec();
    out.extend_from_slice(&crc_a(body));
    out
}

/// Write frame for "AB" at page 4, as it must appear on the air.
pub fn write_ab_frame() -> Vec<u8> {
    hex_bytes("a2 04 41 42 20 20 c4 29")
}
