#[path = "../common/mod.rs"]
mod common;

use librc522::protocol::crc::{crc_a, crc_a_matches, CRC_A_PRESET};

#[test]
fn known_vectors() {
    assert_eq!(crc_a(&[]), CRC_A_PRESET.to_le_bytes());
    assert_eq!(crc_a(&[0x00, 0x00]), [0xA0, 0x1E]);
    assert_eq!(crc_a(&[0x30, 0x00]), [0x02, 0xA8]);
    assert_eq!(crc_a(&[0x30, 0x04]), [0x26, 0xEE]);
}

#[test]
fn write_ab_fixture_is_self_consistent() {
    assert!(crc_a_matches(&common::fixtures::write_ab_frame()));
}

#[test]
fn corrupted_frame_fails_check() {
    let mut frame = common::fixtures::sealed(&[0x30, 0x04]);
    frame[1] ^= 0x01;
    assert!(!crc_a_matches(&frame));
    assert!(!crc_a_matches(&[0x63]));
}
