// librc522/src/protocol/crc.rs

/// CRC_A preset value (ISO/IEC 14443-3, 0x6363)
pub const CRC_A_PRESET: u16 = 0x6363;

/// Compute CRC_A over `data` in software, low byte first as sent on air.
///
/// The driver itself always asks the chip's coprocessor for CRCs; this is
/// the reference the chip model and the tests check frames against.
pub fn crc_a(data: &[u8]) -> [u8; 2] {
    let crc = data.iter().fold(CRC_A_PRESET, |crc, &b| {
        let mut ch = b ^ (crc as u8);
        ch ^= ch << 4;
        let ch = ch as u16;
        (crc >> 8) ^ (ch << 8) ^ (ch << 3) ^ (ch >> 4)
    });
    crc.to_le_bytes()
}

/// True when the last two bytes of `frame` are the CRC_A of the rest.
pub fn crc_a_matches(frame: &[u8]) -> bool {
    if frame.len() < 2 {
        return false;
    }
    let (body, crc) = frame.split_at(frame.len() - 2);
    crc_a(body) == [crc[0], crc[1]]
}
