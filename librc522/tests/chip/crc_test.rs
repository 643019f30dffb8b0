#[path = "../common/mod.rs"]
mod common;

use librc522::chip::{calculate_crc, Register};
use librc522::protocol::crc_a;
use librc522::transport::MockTransport;

#[test]
fn coprocessor_agrees_with_software_crc() {
    let mut mock = MockTransport::new();
    let bodies: [&[u8]; 3] = [&[0x30, 0x04], &[0x50, 0x00], &[0xA2, 0x04, 0x41, 0x42, 0x20, 0x20]];
    for body in bodies {
        let r = calculate_crc(&mut mock, body, 255).unwrap();
        assert!(r.completion.is_completed());
        assert_eq!(r.bytes, crc_a(body));
    }
}

#[test]
fn crc_of_halt_fixture() {
    let mut mock = MockTransport::new();
    let r = calculate_crc(&mut mock, &common::fixtures::hex_bytes("50 00"), 255).unwrap();
    assert_eq!(r.bytes, [0x57, 0xCD]);
}

#[test]
fn stalled_coprocessor_still_yields_two_bytes() {
    common::helpers::init_logging();
    let mut mock = MockTransport::new();
    mock.set_crc_stall(true);

    let r = calculate_crc(&mut mock, &[0x30, 0x04], 255).unwrap();
    assert!(!r.completion.is_completed());
    assert_eq!(r.bytes.len(), 2);

    let polls = mock.reads().iter().filter(|&&r| r == Register::DivIrq).count();
    assert_eq!(polls, 255);
    // result registers are read after the poll regardless
    let tail: Vec<Register> = mock.reads().into_iter().rev().take(2).collect();
    assert_eq!(tail, vec![Register::CrcResultH, Register::CrcResultL]);
}
