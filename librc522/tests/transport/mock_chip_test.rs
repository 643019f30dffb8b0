#[path = "../common/mod.rs"]
mod common;

use librc522::chip::{PcdCommand, Register};
use librc522::transport::{MockTransport, Reply, Transport};

#[test]
fn clones_share_the_chip() {
    let mock = MockTransport::new();
    let mut handle = mock.clone();
    handle.write_register(Register::ComIEn, 0xF7).unwrap();
    assert_eq!(mock.writes(), vec![(Register::ComIEn, 0xF7)]);
    assert_eq!(mock.access_count(), 1);
}

#[test]
fn fifo_level_tracks_pushed_bytes() {
    let mut mock = MockTransport::new();
    mock.write_register(Register::FifoData, 1).unwrap();
    mock.write_register(Register::FifoData, 2).unwrap();
    assert_eq!(mock.read_register(Register::FifoLevel).unwrap(), 2);
    mock.write_register(Register::FifoLevel, 0x80).unwrap();
    assert_eq!(mock.read_register(Register::FifoLevel).unwrap(), 0);
}

#[test]
fn start_send_without_transceive_command_sends_nothing() {
    let mut mock = MockTransport::new();
    mock.push_reply(Reply::bytes(vec![1]));
    mock.write_register(Register::FifoData, 0x26).unwrap();
    mock.write_register(Register::BitFraming, 0x80).unwrap();
    assert!(mock.frames().is_empty());

    mock.write_register(Register::Command, PcdCommand::Transceive.code())
        .unwrap();
    mock.write_register(Register::BitFraming, 0x80).unwrap();
    assert_eq!(mock.frames(), vec![vec![0x26]]);
    assert_eq!(mock.read_register(Register::ComIrq).unwrap() & 0x01, 0x01);
}

#[test]
fn soft_reset_keeps_version_and_tag() {
    let mut mock = MockTransport::with_tag(common::fixtures::blank_tag());
    mock.set_version(0x91);
    mock.write_register(Register::Command, PcdCommand::SoftReset.code())
        .unwrap();
    assert_eq!(mock.soft_resets(), 1);
    assert_eq!(mock.read_register(Register::Version).unwrap(), 0x91);
    assert!(mock.tag().is_some());
}
