#[path = "../common/mod.rs"]
mod common;

use librc522::transport::{MockTransport, Reply};

#[test]
fn detect_reports_uid_from_simulated_tag() {
    let mock = MockTransport::with_tag(common::fixtures::blank_tag());
    let mut dev = common::helpers::initialized_mock_device(&mock);
    let tag = dev.detect().unwrap().unwrap();
    assert_eq!(tag.uid(), Some(common::fixtures::sample_uid()));
    assert_eq!(tag.atqa_bits(), 16);
    assert_eq!(mock.frames(), vec![vec![0x26], vec![0x93, 0x20]]);
}

#[test]
fn bad_bcc_is_not_rejected() {
    let mock = MockTransport::new();
    mock.push_reply(Reply::bytes(vec![0x44, 0x00]));
    mock.push_reply(Reply::bytes(vec![0x04, 0xA1, 0xB2, 0xC3, 0x00]));
    let mut dev = common::helpers::initialized_mock_device(&mock);
    let tag = dev.detect().unwrap().unwrap();
    assert_eq!(tag.bcc_matches(), Some(false));
}

#[test]
fn removed_tag_is_not_detected() {
    let mock = MockTransport::with_tag(common::fixtures::blank_tag());
    let mut dev = common::helpers::fast_mock_device(&mock);
    assert!(dev.detect().unwrap().is_some());
    mock.set_tag(None);
    assert!(dev.detect().unwrap().is_none());
}
