#[path = "../common/mod.rs"]
mod common;

use librc522::transport::{MockTransport, Reply};

#[test]
fn write_ab_sends_single_padded_frame() {
    let mock = MockTransport::with_tag(common::fixtures::blank_tag());
    let mut dev = common::helpers::initialized_mock_device(&mock);
    assert_eq!(dev.write_tag_text("AB").unwrap(), Some(1));

    let frames = mock.frames();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[2], common::fixtures::write_ab_frame());
}

#[test]
fn empty_text_sends_no_page_frames() {
    let mock = MockTransport::with_tag(common::fixtures::blank_tag());
    let mut dev = common::helpers::initialized_mock_device(&mock);
    assert_eq!(dev.write_tag_text("").unwrap(), Some(0));
    assert_eq!(mock.frames(), vec![vec![0x26], vec![0x93, 0x20]]);
}

#[test]
fn no_tag_writes_nothing() {
    let mock = MockTransport::new();
    let mut dev = common::helpers::fast_mock_device(&mock);
    assert_eq!(dev.write_tag_text("hello").unwrap(), None);
    assert_eq!(mock.frames(), vec![vec![0x26]]);
}

#[test]
fn failed_anticollision_writes_nothing() {
    let mock = MockTransport::new();
    mock.push_reply(Reply::bytes(vec![0x44, 0x00]));
    mock.push_reply(Reply::ChipError(0x08));
    let mut dev = common::helpers::initialized_mock_device(&mock);
    assert_eq!(dev.write_tag_text("hello").unwrap(), None);
    assert_eq!(mock.frames().len(), 2);
}

#[test]
fn rejected_pages_are_not_retried() {
    // pages past the end of a tiny tag NAK; the session carries on
    let tag = librc522::transport::SimulatedTag::with_page_count(common::fixtures::sample_uid(), 6);
    let mock = MockTransport::with_tag(tag);
    let mut dev = common::helpers::initialized_mock_device(&mock);
    assert_eq!(dev.write_tag_text("0123456789AB").unwrap(), Some(3));
    assert_eq!(mock.frames().len(), 5);

    let tag = mock.tag().unwrap();
    assert_eq!(tag.page(4), Some(*b"0123"));
    assert_eq!(tag.page(5), Some(*b"4567"));
}

#[test]
fn written_text_reads_back() {
    let mock = MockTransport::with_tag(common::fixtures::tag_with_text(b"################"));
    let mut dev = common::helpers::initialized_mock_device(&mock);
    dev.write_tag_text("café au lait").unwrap();
    assert_eq!(dev.read_tag_text().unwrap().as_deref(), Some("café au lait####"));
}

#[test]
fn overlong_text_is_cut_at_last_page() {
    let mock = MockTransport::with_tag(common::fixtures::blank_tag());
    let mut dev = common::helpers::initialized_mock_device(&mock);
    let text = "z".repeat(2000);
    // pages 4..=255
    assert_eq!(dev.write_tag_text(&text).unwrap(), Some(252));
    assert_eq!(mock.frames().len(), 2 + 252);
    assert_eq!(mock.tag().unwrap().page(4), Some(*b"zzzz"));
}

#[test]
fn overlong_text_without_tag_returns_none() {
    let mock = MockTransport::new();
    let mut dev = common::helpers::fast_mock_device(&mock);
    let text = "z".repeat(1100);
    assert_eq!(dev.write_tag_text(&text).unwrap(), None);
    assert_eq!(mock.frames(), vec![vec![0x26]]);
}
