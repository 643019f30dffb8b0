#[path = "../common/mod.rs"]
mod common;

use librc522::chip::{transceive, PcdCommand, Register};
use librc522::transport::{MockTransport, Reply};
use librc522::utils::Completion;
use librc522::Status;

fn run(mock: &mut MockTransport, frame: &[u8]) -> librc522::chip::Transceived {
    transceive(mock, PcdCommand::Transceive, frame, 2000).unwrap()
}

#[test]
fn success_counts_whole_bytes() {
    let mut mock = MockTransport::new();
    mock.push_reply(Reply::bytes(common::fixtures::sample_uid_bytes().to_vec()));
    let out = run(&mut mock, &[0x93, 0x20]);
    assert_eq!(out.status, Status::Ok);
    assert_eq!(out.valid_bits, 32);
    assert_eq!(out.data, common::fixtures::sample_uid_bytes().to_vec());
}

#[test]
fn partial_last_byte_counts_bits() {
    let mut mock = MockTransport::new();
    mock.push_reply(Reply::Data {
        bytes: vec![0x0A],
        last_bits: 4,
    });
    let out = run(&mut mock, &[0xA2, 0x04]);
    assert_eq!(out.valid_bits, 4);
    assert_eq!(out.data, vec![0x0A]);
}

#[test]
fn silence_is_an_error_with_no_data() {
    let mut mock = MockTransport::new();
    let out = run(&mut mock, &[0x26]);
    assert_eq!(out.status, Status::Error);
    assert!(out.data.is_empty());
    assert_eq!(out.valid_bits, 0);
    assert_eq!(out.completion, Completion::Exhausted);
    let polls = mock.reads().iter().filter(|&&r| r == Register::ComIrq).count();
    assert_eq!(polls, 2000);
    // StartSend is cleared even after a timeout
    assert_eq!(mock.writes().last(), Some(&(Register::BitFraming, 0x00)));
}

#[test]
fn chip_error_flags_discard_fifo() {
    let mut mock = MockTransport::new();
    mock.push_reply(Reply::DataWithErrors {
        bytes: vec![1, 2, 3],
        errors: 0x02,
    });
    let out = run(&mut mock, &[0x26]);
    assert_eq!(out.status, Status::Error);
    assert!(out.data.is_empty());
    assert_eq!(out.valid_bits, 0);
    assert_eq!(out.completion, Completion::Completed);
}

#[test]
fn flags_outside_mask_are_ignored() {
    let mut mock = MockTransport::new();
    // CRCErr (0x04) is not in the error mask
    mock.push_reply(Reply::DataWithErrors {
        bytes: vec![0x44, 0x00],
        errors: 0x04,
    });
    let out = run(&mut mock, &[0x26]);
    assert_eq!(out.status, Status::Ok);
    assert_eq!(out.data, vec![0x44, 0x00]);
}

#[test]
fn long_answer_is_clamped_to_sixteen_bytes() {
    common::helpers::init_logging();
    let mut mock = MockTransport::new();
    let answer: Vec<u8> = (0u8..18).collect();
    mock.push_reply(Reply::bytes(answer.clone()));
    let out = run(&mut mock, &common::fixtures::sealed(&[0x30, 0x04]));
    assert_eq!(out.data, answer[..16].to_vec());
    assert_eq!(out.valid_bits, 18 * 8);
}
