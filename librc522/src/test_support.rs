//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::device::{Device, DeviceConfig, Initialized};
use crate::transport::mock::{MockTransport, Reply};
use crate::transport::tag_model::SimulatedTag;
use crate::types::Uid;
use crate::Result;

/// UID of the simulated tag used by the fixtures.
#[doc(hidden)]
pub const SAMPLE_UID: [u8; 4] = [0x04, 0xA1, 0xB2, 0xC3];

/// Create and initialize a Device<Initialized> on top of `mock`. The mock is
/// cloned so the caller keeps a handle for assertions; the log is cleared
/// after initialization.
#[doc(hidden)]
pub fn initialized_mock_device(mock: &MockTransport) -> Result<Device<Initialized>> {
    initialized_mock_device_with_config(mock, DeviceConfig::default())
}

/// Like `initialized_mock_device`, with explicit poll budgets.
#[doc(hidden)]
pub fn initialized_mock_device_with_config(
    mock: &MockTransport,
    config: DeviceConfig,
) -> Result<Device<Initialized>> {
    let device = Device::with_config(Box::new(mock.clone()), config).initialize()?;
    mock.clear_log();
    Ok(device)
}

/// Mock with a simulated NTAG holding `text` from page 4.
#[doc(hidden)]
pub fn mock_with_text(text: &[u8]) -> MockTransport {
    MockTransport::with_tag(SimulatedTag::with_text(Uid::from_bytes(SAMPLE_UID), text))
}

/// Push scripted replies onto a MockTransport, in order.
#[doc(hidden)]
pub fn seed_replies(mock: &MockTransport, replies: Vec<Reply>) {
    for r in replies {
        mock.push_reply(r);
    }
}
