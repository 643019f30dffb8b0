// helpers.rs: device setup shared by the integration tests

use librc522::device::{Device, DeviceConfig, Initialized};
use librc522::transport::MockTransport;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Initialized device over `mock`, with the init traffic cleared from the log.
pub fn initialized_mock_device(mock: &MockTransport) -> Device<Initialized> {
    init_logging();
    librc522::test_support::initialized_mock_device(mock).expect("mock device initializes")
}

/// Same, with small poll budgets so silent-tag paths finish quickly.
pub fn fast_mock_device(mock: &MockTransport) -> Device<Initialized> {
    init_logging();
    let config = DeviceConfig::default()
        .with_crc_poll_budget(8)
        .with_transceive_poll_budget(16);
    librc522::test_support::initialized_mock_device_with_config(mock, config)
        .expect("mock device initializes")
}

pub fn uninitialized(mock: &MockTransport) -> Device {
    Device::new_with_transport(Box::new(mock.clone()))
}
