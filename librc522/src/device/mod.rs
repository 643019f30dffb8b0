// librc522/src/device/mod.rs

/// `DeviceBuilder`
pub mod builder;
pub mod config;
/// The type-state `Device` handle
pub mod handle;
mod session;

pub use builder::DeviceBuilder;
pub use config::DeviceConfig;
pub use handle::{Device, Initialized, Uninitialized};
