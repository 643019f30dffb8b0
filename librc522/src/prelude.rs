// librc522/src/prelude.rs

pub use crate::chip::{PcdCommand, Register};
pub use crate::device::{Device, DeviceBuilder, DeviceConfig};
pub use crate::device::{Initialized, Uninitialized};
pub use crate::protocol::PiccCommand;
pub use crate::tag::Tag;
pub use crate::transport::Transport;
pub use crate::{Error, PageData, Result, Status, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced};
