// librc522/src/protocol/mod.rs

/// PICC command encoding
pub mod commands;
/// Software CRC_A
pub mod crc;
/// Transmit frame assembly
pub mod frame;

pub use commands::PiccCommand;
pub use crc::crc_a;
pub use frame::Frame;
