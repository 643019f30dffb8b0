// librc522/src/chip/mod.rs
//! MFRC522 register map and the two primitives built directly on it: the
//! CRC coprocessor invocation and the transceive engine.

/// CRC coprocessor invocation
pub mod crc;
/// Register map and chip commands
pub mod registers;
/// Send/receive through the FIFO
pub mod transceive;

pub use crc::{calculate_crc, CrcResult};
pub use registers::{PcdCommand, Register};
pub use transceive::{transceive, Transceived};
