// librc522/src/constants.rs
//! Common protocol constants used across the crate

/// PICC REQA (request idle) op-code, sent as a short frame
pub const PICC_REQUEST_IDLE: u8 = 0x26;

/// Cascade level 1 SELECT op-code and the NVB byte for a bare anticollision probe
pub const PICC_ANTICOLLISION_CL1: u8 = 0x93;
/// NVB byte: two bytes sent, no UID bits
pub const PICC_ANTICOLLISION_NVB: u8 = 0x20;

/// NTAG READ / WRITE op-codes
pub const PICC_READ_PAGE: u8 = 0x30;
/// NTAG WRITE op-code (one page)
pub const PICC_WRITE_PAGE: u8 = 0xA2;

/// Maximum number of bytes harvested from the FIFO after a transceive
pub const MAX_RECEIVE_LEN: usize = 16;

/// Size of one tag memory page
pub const PAGE_SIZE: usize = 4;

/// Interrupt enable mask written before every transceive (IRqInv | 0x77)
pub const COM_IEN_MASK: u8 = 0x77 | 0x80;

/// ComIrq bit polled for transceive completion
pub const COM_IRQ_DONE: u8 = 0x01;

/// DivIrq bit polled for CRC coprocessor completion
pub const DIV_IRQ_CRC: u8 = 0x04;

/// Error register bits treated as a failed exchange:
/// BufferOvfl, CollErr, ParityErr and ProtocolErr (CRCErr is not checked)
pub const ERROR_MASK: u8 = 0x1B;

/// FIFOLevel FlushBuffer bit
pub const FIFO_FLUSH: u8 = 0x80;

/// BitFraming StartSend bit
pub const BIT_FRAMING_START_SEND: u8 = 0x80;

/// BitFraming value for a 7-bit final byte (REQA short frame)
pub const BIT_FRAMING_SHORT_FRAME: u8 = 0x07;

/// Control register RxLastBits field
pub const CONTROL_RX_LAST_BITS: u8 = 0x07;

/// Transceive status codes as reported to callers
pub const STATUS_OK: u8 = 0;
/// Status code of a failed exchange
pub const STATUS_ERROR: u8 = 2;
