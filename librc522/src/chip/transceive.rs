// librc522/src/chip/transceive.rs

use log::{debug, warn};

use crate::chip::{PcdCommand, Register};
use crate::constants::{
    BIT_FRAMING_START_SEND, COM_IEN_MASK, COM_IRQ_DONE, CONTROL_RX_LAST_BITS, ERROR_MASK,
    FIFO_FLUSH, MAX_RECEIVE_LEN,
};
use crate::transport::Transport;
use crate::types::Status;
use crate::utils::{bytes_to_hex_spaced, spin_until, Completion};
use crate::Result;

/// Result of one send/receive exchange.
///
/// When `status` is `Status::Error`, `data` is empty and `valid_bits` is 0.
/// `completion` records whether the completion poll saw the interrupt bit;
/// an error with `Completed` means the chip reported a collision, CRC,
/// parity or overflow error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transceived {
    /// `Status::Ok` only when the chip finished without flagged errors
    pub status: Status,
    /// Bytes harvested from the FIFO, at most 16
    pub data: Vec<u8>,
    /// Received bit count, including a partial last byte
    pub valid_bits: usize,
    /// Whether the completion poll saw ComIrq bit 0
    pub completion: Completion,
}

impl Transceived {
    fn failed(completion: Completion) -> Self {
        Self {
            status: Status::Error,
            data: Vec::new(),
            valid_bits: 0,
            completion,
        }
    }

    /// Shorthand for `status.is_ok()`.
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}

/// Send `frame` with `command` and harvest the chip's answer.
///
/// Every over-the-air exchange goes through here exactly once. The
/// completion bit is polled at most `budget` times; StartSend is cleared
/// afterwards on both paths.
pub fn transceive(
    transport: &mut dyn Transport,
    command: PcdCommand,
    frame: &[u8],
    budget: u32,
) -> Result<Transceived> {
    transport.write_register(Register::ComIEn, COM_IEN_MASK)?;
    transport.write_register(Register::Command, PcdCommand::Idle.code())?;
    transport.write_register(Register::FifoLevel, FIFO_FLUSH)?;
    for &b in frame {
        transport.write_register(Register::FifoData, b)?;
    }
    transport.write_register(Register::Command, command.code())?;
    transport.write_register(Register::BitFraming, BIT_FRAMING_START_SEND)?;

    let completion = spin_until(budget, || {
        Ok(transport.read_register(Register::ComIrq)? & COM_IRQ_DONE != 0)
    })?;
    transport.write_register(Register::BitFraming, 0)?;

    if completion == Completion::Exhausted {
        debug!(
            "transceive [{}]: no answer within {} polls",
            bytes_to_hex_spaced(frame),
            budget
        );
        return Ok(Transceived::failed(completion));
    }

    let errors = transport.read_register(Register::Error)?;
    if errors & ERROR_MASK != 0 {
        debug!(
            "transceive [{}]: chip error flags {:#04x}",
            bytes_to_hex_spaced(frame),
            errors
        );
        return Ok(Transceived::failed(completion));
    }

    let level = transport.read_register(Register::FifoLevel)? as usize;
    let last_bits = (transport.read_register(Register::Control)? & CONTROL_RX_LAST_BITS) as usize;
    let valid_bits = if last_bits != 0 {
        level.saturating_sub(1) * 8 + last_bits
    } else {
        level * 8
    };

    let n = if level > MAX_RECEIVE_LEN {
        warn!(
            "fifo holds {} bytes, harvesting the first {}",
            level, MAX_RECEIVE_LEN
        );
        MAX_RECEIVE_LEN
    } else {
        level
    };
    let mut data = Vec::with_capacity(n);
    for _ in 0..n {
        data.push(transport.read_register(Register::FifoData)?);
    }

    Ok(Transceived {
        status: Status::Ok,
        data,
        valid_bits,
        completion,
    })
}
