// librc522/src/chip/crc.rs

use log::warn;

use crate::chip::{PcdCommand, Register};
use crate::constants::{DIV_IRQ_CRC, FIFO_FLUSH};
use crate::transport::Transport;
use crate::utils::{spin_until, Completion};
use crate::Result;

/// CRC bytes read back from the coprocessor, low byte first.
///
/// The bytes are always present. `completion` tells whether the CRC-done
/// bit was seen; after `Exhausted` the bytes are whatever the result
/// registers held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrcResult {
    /// CRC_L, CRC_H
    pub bytes: [u8; 2],
    /// Whether the CRC-done bit was seen
    pub completion: Completion,
}

/// Run `data` through the chip's CRC coprocessor.
///
/// Polls DivIrq for at most `budget` reads, then reads CRCResultL and
/// CRCResultH whether or not the poll succeeded.
pub fn calculate_crc(
    transport: &mut dyn Transport,
    data: &[u8],
    budget: u32,
) -> Result<CrcResult> {
    transport.write_register(Register::DivIrq, 0x00)?;
    transport.write_register(Register::FifoLevel, FIFO_FLUSH)?;
    for &b in data {
        transport.write_register(Register::FifoData, b)?;
    }
    transport.write_register(Register::Command, PcdCommand::CalcCrc.code())?;

    let completion = spin_until(budget, || {
        Ok(transport.read_register(Register::DivIrq)? & DIV_IRQ_CRC != 0)
    })?;
    if completion == Completion::Exhausted {
        warn!("crc coprocessor did not finish within {} polls", budget);
    }

    let low = transport.read_register(Register::CrcResultL)?;
    let high = transport.read_register(Register::CrcResultH)?;
    Ok(CrcResult {
        bytes: [low, high],
        completion,
    })
}
