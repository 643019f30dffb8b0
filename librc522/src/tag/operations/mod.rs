/// REQA and anticollision
pub mod presence;
/// Page READ
pub mod read;
/// Page WRITE
pub mod write;

pub use presence::{anticollide, detect, request};
pub use read::read_page;
pub use write::write_page;

use crate::device::{Device, Initialized};
use crate::protocol::{Frame, PiccCommand};
use crate::Result;

/// Encode `cmd` and, where the tag expects one, append the CRC computed by
/// the chip's coprocessor.
pub(crate) fn build_frame(device: &mut Device<Initialized>, cmd: PiccCommand) -> Result<Vec<u8>> {
    let payload = cmd.encode();
    if !cmd.needs_crc() {
        return Ok(payload);
    }
    let crc = device.calculate_crc(&payload)?;
    Ok(Frame::seal(&payload, crc.bytes))
}
