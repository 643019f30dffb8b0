use log::debug;

use crate::chip::PcdCommand;
use crate::device::{Device, Initialized};
use crate::protocol::PiccCommand;
use crate::tag::operations::build_frame;
use crate::types::{PageData, Status};
use crate::Result;

/// Write one page and report the transceive status.
///
/// The status only says whether the chip saw a clean answer; the 4-bit
/// ACK/NAK itself is not decoded.
pub fn write_page(device: &mut Device<Initialized>, page: u8, data: PageData) -> Result<Status> {
    let frame = build_frame(device, PiccCommand::WritePage { page, data })?;
    let out = device.transceive(PcdCommand::Transceive, &frame)?;
    debug!("write page {} [{}]: {}", page, data.to_hex(), out.status);
    Ok(out.status)
}
