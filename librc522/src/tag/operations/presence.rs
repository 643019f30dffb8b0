use log::debug;

use crate::chip::PcdCommand;
use crate::constants::{BIT_FRAMING_SHORT_FRAME, PICC_REQUEST_IDLE};
use crate::device::{Device, Initialized};
use crate::protocol::PiccCommand;
use crate::tag::Tag;
use crate::types::Status;
use crate::Result;

/// Send a request (`mode` is the op-code, normally REQA) as a short frame.
/// Returns the transceive status and the valid-bit count of the answer.
pub fn request(device: &mut Device<Initialized>, mode: u8) -> Result<(Status, usize)> {
    device.set_bit_framing(BIT_FRAMING_SHORT_FRAME)?;
    let out = device.transceive(PcdCommand::Transceive, &[mode])?;
    Ok((out.status, out.valid_bits))
}

/// Cascade level 1 anticollision probe. The answer is returned as received;
/// no BCC check and no collision resolution.
pub fn anticollide(device: &mut Device<Initialized>) -> Result<(Status, Vec<u8>)> {
    device.set_bit_framing(0)?;
    let out = device.transceive(PcdCommand::Transceive, &PiccCommand::Anticollision.encode())?;
    Ok((out.status, out.data))
}

/// Gate for every session: presence check, then anticollision.
pub fn detect(device: &mut Device<Initialized>) -> Result<Option<Tag>> {
    let (status, atqa_bits) = request(device, PICC_REQUEST_IDLE)?;
    if !status.is_ok() {
        debug!("no tag answered the presence request");
        return Ok(None);
    }

    let (status, response) = anticollide(device)?;
    if !status.is_ok() {
        debug!("anticollision probe failed");
        return Ok(None);
    }

    let tag = Tag::new(response, atqa_bits);
    match tag.uid() {
        Some(uid) => debug!("tag {} in field", uid.to_hex()),
        None => debug!("tag answered with a short identifier ({} bytes)", tag.response().len()),
    }
    Ok(Some(tag))
}
