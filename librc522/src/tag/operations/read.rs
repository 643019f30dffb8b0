use log::debug;

use crate::chip::PcdCommand;
use crate::constants::PAGE_SIZE;
use crate::device::{Device, Initialized};
use crate::protocol::{Frame, PiccCommand};
use crate::tag::operations::build_frame;
use crate::types::PageData;
use crate::Result;

/// Read one page. `None` when the exchange failed or the tag returned
/// fewer than four bytes; a READ answer carries four pages but only the
/// first is kept.
pub fn read_page(device: &mut Device<Initialized>, page: u8) -> Result<Option<PageData>> {
    let frame = build_frame(device, PiccCommand::ReadPage { page })?;
    let out = device.transceive(PcdCommand::Transceive, &frame)?;
    if !out.is_ok() {
        debug!("read page {}: {}", page, out.status);
        return Ok(None);
    }

    match Frame::take(&out.data, PAGE_SIZE) {
        Ok(bytes) => Ok(Some(PageData::try_from(bytes)?)),
        Err(_) => {
            debug!("read page {}: short answer ({} bytes)", page, out.data.len());
            Ok(None)
        }
    }
}
