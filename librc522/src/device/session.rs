// librc522/src/device/session.rs

use log::{debug, warn};

use crate::device::config::{DATA_WINDOW_PAGES, FIRST_DATA_PAGE, PAD_BYTE};
use crate::device::{Device, Initialized};
use crate::tag::operations::{read_page, write_page};
use crate::tag::text::{decode_latin1, encode_text, pad_to_pages};
use crate::Result;

impl Device<Initialized> {
    /// Read the text stored in pages 4..=7.
    ///
    /// `None` when no tag answers the presence check or the anticollision
    /// probe. Pages that fail to read are skipped, so the result holds
    /// between 0 and 16 characters.
    pub fn read_tag_text(&mut self) -> Result<Option<String>> {
        if self.detect()?.is_none() {
            return Ok(None);
        }

        let mut bytes = Vec::with_capacity(usize::from(DATA_WINDOW_PAGES) * 4);
        for page in FIRST_DATA_PAGE..FIRST_DATA_PAGE + DATA_WINDOW_PAGES {
            match read_page(self, page)? {
                Some(data) => bytes.extend_from_slice(data.as_bytes()),
                None => debug!("page {} unreadable, skipped", page),
            }
        }
        Ok(Some(decode_latin1(&bytes)))
    }

    /// Write `text` from page 4 on, padded with spaces to whole pages.
    ///
    /// Returns the number of page writes issued, or `None` when no tag
    /// answered. Individual page writes are not checked. Page 255 is the
    /// last one addressable; text beyond it is dropped.
    pub fn write_tag_text(&mut self, text: &str) -> Result<Option<usize>> {
        if self.detect()?.is_none() {
            return Ok(None);
        }

        let pages = pad_to_pages(&encode_text(text), PAD_BYTE);
        let mut issued = 0usize;
        for (page, data) in (FIRST_DATA_PAGE..=u8::MAX).zip(pages.iter()) {
            let status = write_page(self, page, *data)?;
            debug!("page {} written: {}", page, status);
            issued += 1;
        }
        if issued < pages.len() {
            warn!(
                "text needs {} pages, stopped after page {}",
                pages.len(),
                u8::MAX
            );
        }
        Ok(Some(issued))
    }
}
