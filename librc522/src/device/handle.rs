// librc522/src/device/handle.rs

use std::marker::PhantomData;

use log::debug;

use crate::chip::{self, CrcResult, PcdCommand, Register, Transceived};
use crate::device::config::DeviceConfig;
use crate::tag::Tag;
use crate::transport::Transport;
use crate::Result;

/// Type-state marker: transport attached, chip not yet reset.
pub struct Uninitialized;
/// Type-state marker: chip soft-reset, tag operations available.
pub struct Initialized;

/// Device handle that enforces initialization state at compile time.
///
/// The handle owns the transport, so the chip is reachable only through
/// it. Every operation on an initialized device takes `&mut self`; one
/// read or write session at a time is guaranteed by the borrow.
pub struct Device<State = Uninitialized> {
    transport: Box<dyn Transport>,
    config: DeviceConfig,
    _state: PhantomData<State>,
}

impl<State> Device<State> {
    /// Poll budgets in use.
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Give the transport back, ending the handle.
    pub fn into_transport(self) -> Box<dyn Transport> {
        self.transport
    }
}

impl Device<Uninitialized> {
    /// Create a Device from an existing Transport instance with the default
    /// configuration.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::with_config(transport, DeviceConfig::default())
    }

    /// Same, with explicit poll budgets.
    pub fn with_config(transport: Box<dyn Transport>, config: DeviceConfig) -> Self {
        Self {
            transport,
            config,
            _state: PhantomData,
        }
    }

    /// Configure the bus and soft-reset the chip. Returns an initialized
    /// Device on success; nothing is read back from the chip.
    pub fn initialize(self) -> Result<Device<Initialized>> {
        let mut this = self;
        this.transport.reset()?;
        this.transport
            .write_register(Register::Command, PcdCommand::SoftReset.code())?;
        debug!("mfrc522 soft reset issued");

        Ok(Device {
            transport: this.transport,
            config: this.config,
            _state: PhantomData,
        })
    }
}

impl Device<Initialized> {
    /// Run one frame through the transceive engine.
    pub fn transceive(&mut self, command: PcdCommand, frame: &[u8]) -> Result<Transceived> {
        chip::transceive(
            &mut *self.transport,
            command,
            frame,
            self.config.transceive_poll_budget,
        )
    }

    /// Compute a CRC_A with the chip's coprocessor.
    pub fn calculate_crc(&mut self, data: &[u8]) -> Result<CrcResult> {
        chip::calculate_crc(&mut *self.transport, data, self.config.crc_poll_budget)
    }

    /// Chip firmware version (0x91 / 0x92 for genuine parts). Handy as a
    /// wiring check right after `initialize`.
    pub fn version(&mut self) -> Result<u8> {
        self.transport.read_register(Register::Version)
    }

    /// Presence check followed by the anticollision probe.
    pub fn detect(&mut self) -> Result<Option<Tag>> {
        crate::tag::operations::detect(self)
    }

    pub(crate) fn set_bit_framing(&mut self, value: u8) -> Result<()> {
        self.transport.write_register(Register::BitFraming, value)
    }
}
