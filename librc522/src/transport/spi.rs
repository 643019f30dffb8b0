// librc522/src/transport/spi.rs
#![cfg(feature = "hal")]

//! SPI transport on top of `embedded-hal` 1.0.
//!
//! Chip select is driven by hand around every register access so that each
//! access is exactly one framed transaction: address byte, then value (write)
//! or a dummy byte clocked to receive the value (read). The bus must be
//! configured for SPI mode 0, MSB first, 8-bit words.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::chip::Register;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Dummy byte clocked out while reading a register
const DUMMY: u8 = 0x00;

/// Register transport over an SPI bus with a manually driven chip select.
pub struct SpiTransport<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> SpiTransport<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    /// Take ownership of the bus and the chip-select pin.
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Give back the bus and the chip-select pin.
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }

    fn with_cs_low<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut SPI) -> std::result::Result<T, SPI::Error>,
    {
        self.cs.set_low().map_err(pin_error)?;
        let result = f(&mut self.spi)
            .and_then(|v| self.spi.flush().map(|_| v))
            .map_err(bus_error);
        let released = self.cs.set_high().map_err(pin_error);

        // a bus error wins over a pin error
        let value = result?;
        released?;
        Ok(value)
    }
}

fn bus_error<E: embedded_hal::spi::Error>(e: E) -> Error {
    Error::Bus(format!("spi: {:?}", e.kind()))
}

fn pin_error<E: embedded_hal::digital::Error>(e: E) -> Error {
    Error::Bus(format!("chip select: {:?}", e.kind()))
}

impl<SPI, CS> Transport for SpiTransport<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    fn write_register(&mut self, register: Register, value: u8) -> Result<()> {
        #[cfg(feature = "diagnostics")]
        log::trace!("spi write {:?} <- {:#04x}", register, value);
        self.with_cs_low(|spi| spi.write(&[register.write_address(), value]))
    }

    fn read_register(&mut self, register: Register) -> Result<u8> {
        let value = self.with_cs_low(|spi| {
            let mut buf = [register.read_address(), DUMMY];
            spi.transfer_in_place(&mut buf)?;
            Ok(buf[1])
        })?;
        #[cfg(feature = "diagnostics")]
        log::trace!("spi read {:?} -> {:#04x}", register, value);
        Ok(value)
    }

    fn reset(&mut self) -> Result<()> {
        // idle level for chip select before the first transaction
        self.cs.set_high().map_err(pin_error)
    }
}
