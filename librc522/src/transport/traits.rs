// librc522/src/transport/traits.rs

use crate::chip::Register;
use crate::Result;

/// Transport trait abstracts register I/O away from protocol/device logic.
///
/// One call addresses exactly one register. Implementations own the bus
/// framing (chip-select around every access, address byte encoding); the
/// protocol layer never sees it.
pub trait Transport {
    /// Write a single register
    fn write_register(&mut self, register: Register, value: u8) -> Result<()>;

    /// Read a single register
    fn read_register(&mut self, register: Register) -> Result<u8>;

    /// Configure the bus before the chip is reset (pin mux, SPI format).
    /// Transports that need no setup keep the default no-op.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write_register(&mut self, register: Register, value: u8) -> Result<()> {
        (**self).write_register(register, value)
    }

    fn read_register(&mut self, register: Register) -> Result<u8> {
        (**self).read_register(register)
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}
