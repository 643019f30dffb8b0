// librc522/src/chip/registers.rs

/// SPI address byte flag selecting a register read
const READ_FLAG: u8 = 0x80;

/// Chip registers touched by the driver.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// Starts and stops command execution
    Command = 0x01,
    /// Interrupt request enable bits
    ComIEn = 0x02,
    /// Interrupt request bits
    ComIrq = 0x04,
    /// Interrupt request bits, CRC done among them
    DivIrq = 0x05,
    /// Error flags of the last command
    Error = 0x06,
    /// 64-byte FIFO input and output
    FifoData = 0x09,
    /// Bytes in the FIFO; bit 7 flushes it
    FifoLevel = 0x0A,
    /// RxLastBits lives in bits 2..0
    Control = 0x0C,
    /// StartSend and TxLastBits
    BitFraming = 0x0D,
    /// CRC result, high byte
    CrcResultH = 0x21,
    /// CRC result, low byte
    CrcResultL = 0x22,
    /// Chip version (0x91, 0x92)
    Version = 0x37,
}

impl Register {
    /// Register address, 6 bits
    pub fn address(&self) -> u8 {
        *self as u8
    }

    /// Address byte for a write: address in bits 6..1, bit 7 and bit 0 clear.
    pub fn write_address(&self) -> u8 {
        (self.address() << 1) & 0x7E
    }

    /// Address byte for a read: write address with bit 7 set.
    pub fn read_address(&self) -> u8 {
        self.write_address() | READ_FLAG
    }

    /// Register at a 6-bit address, if the driver knows it.
    pub fn from_address(address: u8) -> Option<Self> {
        match address {
            0x01 => Some(Self::Command),
            0x02 => Some(Self::ComIEn),
            0x04 => Some(Self::ComIrq),
            0x05 => Some(Self::DivIrq),
            0x06 => Some(Self::Error),
            0x09 => Some(Self::FifoData),
            0x0A => Some(Self::FifoLevel),
            0x0C => Some(Self::Control),
            0x0D => Some(Self::BitFraming),
            0x21 => Some(Self::CrcResultH),
            0x22 => Some(Self::CrcResultL),
            0x37 => Some(Self::Version),
            _ => None,
        }
    }
}

/// Commands written to the Command register. Only one runs at a time; a new
/// write supersedes whatever was running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PcdCommand {
    /// Cancel the running command
    Idle,
    /// Run the CRC coprocessor over the FIFO
    CalcCrc,
    /// Send the FIFO, then receive into it
    Transceive,
    /// Reset the chip
    SoftReset,
}

impl PcdCommand {
    /// Value written to the Command register
    pub fn code(&self) -> u8 {
        match self {
            Self::Idle => 0x00,
            Self::CalcCrc => 0x03,
            Self::Transceive => 0x0C,
            Self::SoftReset => 0x0F,
        }
    }

    /// Decode the low nibble of a Command register value
    pub fn from_code(code: u8) -> Option<Self> {
        match code & 0x0F {
            0x00 => Some(Self::Idle),
            0x03 => Some(Self::CalcCrc),
            0x0C => Some(Self::Transceive),
            0x0F => Some(Self::SoftReset),
            _ => None,
        }
    }
}
