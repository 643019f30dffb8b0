// librc522/src/transport/mock.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::chip::{PcdCommand, Register};
use crate::constants::{
    BIT_FRAMING_START_SEND, COM_IRQ_DONE, CONTROL_RX_LAST_BITS, DIV_IRQ_CRC, FIFO_FLUSH,
};
use crate::protocol::crc_a;
use crate::transport::tag_model::SimulatedTag;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Chip FIFO capacity
const FIFO_CAPACITY: usize = 64;

/// Value reported by the Version register (MFRC522 v2.0)
pub const DEFAULT_VERSION: u8 = 0x92;

/// ComIrq bits raised alongside the polled bit
const COM_IRQ_RX: u8 = 0x20;
const COM_IRQ_ERR: u8 = 0x02;

/// What the air interface delivers for one transceive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Bytes land in the FIFO; `last_bits` is the RxLastBits value (0 = whole byte)
    Data {
        /// Bytes placed in the FIFO
        bytes: Vec<u8>,
        /// RxLastBits
        last_bits: u8,
    },
    /// Bytes land in the FIFO together with Error register flags
    DataWithErrors {
        /// Bytes placed in the FIFO
        bytes: Vec<u8>,
        /// Error register value
        errors: u8,
    },
    /// Exchange finishes with the given Error register flags and no data
    ChipError(u8),
    /// Nothing answers; the completion bit never rises
    Silent,
}

impl Reply {
    /// Whole-byte answer
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Data {
            bytes: bytes.into(),
            last_bits: 0,
        }
    }
}

#[derive(Debug)]
struct MockChip {
    registers: [u8; 0x40],
    fifo: VecDeque<u8>,
    replies: VecDeque<Reply>,
    tag: Option<SimulatedTag>,
    crc_stall: bool,
    bus_failure: bool,
    transceive_armed: bool,
    writes: Vec<(Register, u8)>,
    reads: Vec<Register>,
    frames: Vec<Vec<u8>>,
    resets: usize,
    soft_resets: usize,
}

impl Default for MockChip {
    fn default() -> Self {
        let mut registers = [0u8; 0x40];
        registers[Register::Version.address() as usize] = DEFAULT_VERSION;
        Self {
            registers,
            fifo: VecDeque::new(),
            replies: VecDeque::new(),
            tag: None,
            crc_stall: false,
            bus_failure: false,
            transceive_armed: false,
            writes: Vec::new(),
            reads: Vec::new(),
            frames: Vec::new(),
            resets: 0,
            soft_resets: 0,
        }
    }
}

impl MockChip {
    fn reg(&self, register: Register) -> u8 {
        self.registers[register.address() as usize]
    }

    fn set_reg(&mut self, register: Register, value: u8) {
        self.registers[register.address() as usize] = value;
    }

    fn write(&mut self, register: Register, value: u8) {
        self.writes.push((register, value));
        match register {
            Register::Command => {
                self.set_reg(register, value);
                match PcdCommand::from_code(value) {
                    Some(PcdCommand::CalcCrc) => self.run_crc(),
                    Some(PcdCommand::Transceive) => {
                        self.transceive_armed = true;
                        self.set_reg(Register::ComIrq, 0);
                    }
                    Some(PcdCommand::SoftReset) => self.soft_reset(),
                    Some(PcdCommand::Idle) | None => self.transceive_armed = false,
                }
            }
            Register::FifoLevel => {
                if value & FIFO_FLUSH != 0 {
                    self.fifo.clear();
                }
            }
            Register::FifoData => {
                if self.fifo.len() < FIFO_CAPACITY {
                    self.fifo.push_back(value);
                }
            }
            Register::BitFraming => {
                self.set_reg(register, value);
                if value & BIT_FRAMING_START_SEND != 0 && self.transceive_armed {
                    self.exchange();
                }
            }
            Register::Version => {}
            _ => self.set_reg(register, value),
        }
    }

    fn read(&mut self, register: Register) -> u8 {
        self.reads.push(register);
        match register {
            Register::FifoData => self.fifo.pop_front().unwrap_or(0),
            Register::FifoLevel => self.fifo.len() as u8,
            _ => self.reg(register),
        }
    }

    fn run_crc(&mut self) {
        let data: Vec<u8> = self.fifo.drain(..).collect();
        if self.crc_stall {
            return;
        }
        let [low, high] = crc_a(&data);
        self.set_reg(Register::CrcResultL, low);
        self.set_reg(Register::CrcResultH, high);
        let irq = self.reg(Register::DivIrq);
        self.set_reg(Register::DivIrq, irq | DIV_IRQ_CRC);
    }

    fn soft_reset(&mut self) {
        let version = self.reg(Register::Version);
        self.registers = [0u8; 0x40];
        self.set_reg(Register::Version, version);
        self.fifo.clear();
        self.transceive_armed = false;
        self.soft_resets += 1;
    }

    fn exchange(&mut self) {
        self.transceive_armed = false;
        let frame: Vec<u8> = self.fifo.drain(..).collect();
        self.frames.push(frame.clone());

        let reply = match self.replies.pop_front() {
            Some(r) => r,
            None => match self.tag.as_mut() {
                Some(tag) => tag.respond(&frame),
                None => Reply::Silent,
            },
        };

        match reply {
            Reply::Data { bytes, last_bits } => self.deliver(bytes, last_bits, 0),
            Reply::DataWithErrors { bytes, errors } => self.deliver(bytes, 0, errors),
            Reply::ChipError(errors) => {
                self.set_reg(Register::Error, errors);
                self.set_reg(Register::ComIrq, COM_IRQ_DONE | COM_IRQ_ERR);
            }
            Reply::Silent => {}
        }
    }

    fn deliver(&mut self, bytes: Vec<u8>, last_bits: u8, errors: u8) {
        self.fifo.clear();
        self.fifo.extend(bytes.into_iter().take(FIFO_CAPACITY));
        let control = self.reg(Register::Control) & !CONTROL_RX_LAST_BITS;
        self.set_reg(Register::Control, control | (last_bits & CONTROL_RX_LAST_BITS));
        self.set_reg(Register::Error, errors);
        self.set_reg(Register::ComIrq, COM_IRQ_DONE | COM_IRQ_RX);
    }
}

/// Mock transport for unit tests: a register-level model of the MFRC522.
///
/// It keeps a FIFO, runs the CRC coprocessor (real CRC_A), and answers
/// transceives from scripted [`Reply`] values first, then from an optional
/// [`SimulatedTag`], else stays silent. Every register access is recorded.
///
/// Clones share the same chip, so a test can hand one clone to a `Device`
/// and keep another for assertions.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    chip: Rc<RefCell<MockChip>>,
}

impl MockTransport {
    /// Chip with no tag in the field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chip with `tag` already in the field.
    pub fn with_tag(tag: SimulatedTag) -> Self {
        let mock = Self::new();
        mock.set_tag(Some(tag));
        mock
    }

    /// Place a tag in (or remove it from) the field.
    pub fn set_tag(&self, tag: Option<SimulatedTag>) {
        self.chip.borrow_mut().tag = tag;
    }

    /// Snapshot of the tag currently in the field.
    pub fn tag(&self) -> Option<SimulatedTag> {
        self.chip.borrow().tag.clone()
    }

    /// Queue a scripted answer for the next transceive.
    pub fn push_reply(&self, reply: Reply) {
        self.chip.borrow_mut().replies.push_back(reply);
    }

    /// Stop the CRC coprocessor from ever signalling completion.
    pub fn set_crc_stall(&self, stall: bool) {
        self.chip.borrow_mut().crc_stall = stall;
    }

    /// Make every subsequent register access fail with `Error::Bus`.
    pub fn set_bus_failure(&self, fail: bool) {
        self.chip.borrow_mut().bus_failure = fail;
    }

    /// Value the Version register reports.
    pub fn set_version(&self, version: u8) {
        self.chip.borrow_mut().set_reg(Register::Version, version);
    }

    /// Register writes so far, in order.
    pub fn writes(&self) -> Vec<(Register, u8)> {
        self.chip.borrow().writes.clone()
    }

    /// Register reads so far, in order.
    pub fn reads(&self) -> Vec<Register> {
        self.chip.borrow().reads.clone()
    }

    /// Total register accesses (reads + writes) so far.
    pub fn access_count(&self) -> usize {
        let chip = self.chip.borrow();
        chip.writes.len() + chip.reads.len()
    }

    /// Frames that went out over the air, in order.
    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.chip.borrow().frames.clone()
    }

    /// Number of transport-level resets.
    pub fn resets(&self) -> usize {
        self.chip.borrow().resets
    }

    /// Number of SoftReset commands the chip executed.
    pub fn soft_resets(&self) -> usize {
        self.chip.borrow().soft_resets
    }

    /// Forget recorded accesses and frames; chip and tag state are kept.
    pub fn clear_log(&self) {
        let mut chip = self.chip.borrow_mut();
        chip.writes.clear();
        chip.reads.clear();
        chip.frames.clear();
    }
}

impl Transport for MockTransport {
    fn write_register(&mut self, register: Register, value: u8) -> Result<()> {
        let mut chip = self.chip.borrow_mut();
        if chip.bus_failure {
            return Err(Error::Bus("mock bus failure".into()));
        }
        chip.write(register, value);
        Ok(())
    }

    fn read_register(&mut self, register: Register) -> Result<u8> {
        let mut chip = self.chip.borrow_mut();
        if chip.bus_failure {
            return Err(Error::Bus("mock bus failure".into()));
        }
        Ok(chip.read(register))
    }

    fn reset(&mut self) -> Result<()> {
        // Recorded accesses are kept so tests can check the init sequence.
        self.chip.borrow_mut().resets += 1;
        Ok(())
    }
}
