//! Harvard-style memory: an instruction store and a data store, each
//! independently allocated with its own endian rule (spec.md §4.4, §9
//! "Endianness asymmetry"). Grounded in `src/memory.rs`'s `Storage`
//! trait and doctest-heavy style, split into two concrete, differently
//! endian types instead of one trait behind a single `Endian` alias.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::MemoryError;

/// Default instruction memory size in bytes (256 instructions).
pub const DEFAULT_INSTRUCTION_MEMORY_SIZE: usize = 1024;
/// Default data memory size in bytes.
pub const DEFAULT_DATA_MEMORY_SIZE: usize = 4096;
/// Bytes per instruction word.
pub const WORD_BYTES: usize = 4;

/// Word-addressed, big-endian instruction store.
///
/// # Examples
///
/// ```
/// use uisa::memory::InstructionMemory;
///
/// let mut mem = InstructionMemory::new(8);
/// mem.load(&[0x0C, 0xAB, 0xCD, 0x03]).unwrap();
/// assert_eq!(mem.fetch(0).unwrap(), 0x0CAB_CD03);
/// ```
pub struct InstructionMemory {
    bytes: Vec<u8>,
}

impl InstructionMemory {
    pub fn new(size: usize) -> InstructionMemory {
        InstructionMemory {
            bytes: vec![0; size],
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Copies `program` verbatim into the store starting at offset 0
    /// (spec.md §4.4 "Program loading"). Any shortfall is left as zero,
    /// which decodes as `NOP`. Fails if `program` doesn't fit.
    pub fn load(&mut self, program: &[u8]) -> Result<(), MemoryError> {
        if program.len() > self.bytes.len() {
            return Err(MemoryError::OutOfBounds);
        }
        self.bytes[..program.len()].copy_from_slice(program);
        for byte in &mut self.bytes[program.len()..] {
            *byte = 0;
        }
        Ok(())
    }

    /// Fetches the big-endian 32-bit instruction at word index `i`
    /// (occupying bytes `[4i, 4i+3]`).
    pub fn fetch(&self, word_index: usize) -> Result<u32, MemoryError> {
        let start = word_index
            .checked_mul(WORD_BYTES)
            .ok_or(MemoryError::OutOfBounds)?;
        let end = start.checked_add(WORD_BYTES).ok_or(MemoryError::OutOfBounds)?;
        if end > self.bytes.len() {
            return Err(MemoryError::OutOfBounds);
        }
        Ok(BigEndian::read_u32(&self.bytes[start..end]))
    }
}

/// Byte-addressed, little-endian data store.
///
/// # Examples
///
/// ```
/// use uisa::memory::DataMemory;
///
/// let mut mem = DataMemory::new(16);
/// mem.write_u16(0, 0xABCD).unwrap();
/// assert_eq!(mem.bytes()[0..2], [0xCD, 0xAB]);
/// assert_eq!(mem.read_u16(0).unwrap(), 0xABCD);
/// ```
pub struct DataMemory {
    bytes: Vec<u8>,
}

impl DataMemory {
    pub fn new(size: usize) -> DataMemory {
        DataMemory {
            bytes: vec![0; size],
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// True when `addr` is odd. Misalignment is a warning, not a fatal
    /// condition (spec.md §4.4) — callers decide whether to surface it.
    pub fn is_misaligned(addr: u16) -> bool {
        addr % 2 != 0
    }

    /// Reads the little-endian 16-bit word at byte address `addr`.
    /// Requires `addr + 1 < len()`.
    pub fn read_u16(&self, addr: u16) -> Result<u16, MemoryError> {
        if Self::is_misaligned(addr) {
            eprintln!("warning: misaligned read at data address {addr:#06X}");
        }
        let addr = addr as usize;
        if addr + 1 >= self.bytes.len() {
            return Err(MemoryError::OutOfBounds);
        }
        Ok(LittleEndian::read_u16(&self.bytes[addr..addr + 2]))
    }

    /// Writes `value` as a little-endian 16-bit word at byte address
    /// `addr`: the low byte lands at `addr`, the high byte at `addr+1`.
    pub fn write_u16(&mut self, addr: u16, value: u16) -> Result<(), MemoryError> {
        if Self::is_misaligned(addr) {
            eprintln!("warning: misaligned write at data address {addr:#06X}");
        }
        let addr = addr as usize;
        if addr + 1 >= self.bytes.len() {
            return Err(MemoryError::OutOfBounds);
        }
        LittleEndian::write_u16(&mut self.bytes[addr..addr + 2], value);
        Ok(())
    }
}

/// The CPU's Harvard memory: one instruction store, one data store,
/// exclusively owned, never shared (spec.md §5).
pub struct Memory {
    pub instructions: InstructionMemory,
    pub data: DataMemory,
}

impl Memory {
    pub fn new(instruction_size: usize, data_size: usize) -> Memory {
        Memory {
            instructions: InstructionMemory::new(instruction_size),
            data: DataMemory::new(data_size),
        }
    }
}

impl Default for Memory {
    fn default() -> Memory {
        Memory::new(DEFAULT_INSTRUCTION_MEMORY_SIZE, DEFAULT_DATA_MEMORY_SIZE)
    }
}
