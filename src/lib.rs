//! A two-pass μISA assembler and Harvard-architecture emulator core.
//!
//! This crate holds the shared pieces: the token/operand/instruction
//! model, the lexer and parser, the bit-exact encoder, Harvard memory,
//! and the fetch-decode-execute loop. The `asm` and `vm` binaries
//! (workspace members `uisa-asm`/`uisa-vm`) are thin CLI shells around
//! it.

pub mod cpu;
pub mod encoder;
pub mod error;
pub mod instruction;
pub mod label;
pub mod lexer;
pub mod memory;
pub mod operand;
pub mod parser;
pub mod token;


pub use cpu::{Cpu, ExitSignal};
pub use encoder::{encode, encode_program, LabelResolution};
pub use error::{AssemblerError, EmulatorError, MemoryError, ParserError};
pub use instruction::{Format, Instruction, OpCode};
pub use label::LabelTable;
pub use memory::Memory;
pub use operand::Operand;
pub use parser::{parse, ParsedProgram};

/// Assembles source text straight to an object byte stream, in one
/// call (parse, then encode at the default strict label policy).
pub fn assemble(source: &str) -> Result<Vec<u8>, ParserError> {
    let parsed = parse(source)?;
    encode_program(&parsed.instructions, &parsed.labels, LabelResolution::Strict)
}

/// As [`assemble`], but with the legacy `0xFFFF`-on-missing-label
/// policy instead of a hard failure.
pub fn assemble_legacy(source: &str) -> Result<Vec<u8>, ParserError> {
    let parsed = parse(source)?;
    encode_program(&parsed.instructions, &parsed.labels, LabelResolution::Legacy)
}
