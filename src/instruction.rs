//! The μISA instruction set: opcodes, their encoding formats, and the
//! parsed (pre-encoding) [`Instruction`] record.

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};

use crate::operand::Operand;

/// One of the 16 μISA opcodes (spec.md §3), `0x00..0x0F`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum OpCode {
    /// No-op.
    Nop = 0x00,
    /// `R[c] = R[a] + R[b]` (mod 2^16).
    Add = 0x01,
    /// `R[c] = R[a] - R[b]` (mod 2^16).
    Sub = 0x02,
    /// 32-bit product across `(R[c], R[(c+1) mod 16])`.
    Mul = 0x03,
    /// `R[c] = R[a] / R[b]` (unsigned, truncating); fails on `R[b] == 0`.
    Div = 0x04,
    /// `R[c] = 1` if `R[a] >= R[b]` (unsigned), else `0`.
    CmpGe = 0x05,
    /// `R[c] = R[a] >> R[b]` (logical, full 16-bit shift count).
    RShft = 0x06,
    /// `R[c] = R[a] << R[b]`, truncated to 16 bits.
    LShft = 0x07,
    /// `R[c] = R[a] & R[b]`.
    And = 0x08,
    /// `R[c] = R[a] | R[b]`.
    Or = 0x09,
    /// `R[c] = R[a] ^ R[b]`.
    Xor = 0x0A,
    /// `R[c] = MEM16[R[a] + R[b]]`.
    Ld = 0x0B,
    /// `R[dst] = (const[15:8] << 8) | const[7:0]`.
    SetConst = 0x0C,
    /// `MEM16[R[b] + R[c]] = R[a]`.
    St = 0x0D,
    /// Branch-if-nonzero: `IP = target16` if `R[a] != 0`, else fall through.
    Bnz = 0x0E,
    /// `IP = 0`; halt.
    Ready = 0x0F,
}

/// The encoding format an opcode uses (spec.md §3).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Format {
    /// Register triad `src0, src1, dst`.
    F1,
    /// Immediate + register `const16, dst`.
    F2,
    /// Register triad `src0, src1, src2`.
    F3,
    /// Register + 16-bit target `src0, target16`.
    F4,
}

impl OpCode {
    /// Looks up an opcode by its exact lowercase mnemonic.
    pub fn from_mnemonic(mnemonic: &str) -> Option<OpCode> {
        Some(match mnemonic {
            "nop" => OpCode::Nop,
            "add" => OpCode::Add,
            "sub" => OpCode::Sub,
            "mul" => OpCode::Mul,
            "div" => OpCode::Div,
            "cmpge" => OpCode::CmpGe,
            "rshft" => OpCode::RShft,
            "lshft" => OpCode::LShft,
            "and" => OpCode::And,
            "or" => OpCode::Or,
            "xor" => OpCode::Xor,
            "ld" => OpCode::Ld,
            "set_const" => OpCode::SetConst,
            "st" => OpCode::St,
            "bnz" => OpCode::Bnz,
            "ready" => OpCode::Ready,
            _ => return None,
        })
    }

    pub fn format(self) -> Format {
        match self {
            OpCode::Nop
            | OpCode::Add
            | OpCode::Sub
            | OpCode::Mul
            | OpCode::Div
            | OpCode::CmpGe
            | OpCode::RShft
            | OpCode::LShft
            | OpCode::And
            | OpCode::Or
            | OpCode::Xor
            | OpCode::Ld => Format::F1,
            OpCode::SetConst => Format::F2,
            OpCode::St => Format::F3,
            OpCode::Bnz | OpCode::Ready => Format::F4,
        }
    }

    /// Number of operands this opcode's source-level contract requires
    /// (spec.md §4.2's per-instruction contract table). `Nop`/`Ready`
    /// take zero regardless of their F1/F4 format.
    pub fn expected_operand_count(self) -> usize {
        match self {
            OpCode::Nop | OpCode::Ready => 0,
            OpCode::SetConst | OpCode::Bnz => 2,
            _ => 3,
        }
    }

    pub fn byte(self) -> u8 {
        self.to_u8().expect("OpCode always fits in a byte")
    }

    pub fn from_byte(byte: u8) -> Option<OpCode> {
        FromPrimitive::from_u8(byte)
    }
}

/// A fully parsed instruction, prior to label resolution/encoding.
#[derive(Clone, Debug)]
pub struct Instruction {
    pub opcode: OpCode,
    pub operands: Vec<Operand>,
    /// Byte offset in instruction memory; always a multiple of 4.
    pub address: u16,
    /// 1-based source line this instruction was parsed from, for diagnostics.
    pub line: usize,
}

impl Instruction {
    pub fn format(&self) -> Format {
        self.opcode.format()
    }
}
