//! Encodes a parsed [`Instruction`] to its bit-exact 32-bit big-endian
//! word (spec.md §4.3). Grounded in `src/instructions.rs`'s
//! `make_r_instruction`/`make_i_instruction`/`make_j_instruction`
//! bit-mask style, retargeted to the spec's own F1–F4 byte layout.

use crate::error::ParserError;
use crate::instruction::{Format, Instruction};
use crate::label::LabelTable;
use crate::operand::Operand;

/// Behavior when an instruction's label operand is unresolved at encode
/// time (spec.md §9 "Label resolution timing").
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LabelResolution {
    /// `LabelNotFound` is a hard error. The spec's default.
    Strict,
    /// Missing labels silently encode as `0xFFFF`, matching the source's
    /// original (almost certainly buggy) behavior.
    Legacy,
}

impl Default for LabelResolution {
    fn default() -> LabelResolution {
        LabelResolution::Strict
    }
}

/// Encodes one instruction to its four big-endian bytes `[B3 B2 B1 B0]`.
pub fn encode(
    instruction: &Instruction,
    labels: &LabelTable,
    mode: LabelResolution,
) -> Result<[u8; 4], ParserError> {
    let opcode_byte = instruction.opcode.byte();
    let ops = &instruction.operands;

    let bytes = match instruction.format() {
        Format::F1 | Format::F3 => {
            let (a, b, c) = register_triad(ops);
            [opcode_byte, a, b, c]
        }
        Format::F2 => {
            let imm = match ops.first() {
                Some(Operand::Immediate(v)) => *v,
                _ => 0,
            };
            let dst = ops.get(1).and_then(Operand::as_register).unwrap_or(0);
            [opcode_byte, high_byte(imm), low_byte(imm), dst]
        }
        Format::F4 => {
            let src0 = ops.first().and_then(Operand::as_register).unwrap_or(0);
            let target = resolve_target(ops.get(1), labels, mode, instruction.line)?;
            [opcode_byte, src0, high_byte(target), low_byte(target)]
        }
    };

    Ok(bytes)
}

/// Encodes every instruction in program order into the flat, header-less
/// big-endian byte stream §6 describes as the object file format.
pub fn encode_program(
    instructions: &[Instruction],
    labels: &LabelTable,
    mode: LabelResolution,
) -> Result<Vec<u8>, ParserError> {
    let mut bytes = Vec::with_capacity(instructions.len() * 4);
    for instruction in instructions {
        bytes.extend_from_slice(&encode(instruction, labels, mode)?);
    }
    Ok(bytes)
}

fn register_triad(ops: &[Operand]) -> (u8, u8, u8) {
    let get = |i: usize| ops.get(i).and_then(Operand::as_register).unwrap_or(0);
    (get(0), get(1), get(2))
}

fn resolve_target(
    operand: Option<&Operand>,
    labels: &LabelTable,
    mode: LabelResolution,
    line: usize,
) -> Result<u16, ParserError> {
    match operand {
        Some(Operand::Immediate(v)) => Ok(*v),
        Some(Operand::LabelRef(name)) => match labels.resolve(name) {
            Some(addr) => Ok(addr),
            None => match mode {
                LabelResolution::Strict => Err(ParserError::LabelNotFound {
                    line,
                    name: name.clone(),
                }),
                LabelResolution::Legacy => Ok(0xFFFF),
            },
        },
        _ => Ok(0),
    }
}

fn high_byte(value: u16) -> u8 {
    (value >> 8) as u8
}

fn low_byte(value: u16) -> u8 {
    (value & 0xFF) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::OpCode;
    use crate::parser::parse;

    fn only_instruction(source: &str) -> (Instruction, LabelTable) {
        let parsed = parse(source).unwrap();
        (parsed.instructions.into_iter().next().unwrap(), parsed.labels)
    }

    #[test]
    fn set_const_scenario_1() {
        // spec.md §8 scenario 1: set_const 0x1234, R2 -> 0C 12 34 02
        let (instr, labels) = only_instruction("set_const 0x1234, R2\n");
        let bytes = encode(&instr, &labels, LabelResolution::Strict).unwrap();
        assert_eq!(bytes, [0x0C, 0x12, 0x34, 0x02]);
    }

    #[test]
    fn p8_instruction_memory_is_big_endian() {
        let (instr, labels) = only_instruction("set_const 0xABCD, R3\n");
        let bytes = encode(&instr, &labels, LabelResolution::Strict).unwrap();
        assert_eq!(bytes, [0x0C, 0xAB, 0xCD, 0x03]);
    }

    #[test]
    fn f1_register_triad_layout() {
        let (instr, labels) = only_instruction("add R1, R2, R3\n");
        let bytes = encode(&instr, &labels, LabelResolution::Strict).unwrap();
        assert_eq!(bytes, [OpCode::Add.byte(), 1, 2, 3]);
    }

    #[test]
    fn f3_st_register_triad_layout() {
        let (instr, labels) = only_instruction("st R1, R2, R3\n");
        let bytes = encode(&instr, &labels, LabelResolution::Strict).unwrap();
        assert_eq!(bytes, [OpCode::St.byte(), 1, 2, 3]);
    }

    #[test]
    fn nop_encodes_unused_fields_as_zero() {
        let (instr, labels) = only_instruction("nop\n");
        let bytes = encode(&instr, &labels, LabelResolution::Strict).unwrap();
        assert_eq!(bytes, [OpCode::Nop.byte(), 0, 0, 0]);
    }

    #[test]
    fn bnz_resolves_a_defined_label() {
        let parsed = parse("bnz R0, end\nend: ready\n").unwrap();
        let bytes = encode(&parsed.instructions[0], &parsed.labels, LabelResolution::Strict).unwrap();
        assert_eq!(bytes, [OpCode::Bnz.byte(), 0, 0x00, 0x04]);
    }

    #[test]
    fn strict_mode_rejects_missing_labels() {
        let (instr, labels) = only_instruction("bnz R0, nowhere\n");
        assert_eq!(
            encode(&instr, &labels, LabelResolution::Strict),
            Err(ParserError::LabelNotFound {
                line: 1,
                name: "nowhere".to_string()
            })
        );
    }

    #[test]
    fn legacy_mode_encodes_missing_labels_as_ffff() {
        let (instr, labels) = only_instruction("bnz R0, nowhere\n");
        let bytes = encode(&instr, &labels, LabelResolution::Legacy).unwrap();
        assert_eq!(&bytes[2..], [0xFF, 0xFF]);
    }

    #[test]
    fn p2_encoding_is_a_pure_function_of_its_inputs() {
        let (instr, labels) = only_instruction("add R1, R2, R3\n");
        let first = encode(&instr, &labels, LabelResolution::Strict).unwrap();
        let second = encode(&instr, &labels, LabelResolution::Strict).unwrap();
        assert_eq!(first, second);
    }
}
