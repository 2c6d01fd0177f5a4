//! The two-pass parser (spec.md §4.2). Pass 1 gathers labels against
//! address positions; pass 2 re-walks the source to parse instructions
//! against the now-complete label table (though label references stay
//! unresolved here — resolution happens in the encoder, per spec.md §9
//! "Label resolution timing").
//!
//! Grounded in `vasm/src/lib.rs`'s two-phase `assemble_parsed` shape and
//! `original_source/src/assembler/parserSrc.c`'s pass 1 / pass 2 split,
//! with token-slice iteration standing in for pest's `Pair` walking.

use crate::error::ParserError;
use crate::instruction::{Instruction, OpCode};
use crate::label::LabelTable;
use crate::lexer::tokenize_line;
use crate::operand::Operand;
use crate::token::{Token, TokenType};

/// Source lines beyond this length are rejected (spec.md §4.2/§6).
pub const MAX_LINE_LENGTH: usize = 256;
/// Programs with more than this many instructions are rejected.
pub const MAX_INSTRUCTIONS: usize = 1024;

/// The result of parsing a whole source file: its instructions in
/// program order, plus the label table built alongside them.
pub struct ParsedProgram {
    pub instructions: Vec<Instruction>,
    pub labels: LabelTable,
}

pub fn parse(source: &str) -> Result<ParsedProgram, ParserError> {
    let lines: Vec<&str> = source.lines().collect();
    for (idx, line) in lines.iter().enumerate() {
        if line.chars().count() > MAX_LINE_LENGTH {
            return Err(ParserError::LineTooLong { line: idx + 1 });
        }
    }

    let labels = collect_labels(&lines)?;
    let instructions = parse_instructions(&lines)?;

    Ok(ParsedProgram {
        instructions,
        labels,
    })
}

/// Pass 1: walks lines in source order, recording every leading label at
/// the address instructions will occupy, advancing that address only
/// past lines that actually carry an instruction.
fn collect_labels(lines: &[&str]) -> Result<LabelTable, ParserError> {
    let mut labels = LabelTable::new();
    let mut address: u16 = 0;

    for (idx, line) in lines.iter().enumerate() {
        let line_number = idx + 1;
        let tokens = tokenize_line(line, line_number);
        if tokens.is_empty() {
            continue;
        }

        let mut i = 0;
        while i < tokens.len() && tokens[i].kind == TokenType::Label {
            labels.define(&tokens[i].value, address, line_number)?;
            i += 1;
        }

        if tokens[i..].iter().any(|t| t.kind == TokenType::Instruction) {
            address = address
                .checked_add(4)
                .ok_or(ParserError::TooManyInstructions)?;
        }
    }

    Ok(labels)
}

/// Pass 2: re-walks the source with `current_address` reset to 0,
/// skipping leading labels and parsing exactly one instruction per line
/// that carries one.
fn parse_instructions(lines: &[&str]) -> Result<Vec<Instruction>, ParserError> {
    let mut instructions = Vec::new();
    let mut address: u16 = 0;

    for (idx, line) in lines.iter().enumerate() {
        let line_number = idx + 1;
        let tokens = tokenize_line(line, line_number);
        if tokens.is_empty() {
            continue;
        }

        let mut i = 0;
        while i < tokens.len() && tokens[i].kind == TokenType::Label {
            i += 1;
        }
        if i >= tokens.len() || tokens[i].kind != TokenType::Instruction {
            continue;
        }

        if instructions.len() >= MAX_INSTRUCTIONS {
            return Err(ParserError::TooManyInstructions);
        }

        let opcode = OpCode::from_mnemonic(&tokens[i].value)
            .ok_or(ParserError::InvalidInstruction { line: line_number })?;
        let operands = parse_operands(&tokens[i + 1..], line_number)?;
        validate_operand_contract(opcode, &operands, line_number)?;

        instructions.push(Instruction {
            opcode,
            operands,
            address,
            line: line_number,
        });

        address = address
            .checked_add(4)
            .ok_or(ParserError::TooManyInstructions)?;
    }

    Ok(instructions)
}

/// Parses the operand tokens following an opcode, left to right. Commas
/// are consumed when present but never required (spec.md §9 "Assembler
/// comma tolerance").
fn parse_operands(tokens: &[Token], line: usize) -> Result<Vec<Operand>, ParserError> {
    let mut operands = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        match tokens[i].kind {
            TokenType::Comma => {
                i += 1;
            }
            TokenType::LBracket => {
                let (operand, next) = parse_mem_pair(tokens, i, line)?;
                operands.push(operand);
                i = next;
            }
            TokenType::Register => {
                operands.push(Operand::Register(parse_register_value(&tokens[i], line)?));
                i += 1;
            }
            TokenType::Immediate => {
                operands.push(Operand::Immediate(parse_immediate_value(&tokens[i], line)?));
                i += 1;
            }
            TokenType::Identifier => {
                let lexeme = &tokens[i].value;
                if lexeme.starts_with('R') {
                    return Err(ParserError::InvalidRegister { line });
                }
                if !is_valid_label_name(lexeme) {
                    return Err(ParserError::InvalidOperand { line });
                }
                operands.push(Operand::LabelRef(lexeme.clone()));
                i += 1;
            }
            TokenType::RBracket => return Err(ParserError::InvalidMemAccess { line }),
            TokenType::Label | TokenType::Instruction | TokenType::Eof => {
                return Err(ParserError::InvalidOperand { line });
            }
        }
    }

    Ok(operands)
}

/// Parses `[Ra,Rb]` / `[Ra Rb]` starting at `tokens[start]` (a `[`).
/// Returns the operand and the index just past the matching `]`.
fn parse_mem_pair(tokens: &[Token], start: usize, line: usize) -> Result<(Operand, usize), ParserError> {
    let mut j = start + 1;
    let mut registers = Vec::new();

    while j < tokens.len() && tokens[j].kind != TokenType::RBracket {
        match tokens[j].kind {
            TokenType::Register => registers.push(parse_register_value(&tokens[j], line)?),
            TokenType::Comma => {}
            _ => return Err(ParserError::InvalidMemAccess { line }),
        }
        j += 1;
    }

    if j >= tokens.len() || registers.len() != 2 {
        return Err(ParserError::InvalidMemAccess { line });
    }

    Ok((Operand::MemPair(registers[0], registers[1]), j + 1))
}

fn parse_register_value(token: &Token, line: usize) -> Result<u8, ParserError> {
    let digits = &token.value[1..];
    let value: u32 = digits
        .parse()
        .map_err(|_| ParserError::InvalidRegister { line })?;
    if value > 15 {
        return Err(ParserError::InvalidRegister { line });
    }
    Ok(value as u8)
}

fn parse_immediate_value(token: &Token, line: usize) -> Result<u16, ParserError> {
    let text = token.value.as_str();
    let value: i64 = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).map_err(|_| ParserError::InvalidImmediate { line })?
    } else {
        text.parse().map_err(|_| ParserError::InvalidImmediate { line })?
    };

    if !(-32768..=65535).contains(&value) {
        return Err(ParserError::InvalidImmediate { line });
    }
    Ok(value as u16)
}

fn is_valid_label_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Checks a parsed operand list against an opcode's per-instruction
/// contract (spec.md §4.2's table).
fn validate_operand_contract(opcode: OpCode, operands: &[Operand], line: usize) -> Result<(), ParserError> {
    let expected = opcode.expected_operand_count();
    if operands.len() > expected {
        return Err(ParserError::TooManyOperands { line });
    }
    if operands.len() < expected {
        return Err(ParserError::TooFewOperands { line });
    }

    let all_registers = |ops: &[Operand]| ops.iter().all(|o| matches!(o, Operand::Register(_)));

    match opcode {
        OpCode::Nop | OpCode::Ready => Ok(()),
        OpCode::SetConst => match (&operands[0], &operands[1]) {
            // Only BNZ's target may be a label reference (spec.md §4.2's
            // contract table); SET_CONST takes a plain literal.
            (Operand::Immediate(_), Operand::Register(_)) => Ok(()),
            _ => Err(ParserError::InvalidOperand { line }),
        },
        OpCode::Bnz => match (&operands[0], &operands[1]) {
            (Operand::Register(_), Operand::Immediate(_) | Operand::LabelRef(_)) => Ok(()),
            _ => Err(ParserError::InvalidOperand { line }),
        },
        _ => {
            if all_registers(operands) {
                Ok(())
            } else {
                Err(ParserError::InvalidOperand { line })
            }
        }
    }
}
