//! The layered error taxonomy of spec.md §7. Each layer reports the most
//! specific kind; propagation is strictly upward. Grounded in
//! `vasm/src/error.rs`'s hand-rolled `ParseError`/`AssembleError`/`Error`
//! enums with manual `Display`/`From` impls rather than `thiserror`.

use std::fmt;

/// Parser-layer failures (spec.md §7 "Parser"). Parsing halts at the
/// first failure and reports the source line number.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ParserError {
    InvalidInstruction { line: usize },
    InvalidOperand { line: usize },
    InvalidRegister { line: usize },
    InvalidImmediate { line: usize },
    InvalidMemAccess { line: usize },
    TooManyOperands { line: usize },
    TooFewOperands { line: usize },
    InvalidFormat { line: usize },
    LabelAlreadyDefined { line: usize, name: String },
    LabelNotFound { line: usize, name: String },
    FileNotFound,
    LineTooLong { line: usize },
    TooManyInstructions,
    TooManyLabels,
}

impl ParserError {
    /// 1-based source line this failure occurred at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParserError::InvalidInstruction { line }
            | ParserError::InvalidOperand { line }
            | ParserError::InvalidRegister { line }
            | ParserError::InvalidImmediate { line }
            | ParserError::InvalidMemAccess { line }
            | ParserError::TooManyOperands { line }
            | ParserError::TooFewOperands { line }
            | ParserError::InvalidFormat { line }
            | ParserError::LabelAlreadyDefined { line, .. }
            | ParserError::LabelNotFound { line, .. }
            | ParserError::LineTooLong { line } => Some(*line),
            ParserError::FileNotFound
            | ParserError::TooManyInstructions
            | ParserError::TooManyLabels => None,
        }
    }

    /// Exit status per §6 ("non-zero codes map 1-to-1 to the error
    /// enumeration in §7").
    pub fn exit_code(&self) -> i32 {
        match self {
            ParserError::InvalidInstruction { .. } => 1,
            ParserError::InvalidOperand { .. } => 2,
            ParserError::InvalidRegister { .. } => 3,
            ParserError::InvalidImmediate { .. } => 4,
            ParserError::InvalidMemAccess { .. } => 5,
            ParserError::TooManyOperands { .. } => 6,
            ParserError::TooFewOperands { .. } => 7,
            ParserError::InvalidFormat { .. } => 8,
            ParserError::LabelAlreadyDefined { .. } => 9,
            ParserError::LabelNotFound { .. } => 10,
            ParserError::FileNotFound => 11,
            ParserError::LineTooLong { .. } => 12,
            ParserError::TooManyInstructions => 13,
            ParserError::TooManyLabels => 14,
        }
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message = match self {
            ParserError::InvalidInstruction { .. } => "invalid instruction".to_string(),
            ParserError::InvalidOperand { .. } => "invalid operand".to_string(),
            ParserError::InvalidRegister { .. } => "invalid register".to_string(),
            ParserError::InvalidImmediate { .. } => "invalid immediate".to_string(),
            ParserError::InvalidMemAccess { .. } => "invalid memory access operand".to_string(),
            ParserError::TooManyOperands { .. } => "too many operands".to_string(),
            ParserError::TooFewOperands { .. } => "too few operands".to_string(),
            ParserError::InvalidFormat { .. } => "invalid instruction format".to_string(),
            ParserError::LabelAlreadyDefined { name, .. } => {
                format!("label `{name}` already defined")
            }
            ParserError::LabelNotFound { name, .. } => format!("label `{name}` not found"),
            ParserError::FileNotFound => "source file not found".to_string(),
            ParserError::LineTooLong { .. } => "source line too long".to_string(),
            ParserError::TooManyInstructions => "too many instructions".to_string(),
            ParserError::TooManyLabels => "too many labels".to_string(),
        };

        write!(f, "code {}: {}", self.exit_code(), message)?;
        if let Some(line) = self.line() {
            write!(f, " (line {line})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParserError {}

/// Assembler-boundary failures (spec.md §7 "Assembler boundary").
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AssemblerError {
    InvalidInput(String),
    InvalidOutput(String),
    ParserFailed(ParserError),
    WritingFailed(String),
}

impl AssemblerError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AssemblerError::InvalidInput(_) => 20,
            AssemblerError::InvalidOutput(_) => 21,
            AssemblerError::ParserFailed(err) => err.exit_code(),
            AssemblerError::WritingFailed(_) => 22,
        }
    }
}

impl From<ParserError> for AssemblerError {
    fn from(err: ParserError) -> AssemblerError {
        AssemblerError::ParserFailed(err)
    }
}

impl fmt::Display for AssemblerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssemblerError::InvalidInput(msg) => {
                write!(f, "code {}: invalid input: {msg}", self.exit_code())
            }
            AssemblerError::InvalidOutput(msg) => {
                write!(f, "code {}: invalid output: {msg}", self.exit_code())
            }
            AssemblerError::ParserFailed(err) => write!(f, "{err}"),
            AssemblerError::WritingFailed(msg) => {
                write!(f, "code {}: writing failed: {msg}", self.exit_code())
            }
        }
    }
}

impl std::error::Error for AssemblerError {}

/// Memory-layer failures (spec.md §7 "Memory").
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MemoryError {
    InvalidAddress,
    OutOfBounds,
    AllocationError,
    NotInitialized,
}

impl MemoryError {
    pub fn exit_code(self) -> i32 {
        match self {
            MemoryError::InvalidAddress => 30,
            MemoryError::OutOfBounds => 31,
            MemoryError::AllocationError => 32,
            MemoryError::NotInitialized => 33,
        }
    }
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message = match self {
            MemoryError::InvalidAddress => "invalid address",
            MemoryError::OutOfBounds => "address out of bounds",
            MemoryError::AllocationError => "allocation error",
            MemoryError::NotInitialized => "memory not initialized",
        };
        write!(f, "code {}: {message}", self.exit_code())
    }
}

impl std::error::Error for MemoryError {}

/// Emulator-layer failures (spec.md §7 "Emulator"). `Halt` is
/// deliberately not part of this type: it is a success signal, carried
/// instead by [`crate::cpu::ExitSignal`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EmulatorError {
    InvalidInstruction,
    Memory(MemoryError),
    DivisionByZero,
    InvalidRegister,
}

impl EmulatorError {
    pub fn exit_code(self) -> i32 {
        match self {
            EmulatorError::InvalidInstruction => 40,
            EmulatorError::Memory(err) => err.exit_code(),
            EmulatorError::DivisionByZero => 41,
            EmulatorError::InvalidRegister => 42,
        }
    }
}

impl From<MemoryError> for EmulatorError {
    fn from(err: MemoryError) -> EmulatorError {
        EmulatorError::Memory(err)
    }
}

impl fmt::Display for EmulatorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EmulatorError::InvalidInstruction => {
                write!(f, "code {}: invalid instruction", self.exit_code())
            }
            EmulatorError::Memory(err) => write!(f, "{err}"),
            EmulatorError::DivisionByZero => write!(f, "code {}: division by zero", self.exit_code()),
            EmulatorError::InvalidRegister => {
                write!(f, "code {}: invalid register", self.exit_code())
            }
        }
    }
}

impl std::error::Error for EmulatorError {}
