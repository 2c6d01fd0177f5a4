//! Thin, file-oriented wrapper around [`uisa`]'s parse/encode pipeline.
//! Grounded in `vasm/src/lib.rs`'s `assemble` entry point.

use std::path::{Path, PathBuf};

use uisa::{encode_program, parse, AssemblerError, LabelResolution};

/// Assembles `source` to an object byte stream at the given label
/// resolution policy (spec.md §9's strict-by-default / legacy split).
/// Failures are reported through §7's assembler-boundary taxonomy.
pub fn assemble(source: &str, mode: LabelResolution) -> Result<Vec<u8>, AssemblerError> {
    let parsed = parse(source)?;
    Ok(encode_program(&parsed.instructions, &parsed.labels, mode)?)
}

/// Default output path for an input with no `-o` flag: same stem, a
/// `.bin` extension.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("bin")
}

/// The conventional source extension. Its absence is only ever a
/// warning, never a hard failure (matching the original assembler's
/// own leniency here).
pub const CONVENTIONAL_SOURCE_EXTENSION: &str = "asm";
