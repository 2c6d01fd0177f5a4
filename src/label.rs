//! The label table shared between the parser's two passes. Grounded in
//! `vasm/src/labels.rs`'s `LabelMap` concept, reimplemented over owned
//! `String` keys since there is no borrowed parse tree to key into.

use std::collections::HashMap;

use crate::error::ParserError;

/// Labels live in a single flat namespace, bounded at 256 entries
/// (spec.md §3).
pub const MAX_LABELS: usize = 256;
/// Bound on a label's name length (spec.md §3).
pub const MAX_LABEL_LENGTH: usize = 63;

#[derive(Default)]
pub struct LabelTable {
    addresses: HashMap<String, u16>,
}

impl LabelTable {
    pub fn new() -> LabelTable {
        LabelTable::default()
    }

    /// Records `name -> address`. Fails with `LabelAlreadyDefined` on a
    /// duplicate name, or `TooManyLabels` once the table is full.
    pub fn define(&mut self, name: &str, address: u16, line: usize) -> Result<(), ParserError> {
        if name.len() > MAX_LABEL_LENGTH {
            return Err(ParserError::InvalidOperand { line });
        }
        if self.addresses.contains_key(name) {
            return Err(ParserError::LabelAlreadyDefined {
                line,
                name: name.to_string(),
            });
        }
        if self.addresses.len() >= MAX_LABELS {
            return Err(ParserError::TooManyLabels);
        }
        self.addresses.insert(name.to_string(), address);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Option<u16> {
        self.addresses.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}
