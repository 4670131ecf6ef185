//! Program Loader.
//!
//! This module turns a textual program listing into instruction words. It
//! performs:
//! 1. **Line filtering:** Skips blank lines and lines starting with `#` or `/`.
//! 2. **Word parsing:** Reads the leading token of each remaining line as a
//!    32-bit hex word, with or without a `0x` prefix.
//! 3. **Labelling:** Keeps the rest of the line as the instruction's label, and
//!    falls back to the disassembly when there is none.
//!
//! Every failure is reported here, before the core sees the program.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::error::LoadError;
use crate::isa::disasm::disassemble;

/// A parsed program: instruction words plus one display label per word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    /// Instruction words in address order.
    pub words: Vec<u32>,
    /// Display label for each word.
    pub labels: Vec<String>,
}

impl Program {
    /// Builds a program from raw words, labelling each with its disassembly.
    pub fn from_words(words: &[u32]) -> Self {
        Self {
            words: words.to_vec(),
            labels: words.iter().map(|&w| disassemble(w)).collect(),
        }
    }

    /// Label of the instruction at byte address `pc`, if any.
    pub fn label_at(&self, pc: u64) -> Option<&str> {
        let idx = usize::try_from(pc / 4).ok()?;
        self.labels.get(idx).map(String::as_str)
    }
}

/// Parses program text.
///
/// # Arguments
///
/// * `text` - One instruction per line.
///
/// # Errors
///
/// Returns [`LoadError::InvalidWord`] naming the first line whose leading token
/// is not a hex word that fits in 32 bits.
pub fn parse_program(text: &str) -> Result<Program, LoadError> {
    let mut program = Program::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('/') {
            continue;
        }

        let (token, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        let word = u32::from_str_radix(digits, 16).map_err(|_| LoadError::InvalidWord {
            line: idx + 1,
            text: token.to_string(),
        })?;

        let label = rest.trim();
        program.words.push(word);
        program.labels.push(if label.is_empty() {
            disassemble(word)
        } else {
            label.to_string()
        });
    }

    Ok(program)
}

/// Reads and parses a program file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or
/// [`LoadError::InvalidWord`] for a malformed line.
pub fn load_program_file(path: impl AsRef<Path>) -> Result<Program, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let program = parse_program(&text)?;
    info!(path = %path.display(), words = program.words.len(), "program loaded");
    Ok(program)
}
