//! Program Image.
//!
//! Instruction words live at consecutive 4-byte addresses starting at zero.
//! Fetching past the end, or from an address that is not word aligned, yields
//! nothing: the program is exhausted and the pipeline drains.

use crate::common::constants::INSTRUCTION_SIZE;

/// Read-only instruction store addressed by byte address.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramImage {
    words: Vec<u32>,
}

impl ProgramImage {
    /// Builds an image from an ordered instruction sequence.
    pub fn new(words: &[u32]) -> Self {
        Self {
            words: words.to_vec(),
        }
    }

    /// Returns the word at byte address `addr`, or `None` outside the program.
    pub fn fetch(&self, addr: u64) -> Option<u32> {
        if addr % INSTRUCTION_SIZE != 0 {
            return None;
        }
        let idx = usize::try_from(addr / INSTRUCTION_SIZE).ok()?;
        self.words.get(idx).copied()
    }

    /// Whether `addr` has no instruction behind it.
    pub fn is_exhausted_at(&self, addr: u64) -> bool {
        self.fetch(addr).is_none()
    }

    /// Number of instruction words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the image holds no instructions.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
