//! Pipeline Latch Interface.
//!
//! Common operations over the four inter-stage latches: clearing, emptiness,
//! and reading the identity of the held instruction.

use crate::core::pipeline::latches::InstrId;

/// Represents a pipeline latch (inter-stage buffer).
pub trait PipelineLatch {
    /// Clears the latch, leaving a bubble.
    fn flush(&mut self);

    /// Checks if the latch is empty.
    ///
    /// # Returns
    ///
    /// `true` if the latch holds no live instruction.
    fn is_empty(&self) -> bool;

    /// Identity of the held instruction, `None` for a bubble.
    fn instr_id(&self) -> Option<InstrId>;
}
