//! Data Hazard Detection.
//!
//! This module decides, once per cycle, whether the instruction in decode may
//! leave it. It provides:
//! 1. **Hazard Policy:** The strategy value that distinguishes the stall-only
//!    core from the forwarding core. Every other piece of stage logic is shared.
//! 2. **RAW Detection:** Stall-only cores wait for any in-flight producer in EX
//!    or MEM of a register decode reads.
//! 3. **Load-Use Detection:** Forwarding cores wait only for a load in EX, the
//!    one producer whose value arrives too late for either bypass path.
//! 4. **Flow Control:** The stall/redirect verdict handed to fetch and the PC.

use std::fmt;

use serde::Deserialize;

use crate::core::pipeline::latches::{ExMem, IdEx};
use crate::core::pipeline::signals::ControlSignals;

/// Hazard-resolution strategy of the pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum HazardPolicy {
    /// Stall on every read-after-write dependency until the producer writes back.
    #[serde(alias = "stall", alias = "STALL")]
    Stall,

    /// Bypass results from EX/MEM and MEM/WB; stall only on load-use.
    #[default]
    #[serde(alias = "forwarding", alias = "FORWARDING")]
    Forwarding,
}

impl HazardPolicy {
    /// Both policies, stall-only first.
    pub const ALL: [Self; 2] = [Self::Stall, Self::Forwarding];

    /// Whether operands are bypassed from later latches.
    pub const fn forwards(self) -> bool {
        matches!(self, Self::Forwarding)
    }

    /// Whether the instruction in decode must stall this cycle.
    ///
    /// # Arguments
    ///
    /// * `sources` - Registers the decoding instruction reads.
    /// * `id_ex` - ID/EX as it stood at the start of the cycle (producer in EX).
    /// * `ex_mem` - EX/MEM as it stood at the start of the cycle (producer in MEM).
    pub fn must_stall(self, sources: [Option<usize>; 2], id_ex: &IdEx, ex_mem: &ExMem) -> bool {
        match self {
            Self::Stall => need_stall_raw(sources, id_ex, ex_mem),
            Self::Forwarding => need_stall_load_use(sources, id_ex),
        }
    }
}

impl fmt::Display for HazardPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Stall => "stall",
            Self::Forwarding => "forwarding",
        })
    }
}

/// Destination of a producer that will write a nonzero register.
const fn producer_rd(ctrl: ControlSignals, rd: usize) -> Option<usize> {
    if (ctrl.reg_write || ctrl.mem_read) && rd != 0 {
        Some(rd)
    } else {
        None
    }
}

fn reads(sources: [Option<usize>; 2], rd: usize) -> bool {
    sources.iter().flatten().any(|&src| src == rd)
}

/// Checks for any read-after-write hazard against EX and MEM.
///
/// Used by the stall-only core. MEM/WB needs no check: writeback updates the
/// register file before decode reads it in the same cycle.
///
/// # Examples
///
/// ```
/// use rvpipe_core::core::pipeline::hazards::need_stall_raw;
/// use rvpipe_core::core::pipeline::latches::{ExMem, IdEx, IdExEntry};
/// use rvpipe_core::core::pipeline::signals::ControlSignals;
///
/// // ID/EX: addi x5, x0, 5   (in execute)
/// // IF/ID: add  x6, x5, x5  (in decode)
/// let id_ex = IdEx {
///     entry: Some(IdExEntry {
///         rd: 5,
///         ctrl: ControlSignals { reg_write: true, ..ControlSignals::NOP },
///         ..Default::default()
///     }),
/// };
/// assert!(need_stall_raw([Some(5), Some(5)], &id_ex, &ExMem::default()));
/// ```
pub fn need_stall_raw(sources: [Option<usize>; 2], id_ex: &IdEx, ex_mem: &ExMem) -> bool {
    let in_ex = id_ex.entry.and_then(|e| producer_rd(e.ctrl, e.rd));
    let in_mem = ex_mem.entry.and_then(|e| producer_rd(e.ctrl, e.rd));
    [in_ex, in_mem]
        .into_iter()
        .flatten()
        .any(|rd| reads(sources, rd))
}

/// Checks for a load-use hazard: a load in EX whose destination decode reads.
///
/// Branch and JALR operands are covered by the same check, since a load in EX
/// cannot reach either bypass path before decode resolves them.
pub fn need_stall_load_use(sources: [Option<usize>; 2], id_ex: &IdEx) -> bool {
    id_ex
        .entry
        .filter(|e| e.ctrl.mem_read)
        .and_then(|e| producer_rd(e.ctrl, e.rd))
        .is_some_and(|rd| reads(sources, rd))
}

/// Decode's verdict for the cycle, consumed by fetch and the PC controller.
///
/// Stall and redirect are mutually exclusive by construction: a pending stall
/// suppresses branch resolution until it clears.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowControl {
    /// Advance normally.
    #[default]
    Proceed,

    /// Hold the PC and IF/ID; a bubble enters ID/EX.
    Stall,

    /// A transfer was taken: squash the shadow fetch and move the PC by `delta`.
    Redirect {
        /// Signed distance from the current fetch address to the target.
        delta: i64,
    },
}

impl FlowControl {
    /// Whether fetch and the PC hold this cycle.
    pub const fn is_stall(self) -> bool {
        matches!(self, Self::Stall)
    }

    /// Whether the instruction fetched this cycle is in a taken transfer's shadow.
    pub const fn is_flush(self) -> bool {
        matches!(self, Self::Redirect { .. })
    }

    /// The redirect delta, if a transfer was taken.
    pub const fn redirect(self) -> Option<i64> {
        match self {
            Self::Redirect { delta } => Some(delta),
            _ => None,
        }
    }
}
