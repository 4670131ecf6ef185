//! Instruction Execution Orchestration.
//!
//! One call to [`Cpu::tick`] is one clock cycle. The stages run in reverse
//! pipeline order, writeback first and fetch last, each reading the latches as
//! they stood when the cycle began:
//! 1. **Writeback** updates the register file before decode reads it, which
//!    models a register file written in the first half of the cycle.
//! 2. **Memory** and **Execute** produce this cycle's MEM/WB and EX/MEM. Execute
//!    forwards from the previous values of both.
//! 3. **Decode** checks hazards against the previous ID/EX and EX/MEM, and
//!    bypasses branch operands from the fresh ones.
//! 4. **Fetch** and the **PC controller** act on decode's verdict.

use crate::core::Cpu;
use crate::core::pipeline::hazards::FlowControl;
use crate::core::pipeline::stages::{decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage};
use crate::core::pipeline::trace::{CycleReport, StageTrace};
use crate::core::pipeline::traits::PipelineLatch;

impl Cpu {
    /// Whether the program is exhausted and every latch is empty.
    pub fn is_drained(&self) -> bool {
        self.program.is_exhausted_at(self.pc.current()) && self.latches.is_empty()
    }

    /// Advances the core by one clock cycle.
    ///
    /// # Arguments
    ///
    /// * `sink` - Receives the fetch (if any) and the cycle's stage occupancy.
    pub fn tick<T: StageTrace + ?Sized>(&mut self, sink: &mut T) {
        let prev = self.latches;

        let retired = wb_stage(self, &prev);
        mem_stage(self, &prev);
        execute_stage(self, &prev);
        let decoded = decode_stage(self, &prev);
        let fetched = fetch_stage(self, decoded.flow);

        self.pc.advance(decoded.flow.is_stall(), decoded.flow.redirect());

        match decoded.flow {
            FlowControl::Stall => self.stats.stalls_data += 1,
            FlowControl::Redirect { .. } => self.stats.stalls_control += 1,
            FlowControl::Proceed => {}
        }

        let report = CycleReport {
            cycle: self.cycle(),
            occupancy: [
                self.latches.if_id.instr_id(),
                self.latches.id_ex.instr_id(),
                self.latches.ex_mem.instr_id(),
                self.latches.mem_wb.instr_id(),
                retired,
            ],
            stalled: decoded.flow.is_stall(),
            redirect: decoded.target,
            squashed: decoded.squashed,
        };
        self.stats.cycles += 1;
        self.last_report = report;

        if let Some(record) = fetched.and_then(|id| self.fetch_log().get(id.index())) {
            sink.on_fetch(record);
        }
        sink.on_cycle(&report);
    }
}
