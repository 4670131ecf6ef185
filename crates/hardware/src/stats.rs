//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipelined core. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and derived ratios.
//! 2. **Instruction mix:** Retired counts by category (ALU, load, store, branch, jump).
//! 3. **Hazards:** Data-stall cycles, control flushes, and forwarded operands.

use crate::core::pipeline::signals::ControlSignals;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions that completed write-back.
    pub instructions_retired: u64,

    /// Count of ALU (R-type and I-type) instructions retired.
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branches retired.
    pub inst_branch: u64,
    /// Count of JAL/JALR retired.
    pub inst_jump: u64,
    /// Count of unsupported encodings that flowed through as no-ops.
    pub inst_nop: u64,

    /// Cycles in which decode stalled and injected a bubble.
    pub stalls_data: u64,
    /// Taken transfers, each squashing one shadow fetch.
    pub stalls_control: u64,
    /// Operands taken from EX/MEM or MEM/WB instead of the register file.
    pub forwards: u64,
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"hazards"`, `"instruction_mix"`.
/// Pass an empty slice to `render_sections` to include all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "hazards", "instruction_mix"];

impl SimStats {
    /// Counts one retired instruction, classified by its control bundle.
    pub const fn record_retire(&mut self, ctrl: &ControlSignals) {
        self.instructions_retired += 1;
        if ctrl.mem_read {
            self.inst_load += 1;
        } else if ctrl.mem_write {
            self.inst_store += 1;
        } else if ctrl.branch {
            self.inst_branch += 1;
        } else if ctrl.jump {
            self.inst_jump += 1;
        } else if ctrl.reg_write {
            self.inst_alu += 1;
        } else {
            self.inst_nop += 1;
        }
    }

    /// Cycles per retired instruction, zero before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Renders the requested statistics sections.
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names from [`STATS_SECTIONS`], or empty for all.
    pub fn render_sections(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let cyc = self.cycles.max(1) as f64;
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64, of: f64| (n as f64 / of) * 100.0;
        let rule = "----------------------------------------------------------\n";
        let mut out = String::new();

        out.push_str("==========================================================\n");
        out.push_str("PIPELINE SIMULATION STATISTICS\n");
        out.push_str("==========================================================\n");
        if want("summary") {
            out.push_str(&format!("sim_cycles               {}\n", self.cycles));
            out.push_str(&format!("sim_insts                {}\n", self.instructions_retired));
            out.push_str(&format!(
                "sim_ipc                  {:.4}\n",
                self.instructions_retired as f64 / cyc
            ));
            out.push_str(&format!("sim_cpi                  {:.4}\n", self.cpi()));
            out.push_str(rule);
        }
        if want("hazards") {
            out.push_str("HAZARDS\n");
            out.push_str(&format!(
                "  stalls.data            {} ({:.2}%)\n",
                self.stalls_data,
                pct(self.stalls_data, cyc)
            ));
            out.push_str(&format!(
                "  stalls.control         {} ({:.2}%)\n",
                self.stalls_control,
                pct(self.stalls_control, cyc)
            ));
            out.push_str(&format!("  forwards               {}\n", self.forwards));
            out.push_str(rule);
        }
        if want("instruction_mix") {
            out.push_str("INSTRUCTION MIX\n");
            for (name, n) in [
                ("op.alu", self.inst_alu),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.branch", self.inst_branch),
                ("op.jump", self.inst_jump),
                ("op.nop", self.inst_nop),
            ] {
                out.push_str(&format!("  {name:<22} {n} ({:.2}%)\n", pct(n, instr)));
            }
            out.push_str(rule);
        }
        out
    }

    /// Prints only the requested statistics sections to stdout.
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.render_sections(sections));
    }

    /// Prints all statistics sections to stdout.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
