//! Pipeline Diagram Renderer.
//!
//! A [`StageTrace`] sink that builds the classic staircase diagram: one row per
//! fetched instruction identity, one `;`-separated cell per cycle. Cells read
//! `IF `, `ID `, `EX `, `MEM` or `WB ` while the instruction is in flight,
//! ` - ` once it has retired or been squashed, and blank before it was fetched.
//! A re-fetched address gets a new row, so loops and squashed shadow slots stay
//! visible.

use crate::core::pipeline::latches::InstrId;
use crate::core::pipeline::trace::{CycleReport, FetchRecord, StageTrace};
use crate::isa::disasm::disassemble;
use crate::sim::loader::Program;

/// Cell for cycles before the instruction was fetched.
const NOT_FETCHED: &str = "   ";

/// Cell for cycles after the instruction left the pipeline.
const DONE: &str = " - ";

#[derive(Clone, Debug)]
struct Row {
    id: InstrId,
    label: String,
    cells: Vec<&'static str>,
}

/// Accumulates a per-cycle stage diagram.
#[derive(Clone, Debug, Default)]
pub struct PipelineDiagram {
    program: Program,
    rows: Vec<Row>,
    cycles: usize,
}

impl PipelineDiagram {
    /// Creates a diagram that labels rows from `program`.
    pub fn new(program: &Program) -> Self {
        Self {
            program: program.clone(),
            ..Self::default()
        }
    }

    /// Number of cycles recorded.
    pub const fn cycles(&self) -> usize {
        self.cycles
    }

    /// The cells recorded for `id`, if it was fetched.
    pub fn cells(&self, id: InstrId) -> Option<&[&'static str]> {
        self.rows
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.cells.as_slice())
    }

    /// Renders the diagram, one line per fetched instruction.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(&row.label);
            for cell in &row.cells {
                out.push(';');
                out.push_str(cell);
            }
            out.push('\n');
        }
        out
    }
}

impl StageTrace for PipelineDiagram {
    fn on_fetch(&mut self, record: &FetchRecord) {
        let label = self
            .program
            .label_at(record.pc)
            .map_or_else(|| disassemble(record.inst), str::to_string);
        self.rows.push(Row {
            id: record.id,
            label,
            cells: vec![NOT_FETCHED; self.cycles],
        });
    }

    fn on_cycle(&mut self, report: &CycleReport) {
        for row in &mut self.rows {
            let cell = report.stage_of(row.id).map_or(DONE, |s| s.label());
            row.cells.push(cell);
        }
        self.cycles += 1;
    }
}
