//! Sparse Data Memory.
//!
//! Each address names one 64-bit cell; accesses of every width read or write the
//! whole cell. An address that was never written reads as zero, which is the
//! normal case rather than a fault.

use std::collections::BTreeMap;

/// Sparse addressable store of 64-bit words.
///
/// Backed by an ordered map so final-state reports list addresses in ascending
/// order without a separate sort.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataMemory {
    cells: BTreeMap<u64, u64>,
}

impl DataMemory {
    /// Creates an empty data memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the word at `addr`, or 0 if it was never written.
    pub fn read(&self, addr: u64) -> u64 {
        self.cells.get(&addr).copied().unwrap_or(0)
    }

    /// Writes `val` to the word at `addr`.
    pub fn write(&mut self, addr: u64, val: u64) {
        let _ = self.cells.insert(addr, val);
    }

    /// Iterates written cells in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.cells.iter().map(|(&a, &v)| (a, v))
    }

    /// Number of cells ever written.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell has been written.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Drops every cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
