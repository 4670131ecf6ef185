//! Program Image and Data Memory.

use rvpipe_core::soc::{DataMemory, ProgramImage};

#[test]
fn program_fetch_is_word_addressed() {
    let image = ProgramImage::new(&[0x11, 0x22]);
    assert_eq!(image.fetch(0), Some(0x11));
    assert_eq!(image.fetch(4), Some(0x22));
    assert_eq!(image.fetch(8), None);
    assert_eq!(image.fetch(2), None);
    assert!(image.is_exhausted_at(8));
    assert!(!image.is_exhausted_at(4));
    assert_eq!(image.len(), 2);
}

#[test]
fn empty_program_is_exhausted_at_zero() {
    let image = ProgramImage::default();
    assert!(image.is_empty());
    assert!(image.is_exhausted_at(0));
}

#[test]
fn data_memory_is_sparse_and_ordered() {
    let mut mem = DataMemory::new();
    assert_eq!(mem.read(0x100), 0);
    mem.write(0x100, 1);
    mem.write(0x8, 2);
    mem.write(0x100, 3);
    assert_eq!(mem.len(), 2);
    assert_eq!(mem.iter().collect::<Vec<_>>(), vec![(0x8, 2), (0x100, 3)]);
    mem.clear();
    assert!(mem.is_empty());
}
