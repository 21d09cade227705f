//! Tests for the bitwise accumulator instructions: AND, ORA, EOR and BIT.

use retro6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

// ========== AND ==========

#[test]
fn test_and_immediate() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x29, 0x0F]);
    cpu.set_a(0x3C);

    let cycles = cpu.step();

    assert_eq!(cpu.a(), 0x0C);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cycles, 2);
}

#[test]
fn test_and_zero_result() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x29, 0xF0]);
    cpu.set_a(0x0F);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_and_indirect_y_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x31, 0x20]);
    cpu.memory_mut().load(0x0020, &[0xF0, 0x30]);
    cpu.memory_mut().write(0x3110, 0x81);
    cpu.set_y(0x20);
    cpu.set_a(0xFF);

    let cycles = cpu.step();

    assert_eq!(cpu.a(), 0x81);
    assert!(cpu.flag_n());
    assert_eq!(cycles, 6);
}

// ========== ORA ==========

#[test]
fn test_ora_immediate() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x09, 0x80]);
    cpu.set_a(0x01);

    cpu.step();

    assert_eq!(cpu.a(), 0x81);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_ora_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x05, 0x10]);

    let cycles = cpu.step();

    // 0 | 0
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert_eq!(cycles, 3);
}

// ========== EOR ==========

#[test]
fn test_eor_immediate() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x49, 0xFF]);
    cpu.set_a(0x0F);

    cpu.step();

    assert_eq!(cpu.a(), 0xF0);
    assert!(cpu.flag_n());
}

#[test]
fn test_eor_self_clears() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x4D, 0x00, 0x20]);
    cpu.memory_mut().write(0x2000, 0x5A);
    cpu.set_a(0x5A);

    let cycles = cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert_eq!(cycles, 4);
}

// ========== BIT ==========

#[test]
fn test_bit_copies_high_bits_from_memory() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x24, 0x10]);
    cpu.memory_mut().write(0x0010, 0xC0);
    cpu.set_a(0x0F);

    let cycles = cpu.step();

    assert!(cpu.flag_z()); // 0x0F & 0xC0 == 0
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert_eq!(cpu.a(), 0x0F); // A unchanged
    assert_eq!(cycles, 3);
}

#[test]
fn test_bit_clears_flags() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x2C, 0x00, 0x20]);
    cpu.memory_mut().write(0x2000, 0x01);
    cpu.set_a(0x01);
    cpu.set_flag_n(true);
    cpu.set_flag_v(true);
    cpu.set_flag_z(true);

    let cycles = cpu.step();

    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
    assert_eq!(cycles, 4);
}
