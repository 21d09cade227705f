//! Tests for BRK and RTI.

use retro6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000 and IRQ/BRK
/// vector at 0x9000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x90);
    CPU::new(memory)
}

#[test]
fn test_brk_pushes_state_and_vectors() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x00, 0xFF]);
    cpu.set_flag_c(true);

    let cycles = cpu.step();

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFA);
    // Return address skips the padding byte
    assert_eq!(cpu.memory().read(0x01FD), 0x80);
    assert_eq!(cpu.memory().read(0x01FC), 0x02);
    // Pushed status has B and bit 5 set
    assert_eq!(cpu.memory().read(0x01FB), 0x31);
    assert!(cpu.flag_i());
    assert!(!cpu.flag_b());
    assert_eq!(cycles, 7);
}

#[test]
fn test_brk_ignores_interrupt_disable() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x00);
    cpu.set_flag_i(true);

    cpu.step();

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.memory().read(0x01FB), 0x34);
}

#[test]
fn test_brk_rti_round_trip() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x00, 0xFF, 0xEA]);
    cpu.memory_mut().write(0x9000, 0x40);
    cpu.set_flag_c(true);

    cpu.step();
    let cycles = cpu.step();

    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_i());
    assert!(!cpu.flag_b());
    assert_eq!(cpu.status(), 0x21);
    assert_eq!(cycles, 6);
}

#[test]
fn test_rti_restores_pc_without_adjustment() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x40);
    // Status, then PC low, then PC high
    cpu.set_sp(0xFC);
    cpu.memory_mut().load(0x01FD, &[0xD3, 0x34, 0x12]);

    cpu.step();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.sp(), 0xFF);
    // 0xD3 with B cleared and bit 5 forced
    assert_eq!(cpu.status(), 0xE3);
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}
