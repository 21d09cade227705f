//! Tests for PHA, PLA, PHP and PLP.

use retro6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_pha_writes_then_decrements() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x48);
    cpu.set_a(0x42);

    let cycles = cpu.step();

    assert_eq!(cpu.memory().read(0x01FD), 0x42);
    assert_eq!(cpu.sp(), 0xFC);
    assert_eq!(cycles, 3);
}

#[test]
fn test_pla_sets_flags() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x68);
    cpu.set_sp(0xFC);
    cpu.memory_mut().write(0x01FD, 0x80);

    let cycles = cpu.step();

    assert_eq!(cpu.a(), 0x80);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cycles, 4);
}

#[test]
fn test_pha_pla_round_trip() {
    let mut cpu = setup_cpu();
    // PHA, LDA #$00, PLA
    cpu.memory_mut().load(0x8000, &[0x48, 0xA9, 0x00, 0x68]);
    cpu.set_a(0x37);

    cpu.run_instructions(2);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());

    cpu.step();
    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(!cpu.flag_z());
}

#[test]
fn test_php_sets_break_and_unused_on_stack_only() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x08);
    cpu.set_flag_n(true);
    cpu.set_flag_c(true);

    let cycles = cpu.step();

    assert_eq!(cpu.memory().read(0x01FD), 0xB1);
    assert!(!cpu.flag_b());
    assert_eq!(cpu.status(), 0xA1);
    assert_eq!(cycles, 3);
}

#[test]
fn test_plp_drops_break() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x28);
    cpu.set_sp(0xFC);
    cpu.memory_mut().write(0x01FD, 0xFF);

    let cycles = cpu.step();

    assert_eq!(cpu.status(), 0xEF);
    assert!(!cpu.flag_b());
    assert!(cpu.flag_d());
    assert!(cpu.flag_i());
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cycles, 4);
}

#[test]
fn test_plp_forces_unused() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x28);
    cpu.set_sp(0xFC);
    cpu.memory_mut().write(0x01FD, 0x00);

    cpu.step();

    assert_eq!(cpu.status(), 0x20);
}

#[test]
fn test_push_wraps_stack_pointer() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x48);
    cpu.set_sp(0x00);
    cpu.set_a(0x99);

    cpu.step();

    assert_eq!(cpu.memory().read(0x0100), 0x99);
    assert_eq!(cpu.sp(), 0xFF);
}
