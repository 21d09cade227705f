//! Tests for NOP and the undefined opcodes.
//!
//! Every undefined opcode executes as a one-byte no-op with the cycle count from
//! the opcode table.

use retro6502::{FlatMemory, MemoryBus, CPU, OPCODE_TABLE};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_nop() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xEA);
    cpu.set_a(0x12);

    let cycles = cpu.step();

    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.a(), 0x12);
    assert_eq!(cycles, 2);
}

#[test]
fn test_illegal_opcodes_are_single_byte_no_ops() {
    for (opcode, cycles) in [(0x02u8, 2u8), (0xFF, 7), (0xEB, 2), (0x1C, 4), (0x04, 3)] {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[opcode, 0xA9, 0x55]);
        cpu.set_a(0x01);
        cpu.set_x(0x02);
        cpu.set_y(0x03);
        cpu.set_flag_c(true);

        assert_eq!(cpu.step(), cycles, "opcode {:02X}", opcode);
        assert_eq!(cpu.pc(), 0x8001, "opcode {:02X}", opcode);
        assert_eq!((cpu.a(), cpu.x(), cpu.y()), (0x01, 0x02, 0x03));
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.status(), 0x21);
    }
}

#[test]
fn test_execution_continues_after_illegal_opcode() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x02, 0xA9, 0x55]);

    cpu.run_instructions(2);

    assert_eq!(cpu.a(), 0x55);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_every_undefined_opcode_runs() {
    for opcode in 0..=255u8 {
        let entry = &OPCODE_TABLE[opcode as usize];
        if !entry.is_illegal() {
            continue;
        }

        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, opcode);

        assert_eq!(cpu.step(), entry.base_cycles);
        assert_eq!(cpu.pc(), 0x8001);
    }
}
