//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states and memory contents, then runs a few
//! instructions and ticks looking for panics (arithmetic overflow in the cycle
//! bookkeeping, out-of-range indexing) and broken stack/cycle invariants.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use retro6502::{FlatMemory, MemoryBus, CPU};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Raw status register
    status: u8,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (a few instructions + operands)
    program: [u8; 16],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Target of absolute and indirect addressing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    /// Interrupt to raise after the first instruction
    interrupt: Option<bool>,
    extra_ticks: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    // Reset vector at 0x8000, IRQ/BRK handler at 0x9000, NMI handler at 0xA000
    memory.load(0xFFFA, &[0x00, 0xA0, 0x00, 0x80, 0x00, 0x90]);
    memory.load(0x8000, &input.memory.program);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);
    memory.write(0x9000, 0x40); // RTI
    memory.write(0xA000, 0x40); // RTI

    let mut cpu = CPU::new(memory);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    let cycles = cpu.step();
    assert!((2..=8).contains(&cycles), "instruction took {} cycles", cycles);
    assert!(cpu.complete());

    match input.interrupt {
        Some(true) => cpu.nmi(),
        Some(false) => {
            cpu.irq();
        }
        None => {}
    }

    for _ in 0..3 {
        cpu.step();
    }
    for _ in 0..input.extra_ticks {
        cpu.clock();
    }

    // Bit 5 is forced on at every dispatch
    assert_eq!(cpu.status() & 0x20, 0x20);
});
