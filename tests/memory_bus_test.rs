//! Tests for the MemoryBus trait and the FlatMemory implementation, including
//! running the CPU on a custom bus.

use std::cell::Cell;

use retro6502::{FlatMemory, MemoryBus, CPU};

#[test]
fn test_flat_memory_read_write() {
    let mut memory = FlatMemory::new();

    memory.write(0x0000, 0x11);
    memory.write(0xFFFF, 0x22);

    assert_eq!(memory.read(0x0000), 0x11);
    assert_eq!(memory.read(0xFFFF), 0x22);
    assert_eq!(memory.read(0x8000), 0x00);
    assert_eq!(memory.as_slice().len(), 0x10000);
}

#[test]
fn test_flat_memory_load_wraps() {
    let mut memory = FlatMemory::new();

    memory.load(0xFFFE, &[0x01, 0x02, 0x03]);

    assert_eq!(memory.read(0xFFFE), 0x01);
    assert_eq!(memory.read(0xFFFF), 0x02);
    assert_eq!(memory.read(0x0000), 0x03);
}

#[test]
fn test_flat_memory_clone_is_independent() {
    let mut original = FlatMemory::new();
    original.write(0x10, 0xAA);

    let mut copy = original.clone();
    copy.write(0x10, 0xBB);

    assert_eq!(original.read(0x10), 0xAA);
    assert_eq!(copy.read(0x10), 0xBB);
}

/// 2KB of RAM mirrored four times across $0000-$1FFF, with a ROM image at the
/// top of memory. Counts writes that reach RAM.
struct MirroredBus {
    ram: [u8; 0x800],
    rom: Vec<u8>,
    writes: Cell<usize>,
}

impl MirroredBus {
    fn new(rom: Vec<u8>) -> Self {
        Self {
            ram: [0; 0x800],
            rom,
            writes: Cell::new(0),
        }
    }

    fn rom_base(&self) -> usize {
        0x10000 - self.rom.len()
    }
}

impl MemoryBus for MirroredBus {
    fn read(&self, addr: u16) -> u8 {
        let addr = addr as usize;
        if addr < 0x2000 {
            self.ram[addr & 0x7FF]
        } else if addr >= self.rom_base() {
            self.rom[addr - self.rom_base()]
        } else {
            0
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        if addr < 0x2000 {
            self.ram[addr as usize & 0x7FF] = value;
            self.writes.set(self.writes.get() + 1);
        }
    }
}

#[test]
fn test_cpu_on_custom_bus() {
    // ROM at $F000: LDA #$5A; STA $0810; LDX $0010; STA $F000
    let mut rom = vec![0xEA; 0x1000];
    rom[..9].copy_from_slice(&[0xA9, 0x5A, 0x8D, 0x10, 0x08, 0xAE, 0x10, 0x00, 0x8D]);
    rom[9..11].copy_from_slice(&[0x00, 0xF0]);
    rom[0xFFC] = 0x00;
    rom[0xFFD] = 0xF0;

    let mut cpu = CPU::new(MirroredBus::new(rom));
    assert_eq!(cpu.pc(), 0xF000);

    cpu.run_instructions(4);

    // $0810 mirrors $0010
    assert_eq!(cpu.x(), 0x5A);
    // The ROM write was dropped
    assert_eq!(cpu.memory().read(0xF000), 0xA9);
    assert_eq!(cpu.memory().writes.get(), 1);
    assert_eq!(cpu.pc(), 0xF00B);
}

#[test]
fn test_unmapped_reads_are_zero() {
    let cpu = CPU::new(MirroredBus::new(vec![0; 0x100]));

    assert_eq!(cpu.memory().read(0x4000), 0x00);
    // Reset vector inside the zeroed ROM
    assert_eq!(cpu.pc(), 0x0000);
}
