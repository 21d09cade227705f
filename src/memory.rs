//! # Memory Bus Abstraction
//!
//! The CPU reaches RAM, ROM and memory-mapped devices only through the
//! [`MemoryBus`] trait, so the core stays independent of the machine around it and
//! tests can swap in mock buses.
//!
//! The contract follows the 6502 hardware: there are no bus errors. Reads of
//! unmapped addresses return 0 and writes to them are dropped.

/// Memory bus trait for CPU to read/write bytes.
///
/// # Design
///
/// - `read(&self)`: immutable, so external readers can inspect the bus between ticks
/// - `write(&mut self)`: mutable reference makes side effects explicit
/// - No error types: the 6502 has no bus error mechanism
///
/// # Examples
///
/// ```
/// use retro6502::MemoryBus;
///
/// /// 32KB of RAM; the upper half of the address space is unmapped.
/// struct HalfRam {
///     ram: Vec<u8>,
/// }
///
/// impl MemoryBus for HalfRam {
///     fn read(&self, addr: u16) -> u8 {
///         self.ram.get(addr as usize).copied().unwrap_or(0)
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if let Some(cell) = self.ram.get_mut(addr as usize) {
///             *cell = value;
///         }
///     }
/// }
///
/// let mut bus = HalfRam { ram: vec![0; 0x8000] };
/// bus.write(0x1234, 0x42);
/// bus.write(0x9000, 0x42);
/// assert_eq!(bus.read(0x1234), 0x42);
/// assert_eq!(bus.read(0x9000), 0x00);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Must never panic. Unmapped addresses read as 0.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Must never panic. Writes to unmapped or read-only addresses are ignored.
    fn write(&mut self, addr: u16, value: u8);

    /// Reports whether the shared, level-sensitive IRQ line is asserted.
    ///
    /// The CPU polls this at every instruction boundary and services the
    /// interrupt when the line is active and the I flag is clear. Buses without
    /// interrupt sources keep the default of `false`.
    fn irq_active(&self) -> bool {
        false
    }
}

/// Simple 64KB flat memory implementation.
///
/// Every address (0x0000-0xFFFF) is writable RAM initialized to 0x00.
///
/// # Examples
///
/// ```
/// use retro6502::{FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    data: Box<[u8; 0x10000]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 0x10000]),
        }
    }

    /// Copies `bytes` into memory starting at `start`, wrapping past 0xFFFF.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        for (i, &byte) in bytes.iter().enumerate() {
            self.write(start.wrapping_add(i as u16), byte);
        }
    }

    /// Borrows the whole address space, e.g. for a renderer reading screen memory.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("FlatMemory").finish_non_exhaustive()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
