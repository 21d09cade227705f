//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the clock-driven fetch-decode-execute state machine.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register** (SR): packed [`StatusFlags`]
//! - **Scratch registers**: effective address, branch displacement and fetched
//!   operand, alive for the duration of one dispatch
//! - **In-flight state**: latched opcode and cycles remaining
//!
//! ## Execution Model
//!
//! [`CPU::clock`] advances exactly one cycle. When no instruction is in flight the
//! tick dispatches the next one: the whole instruction takes effect on that tick
//! and the following ticks only count down its remaining cycles. An instruction
//! therefore occupies exactly as many ticks as the real chip needs.
//!
//! - `clock()`: advance one cycle
//! - `step()`: run one whole instruction
//! - `run_for_cycles()`: run whole instructions until a cycle budget is spent
//! - `run_instructions()`: run a fixed number of instructions

use std::fmt;

use crate::addressing::AddressingMode;
use crate::loader::{load_program, LoadError, DEFAULT_PROGRAM_ADDRESS};
use crate::{instructions, MemoryBus, StatusFlags, OPCODE_TABLE};

/// Address of the NMI vector (low byte; high byte follows).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Address of the reset vector (low byte; high byte follows).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the IRQ/BRK vector (low byte; high byte follows).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Stack pointer value after reset.
pub const RESET_SP: u8 = 0xFD;

/// Cycles the reset sequence occupies before the first dispatch.
pub const RESET_CYCLES: u8 = 8;

const IRQ_CYCLES: u8 = 7;
const NMI_CYCLES: u8 = 8;

/// 6502 CPU state and execution context.
///
/// The CPU owns its memory bus, which is generic over the [`MemoryBus`] trait.
///
/// # Examples
///
/// ```
/// use retro6502::{FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.write(0x8000, 0xA9); // LDA #$42
/// memory.write(0x8001, 0x42);
///
/// let mut cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
///
/// let cycles = cpu.step();
/// assert_eq!(cycles, 2);
/// assert_eq!(cpu.a(), 0x42);
/// assert_eq!(cpu.pc(), 0x8002);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Status register
    pub(crate) status: StatusFlags,

    /// Effective address resolved for the current instruction
    pub(crate) addr_abs: u16,

    /// Sign-extended branch displacement for the current instruction
    pub(crate) addr_rel: u16,

    /// Operand most recently read by `fetch`
    pub(crate) fetched: u8,

    /// Opcode latched at the last dispatch
    pub(crate) opcode: u8,

    /// Cycles left before the next dispatch
    pub(crate) cycles: u8,

    /// Total ticks executed
    pub(crate) clock_count: u64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU attached to `memory` and performs a [`reset`](Self::reset).
    ///
    /// PC is loaded from the reset vector at 0xFFFC/0xFFFD, so the vector must be
    /// in place before construction (or `reset` must be called again later).
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            status: StatusFlags::empty(),
            addr_abs: 0,
            addr_rel: 0,
            fetched: 0,
            opcode: 0,
            cycles: 0,
            clock_count: 0,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Puts the CPU into its reset state.
    ///
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - A, X, Y and SR are cleared
    /// - SP is set to 0xFD
    /// - The scratch registers are cleared
    /// - The next 8 ticks are spent on the reset sequence
    ///
    /// # Examples
    ///
    /// ```
    /// use retro6502::{FlatMemory, MemoryBus, CPU};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.memory_mut().write(0xFFFC, 0x34);
    /// cpu.memory_mut().write(0xFFFD, 0x12);
    /// cpu.reset();
    ///
    /// assert_eq!(cpu.pc(), 0x1234);
    /// assert_eq!(cpu.status(), 0x00);
    /// assert_eq!(cpu.cycles_remaining(), 8);
    /// ```
    pub fn reset(&mut self) {
        self.pc = self.read_word(RESET_VECTOR);
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = RESET_SP;
        self.status = StatusFlags::empty();
        self.addr_abs = 0;
        self.addr_rel = 0;
        self.fetched = 0;
        self.cycles = RESET_CYCLES;

        log::debug!("reset: pc=${:04X}", self.pc);
    }

    /// Advances the CPU by one clock cycle.
    ///
    /// When the previous instruction has finished, this tick dispatches the next
    /// one (or services a pending IRQ from the bus). Otherwise it only counts down.
    pub fn clock(&mut self) {
        if self.cycles == 0 {
            if self.memory.irq_active() && !self.status.contains(StatusFlags::INTERRUPT_DISABLE) {
                self.interrupt(IRQ_VECTOR, IRQ_CYCLES);
            } else {
                self.dispatch();
            }
        }

        self.cycles -= 1;
        self.clock_count += 1;
    }

    /// Fetches, decodes and executes the instruction at PC.
    fn dispatch(&mut self) {
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("{:<14} {}", self.disassemble_at(self.pc).to_string(), self);
        }

        self.opcode = self.read(self.pc);
        self.status.insert(StatusFlags::UNUSED);
        self.pc = self.pc.wrapping_add(1);

        let metadata = &OPCODE_TABLE[self.opcode as usize];
        self.cycles = metadata.base_cycles;

        let page_crossed = self.resolve_address(metadata.addressing_mode);
        let penalty_applies = instructions::execute(self, metadata.mnemonic);

        // Only read instructions pay for crossing a page while indexing
        if page_crossed && penalty_applies {
            self.cycles += 1;
        }

        self.status.insert(StatusFlags::UNUSED);
    }

    /// Returns true when no instruction is in flight, i.e. the next tick dispatches.
    pub fn complete(&self) -> bool {
        self.cycles == 0
    }

    /// Executes one whole instruction.
    ///
    /// Any cycles still owed by the previous instruction (or by reset) are ticked
    /// off first. Returns the number of cycles the executed instruction took,
    /// including page-crossing and branch penalties.
    pub fn step(&mut self) -> u8 {
        while !self.complete() {
            self.clock();
        }

        self.clock();
        let mut taken = 1;
        while !self.complete() {
            self.clock();
            taken += 1;
        }
        taken
    }

    /// Runs whole instructions until at least `cycle_budget` cycles have elapsed.
    ///
    /// Returns the actual number of cycles consumed, which may overshoot the
    /// budget by part of an instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use retro6502::{FlatMemory, MemoryBus, CPU};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// for addr in 0x8000..0x8010 {
    ///     mem.write(addr, 0xEA); // NOP, 2 cycles
    /// }
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.step(); // finish reset and one NOP
    ///
    /// assert_eq!(cpu.run_for_cycles(10), 10);
    /// assert_eq!(cpu.pc(), 0x8006);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> u64 {
        let start = self.clock_count;
        while self.clock_count - start < cycle_budget {
            self.step();
        }
        self.clock_count - start
    }

    /// Executes `count` whole instructions.
    pub fn run_instructions(&mut self, count: usize) {
        for _ in 0..count {
            self.step();
        }
    }

    /// Loads a hex program at [`DEFAULT_PROGRAM_ADDRESS`], resets, and runs
    /// `count` instructions.
    ///
    /// # Examples
    ///
    /// ```
    /// use retro6502::{FlatMemory, CPU};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.run_program("a9 ff 69 02", 2).unwrap();
    ///
    /// assert_eq!(cpu.a(), 0x01);
    /// assert!(cpu.flag_c());
    /// ```
    pub fn run_program(&mut self, hex: &str, count: usize) -> Result<(), LoadError> {
        load_program(&mut self.memory, DEFAULT_PROGRAM_ADDRESS, hex)?;
        self.reset();
        self.run_instructions(count);
        Ok(())
    }

    /// Requests a maskable interrupt.
    ///
    /// Ignored (returns `false`) while the I flag is set. Otherwise PC and SR are
    /// pushed, I is set, PC is loaded from 0xFFFE/0xFFFF and 7 cycles are added
    /// to the in-flight count.
    pub fn irq(&mut self) -> bool {
        if self.status.contains(StatusFlags::INTERRUPT_DISABLE) {
            return false;
        }
        self.interrupt(IRQ_VECTOR, IRQ_CYCLES);
        true
    }

    /// Requests a non-maskable interrupt.
    ///
    /// Same sequence as [`irq`](Self::irq) but through the vector at 0xFFFA/0xFFFB,
    /// taking 8 cycles, and never masked.
    pub fn nmi(&mut self) {
        self.interrupt(NMI_VECTOR, NMI_CYCLES);
    }

    fn interrupt(&mut self, vector: u16, cycles: u8) {
        self.push_word(self.pc);
        let pushed = (self.status | StatusFlags::UNUSED) - StatusFlags::BREAK;
        self.push(pushed.bits());
        self.status.insert(StatusFlags::INTERRUPT_DISABLE);
        self.pc = self.read_word(vector);
        self.cycles = self.cycles.saturating_add(cycles);

        log::debug!("interrupt via ${:04X}: pc=${:04X}", vector, self.pc);
    }

    // ========== Bus and Stack Helpers ==========

    #[inline]
    pub(crate) fn read(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    #[inline]
    pub(crate) fn write(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Reads a little-endian word, wrapping past 0xFFFF.
    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Addressing mode of the instruction in flight.
    pub(crate) fn current_mode(&self) -> AddressingMode {
        OPCODE_TABLE[self.opcode as usize].addressing_mode
    }

    /// Loads the operand into `fetched`.
    ///
    /// Implied-mode instructions operate on the accumulator, which the resolver
    /// already copied into `fetched`.
    pub(crate) fn fetch(&mut self) -> u8 {
        if self.current_mode() != AddressingMode::Implied {
            self.fetched = self.read(self.addr_abs);
        }
        self.fetched
    }

    /// Stores a read-modify-write result to the accumulator or to memory.
    pub(crate) fn write_back(&mut self, value: u8) {
        if self.current_mode() == AddressingMode::Implied {
            self.a = value;
        } else {
            self.write(self.addr_abs, value);
        }
    }

    /// Sets Z and N from `value`.
    #[inline]
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.status.set(StatusFlags::ZERO, value == 0);
        self.status.set(StatusFlags::NEGATIVE, value & 0x80 != 0);
    }

    pub(crate) fn push(&mut self, value: u8) {
        self.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes high byte then low byte.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    /// Pulls low byte then high byte.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (`NV-BDIZC`).
    pub fn status(&self) -> u8 {
        self.status.bits()
    }

    /// Returns the status register as typed flags.
    pub fn flags(&self) -> StatusFlags {
        self.status
    }

    /// Returns the opcode latched by the most recent dispatch.
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Returns the number of cycles left before the next dispatch.
    pub fn cycles_remaining(&self) -> u8 {
        self.cycles
    }

    /// Returns the total number of clock ticks since construction.
    pub fn clock_count(&self) -> u64 {
        self.clock_count
    }

    /// Borrows the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutably borrows the memory bus, e.g. to load code between ticks.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and hands back its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.status.contains(StatusFlags::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.status.contains(StatusFlags::OVERFLOW)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.status.contains(StatusFlags::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.status.contains(StatusFlags::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.status.contains(StatusFlags::INTERRUPT_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.status.contains(StatusFlags::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.status.contains(StatusFlags::CARRY)
    }

    // ========== Setters (tests and debuggers) ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Overwrites the whole status register.
    pub fn set_status(&mut self, value: u8) {
        self.status = StatusFlags::from_bits_retain(value);
    }

    /// Sets or clears one or more flags.
    pub fn set_flag(&mut self, flag: StatusFlags, value: bool) {
        self.status.set(flag, value);
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.set_flag(StatusFlags::NEGATIVE, value);
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.set_flag(StatusFlags::OVERFLOW, value);
    }

    pub fn set_flag_b(&mut self, value: bool) {
        self.set_flag(StatusFlags::BREAK, value);
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.set_flag(StatusFlags::DECIMAL, value);
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.set_flag(StatusFlags::INTERRUPT_DISABLE, value);
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.set_flag(StatusFlags::ZERO, value);
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.set_flag(StatusFlags::CARRY, value);
    }

    /// Renders every register on its own line.
    ///
    /// # Examples
    ///
    /// ```
    /// use retro6502::{FlatMemory, CPU};
    ///
    /// let cpu = CPU::new(FlatMemory::new());
    /// assert!(cpu.dump().contains("SP: $FD"));
    /// ```
    pub fn dump(&self) -> String {
        format!(
            "A:  ${:02X}\nX:  ${:02X}\nY:  ${:02X}\nSP: ${:02X}\nSR: ${:02X} {}\nPC: ${:04X}\n",
            self.a,
            self.x,
            self.y,
            self.sp,
            self.status.bits(),
            self.status.to_letters(),
            self.pc
        )
    }
}

impl<M: MemoryBus> fmt::Display for CPU<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "PC:{:04X} A:{:02X} X:{:02X} Y:{:02X} SP:{:02X} SR:{}",
            self.pc,
            self.a,
            self.x,
            self.y,
            self.sp,
            self.status.to_letters()
        )
    }
}

impl<M: MemoryBus> fmt::Debug for CPU<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CPU")
            .field("a", &self.a)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("pc", &self.pc)
            .field("sp", &self.sp)
            .field("status", &self.status)
            .field("opcode", &self.opcode)
            .field("cycles", &self.cycles)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu() -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFC, 0x00);
        mem.write(0xFFFD, 0x80);
        CPU::new(mem)
    }

    #[test]
    fn test_cpu_initialization() {
        let cpu = setup_cpu();

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.status(), 0x00);
        assert_eq!(cpu.cycles_remaining(), RESET_CYCLES);
        assert_eq!(cpu.clock_count(), 0);
        assert!(!cpu.complete());
    }

    #[test]
    fn test_reset_latency_then_dispatch() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0xEA);

        for _ in 0..RESET_CYCLES {
            assert_eq!(cpu.pc(), 0x8000);
            cpu.clock();
        }
        assert!(cpu.complete());

        // Dispatch tick
        cpu.clock();
        assert_eq!(cpu.pc(), 0x8001);
        assert_eq!(cpu.opcode(), 0xEA);
        assert_eq!(cpu.cycles_remaining(), 1);

        cpu.clock();
        assert!(cpu.complete());
        assert_eq!(cpu.clock_count(), RESET_CYCLES as u64 + 2);
    }

    #[test]
    fn test_unused_flag_forced_on_dispatch() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0xEA);
        assert_eq!(cpu.status() & 0x20, 0);

        cpu.step();
        assert_eq!(cpu.status() & 0x20, 0x20);
    }

    #[test]
    fn test_stack_helpers() {
        let mut cpu = setup_cpu();
        cpu.push_word(0x1234);
        assert_eq!(cpu.sp(), 0xFB);
        assert_eq!(cpu.memory().read(0x01FD), 0x12);
        assert_eq!(cpu.memory().read(0x01FC), 0x34);
        assert_eq!(cpu.pull_word(), 0x1234);
        assert_eq!(cpu.sp(), 0xFD);
    }

    #[test]
    fn test_stack_pointer_wraps() {
        let mut cpu = setup_cpu();
        cpu.set_sp(0x00);
        cpu.push(0xAB);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.memory().read(0x0100), 0xAB);
        assert_eq!(cpu.pull(), 0xAB);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_display_and_dump() {
        let mut cpu = setup_cpu();
        cpu.set_a(0x05);
        cpu.set_flag_c(true);

        assert_eq!(
            cpu.to_string(),
            "PC:8000 A:05 X:00 Y:00 SP:FD SR:nvubdizC"
        );
        let dump = cpu.dump();
        assert!(dump.contains("A:  $05"));
        assert!(dump.contains("PC: $8000"));
        assert!(dump.contains("SR: $01 nvubdizC"));
    }
}
