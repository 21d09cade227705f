//! # Addressing Modes
//!
//! This module defines the 12 addressing modes of the 6502 and the resolver that
//! turns operand bytes into an effective address.
//!
//! The resolver runs right after the opcode fetch. It consumes the operand bytes
//! at PC (advancing PC past them), leaves the effective address in the CPU's
//! `addr_abs` scratch register (or the branch displacement in `addr_rel`), and
//! reports whether indexing crossed a page boundary.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// The accumulator form of the shift instructions (`ASL A`, `ROR A`, ...) is
/// expressed as [`AddressingMode::Implied`]: the operand is the accumulator.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand bytes. The operand, if any, is the accumulator.
    ///
    /// Examples: CLC, RTS, NOP, LSR A
    Implied,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X. +1 cycle on page crossing for reads.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y. +1 cycle on page crossing for reads.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y. +1 cycle on page crossing for reads.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implied => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// True when `a` and `b` lie in different 256-byte pages.
#[inline]
pub(crate) fn crosses_page(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves the operand of the instruction being dispatched.
    ///
    /// Returns `true` when indexing crossed a page boundary. Whether that actually
    /// costs a cycle is decided together with the instruction (see `clock`).
    pub(crate) fn resolve_address(&mut self, mode: AddressingMode) -> bool {
        match mode {
            AddressingMode::Implied => {
                self.fetched = self.a;
                false
            }
            AddressingMode::Immediate => {
                self.addr_abs = self.pc;
                self.pc = self.pc.wrapping_add(1);
                false
            }
            AddressingMode::ZeroPage => {
                self.addr_abs = self.read_pc_byte() as u16;
                false
            }
            AddressingMode::ZeroPageX => {
                self.addr_abs = self.read_pc_byte().wrapping_add(self.x) as u16;
                false
            }
            AddressingMode::ZeroPageY => {
                self.addr_abs = self.read_pc_byte().wrapping_add(self.y) as u16;
                false
            }
            AddressingMode::Relative => {
                // Sign-extend bit 7 into the high byte
                self.addr_rel = self.read_pc_byte() as i8 as u16;
                false
            }
            AddressingMode::Absolute => {
                self.addr_abs = self.read_pc_word();
                false
            }
            AddressingMode::AbsoluteX => {
                let base = self.read_pc_word();
                self.addr_abs = base.wrapping_add(self.x as u16);
                crosses_page(base, self.addr_abs)
            }
            AddressingMode::AbsoluteY => {
                let base = self.read_pc_word();
                self.addr_abs = base.wrapping_add(self.y as u16);
                crosses_page(base, self.addr_abs)
            }
            AddressingMode::Indirect => {
                let ptr = self.read_pc_word();
                let lo = self.read(ptr) as u16;
                // NMOS bug: the pointer's high byte is never carried into, so
                // JMP ($10FF) reads its target from $10FF and $1000.
                let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let hi = self.read(hi_addr) as u16;
                self.addr_abs = (hi << 8) | lo;
                false
            }
            AddressingMode::IndirectX => {
                let ptr = self.read_pc_byte().wrapping_add(self.x);
                self.addr_abs = self.read_zero_page_word(ptr);
                false
            }
            AddressingMode::IndirectY => {
                let ptr = self.read_pc_byte();
                let base = self.read_zero_page_word(ptr);
                self.addr_abs = base.wrapping_add(self.y as u16);
                crosses_page(base, self.addr_abs)
            }
        }
    }

    /// Reads the byte at PC and advances PC.
    fn read_pc_byte(&mut self) -> u8 {
        let value = self.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC by two.
    fn read_pc_word(&mut self) -> u16 {
        let lo = self.read_pc_byte() as u16;
        let hi = self.read_pc_byte() as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian pointer from zero page, wrapping $FF -> $00.
    fn read_zero_page_word(&self, ptr: u8) -> u16 {
        let lo = self.read(ptr as u16) as u16;
        let hi = self.read(ptr.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn cpu_at(pc: u16, operands: &[u8]) -> CPU<FlatMemory> {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.set_pc(pc);
        for (i, &byte) in operands.iter().enumerate() {
            cpu.memory_mut().write(pc.wrapping_add(i as u16), byte);
        }
        cpu
    }

    #[test]
    fn test_operand_sizes() {
        assert_eq!(AddressingMode::Implied.operand_bytes(), 0);
        assert_eq!(AddressingMode::Relative.operand_bytes(), 1);
        assert_eq!(AddressingMode::IndirectY.operand_bytes(), 1);
        assert_eq!(AddressingMode::Indirect.operand_bytes(), 2);
    }

    #[test]
    fn test_implied_copies_accumulator() {
        let mut cpu = cpu_at(0x0300, &[]);
        cpu.set_a(0x5A);
        assert!(!cpu.resolve_address(AddressingMode::Implied));
        assert_eq!(cpu.fetched, 0x5A);
        assert_eq!(cpu.pc(), 0x0300);
    }

    #[test]
    fn test_immediate_points_at_pc() {
        let mut cpu = cpu_at(0x0300, &[0x42]);
        cpu.resolve_address(AddressingMode::Immediate);
        assert_eq!(cpu.addr_abs, 0x0300);
        assert_eq!(cpu.pc(), 0x0301);
    }

    #[test]
    fn test_zero_page_x_wraps() {
        let mut cpu = cpu_at(0x0300, &[0xF0]);
        cpu.set_x(0x20);
        cpu.resolve_address(AddressingMode::ZeroPageX);
        assert_eq!(cpu.addr_abs, 0x0010);
        assert_eq!(cpu.pc(), 0x0301);
    }

    #[test]
    fn test_absolute_x_page_cross() {
        let mut cpu = cpu_at(0x0300, &[0xF0, 0x12]);
        cpu.set_x(0x20);
        assert!(cpu.resolve_address(AddressingMode::AbsoluteX));
        assert_eq!(cpu.addr_abs, 0x1310);
        assert_eq!(cpu.pc(), 0x0302);

        let mut cpu = cpu_at(0x0300, &[0x00, 0x12]);
        cpu.set_x(0x20);
        assert!(!cpu.resolve_address(AddressingMode::AbsoluteX));
        assert_eq!(cpu.addr_abs, 0x1220);
    }

    #[test]
    fn test_relative_sign_extends() {
        let mut cpu = cpu_at(0x0300, &[0xFE]);
        cpu.resolve_address(AddressingMode::Relative);
        assert_eq!(cpu.addr_rel, 0xFFFE);

        let mut cpu = cpu_at(0x0300, &[0x7F]);
        cpu.resolve_address(AddressingMode::Relative);
        assert_eq!(cpu.addr_rel, 0x007F);
    }

    #[test]
    fn test_indirect_page_wrap_bug() {
        let mut cpu = cpu_at(0x0300, &[0xFF, 0x10]);
        cpu.memory_mut().write(0x10FF, 0x34);
        cpu.memory_mut().write(0x1000, 0x12);
        cpu.memory_mut().write(0x1100, 0x99);
        cpu.resolve_address(AddressingMode::Indirect);
        assert_eq!(cpu.addr_abs, 0x1234);
    }

    #[test]
    fn test_indirect_y_wraps_pointer_in_zero_page() {
        let mut cpu = cpu_at(0x0300, &[0xFF]);
        cpu.memory_mut().write(0x00FF, 0xF0);
        cpu.memory_mut().write(0x0000, 0x20);
        cpu.set_y(0x20);
        assert!(cpu.resolve_address(AddressingMode::IndirectY));
        assert_eq!(cpu.addr_abs, 0x2110);
    }
}
