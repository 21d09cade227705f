//! # Opcode Table
//!
//! This module contains the 256-entry opcode table that drives instruction dispatch.
//!
//! Each entry pairs an instruction tag ([`Mnemonic`]) with an addressing mode tag
//! ([`AddressingMode`]) and the base cycle cost. The engine resolves both tags through
//! plain `match` statements, so the table is pure static data.
//!
//! The table covers:
//! - **151 documented opcodes** - official NMOS 6502 instructions
//! - **105 undefined opcodes** - either `NOP` (the undocumented NOP variants) or
//!   [`Mnemonic::XXX`], both executed as no-ops with implied addressing

use crate::addressing::AddressingMode;

/// The 56 documented 6502 instructions plus the catch-all for undefined opcodes.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    ADC, AND, ASL, BCC, BCS, BEQ, BIT, BMI, BNE, BPL, BRK, BVC, BVS, CLC,
    CLD, CLI, CLV, CMP, CPX, CPY, DEC, DEX, DEY, EOR, INC, INX, INY, JMP,
    JSR, LDA, LDX, LDY, LSR, NOP, ORA, PHA, PHP, PLA, PLP, ROL, ROR, RTI,
    RTS, SBC, SEC, SED, SEI, STA, STX, STY, TAX, TAY, TSX, TXA, TXS, TYA,
    /// Undefined opcode. Executes as a no-op.
    XXX,
}

impl Mnemonic {
    /// Three-letter assembler name, `"???"` for undefined opcodes.
    pub const fn name(self) -> &'static str {
        use Mnemonic::*;
        match self {
            ADC => "ADC", AND => "AND", ASL => "ASL", BCC => "BCC", BCS => "BCS",
            BEQ => "BEQ", BIT => "BIT", BMI => "BMI", BNE => "BNE", BPL => "BPL",
            BRK => "BRK", BVC => "BVC", BVS => "BVS", CLC => "CLC", CLD => "CLD",
            CLI => "CLI", CLV => "CLV", CMP => "CMP", CPX => "CPX", CPY => "CPY",
            DEC => "DEC", DEX => "DEX", DEY => "DEY", EOR => "EOR", INC => "INC",
            INX => "INX", INY => "INY", JMP => "JMP", JSR => "JSR", LDA => "LDA",
            LDX => "LDX", LDY => "LDY", LSR => "LSR", NOP => "NOP", ORA => "ORA",
            PHA => "PHA", PHP => "PHP", PLA => "PLA", PLP => "PLP", ROL => "ROL",
            ROR => "ROR", RTI => "RTI", RTS => "RTS", SBC => "SBC", SEC => "SEC",
            SED => "SED", SEI => "SEI", STA => "STA", STX => "STX", STY => "STY",
            TAX => "TAX", TAY => "TAY", TSX => "TSX", TXA => "TXA", TXS => "TXS",
            TYA => "TYA", XXX => "???",
        }
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use retro6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::LDA);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction executed for this opcode.
    pub mnemonic: Mnemonic,

    /// Addressing mode used to resolve the operand.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost, before page-crossing and branch penalties.
    pub base_cycles: u8,
}

impl OpcodeMetadata {
    /// Total encoded size in bytes (opcode + operands).
    pub const fn size_bytes(&self) -> u8 {
        1 + self.addressing_mode.operand_bytes()
    }

    /// True for opcodes with no documented instruction.
    pub const fn is_illegal(&self) -> bool {
        matches!(self.mnemonic, Mnemonic::XXX)
    }
}

const fn op(mnemonic: Mnemonic, addressing_mode: AddressingMode, base_cycles: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        base_cycles,
    }
}

use AddressingMode::{
    Absolute as ABS, AbsoluteX as ABX, AbsoluteY as ABY, Immediate as IMM, Implied as IMP,
    Indirect as IND, IndirectX as IZX, IndirectY as IZY, Relative as REL, ZeroPage as ZP0,
    ZeroPageX as ZPX, ZeroPageY as ZPY,
};
use Mnemonic::*;

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// Rows are laid out by high nibble, sixteen entries per row.
///
/// # Examples
///
/// ```
/// use retro6502::{Mnemonic, OPCODE_TABLE};
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, Mnemonic::BRK);
/// assert_eq!(brk.base_cycles, 7);
///
/// let illegal = &OPCODE_TABLE[0x02];
/// assert!(illegal.is_illegal());
/// ```
#[rustfmt::skip]
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    op(BRK, IMP, 7), op(ORA, IZX, 6), op(XXX, IMP, 2), op(XXX, IMP, 8),
    op(NOP, IMP, 3), op(ORA, ZP0, 3), op(ASL, ZP0, 5), op(XXX, IMP, 5),
    op(PHP, IMP, 3), op(ORA, IMM, 2), op(ASL, IMP, 2), op(XXX, IMP, 2),
    op(NOP, IMP, 4), op(ORA, ABS, 4), op(ASL, ABS, 6), op(XXX, IMP, 6),
    // 0x10
    op(BPL, REL, 2), op(ORA, IZY, 5), op(XXX, IMP, 2), op(XXX, IMP, 8),
    op(NOP, IMP, 4), op(ORA, ZPX, 4), op(ASL, ZPX, 6), op(XXX, IMP, 6),
    op(CLC, IMP, 2), op(ORA, ABY, 4), op(NOP, IMP, 2), op(XXX, IMP, 7),
    op(NOP, IMP, 4), op(ORA, ABX, 4), op(ASL, ABX, 7), op(XXX, IMP, 7),
    // 0x20
    op(JSR, ABS, 6), op(AND, IZX, 6), op(XXX, IMP, 2), op(XXX, IMP, 8),
    op(BIT, ZP0, 3), op(AND, ZP0, 3), op(ROL, ZP0, 5), op(XXX, IMP, 5),
    op(PLP, IMP, 4), op(AND, IMM, 2), op(ROL, IMP, 2), op(XXX, IMP, 2),
    op(BIT, ABS, 4), op(AND, ABS, 4), op(ROL, ABS, 6), op(XXX, IMP, 6),
    // 0x30
    op(BMI, REL, 2), op(AND, IZY, 5), op(XXX, IMP, 2), op(XXX, IMP, 8),
    op(NOP, IMP, 4), op(AND, ZPX, 4), op(ROL, ZPX, 6), op(XXX, IMP, 6),
    op(SEC, IMP, 2), op(AND, ABY, 4), op(NOP, IMP, 2), op(XXX, IMP, 7),
    op(NOP, IMP, 4), op(AND, ABX, 4), op(ROL, ABX, 7), op(XXX, IMP, 7),
    // 0x40
    op(RTI, IMP, 6), op(EOR, IZX, 6), op(XXX, IMP, 2), op(XXX, IMP, 8),
    op(NOP, IMP, 3), op(EOR, ZP0, 3), op(LSR, ZP0, 5), op(XXX, IMP, 5),
    op(PHA, IMP, 3), op(EOR, IMM, 2), op(LSR, IMP, 2), op(XXX, IMP, 2),
    op(JMP, ABS, 3), op(EOR, ABS, 4), op(LSR, ABS, 6), op(XXX, IMP, 6),
    // 0x50
    op(BVC, REL, 2), op(EOR, IZY, 5), op(XXX, IMP, 2), op(XXX, IMP, 8),
    op(NOP, IMP, 4), op(EOR, ZPX, 4), op(LSR, ZPX, 6), op(XXX, IMP, 6),
    op(CLI, IMP, 2), op(EOR, ABY, 4), op(NOP, IMP, 2), op(XXX, IMP, 7),
    op(NOP, IMP, 4), op(EOR, ABX, 4), op(LSR, ABX, 7), op(XXX, IMP, 7),
    // 0x60
    op(RTS, IMP, 6), op(ADC, IZX, 6), op(XXX, IMP, 2), op(XXX, IMP, 8),
    op(NOP, IMP, 3), op(ADC, ZP0, 3), op(ROR, ZP0, 5), op(XXX, IMP, 5),
    op(PLA, IMP, 4), op(ADC, IMM, 2), op(ROR, IMP, 2), op(XXX, IMP, 2),
    op(JMP, IND, 5), op(ADC, ABS, 4), op(ROR, ABS, 6), op(XXX, IMP, 6),
    // 0x70
    op(BVS, REL, 2), op(ADC, IZY, 5), op(XXX, IMP, 2), op(XXX, IMP, 8),
    op(NOP, IMP, 4), op(ADC, ZPX, 4), op(ROR, ZPX, 6), op(XXX, IMP, 6),
    op(SEI, IMP, 2), op(ADC, ABY, 4), op(NOP, IMP, 2), op(XXX, IMP, 7),
    op(NOP, IMP, 4), op(ADC, ABX, 4), op(ROR, ABX, 7), op(XXX, IMP, 7),
    // 0x80
    op(NOP, IMP, 2), op(STA, IZX, 6), op(NOP, IMP, 2), op(XXX, IMP, 6),
    op(STY, ZP0, 3), op(STA, ZP0, 3), op(STX, ZP0, 3), op(XXX, IMP, 3),
    op(DEY, IMP, 2), op(NOP, IMP, 2), op(TXA, IMP, 2), op(XXX, IMP, 2),
    op(STY, ABS, 4), op(STA, ABS, 4), op(STX, ABS, 4), op(XXX, IMP, 4),
    // 0x90
    op(BCC, REL, 2), op(STA, IZY, 6), op(XXX, IMP, 2), op(XXX, IMP, 6),
    op(STY, ZPX, 4), op(STA, ZPX, 4), op(STX, ZPY, 4), op(XXX, IMP, 4),
    op(TYA, IMP, 2), op(STA, ABY, 5), op(TXS, IMP, 2), op(XXX, IMP, 5),
    op(NOP, IMP, 5), op(STA, ABX, 5), op(XXX, IMP, 5), op(XXX, IMP, 5),
    // 0xA0
    op(LDY, IMM, 2), op(LDA, IZX, 6), op(LDX, IMM, 2), op(XXX, IMP, 6),
    op(LDY, ZP0, 3), op(LDA, ZP0, 3), op(LDX, ZP0, 3), op(XXX, IMP, 3),
    op(TAY, IMP, 2), op(LDA, IMM, 2), op(TAX, IMP, 2), op(XXX, IMP, 2),
    op(LDY, ABS, 4), op(LDA, ABS, 4), op(LDX, ABS, 4), op(XXX, IMP, 4),
    // 0xB0
    op(BCS, REL, 2), op(LDA, IZY, 5), op(XXX, IMP, 2), op(XXX, IMP, 5),
    op(LDY, ZPX, 4), op(LDA, ZPX, 4), op(LDX, ZPY, 4), op(XXX, IMP, 4),
    op(CLV, IMP, 2), op(LDA, ABY, 4), op(TSX, IMP, 2), op(XXX, IMP, 4),
    op(LDY, ABX, 4), op(LDA, ABX, 4), op(LDX, ABY, 4), op(XXX, IMP, 4),
    // 0xC0
    op(CPY, IMM, 2), op(CMP, IZX, 6), op(NOP, IMP, 2), op(XXX, IMP, 8),
    op(CPY, ZP0, 3), op(CMP, ZP0, 3), op(DEC, ZP0, 5), op(XXX, IMP, 5),
    op(INY, IMP, 2), op(CMP, IMM, 2), op(DEX, IMP, 2), op(XXX, IMP, 2),
    op(CPY, ABS, 4), op(CMP, ABS, 4), op(DEC, ABS, 6), op(XXX, IMP, 6),
    // 0xD0
    op(BNE, REL, 2), op(CMP, IZY, 5), op(XXX, IMP, 2), op(XXX, IMP, 8),
    op(NOP, IMP, 4), op(CMP, ZPX, 4), op(DEC, ZPX, 6), op(XXX, IMP, 6),
    op(CLD, IMP, 2), op(CMP, ABY, 4), op(NOP, IMP, 2), op(XXX, IMP, 7),
    op(NOP, IMP, 4), op(CMP, ABX, 4), op(DEC, ABX, 7), op(XXX, IMP, 7),
    // 0xE0
    op(CPX, IMM, 2), op(SBC, IZX, 6), op(NOP, IMP, 2), op(XXX, IMP, 8),
    op(CPX, ZP0, 3), op(SBC, ZP0, 3), op(INC, ZP0, 5), op(XXX, IMP, 5),
    op(INX, IMP, 2), op(SBC, IMM, 2), op(NOP, IMP, 2), op(XXX, IMP, 2),
    op(CPX, ABS, 4), op(SBC, ABS, 4), op(INC, ABS, 6), op(XXX, IMP, 6),
    // 0xF0
    op(BEQ, REL, 2), op(SBC, IZY, 5), op(XXX, IMP, 2), op(XXX, IMP, 8),
    op(NOP, IMP, 4), op(SBC, ZPX, 4), op(INC, ZPX, 6), op(XXX, IMP, 6),
    op(SED, IMP, 2), op(SBC, ABY, 4), op(NOP, IMP, 2), op(XXX, IMP, 7),
    op(NOP, IMP, 4), op(SBC, ABX, 4), op(INC, ABX, 7), op(XXX, IMP, 7),
];
