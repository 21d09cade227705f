//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function taking a mutable reference to the CPU. By the
//! time it runs, the addressing mode has already been resolved into the CPU's scratch
//! registers.
//!
//! Every function returns whether the instruction is one of the reads that pay the
//! page-crossing penalty; `CPU::clock` charges the extra cycle only when the resolver
//! also reported a crossing.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, INX, INY, DEC, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

use crate::opcodes::Mnemonic;
use crate::{MemoryBus, StatusFlags, CPU};

/// Runs the instruction identified by `mnemonic` against the resolved operand.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut CPU<M>, mnemonic: Mnemonic) -> bool {
    use Mnemonic::*;

    match mnemonic {
        ADC => alu::execute_adc(cpu),
        SBC => alu::execute_sbc(cpu),
        AND => alu::execute_and(cpu),
        ORA => alu::execute_ora(cpu),
        EOR => alu::execute_eor(cpu),
        CMP => alu::execute_cmp(cpu),
        CPX => alu::execute_cpx(cpu),
        CPY => alu::execute_cpy(cpu),
        BIT => alu::execute_bit(cpu),

        BCC => branches::branch_if(cpu, StatusFlags::CARRY, false),
        BCS => branches::branch_if(cpu, StatusFlags::CARRY, true),
        BEQ => branches::branch_if(cpu, StatusFlags::ZERO, true),
        BNE => branches::branch_if(cpu, StatusFlags::ZERO, false),
        BMI => branches::branch_if(cpu, StatusFlags::NEGATIVE, true),
        BPL => branches::branch_if(cpu, StatusFlags::NEGATIVE, false),
        BVS => branches::branch_if(cpu, StatusFlags::OVERFLOW, true),
        BVC => branches::branch_if(cpu, StatusFlags::OVERFLOW, false),

        ASL => shifts::execute_asl(cpu),
        LSR => shifts::execute_lsr(cpu),
        ROL => shifts::execute_rol(cpu),
        ROR => shifts::execute_ror(cpu),

        LDA => load_store::execute_lda(cpu),
        LDX => load_store::execute_ldx(cpu),
        LDY => load_store::execute_ldy(cpu),
        STA => load_store::execute_sta(cpu),
        STX => load_store::execute_stx(cpu),
        STY => load_store::execute_sty(cpu),

        INC => inc_dec::execute_inc(cpu),
        INX => inc_dec::execute_inx(cpu),
        INY => inc_dec::execute_iny(cpu),
        DEC => inc_dec::execute_dec(cpu),
        DEX => inc_dec::execute_dex(cpu),
        DEY => inc_dec::execute_dey(cpu),

        JMP => control::execute_jmp(cpu),
        JSR => control::execute_jsr(cpu),
        RTS => control::execute_rts(cpu),
        RTI => control::execute_rti(cpu),
        BRK => control::execute_brk(cpu),
        NOP | XXX => control::execute_nop(cpu),

        PHA => stack::execute_pha(cpu),
        PHP => stack::execute_php(cpu),
        PLA => stack::execute_pla(cpu),
        PLP => stack::execute_plp(cpu),

        CLC => flags::set_flag(cpu, StatusFlags::CARRY, false),
        SEC => flags::set_flag(cpu, StatusFlags::CARRY, true),
        CLI => flags::set_flag(cpu, StatusFlags::INTERRUPT_DISABLE, false),
        SEI => flags::set_flag(cpu, StatusFlags::INTERRUPT_DISABLE, true),
        CLD => flags::set_flag(cpu, StatusFlags::DECIMAL, false),
        SED => flags::set_flag(cpu, StatusFlags::DECIMAL, true),
        CLV => flags::set_flag(cpu, StatusFlags::OVERFLOW, false),

        TAX => transfer::execute_tax(cpu),
        TAY => transfer::execute_tay(cpu),
        TXA => transfer::execute_txa(cpu),
        TYA => transfer::execute_tya(cpu),
        TSX => transfer::execute_tsx(cpu),
        TXS => transfer::execute_txs(cpu),
    }
}
