//! # Load and Store Instructions
//!
//! LDA/LDX/LDY copy memory into a register and set Z and N.
//! STA/STX/STY copy a register into memory and leave the flags alone.
//!
//! Loads pay the indexed page-crossing penalty; stores always take their fixed
//! cycle count.

use crate::{MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.a = cpu.fetch();
    cpu.set_zn(cpu.a);
    true
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.x = cpu.fetch();
    cpu.set_zn(cpu.x);
    true
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.y = cpu.fetch();
    cpu.set_zn(cpu.y);
    true
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.write(cpu.addr_abs, cpu.a);
    false
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.write(cpu.addr_abs, cpu.x);
    false
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.write(cpu.addr_abs, cpu.y);
    false
}
