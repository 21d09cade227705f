//! # Increment and Decrement Instructions
//!
//! INC/DEC modify memory in place; INX/INY/DEX/DEY modify an index register.
//! All wrap at 8 bits and set Z and N from the result.

use crate::{MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let result = cpu.fetch().wrapping_add(1);
    cpu.write(cpu.addr_abs, result);
    cpu.set_zn(result);
    false
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let result = cpu.fetch().wrapping_sub(1);
    cpu.write(cpu.addr_abs, result);
    cpu.set_zn(result);
    false
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_zn(cpu.x);
    false
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_zn(cpu.y);
    false
}

pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_zn(cpu.x);
    false
}

pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_zn(cpu.y);
    false
}
