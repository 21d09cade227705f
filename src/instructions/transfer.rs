//! # Register Transfer Instructions
//!
//! Every transfer sets Z and N from the copied value except TXS, which only
//! moves X into the stack pointer.

use crate::{MemoryBus, CPU};

pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.x = cpu.a;
    cpu.set_zn(cpu.x);
    false
}

pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.y = cpu.a;
    cpu.set_zn(cpu.y);
    false
}

pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.a = cpu.x;
    cpu.set_zn(cpu.a);
    false
}

pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.a = cpu.y;
    cpu.set_zn(cpu.a);
    false
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.x = cpu.sp;
    cpu.set_zn(cpu.x);
    false
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction. No flags change.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.sp = cpu.x;
    false
}
