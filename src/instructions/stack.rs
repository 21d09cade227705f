//! # Stack Instructions
//!
//! PHA/PLA move the accumulator through page 1; PHP/PLP move the status register.
//!
//! B and bit 5 only exist on the stack copy of SR: PHP pushes both set, PLP
//! discards B and forces bit 5 on.

use crate::{MemoryBus, StatusFlags, CPU};

/// Executes the PHA (Push Accumulator) instruction.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.push(cpu.a);
    false
}

/// Executes the PHP (Push Processor Status) instruction.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let pushed = cpu.status | StatusFlags::BREAK | StatusFlags::UNUSED;
    cpu.push(pushed.bits());
    false
}

/// Executes the PLA (Pull Accumulator) instruction. Flags: Z, N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.a = cpu.pull();
    cpu.set_zn(cpu.a);
    false
}

/// Executes the PLP (Pull Processor Status) instruction.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let pulled = StatusFlags::from_bits_retain(cpu.pull());
    cpu.status = (pulled | StatusFlags::UNUSED) - StatusFlags::BREAK;
    false
}
