//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL and ROR operate on the accumulator (implied form) or on memory.
//! The bit shifted out always lands in the carry flag; the rotates feed the old
//! carry into the vacated bit.

use crate::{MemoryBus, StatusFlags, CPU};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// C = old bit 7, bit 0 = 0. Flags: C, Z, N.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch();
    let result = value << 1;

    cpu.status.set(StatusFlags::CARRY, value & 0x80 != 0);
    cpu.set_zn(result);
    cpu.write_back(result);
    false
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// C = old bit 0, bit 7 = 0, so N is always cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch();
    let result = value >> 1;

    cpu.status.set(StatusFlags::CARRY, value & 0x01 != 0);
    cpu.set_zn(result);
    cpu.write_back(result);
    false
}

/// Executes the ROL (Rotate Left) instruction.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch();
    let carry_in = cpu.flag_c() as u8;
    let result = (value << 1) | carry_in;

    cpu.status.set(StatusFlags::CARRY, value & 0x80 != 0);
    cpu.set_zn(result);
    cpu.write_back(result);
    false
}

/// Executes the ROR (Rotate Right) instruction.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch();
    let carry_in = (cpu.flag_c() as u8) << 7;
    let result = (value >> 1) | carry_in;

    cpu.status.set(StatusFlags::CARRY, value & 0x01 != 0);
    cpu.set_zn(result);
    cpu.write_back(result);
    false
}
