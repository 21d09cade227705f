//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC / SBC: Add / subtract with carry (binary mode only)
//! - AND / ORA / EOR: Bitwise logic on the accumulator
//! - CMP / CPX / CPY: Register comparisons
//! - BIT: Bit test

use crate::{MemoryBus, StatusFlags, CPU};

/// Adds `value` and the carry flag to the accumulator, updating C, Z, V and N.
///
/// SBC reuses this with the operand's one's complement, which is exactly how the
/// binary-mode 6502 subtracts.
fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.flag_c() as u16;

    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.status.set(StatusFlags::CARRY, sum > 0xFF);

    // Overflow: both operands share a sign and the result's sign differs
    let overflow = !(a ^ value) & (a ^ result) & 0x80 != 0;
    cpu.status.set(StatusFlags::OVERFLOW, overflow);

    cpu.a = result;
    cpu.set_zn(result);
}

/// Executes the ADC (Add with Carry) instruction.
///
/// A = A + M + C. Flags: C, Z, V, N.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch();
    add_with_carry(cpu, value);
    true
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A = A - M - (1 - C). Flags: C (set when no borrow), Z, V, N.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch() ^ 0xFF;
    add_with_carry(cpu, value);
    true
}

/// Executes the AND (Logical AND) instruction. Flags: Z, N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch();
    cpu.a &= value;
    cpu.set_zn(cpu.a);
    true
}

/// Executes the ORA (Logical Inclusive OR) instruction. Flags: Z, N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch();
    cpu.a |= value;
    cpu.set_zn(cpu.a);
    true
}

/// Executes the EOR (Exclusive OR) instruction. Flags: Z, N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch();
    cpu.a ^= value;
    cpu.set_zn(cpu.a);
    true
}

/// Shared compare: C = register >= M, Z = equal, N = bit 7 of the difference.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8) {
    let value = cpu.fetch();
    let difference = register.wrapping_sub(value);

    cpu.status.set(StatusFlags::CARRY, register >= value);
    cpu.set_zn(difference);
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let register = cpu.a;
    compare(cpu, register);
    true
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let register = cpu.x;
    compare(cpu, register);
    false
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let register = cpu.y;
    compare(cpu, register);
    false
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z reflects `A & M`; N and V are copied straight from bits 7 and 6 of M.
/// The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch();

    cpu.status.set(StatusFlags::ZERO, cpu.a & value == 0);
    cpu.status.set(StatusFlags::NEGATIVE, value & 0x80 != 0);
    cpu.status.set(StatusFlags::OVERFLOW, value & 0x40 != 0);
    false
}
