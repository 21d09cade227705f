//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address
//! - JSR / RTS: Subroutine call and return
//! - BRK / RTI: Software interrupt and return from interrupt
//! - NOP: No operation (also used for every undefined opcode)

use crate::cpu::IRQ_VECTOR;
use crate::{MemoryBus, StatusFlags, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Both the absolute and the indirect form leave the destination in `addr_abs`; the
/// indirect page-wrap bug is reproduced by the resolver.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.pc = cpu.addr_abs;
    false
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR (PC - 1), high byte first, then
/// jumps. RTS adds the missing 1 back.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_address);
    cpu.pc = cpu.addr_abs;
    false
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.pc = cpu.pull_word().wrapping_add(1);
    false
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// 1. Pushes PC + 1, skipping the padding byte after the opcode (high byte first)
/// 2. Pushes SR with B and bit 5 set; the live B flag is left alone
/// 3. Sets the I flag
/// 4. Loads PC from the IRQ vector at $FFFE/$FFFF
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let return_address = cpu.pc.wrapping_add(1);
    cpu.push_word(return_address);

    let pushed = cpu.status | StatusFlags::BREAK | StatusFlags::UNUSED;
    cpu.push(pushed.bits());

    cpu.status.insert(StatusFlags::INTERRUPT_DISABLE);
    cpu.pc = cpu.read_word(IRQ_VECTOR);
    false
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls SR (B cleared, bit 5 set, since neither exists as a real latch) and
/// then PC. Unlike RTS, the pulled PC is used as-is.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let pulled = StatusFlags::from_bits_retain(cpu.pull());
    cpu.status = (pulled | StatusFlags::UNUSED) - StatusFlags::BREAK;
    cpu.pc = cpu.pull_word();
    false
}

/// Executes NOP and the undefined opcodes: nothing happens.
pub(crate) fn execute_nop<M: MemoryBus>(_cpu: &mut CPU<M>) -> bool {
    false
}
