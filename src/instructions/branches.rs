//! # Branch Instructions
//!
//! This module implements the conditional branch operations
//! (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS).
//!
//! All branch instructions use relative addressing with a signed 8-bit offset,
//! measured from the address of the following instruction.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page

use crate::addressing::crosses_page;
use crate::{MemoryBus, StatusFlags, CPU};

/// Branches when `flag` is in state `expected`.
///
/// The taken and page-crossing cycles are charged directly to the instruction in
/// flight, so this never asks for the generic page penalty.
pub(crate) fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, flag: StatusFlags, expected: bool) -> bool {
    if cpu.status.contains(flag) != expected {
        return false;
    }

    cpu.cycles += 1;

    let target = cpu.pc.wrapping_add(cpu.addr_rel);
    if crosses_page(cpu.pc, target) {
        cpu.cycles += 1;
    }

    cpu.addr_abs = target;
    cpu.pc = target;
    false
}
