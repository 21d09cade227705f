//! # Status Flag Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED and CLV each set or clear a single flag. They
//! share one implementation parameterized by the flag and its new state.

use crate::{MemoryBus, StatusFlags, CPU};

/// Sets `flag` to `value`. No other state changes.
pub(crate) fn set_flag<M: MemoryBus>(cpu: &mut CPU<M>, flag: StatusFlags, value: bool) -> bool {
    cpu.status.set(flag, value);
    false
}
