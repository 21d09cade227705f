//! # Program Loader
//!
//! Turns whitespace-separated hex text (`"a9 05 69 02"`) into bytes on a bus and
//! points the reset vector at them, so the next `reset` starts the program.

use thiserror::Error;

use crate::cpu::RESET_VECTOR;
use crate::MemoryBus;

/// Where [`CPU::run_program`](crate::CPU::run_program) places programs.
pub const DEFAULT_PROGRAM_ADDRESS: u16 = 0x0600;

/// Errors that can occur while loading a hex program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The input contained no tokens.
    #[error("program is empty")]
    Empty,

    /// A token was not exactly two hex digits.
    #[error("invalid byte {token:?} at token {index}")]
    InvalidToken { index: usize, token: String },

    /// The program would run past the end of the address space.
    #[error("{len} bytes do not fit at ${base:04X}")]
    TooLarge { base: u16, len: usize },
}

/// Parses every token up front so a bad program leaves the bus untouched.
fn parse_hex(hex: &str) -> Result<Vec<u8>, LoadError> {
    let bytes = hex
        .split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            let well_formed = token.len() == 2 && token.bytes().all(|b| b.is_ascii_hexdigit());
            if !well_formed {
                return Err(LoadError::InvalidToken {
                    index,
                    token: token.to_string(),
                });
            }
            u8::from_str_radix(token, 16).map_err(|_| LoadError::InvalidToken {
                index,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<u8>, LoadError>>()?;

    if bytes.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(bytes)
}

/// Writes a hex program to `memory` at `base` and sets the reset vector to `base`.
///
/// Tokens are separated by any whitespace and must be exactly two hex digits,
/// upper or lower case. Nothing is written unless the whole program is valid and
/// fits below $10000. Returns the number of program bytes written.
///
/// # Examples
///
/// ```
/// use retro6502::{load_program, FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// let len = load_program(&mut mem, 0x0600, "a9 05\n69 02").unwrap();
///
/// assert_eq!(len, 4);
/// assert_eq!(mem.read(0x0600), 0xA9);
/// assert_eq!(mem.read(0xFFFC), 0x00);
/// assert_eq!(mem.read(0xFFFD), 0x06);
/// ```
pub fn load_program<M: MemoryBus>(memory: &mut M, base: u16, hex: &str) -> Result<usize, LoadError> {
    let bytes = parse_hex(hex)?;

    let len = bytes.len();
    if base as usize + len > 0x10000 {
        return Err(LoadError::TooLarge { base, len });
    }

    for (offset, &byte) in bytes.iter().enumerate() {
        memory.write(base + offset as u16, byte);
    }

    let [lo, hi] = base.to_le_bytes();
    memory.write(RESET_VECTOR, lo);
    memory.write(RESET_VECTOR + 1, hi);

    log::debug!("loaded {} bytes at ${:04X}", len, base);
    Ok(len)
}
