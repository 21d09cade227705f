//! Fuzz target for the hex program loader.
//!
//! Arbitrary text must either load completely (bytes and reset vector written)
//! or fail without touching memory.

#![no_main]

use libfuzzer_sys::fuzz_target;
use retro6502::{load_program, FlatMemory, MemoryBus};

fuzz_target!(|input: (u16, &str)| {
    let (base, hex) = input;
    let mut memory = FlatMemory::new();

    match load_program(&mut memory, base, hex) {
        Ok(len) => {
            assert_eq!(len, hex.split_whitespace().count());
            assert!(base as usize + len <= 0x10000);
            assert_eq!(memory.read(0xFFFC), base as u8);
            assert_eq!(memory.read(0xFFFD), (base >> 8) as u8);
        }
        Err(_) => {
            assert!(memory.as_slice().iter().all(|&b| b == 0));
        }
    }
});
