//! Fuzz target for the disassembler.
//!
//! This target feeds arbitrary byte sequences to the disassembler
//! to find edge cases and crashes in instruction decoding.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use retro6502::{disassemble, format_instruction, format_listing, DisassemblyOptions};

/// Disassembly options for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzOptions {
    start_address: u16,
    hex_dump: bool,
    show_offsets: bool,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    options: FuzzOptions,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 {
        return;
    }

    let options = DisassemblyOptions {
        start_address: input.options.start_address,
        hex_dump: input.options.hex_dump,
        show_offsets: input.options.show_offsets,
    };

    let instructions = disassemble(&input.bytes, options);

    let mut consumed: usize = 0;
    let mut expected_address = input.options.start_address;

    for (i, instr) in instructions.iter().enumerate() {
        assert_eq!(instr.address, expected_address);
        assert!(instr.size_bytes >= 1 && instr.size_bytes <= 3);

        // Only the final instruction may be cut short
        if instr.is_truncated() {
            assert_eq!(i, instructions.len() - 1);
        }

        assert!(!format_instruction(instr).is_empty());

        let len = instr.operand_bytes.len() + 1;
        consumed += len;
        expected_address = expected_address.wrapping_add(len as u16);
    }

    // Every input byte belongs to exactly one instruction
    assert_eq!(consumed, input.bytes.len());

    let listing = format_listing(&instructions, options);
    assert_eq!(listing.lines().count(), instructions.len());
});
