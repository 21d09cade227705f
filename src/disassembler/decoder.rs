//! Instruction decoder for the 6502 disassembler

use crate::disassembler::Instruction;
use crate::opcodes::OPCODE_TABLE;

/// Decode a single instruction from a byte slice
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `address` - The memory address of this instruction
///
/// # Returns
///
/// `None` only for an empty slice. When the slice ends early the instruction is
/// returned with whatever operand bytes were available.
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<Instruction> {
    let (&opcode, rest) = bytes.split_first()?;

    let mut instr = decode_opcode(opcode, address);
    let wanted = instr.size_bytes as usize - 1;
    instr.operand_bytes = rest.iter().take(wanted).copied().collect();
    Some(instr)
}

/// Table lookup for `opcode` with no operand bytes filled in.
pub(crate) fn decode_opcode(opcode: u8, address: u16) -> Instruction {
    let metadata = &OPCODE_TABLE[opcode as usize];

    Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        addressing_mode: metadata.addressing_mode,
        operand_bytes: Vec::new(),
        size_bytes: metadata.size_bytes(),
        base_cycles: metadata.base_cycles,
    }
}
