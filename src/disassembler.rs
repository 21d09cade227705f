//! 6502 Disassembler Module
//!
//! Converts binary machine code into human-readable assembly mnemonics.
//!
//! Decoding is driven by the same [`OPCODE_TABLE`](crate::OPCODE_TABLE) the CPU
//! executes from, so the listing always agrees with what the engine would do.
//! Undefined opcodes decode as one-byte `???` instructions.

pub mod decoder;
pub mod formatter;

use std::fmt;

use crate::addressing::AddressingMode;
use crate::opcodes::Mnemonic;
use crate::{MemoryBus, CPU};

pub use formatter::{format_instruction, format_listing};

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction executed for this opcode
    pub mnemonic: Mnemonic,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Operand bytes actually present. Shorter than the encoding requires when
    /// the input ends mid-instruction.
    pub operand_bytes: Vec<u8>,

    /// Encoded size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,

    /// Base cycle cost (excluding page-crossing penalties)
    pub base_cycles: u8,
}

impl Instruction {
    /// True when the input ran out before all operand bytes were read.
    pub fn is_truncated(&self) -> bool {
        self.operand_bytes.len() + 1 < self.size_bytes as usize
    }

    /// Opcode followed by the operand bytes.
    pub fn bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size_bytes as usize);
        bytes.push(self.opcode);
        bytes.extend_from_slice(&self.operand_bytes);
        bytes
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&format_instruction(self))
    }
}

/// Options controlling disassembly output
#[derive(Debug, Clone, Copy)]
pub struct DisassemblyOptions {
    /// Address of the first byte (affects address display and branch targets)
    pub start_address: u16,

    /// Whether listings include the raw instruction bytes
    pub hex_dump: bool,

    /// Whether listings prefix each line with its address
    pub show_offsets: bool,
}

impl Default for DisassemblyOptions {
    fn default() -> Self {
        Self {
            start_address: 0x0000,
            hex_dump: false,
            show_offsets: false,
        }
    }
}

/// Disassemble a byte slice into a vector of instructions
///
/// # Arguments
///
/// * `bytes` - The machine code to disassemble
/// * `options` - Disassembly options; only `start_address` affects decoding
///
/// # Examples
///
/// ```
/// use retro6502::{disassemble, format_instruction, DisassemblyOptions};
///
/// let options = DisassemblyOptions {
///     start_address: 0x0600,
///     ..Default::default()
/// };
/// let listing = disassemble(&[0xA9, 0x05, 0x69, 0x02, 0x0A], options);
///
/// let text: Vec<String> = listing.iter().map(format_instruction).collect();
/// assert_eq!(text, ["LDA #$05", "ADC #$02", "ASL A"]);
/// assert_eq!(listing[2].address, 0x0604);
/// ```
pub fn disassemble(bytes: &[u8], options: DisassemblyOptions) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut offset = 0;
    let mut address = options.start_address;

    while let Some(instr) = decoder::decode_instruction(&bytes[offset..], address) {
        let consumed = instr.operand_bytes.len() + 1;
        offset += consumed;
        address = address.wrapping_add(consumed as u16);
        instructions.push(instr);
    }

    instructions
}

impl<M: MemoryBus> CPU<M> {
    /// Decodes the instruction at `addr` straight from the bus.
    ///
    /// Reading the operands goes through `MemoryBus::read`, wrapping past $FFFF.
    pub fn disassemble_at(&self, addr: u16) -> Instruction {
        let mut instr = decoder::decode_opcode(self.read(addr), addr);
        instr.operand_bytes = (1..instr.size_bytes as u16)
            .map(|offset| self.read(addr.wrapping_add(offset)))
            .collect();
        instr
    }
}
