//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::disassembler::{DisassemblyOptions, Instruction};
use crate::opcodes::Mnemonic;

/// Format a single instruction as assembly text
///
/// # Arguments
///
/// * `instr` - The instruction to format
///
/// # Returns
///
/// A string containing the formatted assembly instruction. Missing operand bytes
/// of a truncated instruction print as `??`.
pub fn format_instruction(instr: &Instruction) -> String {
    let operand = format_operand(instr);

    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

/// Format a sequence of instructions, one per line, honoring `options`.
///
/// With `show_offsets` each line starts with `$XXXX:`; with `hex_dump` the raw
/// bytes follow in a fixed-width column.
pub fn format_listing(instructions: &[Instruction], options: DisassemblyOptions) -> String {
    let mut out = String::new();

    for instr in instructions {
        if options.show_offsets {
            out.push_str(&format!("${:04X}: ", instr.address));
        }
        if options.hex_dump {
            let bytes: Vec<String> = instr.bytes().iter().map(|b| format!("{:02X}", b)).collect();
            out.push_str(&format!("{:<9} ", bytes.join(" ")));
        }
        out.push_str(&format_instruction(instr));
        out.push('\n');
    }

    out
}

fn zero_page_operand(instr: &Instruction) -> String {
    match instr.operand_bytes.first() {
        Some(byte) => format!("{:02X}", byte),
        None => "??".to_string(),
    }
}

fn absolute_operand(instr: &Instruction) -> String {
    match instr.operand_bytes.as_slice() {
        [lo, hi, ..] => format!("{:04X}", u16::from_le_bytes([*lo, *hi])),
        _ => "????".to_string(),
    }
}

/// Format the operand based on addressing mode
fn format_operand(instr: &Instruction) -> String {
    use AddressingMode::*;

    match instr.addressing_mode {
        Implied => match instr.mnemonic {
            Mnemonic::ASL | Mnemonic::LSR | Mnemonic::ROL | Mnemonic::ROR => "A".to_string(),
            _ => String::new(),
        },
        Immediate => format!("#${}", zero_page_operand(instr)),
        ZeroPage => format!("${}", zero_page_operand(instr)),
        ZeroPageX => format!("${},X", zero_page_operand(instr)),
        ZeroPageY => format!("${},Y", zero_page_operand(instr)),
        Relative => match instr.operand_bytes.first() {
            Some(&offset) => {
                // Displacement is measured from the following instruction
                let target = instr
                    .address
                    .wrapping_add(2)
                    .wrapping_add(offset as i8 as u16);
                format!("${:04X}", target)
            }
            None => "$????".to_string(),
        },
        Absolute => format!("${}", absolute_operand(instr)),
        AbsoluteX => format!("${},X", absolute_operand(instr)),
        AbsoluteY => format!("${},Y", absolute_operand(instr)),
        Indirect => format!("(${})", absolute_operand(instr)),
        IndirectX => format!("(${},X)", zero_page_operand(instr)),
        IndirectY => format!("(${}),Y", zero_page_operand(instr)),
    }
}
