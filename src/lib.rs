//! # 6502 CPU Emulator Core
//!
//! A cycle-counted NMOS 6502 CPU emulator designed for modularity, clarity, and
//! WebAssembly portability.
//!
//! This crate emulates the MOS Technology 6502 instruction set: the 56 documented
//! instructions across 12 addressing modes, the page-1 stack, the reset sequence
//! and IRQ/NMI servicing. Execution is driven one clock tick at a time through a
//! table-driven decoder.
//!
//! ## Quick Start
//!
//! ```rust
//! use retro6502::{FlatMemory, MemoryBus, CPU};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! // LDA #$05
//! memory.write(0x8000, 0xA9);
//! memory.write(0x8001, 0x05);
//!
//! // Initialize CPU - it will load PC from the reset vector
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFD);
//!
//! // Finish the reset sequence and execute one instruction
//! let cycles = cpu.step();
//! assert_eq!(cycles, 2);
//! assert_eq!(cpu.a(), 0x05);
//! assert!(!cpu.flag_z());
//! ```
//!
//! Hex programs can be loaded and run in one call:
//!
//! ```rust
//! use retro6502::{FlatMemory, CPU};
//!
//! let mut cpu = CPU::new(FlatMemory::new());
//! cpu.run_program("a9 78 69 50", 2).unwrap();
//!
//! assert_eq!(cpu.a(), 0xC8);
//! assert!(cpu.flag_v());
//! assert!(cpu.flag_n());
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the clock-driven execution engine
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing modes and the operand resolver
//! - `flags` - Status register bit set
//! - `loader` - Hex program loader
//! - `disassembler` - Machine code to assembly text
//! - `wasm` - JavaScript bindings (`wasm` feature)

pub mod addressing;
pub mod cpu;
pub mod disassembler;
pub mod flags;
pub mod loader;
pub mod memory;
pub mod opcodes;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{CPU, IRQ_VECTOR, NMI_VECTOR, RESET_CYCLES, RESET_SP, RESET_VECTOR, STACK_BASE};
pub use disassembler::{disassemble, format_instruction, format_listing, DisassemblyOptions, Instruction};
pub use flags::StatusFlags;
pub use loader::{load_program, LoadError, DEFAULT_PROGRAM_ADDRESS};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};

#[cfg(feature = "wasm")]
pub use wasm::Emulator6502;
