//! WebAssembly bindings for the retro6502 emulator.
//!
//! This module provides JavaScript-callable interfaces to the 6502 CPU emulator,
//! enabling browser-based execution of hex programs.

pub mod api;

pub use api::{DisassemblyLine, Emulator6502, JsError};
