//! WASM API for the 6502 emulator.
//!
//! Provides JavaScript-callable interfaces for program loading, CPU control,
//! state inspection and disassembly.

use wasm_bindgen::prelude::*;

use crate::{
    disassemble, format_instruction, load_program, DisassemblyOptions, FlatMemory, LoadError,
    MemoryBus, CPU, DEFAULT_PROGRAM_ADDRESS,
};

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<LoadError> for JsError {
    fn from(err: LoadError) -> Self {
        JsError::new(&err.to_string())
    }
}

/// Result of disassembly operation
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Assembly text, e.g. `LDA #$05`
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
    program_start: u16,
    program_end: u16,
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an emulator with 64KB of zeroed RAM
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            cpu: CPU::new(FlatMemory::new()),
            program_start: DEFAULT_PROGRAM_ADDRESS,
            program_end: DEFAULT_PROGRAM_ADDRESS,
        }
    }

    /// Load a hex program (`"a9 05 69 02"`) at `start_addr` and reset into it
    pub fn load_program(&mut self, hex: &str, start_addr: u16) -> Result<(), JsError> {
        let len = load_program(self.cpu.memory_mut(), start_addr, hex)?;
        self.program_start = start_addr;
        self.program_end = start_addr.wrapping_add(len as u16);
        self.cpu.reset();
        Ok(())
    }

    /// Reset the CPU. Memory is preserved.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Advance a single clock cycle
    pub fn clock(&mut self) {
        self.cpu.clock();
    }

    /// Execute a single instruction, returning the cycles it took
    pub fn step(&mut self) -> u8 {
        self.cpu.step()
    }

    /// Execute `count` instructions
    pub fn run_instructions(&mut self, count: u32) {
        self.cpu.run_instructions(count as usize);
    }

    /// Execute whole instructions until `cycles` have elapsed; returns cycles executed
    pub fn run_for_cycles(&mut self, cycles: u32) -> u32 {
        self.cpu.run_for_cycles(cycles as u64) as u32
    }

    /// Raise a maskable interrupt; false when masked by the I flag
    pub fn irq(&mut self) -> bool {
        self.cpu.irq()
    }

    /// Raise a non-maskable interrupt
    pub fn nmi(&mut self) {
        self.cpu.nmi();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.clock_count() as f64 // Convert u64 to f64 for JavaScript
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Copy `len` bytes starting at `start` (clamped to the end of memory)
    pub fn memory_range(&self, start: u16, len: u32) -> js_sys::Uint8Array {
        let begin = start as usize;
        let end = (begin + len as usize).min(0x10000);
        js_sys::Uint8Array::from(&self.cpu.memory().as_slice()[begin..end])
    }

    /// Disassemble `num_instructions` instructions starting at an address
    pub fn disassemble(&self, start_addr: u16, num_instructions: u32) -> Vec<JsValue> {
        let memory = self.cpu.memory().as_slice();
        let opts = DisassemblyOptions {
            start_address: start_addr,
            ..Default::default()
        };

        disassemble(&memory[start_addr as usize..], opts)
            .iter()
            .take(num_instructions as usize)
            .map(|instr| {
                JsValue::from(DisassemblyLine {
                    address: instr.address,
                    bytes: instr.bytes(),
                    text: format_instruction(instr),
                })
            })
            .collect()
    }

    /// Register dump, one register per line
    pub fn dump(&self) -> String {
        self.cpu.dump()
    }

    /// Get the program start address
    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u16 {
        self.program_start
    }

    /// Get the program end address
    #[wasm_bindgen(getter)]
    pub fn program_end(&self) -> u16 {
        self.program_end
    }
}
