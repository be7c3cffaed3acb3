//! # Intel 8080 CPU Emulator Core
//!
//! An instruction-level Intel 8080 emulator, accurate enough in its register,
//! flag, memory and stack semantics to run classic arcade ROMs.
//!
//! This crate provides the processor state, the fetch-decode-execute engine,
//! a table-driven opcode metadata system and a small disassembler used for
//! diagnostics.
//!
//! ## Quick Start
//!
//! ```rust
//! use lib8080::CPU;
//!
//! let mut cpu = CPU::new();
//!
//! // MVI A,$05
//! cpu.memory_mut().write(0x0000, 0x3E);
//! cpu.memory_mut().write(0x0001, 0x05);
//!
//! let cycles = cpu.step().unwrap();
//!
//! assert_eq!(cpu.a(), 0x05);
//! assert_eq!(cpu.pc(), 0x0002);
//! assert_eq!(cycles, 7);
//! ```
//!
//! ## Architecture
//!
//! - **Explicit state**: all CPU-visible state lives in one [`CPU`] value that
//!   owns its 64KB of memory; nothing is global
//! - **Stateless engine**: each [`CPU::step`] performs exactly one instruction
//!   and returns the cycles it consumed
//! - **Table-driven metadata**: mnemonic, addressing mode, size and timing for
//!   all 256 opcodes live in [`OPCODE_TABLE`]
//! - **Hardware-agnostic**: `IN`/`OUT` are not executed here; the host
//!   intercepts them before calling the engine
//!
//! ## Modules
//!
//! - `cpu` - Processor state, execution entry points and interrupt injection
//! - `flags` - Condition codes and PSW packing
//! - `memory` - Owned 64KB address space
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing mode enumeration
//! - `disassembler` - Machine code to mnemonic text

pub mod addressing;
pub mod cpu;
pub mod disassembler;
pub mod flags;
pub mod memory;
pub mod opcodes;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::CPU;
pub use flags::ConditionCodes;
pub use memory::{Memory, MemoryError, MEMORY_SIZE};
pub use opcodes::{OpcodeMetadata, OPCODE_TABLE};

/// Opcode of the `IN port` instruction, serviced by the host's port handler.
pub const OPCODE_IN: u8 = 0xDB;

/// Opcode of the `OUT port` instruction, serviced by the host's port handler.
pub const OPCODE_OUT: u8 = 0xD3;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The opcode at `address` is not modeled by this engine.
    ///
    /// The instruction stream has desynchronized from the program once this
    /// is returned, so hosts should treat it as fatal. PC is left pointing at
    /// the offending opcode.
    #[error("unimplemented instruction at ${address:04X}: {disassembly} (opcode 0x{opcode:02X})")]
    UnimplementedInstruction {
        /// Address of the offending opcode
        address: u16,
        /// The opcode byte value
        opcode: u8,
        /// Disassembled text of the instruction, for diagnostics
        disassembly: String,
    },
}
