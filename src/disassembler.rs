//! 8080 Disassembler Module
//!
//! Converts binary machine code into human-readable assembly mnemonics. The
//! engine uses it to describe the instruction it stopped on when it meets an
//! opcode it does not model.

pub mod decoder;
pub mod formatter;

use crate::addressing::AddressingMode;
use crate::memory::Memory;

pub use decoder::decode_instruction;
pub use formatter::format_instruction;

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "MOV", "LXI", "JNZ")
    pub mnemonic: &'static str,

    /// Register operand encoded in the opcode (e.g., "B,C", "SP", "PSW"), possibly empty
    pub operand: &'static str,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,

    /// Base cycle cost (not-taken cost for conditional calls and returns)
    pub base_cycles: u8,
}

/// Options controlling disassembly output
#[derive(Debug, Clone, Copy, Default)]
pub struct DisassemblyOptions {
    /// Starting address for disassembly (affects address display)
    pub start_address: u16,
}

/// Disassemble a byte slice into a vector of instructions
///
/// Undocumented opcodes and instructions cut short by the end of the buffer
/// become one-byte `.byte` entries, and decoding resumes at the next byte.
///
/// # Examples
///
/// ```
/// use lib8080::disassembler::{disassemble, format_instruction, DisassemblyOptions};
///
/// let code = [0x3E, 0x05, 0xC3, 0x00, 0x18];
/// let lines: Vec<String> = disassemble(&code, DisassemblyOptions::default())
///     .iter()
///     .map(format_instruction)
///     .collect();
///
/// assert_eq!(lines, vec!["MVI A,#$05", "JMP $1800"]);
/// ```
pub fn disassemble(bytes: &[u8], options: DisassemblyOptions) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut pc = 0;
    let mut address = options.start_address;

    while pc < bytes.len() {
        match decoder::decode_instruction(&bytes[pc..], address) {
            Some(instr) => {
                pc += instr.size_bytes as usize;
                address = address.wrapping_add(instr.size_bytes as u16);
                instructions.push(instr);
            }
            None => {
                instructions.push(byte_directive(bytes[pc], address));
                pc += 1;
                address = address.wrapping_add(1);
            }
        }
    }

    instructions
}

/// Formats the instruction starting at `address`, reading operands with
/// 16-bit wraparound.
pub fn disassemble_at(memory: &Memory, address: u16) -> String {
    let bytes = [
        memory.read(address),
        memory.read(address.wrapping_add(1)),
        memory.read(address.wrapping_add(2)),
    ];

    let instr = decoder::decode_instruction(&bytes, address)
        .unwrap_or_else(|| byte_directive(bytes[0], address));
    formatter::format_instruction(&instr)
}

fn byte_directive(byte: u8, address: u16) -> Instruction {
    Instruction {
        address,
        opcode: byte,
        mnemonic: ".byte",
        operand: "",
        addressing_mode: AddressingMode::Implicit,
        operand_bytes: vec![byte],
        size_bytes: 1,
        base_cycles: 0,
    }
}
