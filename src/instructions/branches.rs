//! # Jump Instructions
//!
//! This module implements jumps:
//! - JMP: Unconditional jump to a 16-bit address
//! - Jcc: JNZ, JZ, JNC, JC, JPO, JPE, JP, JM
//! - PCHL: Jump to the address in HL
//!
//! A conditional jump that is not taken still skips its two address bytes;
//! otherwise the next fetch would decode the address as an opcode.

use crate::instructions::Condition;
use crate::{CPU, OPCODE_TABLE};

/// Executes the JMP (Jump) instruction.
///
/// Sets PC to the little-endian address in the two operand bytes.
///
/// Bytes: 3
/// Cycles: 10
///
/// Flags affected: None
pub(crate) fn execute_jmp(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.pc = cpu.operand_word();

    metadata.base_cycles
}

/// Executes a conditional jump (JNZ, JZ, JNC, JC, JPO, JPE, JP, JM).
///
/// If the condition holds, PC is set to the operand address; otherwise PC
/// moves past the operand. Timing is the same either way.
///
/// Bytes: 3
/// Cycles: 10
pub(crate) fn execute_jump_conditional(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    if Condition::from_opcode(opcode).holds(cpu) {
        cpu.pc = cpu.operand_word();
    } else {
        cpu.skip_operands(2);
    }

    metadata.base_cycles
}

/// Executes PCHL: PC <- HL.
///
/// Cycles: 5
pub(crate) fn execute_pchl(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.pc = cpu.hl();

    metadata.base_cycles
}
