//! # Load and Store Instructions
//!
//! This module implements immediate loads and memory loads/stores:
//! - MVI r, d8 / MVI M, d8
//! - LXI rp, d16
//! - LDA / STA: accumulator to/from a direct address
//! - LHLD / SHLD: HL to/from a direct address (L at the address, H after it)
//! - LDAX / STAX: accumulator to/from memory at BC or DE
//!
//! None of these affect flags.

use crate::instructions::{Register, RegisterPair};
use crate::{CPU, OPCODE_TABLE};

/// Executes MVI (Move Immediate).
///
/// Bytes: 2
/// Cycles: 7 (10 for `M`)
pub(crate) fn execute_mvi(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_byte();
    cpu.write_reg(Register::dst(opcode), value);

    cpu.skip_operands(1);
    metadata.base_cycles
}

/// Executes LXI (Load Register Pair Immediate).
///
/// The operand is little-endian: the first byte lands in the low register
/// (C, E, L) and the second in the high register (B, D, H).
///
/// Bytes: 3
/// Cycles: 10
pub(crate) fn execute_lxi(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_word();
    cpu.write_pair(RegisterPair::from_opcode(opcode), value);

    cpu.skip_operands(2);
    metadata.base_cycles
}

/// Executes LDA (Load Accumulator Direct).
///
/// Bytes: 3
/// Cycles: 13
pub(crate) fn execute_lda(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let addr = cpu.operand_word();
    cpu.a = cpu.memory.read(addr);

    cpu.skip_operands(2);
    metadata.base_cycles
}

/// Executes STA (Store Accumulator Direct).
///
/// Bytes: 3
/// Cycles: 13
pub(crate) fn execute_sta(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let addr = cpu.operand_word();
    cpu.memory.write(addr, cpu.a);

    cpu.skip_operands(2);
    metadata.base_cycles
}

/// Executes LHLD (Load HL Direct): L <- (addr), H <- (addr + 1).
///
/// Bytes: 3
/// Cycles: 16
pub(crate) fn execute_lhld(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let addr = cpu.operand_word();
    let value = cpu.memory.read_word(addr);
    cpu.set_hl(value);

    cpu.skip_operands(2);
    metadata.base_cycles
}

/// Executes SHLD (Store HL Direct): (addr) <- L, (addr + 1) <- H.
///
/// Bytes: 3
/// Cycles: 16
pub(crate) fn execute_shld(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let addr = cpu.operand_word();
    let value = cpu.hl();
    cpu.memory.write_word(addr, value);

    cpu.skip_operands(2);
    metadata.base_cycles
}

/// Executes LDAX B / LDAX D: A <- (BC) or (DE).
///
/// Cycles: 7
pub(crate) fn execute_ldax(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let addr = cpu.read_pair(RegisterPair::from_opcode(opcode));
    cpu.a = cpu.memory.read(addr);

    metadata.base_cycles
}

/// Executes STAX B / STAX D: (BC) or (DE) <- A.
///
/// Cycles: 7
pub(crate) fn execute_stax(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let addr = cpu.read_pair(RegisterPair::from_opcode(opcode));
    cpu.memory.write(addr, cpu.a);

    metadata.base_cycles
}
