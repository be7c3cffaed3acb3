//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INR r / INR M: Increment register or memory at HL
//! - DCR r / DCR M: Decrement register or memory at HL
//! - INX rp: Increment register pair
//! - DCX rp: Decrement register pair
//!
//! INR and DCR update Z, S, P and AC but never touch CY. INX and DCX affect
//! no flags at all.

use crate::instructions::{Register, RegisterPair};
use crate::{CPU, OPCODE_TABLE};

/// Executes INR (Increment Register).
///
/// Operation: r <- r + 1 (wrapping)
///
/// Flags affected: Z, S, P, AC
///
/// Cycles: 5 (10 for `M`)
pub(crate) fn execute_inr(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let reg = Register::dst(opcode);
    let result = cpu.read_reg(reg).wrapping_add(1);
    cpu.write_reg(reg, result);

    cpu.flags.set_zsp(result);
    cpu.flags.ac = result & 0x0F == 0x00;

    metadata.base_cycles
}

/// Executes DCR (Decrement Register).
///
/// Operation: r <- r - 1 (wrapping)
///
/// The 8080 decrements by adding 0xFF, so AC is set unless the low nibble
/// borrowed (i.e. unless it wrapped to 0xF).
///
/// Flags affected: Z, S, P, AC
///
/// Cycles: 5 (10 for `M`)
pub(crate) fn execute_dcr(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let reg = Register::dst(opcode);
    let result = cpu.read_reg(reg).wrapping_sub(1);
    cpu.write_reg(reg, result);

    cpu.flags.set_zsp(result);
    cpu.flags.ac = result & 0x0F != 0x0F;

    metadata.base_cycles
}

/// Executes INX (Increment Register Pair). No flags affected.
///
/// Cycles: 5
pub(crate) fn execute_inx(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let pair = RegisterPair::from_opcode(opcode);
    let value = cpu.read_pair(pair).wrapping_add(1);
    cpu.write_pair(pair, value);

    metadata.base_cycles
}

/// Executes DCX (Decrement Register Pair). No flags affected.
///
/// Cycles: 5
pub(crate) fn execute_dcx(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let pair = RegisterPair::from_opcode(opcode);
    let value = cpu.read_pair(pair).wrapping_sub(1);
    cpu.write_pair(pair, value);

    metadata.base_cycles
}
