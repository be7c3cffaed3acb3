//! # Rotate Instructions
//!
//! This module implements the four accumulator rotates:
//! - RLC: Rotate left, bit 7 to both bit 0 and CY
//! - RRC: Rotate right, bit 0 to both bit 7 and CY
//! - RAL: Rotate left through carry (old CY enters bit 0)
//! - RAR: Rotate right through carry (old CY enters bit 7)
//!
//! Only CY is affected.

use crate::{CPU, OPCODE_TABLE};

/// Executes RLC (Rotate Left).
///
/// Cycles: 4
pub(crate) fn execute_rlc(cpu: &mut CPU, opcode: u8) -> u8 {
    let a = cpu.a;
    cpu.flags.cy = a & 0x80 != 0;
    cpu.a = a.rotate_left(1);

    OPCODE_TABLE[opcode as usize].base_cycles
}

/// Executes RRC (Rotate Right).
///
/// Cycles: 4
pub(crate) fn execute_rrc(cpu: &mut CPU, opcode: u8) -> u8 {
    let a = cpu.a;
    cpu.flags.cy = a & 0x01 != 0;
    cpu.a = a.rotate_right(1);

    OPCODE_TABLE[opcode as usize].base_cycles
}

/// Executes RAL (Rotate Left through Carry).
///
/// Cycles: 4
pub(crate) fn execute_ral(cpu: &mut CPU, opcode: u8) -> u8 {
    let a = cpu.a;
    let carry_in = cpu.flags.cy as u8;

    cpu.flags.cy = a & 0x80 != 0;
    cpu.a = (a << 1) | carry_in;

    OPCODE_TABLE[opcode as usize].base_cycles
}

/// Executes RAR (Rotate Right through Carry).
///
/// Cycles: 4
pub(crate) fn execute_rar(cpu: &mut CPU, opcode: u8) -> u8 {
    let a = cpu.a;
    let carry_in = cpu.flags.cy as u8;

    cpu.flags.cy = a & 0x01 != 0;
    cpu.a = (a >> 1) | (carry_in << 7);

    OPCODE_TABLE[opcode as usize].base_cycles
}
