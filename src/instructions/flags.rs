//! # Carry Flag Instructions
//!
//! - STC: Set Carry
//! - CMC: Complement Carry
//!
//! No other flags are affected.

use crate::{CPU, OPCODE_TABLE};

/// Executes STC (Set Carry).
///
/// Cycles: 4
pub(crate) fn execute_stc(cpu: &mut CPU, opcode: u8) -> u8 {
    cpu.flags.cy = true;
    OPCODE_TABLE[opcode as usize].base_cycles
}

/// Executes CMC (Complement Carry).
///
/// Cycles: 4
pub(crate) fn execute_cmc(cpu: &mut CPU, opcode: u8) -> u8 {
    cpu.flags.cy = !cpu.flags.cy;
    OPCODE_TABLE[opcode as usize].base_cycles
}
