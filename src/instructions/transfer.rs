//! # Register Transfer Operations
//!
//! - MOV dst,src: copy between registers, or between a register and memory at HL
//! - XCHG: swap HL with DE
//!
//! No flags are affected.

use crate::instructions::Register;
use crate::{CPU, OPCODE_TABLE};

/// Executes MOV (opcodes 0x40-0x7F except 0x76, which is HLT).
///
/// Cycles: 5 (7 if either operand is `M`)
pub(crate) fn execute_mov(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.read_reg(Register::src(opcode));
    cpu.write_reg(Register::dst(opcode), value);

    metadata.base_cycles
}

/// Executes XCHG: H <-> D, L <-> E.
///
/// Cycles: 4
pub(crate) fn execute_xchg(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    std::mem::swap(&mut cpu.h, &mut cpu.d);
    std::mem::swap(&mut cpu.l, &mut cpu.e);

    metadata.base_cycles
}
