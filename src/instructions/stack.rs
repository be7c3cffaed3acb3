//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PUSH B/D/H/PSW
//! - POP B/D/H/PSW
//! - XTHL: Exchange HL with the word on top of the stack
//! - SPHL: SP <- HL
//!
//! The 8080 stack grows downward anywhere in the 64KB space. PUSH stores the
//! high byte at SP-1 and the low byte at SP-2; POP reads them back from SP
//! and SP+1. For PSW the "high byte" is the accumulator and the "low byte"
//! is the packed flag byte.

use crate::flags::ConditionCodes;
use crate::{CPU, OPCODE_TABLE};

/// Executes PUSH rp.
///
/// Cycles: 11
///
/// Flags affected: None
pub(crate) fn execute_push(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = match (opcode >> 4) & 0x03 {
        0 => cpu.bc(),
        1 => cpu.de(),
        2 => cpu.hl(),
        _ => u16::from_be_bytes([cpu.a, cpu.flags.to_psw()]),
    };
    cpu.push_word(value);

    metadata.base_cycles
}

/// Executes POP rp.
///
/// POP PSW restores the accumulator and every flag from the popped flag byte.
///
/// Cycles: 10
pub(crate) fn execute_pop(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.pop_word();
    match (opcode >> 4) & 0x03 {
        0 => cpu.set_bc(value),
        1 => cpu.set_de(value),
        2 => cpu.set_hl(value),
        _ => {
            let [a, psw] = value.to_be_bytes();
            cpu.a = a;
            cpu.flags = ConditionCodes::from_psw(psw);
        }
    }

    metadata.base_cycles
}

/// Executes XTHL: L <-> (SP), H <-> (SP + 1). SP is unchanged.
///
/// Cycles: 18
pub(crate) fn execute_xthl(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let top = cpu.memory.read_word(cpu.sp);
    let hl = cpu.hl();
    cpu.memory.write_word(cpu.sp, hl);
    cpu.set_hl(top);

    metadata.base_cycles
}

/// Executes SPHL: SP <- HL.
///
/// Cycles: 5
pub(crate) fn execute_sphl(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.sp = cpu.hl();

    metadata.base_cycles
}
