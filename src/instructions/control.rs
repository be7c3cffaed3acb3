//! # Control Flow Instructions
//!
//! This module implements subroutine linkage and machine control:
//! - CALL / Ccc: Push the return address and jump
//! - RET / Rcc: Pop the return address into PC
//! - RST n: One-byte call to vector n * 8
//! - EI / DI: Set or clear the interrupt-enable latch
//! - HLT: Stop fetching until an interrupt arrives
//! - NOP
//!
//! The return address pushed by a call is the address of the instruction that
//! follows it, so a matching RET resumes right after the call.

use tracing::warn;

use crate::instructions::Condition;
use crate::{CPU, OPCODE_TABLE};

/// Pushes the address after a 3-byte call and jumps to its operand.
fn call(cpu: &mut CPU) {
    let target = cpu.operand_word();
    let return_address = cpu.pc.wrapping_add(2);

    cpu.push_word(return_address);
    cpu.pc = target;
}

/// Executes the CALL instruction.
///
/// Stack operation:
/// 1. Write return address high byte to SP-1
/// 2. Write return address low byte to SP-2
/// 3. SP -= 2
///
/// Bytes: 3
/// Cycles: 17
///
/// Flags affected: None
pub(crate) fn execute_call(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    call(cpu);

    metadata.base_cycles
}

/// Executes a conditional call (CNZ, CZ, CNC, CC, CPO, CPE, CP, CM).
///
/// When the condition is false, PC skips the two address bytes.
///
/// Bytes: 3
/// Cycles: 17 if taken, 11 if not
pub(crate) fn execute_call_conditional(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    if Condition::from_opcode(opcode).holds(cpu) {
        call(cpu);
        metadata.taken_cycles
    } else {
        cpu.skip_operands(2);
        metadata.base_cycles
    }
}

/// Executes the RET instruction.
///
/// Pops the low byte from SP and the high byte from SP+1 into PC, then SP += 2.
///
/// Cycles: 10
pub(crate) fn execute_ret(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.pc = cpu.pop_word();

    metadata.base_cycles
}

/// Executes a conditional return (RNZ, RZ, RNC, RC, RPO, RPE, RP, RM).
///
/// Returns have no operand bytes, so nothing is skipped when the condition
/// is false.
///
/// Cycles: 11 if taken, 5 if not
pub(crate) fn execute_ret_conditional(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    if Condition::from_opcode(opcode).holds(cpu) {
        cpu.pc = cpu.pop_word();
        metadata.taken_cycles
    } else {
        metadata.base_cycles
    }
}

/// Executes RST n (opcodes 0xC7, 0xCF, ... 0xFF).
///
/// Pushes the address of the next instruction and jumps to `n << 3`, where n
/// is bits 5-3 of the opcode.
///
/// Cycles: 11
pub(crate) fn execute_rst(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let vector = (opcode >> 3) & 0x07;
    cpu.push_word(cpu.pc);
    cpu.pc = (vector as u16) << 3;

    metadata.base_cycles
}

/// Executes NOP.
///
/// Cycles: 4
pub(crate) fn execute_nop(_cpu: &mut CPU, opcode: u8) -> u8 {
    OPCODE_TABLE[opcode as usize].base_cycles
}

/// Executes EI: sets the interrupt-enable latch.
///
/// Cycles: 4
pub(crate) fn execute_ei(cpu: &mut CPU, opcode: u8) -> u8 {
    cpu.int_enable = true;
    OPCODE_TABLE[opcode as usize].base_cycles
}

/// Executes DI: clears the interrupt-enable latch.
///
/// Cycles: 4
pub(crate) fn execute_di(cpu: &mut CPU, opcode: u8) -> u8 {
    cpu.int_enable = false;
    OPCODE_TABLE[opcode as usize].base_cycles
}

/// Executes HLT.
///
/// PC is left on the following instruction; the CPU idles until
/// `generate_interrupt` releases it. With interrupts disabled that never
/// happens, which is worth a warning.
///
/// Cycles: 7
pub(crate) fn execute_hlt(cpu: &mut CPU, opcode: u8) -> u8 {
    if !cpu.int_enable {
        warn!(pc = cpu.pc.wrapping_sub(1), "HLT with interrupts disabled");
    }
    cpu.halted = true;

    OPCODE_TABLE[opcode as usize].base_cycles
}
