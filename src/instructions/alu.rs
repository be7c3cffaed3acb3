//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements accumulator arithmetic and logic:
//! - ADD/ADC/SUB/SBB/ANA/XRA/ORA/CMP with a register or `M` operand
//! - ADI/ACI/SUI/SBI/ANI/XRI/ORI/CPI with an immediate operand
//! - DAD: 16-bit add of a register pair to HL
//! - DAA: decimal adjust accumulator
//! - CMA: complement accumulator
//!
//! Subtraction is performed the way the 8080 does it, as addition of the
//! complemented operand. The carry out of that addition is inverted, so after
//! a subtraction CY=1 means a borrow occurred.

use crate::instructions::{Register, RegisterPair};
use crate::{CPU, OPCODE_TABLE};

/// The eight accumulator operations, in opcode order (bits 5-3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AluOp {
    Add,
    AddWithCarry,
    Sub,
    SubWithBorrow,
    And,
    Xor,
    Or,
    Compare,
}

impl AluOp {
    fn from_opcode(opcode: u8) -> Self {
        match (opcode >> 3) & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::AddWithCarry,
            2 => AluOp::Sub,
            3 => AluOp::SubWithBorrow,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Compare,
        }
    }
}

/// Adds `value` (plus carry-in) to the accumulator value and updates all flags.
///
/// Returns the 8-bit result; the caller decides whether to store it.
fn add_with_flags(cpu: &mut CPU, value: u8, carry_in: bool) -> u8 {
    let a = cpu.a;
    let carry = carry_in as u8;

    let sum = a as u16 + value as u16 + carry as u16;
    let result = sum as u8;

    cpu.flags.cy = sum > 0xFF;
    cpu.flags.ac = (a & 0x0F) + (value & 0x0F) + carry > 0x0F;
    cpu.flags.set_zsp(result);

    result
}

/// Subtracts `value` (plus borrow-in) from the accumulator value and updates all flags.
///
/// Computes A + !value + !borrow. CY is the complement of that sum's carry out.
fn subtract_with_flags(cpu: &mut CPU, value: u8, borrow_in: bool) -> u8 {
    let a = cpu.a;
    let complement = !value;
    let not_borrow = (!borrow_in) as u8;

    let sum = a as u16 + complement as u16 + not_borrow as u16;
    let result = sum as u8;

    cpu.flags.cy = sum <= 0xFF;
    cpu.flags.ac = (a & 0x0F) + (complement & 0x0F) + not_borrow > 0x0F;
    cpu.flags.set_zsp(result);

    result
}

/// Applies a logical result: CY cleared, Z/S/P from the result.
fn logical_result(cpu: &mut CPU, result: u8, ac: bool) {
    cpu.a = result;
    cpu.flags.cy = false;
    cpu.flags.ac = ac;
    cpu.flags.set_zsp(result);
}

fn apply(cpu: &mut CPU, op: AluOp, value: u8) {
    match op {
        AluOp::Add => cpu.a = add_with_flags(cpu, value, false),
        AluOp::AddWithCarry => {
            let carry = cpu.flags.cy;
            cpu.a = add_with_flags(cpu, value, carry);
        }
        AluOp::Sub => cpu.a = subtract_with_flags(cpu, value, false),
        AluOp::SubWithBorrow => {
            let borrow = cpu.flags.cy;
            cpu.a = subtract_with_flags(cpu, value, borrow);
        }
        AluOp::And => {
            // ANA sets AC from bit 3 of the operands' OR
            let ac = (cpu.a | value) & 0x08 != 0;
            let result = cpu.a & value;
            logical_result(cpu, result, ac);
        }
        AluOp::Xor => {
            let result = cpu.a ^ value;
            logical_result(cpu, result, false);
        }
        AluOp::Or => {
            let result = cpu.a | value;
            logical_result(cpu, result, false);
        }
        AluOp::Compare => {
            subtract_with_flags(cpu, value, false);
        }
    }
}

/// Executes ADD/ADC/SUB/SBB/ANA/XRA/ORA/CMP r (opcodes 0x80-0xBF).
///
/// The operand is the register in bits 2-0, or the byte at HL for `M`.
///
/// Cycles: 4 (7 for `M`)
pub(crate) fn execute_alu_register(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.read_reg(Register::src(opcode));
    apply(cpu, AluOp::from_opcode(opcode), value);

    metadata.base_cycles
}

/// Executes ADI/ACI/SUI/SBI/ANI/XRI/ORI/CPI d8.
///
/// Bytes: 2
/// Cycles: 7
pub(crate) fn execute_alu_immediate(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let value = cpu.operand_byte();
    apply(cpu, AluOp::from_opcode(opcode), value);

    cpu.skip_operands(1);
    metadata.base_cycles
}

/// Executes DAD rp: HL <- HL + rp.
///
/// Flags affected: CY only (set on carry out of bit 15)
///
/// Cycles: 10
pub(crate) fn execute_dad(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let pair = RegisterPair::from_opcode(opcode);
    let sum = cpu.hl() as u32 + cpu.read_pair(pair) as u32;

    cpu.flags.cy = sum > 0xFFFF;
    cpu.set_hl(sum as u16);

    metadata.base_cycles
}

/// Executes DAA (Decimal Adjust Accumulator).
///
/// Corrects the accumulator to two BCD digits after a binary addition:
/// 1. If the low nibble is above 9 or AC is set, add 0x06
/// 2. If the high nibble (after step 1) is above 9 or CY is set, add 0x60
///    and set CY
///
/// CY is never cleared by DAA. Z, S, P and AC reflect the adjustment.
///
/// Cycles: 4
pub(crate) fn execute_daa(cpu: &mut CPU, opcode: u8) -> u8 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let a = cpu.a;
    let mut correction = 0u8;
    let mut carry = cpu.flags.cy;

    if a & 0x0F > 0x09 || cpu.flags.ac {
        correction |= 0x06;
    }

    let high = a >> 4;
    if carry || high > 0x09 || (high >= 0x09 && a & 0x0F > 0x09) {
        correction |= 0x60;
        carry = true;
    }

    let result = a.wrapping_add(correction);
    cpu.flags.ac = (a & 0x0F) + (correction & 0x0F) > 0x0F;
    cpu.flags.cy = carry;
    cpu.flags.set_zsp(result);
    cpu.a = result;

    metadata.base_cycles
}

/// Executes CMA: A <- !A. No flags affected.
///
/// Cycles: 4
pub(crate) fn execute_cma(cpu: &mut CPU, opcode: u8) -> u8 {
    cpu.a = !cpu.a;
    OPCODE_TABLE[opcode as usize].base_cycles
}
