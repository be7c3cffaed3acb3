//! # 8080 Instruction Implementations
//!
//! This module contains the implementations of all 8080 instructions, organized by category.
//! Each instruction is implemented as a standalone function that takes a mutable reference
//! to the CPU and the opcode byte, and returns the cycles it consumed.
//!
//! On entry PC already points past the opcode, at the first operand byte. Each
//! instruction skips its own operand bytes after it is done with them, unless
//! it transfers control.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic on the accumulator (ADD..CMP, immediates, DAD, DAA, CMA)
//! - **branches**: Jumps (JMP, Jcc, PCHL)
//! - **control**: Calls, returns, restarts and machine control (CALL, RET, RST, EI, DI, HLT, NOP)
//! - **flags**: Carry flag manipulation (STC, CMC)
//! - **inc_dec**: Increment and decrement (INR, DCR, INX, DCX)
//! - **load_store**: Immediate and memory loads and stores (MVI, LXI, LDA, STA, LHLD, SHLD, LDAX, STAX)
//! - **shifts**: Accumulator rotates (RLC, RRC, RAL, RAR)
//! - **stack**: Stack operations (PUSH, POP, XTHL, SPHL)
//! - **transfer**: Register transfers (MOV, XCHG)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::disassembler;
use crate::{ExecutionError, CPU};

/// 8-bit register operand as encoded in 3-bit opcode fields.
///
/// `M` is the memory byte addressed by HL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Register {
    B,
    C,
    D,
    E,
    H,
    L,
    M,
    A,
}

impl Register {
    /// Decodes the 3-bit register field `bits & 0b111`.
    pub(crate) fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => Register::B,
            1 => Register::C,
            2 => Register::D,
            3 => Register::E,
            4 => Register::H,
            5 => Register::L,
            6 => Register::M,
            _ => Register::A,
        }
    }

    /// Destination field (bits 5-3) of an opcode.
    pub(crate) fn dst(opcode: u8) -> Self {
        Self::from_bits(opcode >> 3)
    }

    /// Source field (bits 2-0) of an opcode.
    pub(crate) fn src(opcode: u8) -> Self {
        Self::from_bits(opcode)
    }
}

/// 16-bit register pair operand as encoded in bits 5-4 of an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RegisterPair {
    BC,
    DE,
    HL,
    SP,
}

impl RegisterPair {
    pub(crate) fn from_opcode(opcode: u8) -> Self {
        match (opcode >> 4) & 0x03 {
            0 => RegisterPair::BC,
            1 => RegisterPair::DE,
            2 => RegisterPair::HL,
            _ => RegisterPair::SP,
        }
    }
}

/// Branch condition as encoded in bits 5-3 of Jcc/Ccc/Rcc opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Condition {
    NotZero,
    Zero,
    NoCarry,
    Carry,
    ParityOdd,
    ParityEven,
    Plus,
    Minus,
}

impl Condition {
    pub(crate) fn from_opcode(opcode: u8) -> Self {
        match (opcode >> 3) & 0x07 {
            0 => Condition::NotZero,
            1 => Condition::Zero,
            2 => Condition::NoCarry,
            3 => Condition::Carry,
            4 => Condition::ParityOdd,
            5 => Condition::ParityEven,
            6 => Condition::Plus,
            _ => Condition::Minus,
        }
    }

    /// Tests the condition against the CPU's flags.
    pub(crate) fn holds(self, cpu: &CPU) -> bool {
        match self {
            Condition::NotZero => !cpu.flags.z,
            Condition::Zero => cpu.flags.z,
            Condition::NoCarry => !cpu.flags.cy,
            Condition::Carry => cpu.flags.cy,
            Condition::ParityOdd => !cpu.flags.p,
            Condition::ParityEven => cpu.flags.p,
            Condition::Plus => !cpu.flags.s,
            Condition::Minus => cpu.flags.s,
        }
    }
}

/// Executes the instruction whose opcode has just been fetched.
///
/// Returns the cycles consumed, or `UnimplementedInstruction` for opcodes the
/// engine does not model. The match is exhaustive over all 256 byte values.
pub(crate) fn execute(cpu: &mut CPU, opcode: u8) -> Result<u8, ExecutionError> {
    let cycles = match opcode {
        // Machine control
        0x00 => control::execute_nop(cpu, opcode),
        0x76 => control::execute_hlt(cpu, opcode),
        0xF3 => control::execute_di(cpu, opcode),
        0xFB => control::execute_ei(cpu, opcode),

        // Port I/O belongs to the host; the rest are undocumented encodings
        0xD3 | 0xDB | 0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 | 0xCB | 0xD9 | 0xDD
        | 0xED | 0xFD => return Err(unimplemented(cpu, opcode)),

        // Loads and stores
        0x01 | 0x11 | 0x21 | 0x31 => load_store::execute_lxi(cpu, opcode),
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
            load_store::execute_mvi(cpu, opcode)
        }
        0x02 | 0x12 => load_store::execute_stax(cpu, opcode),
        0x0A | 0x1A => load_store::execute_ldax(cpu, opcode),
        0x22 => load_store::execute_shld(cpu, opcode),
        0x2A => load_store::execute_lhld(cpu, opcode),
        0x32 => load_store::execute_sta(cpu, opcode),
        0x3A => load_store::execute_lda(cpu, opcode),

        // Register transfers
        0x40..=0x75 | 0x77..=0x7F => transfer::execute_mov(cpu, opcode),
        0xEB => transfer::execute_xchg(cpu, opcode),

        // Increment / decrement
        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => inc_dec::execute_inr(cpu, opcode),
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => inc_dec::execute_dcr(cpu, opcode),
        0x03 | 0x13 | 0x23 | 0x33 => inc_dec::execute_inx(cpu, opcode),
        0x0B | 0x1B | 0x2B | 0x3B => inc_dec::execute_dcx(cpu, opcode),

        // Accumulator arithmetic and logic
        0x80..=0xBF => alu::execute_alu_register(cpu, opcode),
        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => {
            alu::execute_alu_immediate(cpu, opcode)
        }
        0x09 | 0x19 | 0x29 | 0x39 => alu::execute_dad(cpu, opcode),
        0x27 => alu::execute_daa(cpu, opcode),
        0x2F => alu::execute_cma(cpu, opcode),

        // Rotates
        0x07 => shifts::execute_rlc(cpu, opcode),
        0x0F => shifts::execute_rrc(cpu, opcode),
        0x17 => shifts::execute_ral(cpu, opcode),
        0x1F => shifts::execute_rar(cpu, opcode),

        // Carry flag
        0x37 => flags::execute_stc(cpu, opcode),
        0x3F => flags::execute_cmc(cpu, opcode),

        // Jumps
        0xC3 => branches::execute_jmp(cpu, opcode),
        0xC2 | 0xCA | 0xD2 | 0xDA | 0xE2 | 0xEA | 0xF2 | 0xFA => {
            branches::execute_jump_conditional(cpu, opcode)
        }
        0xE9 => branches::execute_pchl(cpu, opcode),

        // Calls, returns, restarts
        0xCD => control::execute_call(cpu, opcode),
        0xC4 | 0xCC | 0xD4 | 0xDC | 0xE4 | 0xEC | 0xF4 | 0xFC => {
            control::execute_call_conditional(cpu, opcode)
        }
        0xC9 => control::execute_ret(cpu, opcode),
        0xC0 | 0xC8 | 0xD0 | 0xD8 | 0xE0 | 0xE8 | 0xF0 | 0xF8 => {
            control::execute_ret_conditional(cpu, opcode)
        }
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => control::execute_rst(cpu, opcode),

        // Stack
        0xC5 | 0xD5 | 0xE5 | 0xF5 => stack::execute_push(cpu, opcode),
        0xC1 | 0xD1 | 0xE1 | 0xF1 => stack::execute_pop(cpu, opcode),
        0xE3 => stack::execute_xthl(cpu, opcode),
        0xF9 => stack::execute_sphl(cpu, opcode),
    };

    Ok(cycles)
}

/// Builds the fatal error for an opcode the engine does not model.
///
/// PC has already advanced past the opcode, so the opcode lives at PC-1.
fn unimplemented(cpu: &CPU, opcode: u8) -> ExecutionError {
    let address = cpu.pc.wrapping_sub(1);
    ExecutionError::UnimplementedInstruction {
        address,
        opcode,
        disassembly: disassembler::disassemble_at(&cpu.memory, address),
    }
}
