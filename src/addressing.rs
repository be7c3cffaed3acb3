//! # Addressing Modes
//!
//! This module defines the addressing modes used by the 8080 instruction set.
//! Each mode determines how many operand bytes follow the opcode and where the
//! instruction finds its data.

/// 8080 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Register, RegisterIndirect
/// - **1 byte**: Immediate
/// - **2 bytes**: ImmediateExtended, Direct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: NOP, RLC, EI, RET
    Implicit,

    /// Operates on registers named by the opcode's bit fields.
    ///
    /// Examples: MOV B,C, ADD E, INR A, PUSH H
    Register,

    /// Memory addressed by a register pair (HL for `M`, or BC/DE).
    ///
    /// Examples: MOV A,M, LDAX D, STAX B
    RegisterIndirect,

    /// 8-bit constant operand (data or port number) in the instruction.
    ///
    /// Example: MVI A,$05 (load 0x05 into the accumulator)
    Immediate,

    /// 16-bit constant operand, low byte first.
    ///
    /// Example: LXI H,$2400
    ImmediateExtended,

    /// Full 16-bit address, low byte first.
    ///
    /// Example: JMP $1234, LDA $20C0
    Direct,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit
            | AddressingMode::Register
            | AddressingMode::RegisterIndirect => 0,
            AddressingMode::Immediate => 1,
            AddressingMode::ImmediateExtended | AddressingMode::Direct => 2,
        }
    }
}
