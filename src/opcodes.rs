//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that serves as the
//! single source of truth for all 8080 instruction information.
//!
//! The table covers:
//! - **244 documented instructions** - Official Intel 8080 opcodes
//! - **12 undocumented encodings** - Marked with "???" mnemonic
//!
//! Each opcode entry includes:
//! - Mnemonic and register operand text
//! - Addressing mode
//! - Cycle cost (with a separate cost for taken conditional calls/returns)
//! - Instruction size in bytes
//! - Implementation status flag

use crate::addressing::AddressingMode;
use crate::addressing::AddressingMode::*;

/// Metadata for a single 8080 opcode.
///
/// # Examples
///
/// ```
/// use lib8080::{OPCODE_TABLE, AddressingMode};
///
/// // Look up MVI A (opcode 0x3E)
/// let mvi_a = &OPCODE_TABLE[0x3E];
/// assert_eq!(mvi_a.mnemonic, "MVI");
/// assert_eq!(mvi_a.operand, "A");
/// assert_eq!(mvi_a.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(mvi_a.base_cycles, 7);
/// assert_eq!(mvi_a.size_bytes, 2);
/// assert!(mvi_a.implemented);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "MOV", "JNZ", "???" for undocumented opcodes).
    pub mnemonic: &'static str,

    /// Register or register-pair operand encoded in the opcode itself
    /// (e.g., "B,C", "M", "SP", "PSW", the RST number), empty if none.
    pub operand: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Cycle cost; for conditional calls and returns, the cost when not taken.
    pub base_cycles: u8,

    /// Cycle cost when a conditional call or return is taken.
    ///
    /// Equal to `base_cycles` for every other instruction.
    pub taken_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,

    /// Whether the execution engine models this instruction.
    ///
    /// `false` for undocumented encodings and for `IN`/`OUT`, which the host
    /// services before the engine sees them.
    pub implemented: bool,
}

impl OpcodeMetadata {
    /// Returns true for conditional calls and returns, whose timing depends on
    /// the condition.
    pub fn is_conditional_timing(&self) -> bool {
        self.taken_cycles != self.base_cycles
    }
}

const fn op(
    mnemonic: &'static str,
    operand: &'static str,
    addressing_mode: AddressingMode,
    cycles: u8,
    size_bytes: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        operand,
        addressing_mode,
        base_cycles: cycles,
        taken_cycles: cycles,
        size_bytes,
        implemented: true,
    }
}

const fn conditional(
    mnemonic: &'static str,
    addressing_mode: AddressingMode,
    base_cycles: u8,
    taken_cycles: u8,
    size_bytes: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        operand: "",
        addressing_mode,
        base_cycles,
        taken_cycles,
        size_bytes,
        implemented: true,
    }
}

const fn port_io(mnemonic: &'static str) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        operand: "",
        addressing_mode: Immediate,
        base_cycles: 10,
        taken_cycles: 10,
        size_bytes: 2,
        implemented: false,
    }
}

const fn undocumented() -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic: "???",
        operand: "",
        addressing_mode: Implicit,
        base_cycles: 0,
        taken_cycles: 0,
        size_bytes: 1,
        implemented: false,
    }
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use lib8080::OPCODE_TABLE;
///
/// let call = &OPCODE_TABLE[0xCD];
/// assert_eq!(call.mnemonic, "CALL");
/// assert_eq!(call.size_bytes, 3);
///
/// // Undocumented encodings are marked and not executable
/// let illegal = &OPCODE_TABLE[0x08];
/// assert_eq!(illegal.mnemonic, "???");
/// assert!(!illegal.implemented);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    op("NOP", "", Implicit, 4, 1),
    // 0x01
    op("LXI", "B", ImmediateExtended, 10, 3),
    // 0x02
    op("STAX", "B", RegisterIndirect, 7, 1),
    // 0x03
    op("INX", "B", Register, 5, 1),
    // 0x04
    op("INR", "B", Register, 5, 1),
    // 0x05
    op("DCR", "B", Register, 5, 1),
    // 0x06
    op("MVI", "B", Immediate, 7, 2),
    // 0x07
    op("RLC", "", Implicit, 4, 1),
    // 0x08 - Undocumented opcode
    undocumented(),
    // 0x09
    op("DAD", "B", Register, 10, 1),
    // 0x0A
    op("LDAX", "B", RegisterIndirect, 7, 1),
    // 0x0B
    op("DCX", "B", Register, 5, 1),
    // 0x0C
    op("INR", "C", Register, 5, 1),
    // 0x0D
    op("DCR", "C", Register, 5, 1),
    // 0x0E
    op("MVI", "C", Immediate, 7, 2),
    // 0x0F
    op("RRC", "", Implicit, 4, 1),
    // 0x10 - Undocumented opcode
    undocumented(),
    // 0x11
    op("LXI", "D", ImmediateExtended, 10, 3),
    // 0x12
    op("STAX", "D", RegisterIndirect, 7, 1),
    // 0x13
    op("INX", "D", Register, 5, 1),
    // 0x14
    op("INR", "D", Register, 5, 1),
    // 0x15
    op("DCR", "D", Register, 5, 1),
    // 0x16
    op("MVI", "D", Immediate, 7, 2),
    // 0x17
    op("RAL", "", Implicit, 4, 1),
    // 0x18 - Undocumented opcode
    undocumented(),
    // 0x19
    op("DAD", "D", Register, 10, 1),
    // 0x1A
    op("LDAX", "D", RegisterIndirect, 7, 1),
    // 0x1B
    op("DCX", "D", Register, 5, 1),
    // 0x1C
    op("INR", "E", Register, 5, 1),
    // 0x1D
    op("DCR", "E", Register, 5, 1),
    // 0x1E
    op("MVI", "E", Immediate, 7, 2),
    // 0x1F
    op("RAR", "", Implicit, 4, 1),
    // 0x20 - Undocumented opcode
    undocumented(),
    // 0x21
    op("LXI", "H", ImmediateExtended, 10, 3),
    // 0x22
    op("SHLD", "", Direct, 16, 3),
    // 0x23
    op("INX", "H", Register, 5, 1),
    // 0x24
    op("INR", "H", Register, 5, 1),
    // 0x25
    op("DCR", "H", Register, 5, 1),
    // 0x26
    op("MVI", "H", Immediate, 7, 2),
    // 0x27
    op("DAA", "", Implicit, 4, 1),
    // 0x28 - Undocumented opcode
    undocumented(),
    // 0x29
    op("DAD", "H", Register, 10, 1),
    // 0x2A
    op("LHLD", "", Direct, 16, 3),
    // 0x2B
    op("DCX", "H", Register, 5, 1),
    // 0x2C
    op("INR", "L", Register, 5, 1),
    // 0x2D
    op("DCR", "L", Register, 5, 1),
    // 0x2E
    op("MVI", "L", Immediate, 7, 2),
    // 0x2F
    op("CMA", "", Implicit, 4, 1),
    // 0x30 - Undocumented opcode
    undocumented(),
    // 0x31
    op("LXI", "SP", ImmediateExtended, 10, 3),
    // 0x32
    op("STA", "", Direct, 13, 3),
    // 0x33
    op("INX", "SP", Register, 5, 1),
    // 0x34
    op("INR", "M", RegisterIndirect, 10, 1),
    // 0x35
    op("DCR", "M", RegisterIndirect, 10, 1),
    // 0x36
    op("MVI", "M", Immediate, 10, 2),
    // 0x37
    op("STC", "", Implicit, 4, 1),
    // 0x38 - Undocumented opcode
    undocumented(),
    // 0x39
    op("DAD", "SP", Register, 10, 1),
    // 0x3A
    op("LDA", "", Direct, 13, 3),
    // 0x3B
    op("DCX", "SP", Register, 5, 1),
    // 0x3C
    op("INR", "A", Register, 5, 1),
    // 0x3D
    op("DCR", "A", Register, 5, 1),
    // 0x3E
    op("MVI", "A", Immediate, 7, 2),
    // 0x3F
    op("CMC", "", Implicit, 4, 1),
    // 0x40
    op("MOV", "B,B", Register, 5, 1),
    // 0x41
    op("MOV", "B,C", Register, 5, 1),
    // 0x42
    op("MOV", "B,D", Register, 5, 1),
    // 0x43
    op("MOV", "B,E", Register, 5, 1),
    // 0x44
    op("MOV", "B,H", Register, 5, 1),
    // 0x45
    op("MOV", "B,L", Register, 5, 1),
    // 0x46
    op("MOV", "B,M", RegisterIndirect, 7, 1),
    // 0x47
    op("MOV", "B,A", Register, 5, 1),
    // 0x48
    op("MOV", "C,B", Register, 5, 1),
    // 0x49
    op("MOV", "C,C", Register, 5, 1),
    // 0x4A
    op("MOV", "C,D", Register, 5, 1),
    // 0x4B
    op("MOV", "C,E", Register, 5, 1),
    // 0x4C
    op("MOV", "C,H", Register, 5, 1),
    // 0x4D
    op("MOV", "C,L", Register, 5, 1),
    // 0x4E
    op("MOV", "C,M", RegisterIndirect, 7, 1),
    // 0x4F
    op("MOV", "C,A", Register, 5, 1),
    // 0x50
    op("MOV", "D,B", Register, 5, 1),
    // 0x51
    op("MOV", "D,C", Register, 5, 1),
    // 0x52
    op("MOV", "D,D", Register, 5, 1),
    // 0x53
    op("MOV", "D,E", Register, 5, 1),
    // 0x54
    op("MOV", "D,H", Register, 5, 1),
    // 0x55
    op("MOV", "D,L", Register, 5, 1),
    // 0x56
    op("MOV", "D,M", RegisterIndirect, 7, 1),
    // 0x57
    op("MOV", "D,A", Register, 5, 1),
    // 0x58
    op("MOV", "E,B", Register, 5, 1),
    // 0x59
    op("MOV", "E,C", Register, 5, 1),
    // 0x5A
    op("MOV", "E,D", Register, 5, 1),
    // 0x5B
    op("MOV", "E,E", Register, 5, 1),
    // 0x5C
    op("MOV", "E,H", Register, 5, 1),
    // 0x5D
    op("MOV", "E,L", Register, 5, 1),
    // 0x5E
    op("MOV", "E,M", RegisterIndirect, 7, 1),
    // 0x5F
    op("MOV", "E,A", Register, 5, 1),
    // 0x60
    op("MOV", "H,B", Register, 5, 1),
    // 0x61
    op("MOV", "H,C", Register, 5, 1),
    // 0x62
    op("MOV", "H,D", Register, 5, 1),
    // 0x63
    op("MOV", "H,E", Register, 5, 1),
    // 0x64
    op("MOV", "H,H", Register, 5, 1),
    // 0x65
    op("MOV", "H,L", Register, 5, 1),
    // 0x66
    op("MOV", "H,M", RegisterIndirect, 7, 1),
    // 0x67
    op("MOV", "H,A", Register, 5, 1),
    // 0x68
    op("MOV", "L,B", Register, 5, 1),
    // 0x69
    op("MOV", "L,C", Register, 5, 1),
    // 0x6A
    op("MOV", "L,D", Register, 5, 1),
    // 0x6B
    op("MOV", "L,E", Register, 5, 1),
    // 0x6C
    op("MOV", "L,H", Register, 5, 1),
    // 0x6D
    op("MOV", "L,L", Register, 5, 1),
    // 0x6E
    op("MOV", "L,M", RegisterIndirect, 7, 1),
    // 0x6F
    op("MOV", "L,A", Register, 5, 1),
    // 0x70
    op("MOV", "M,B", RegisterIndirect, 7, 1),
    // 0x71
    op("MOV", "M,C", RegisterIndirect, 7, 1),
    // 0x72
    op("MOV", "M,D", RegisterIndirect, 7, 1),
    // 0x73
    op("MOV", "M,E", RegisterIndirect, 7, 1),
    // 0x74
    op("MOV", "M,H", RegisterIndirect, 7, 1),
    // 0x75
    op("MOV", "M,L", RegisterIndirect, 7, 1),
    // 0x76
    op("HLT", "", Implicit, 7, 1),
    // 0x77
    op("MOV", "M,A", RegisterIndirect, 7, 1),
    // 0x78
    op("MOV", "A,B", Register, 5, 1),
    // 0x79
    op("MOV", "A,C", Register, 5, 1),
    // 0x7A
    op("MOV", "A,D", Register, 5, 1),
    // 0x7B
    op("MOV", "A,E", Register, 5, 1),
    // 0x7C
    op("MOV", "A,H", Register, 5, 1),
    // 0x7D
    op("MOV", "A,L", Register, 5, 1),
    // 0x7E
    op("MOV", "A,M", RegisterIndirect, 7, 1),
    // 0x7F
    op("MOV", "A,A", Register, 5, 1),
    // 0x80
    op("ADD", "B", Register, 4, 1),
    // 0x81
    op("ADD", "C", Register, 4, 1),
    // 0x82
    op("ADD", "D", Register, 4, 1),
    // 0x83
    op("ADD", "E", Register, 4, 1),
    // 0x84
    op("ADD", "H", Register, 4, 1),
    // 0x85
    op("ADD", "L", Register, 4, 1),
    // 0x86
    op("ADD", "M", RegisterIndirect, 7, 1),
    // 0x87
    op("ADD", "A", Register, 4, 1),
    // 0x88
    op("ADC", "B", Register, 4, 1),
    // 0x89
    op("ADC", "C", Register, 4, 1),
    // 0x8A
    op("ADC", "D", Register, 4, 1),
    // 0x8B
    op("ADC", "E", Register, 4, 1),
    // 0x8C
    op("ADC", "H", Register, 4, 1),
    // 0x8D
    op("ADC", "L", Register, 4, 1),
    // 0x8E
    op("ADC", "M", RegisterIndirect, 7, 1),
    // 0x8F
    op("ADC", "A", Register, 4, 1),
    // 0x90
    op("SUB", "B", Register, 4, 1),
    // 0x91
    op("SUB", "C", Register, 4, 1),
    // 0x92
    op("SUB", "D", Register, 4, 1),
    // 0x93
    op("SUB", "E", Register, 4, 1),
    // 0x94
    op("SUB", "H", Register, 4, 1),
    // 0x95
    op("SUB", "L", Register, 4, 1),
    // 0x96
    op("SUB", "M", RegisterIndirect, 7, 1),
    // 0x97
    op("SUB", "A", Register, 4, 1),
    // 0x98
    op("SBB", "B", Register, 4, 1),
    // 0x99
    op("SBB", "C", Register, 4, 1),
    // 0x9A
    op("SBB", "D", Register, 4, 1),
    // 0x9B
    op("SBB", "E", Register, 4, 1),
    // 0x9C
    op("SBB", "H", Register, 4, 1),
    // 0x9D
    op("SBB", "L", Register, 4, 1),
    // 0x9E
    op("SBB", "M", RegisterIndirect, 7, 1),
    // 0x9F
    op("SBB", "A", Register, 4, 1),
    // 0xA0
    op("ANA", "B", Register, 4, 1),
    // 0xA1
    op("ANA", "C", Register, 4, 1),
    // 0xA2
    op("ANA", "D", Register, 4, 1),
    // 0xA3
    op("ANA", "E", Register, 4, 1),
    // 0xA4
    op("ANA", "H", Register, 4, 1),
    // 0xA5
    op("ANA", "L", Register, 4, 1),
    // 0xA6
    op("ANA", "M", RegisterIndirect, 7, 1),
    // 0xA7
    op("ANA", "A", Register, 4, 1),
    // 0xA8
    op("XRA", "B", Register, 4, 1),
    // 0xA9
    op("XRA", "C", Register, 4, 1),
    // 0xAA
    op("XRA", "D", Register, 4, 1),
    // 0xAB
    op("XRA", "E", Register, 4, 1),
    // 0xAC
    op("XRA", "H", Register, 4, 1),
    // 0xAD
    op("XRA", "L", Register, 4, 1),
    // 0xAE
    op("XRA", "M", RegisterIndirect, 7, 1),
    // 0xAF
    op("XRA", "A", Register, 4, 1),
    // 0xB0
    op("ORA", "B", Register, 4, 1),
    // 0xB1
    op("ORA", "C", Register, 4, 1),
    // 0xB2
    op("ORA", "D", Register, 4, 1),
    // 0xB3
    op("ORA", "E", Register, 4, 1),
    // 0xB4
    op("ORA", "H", Register, 4, 1),
    // 0xB5
    op("ORA", "L", Register, 4, 1),
    // 0xB6
    op("ORA", "M", RegisterIndirect, 7, 1),
    // 0xB7
    op("ORA", "A", Register, 4, 1),
    // 0xB8
    op("CMP", "B", Register, 4, 1),
    // 0xB9
    op("CMP", "C", Register, 4, 1),
    // 0xBA
    op("CMP", "D", Register, 4, 1),
    // 0xBB
    op("CMP", "E", Register, 4, 1),
    // 0xBC
    op("CMP", "H", Register, 4, 1),
    // 0xBD
    op("CMP", "L", Register, 4, 1),
    // 0xBE
    op("CMP", "M", RegisterIndirect, 7, 1),
    // 0xBF
    op("CMP", "A", Register, 4, 1),
    // 0xC0
    conditional("RNZ", Implicit, 5, 11, 1),
    // 0xC1
    op("POP", "B", Register, 10, 1),
    // 0xC2
    op("JNZ", "", Direct, 10, 3),
    // 0xC3
    op("JMP", "", Direct, 10, 3),
    // 0xC4
    conditional("CNZ", Direct, 11, 17, 3),
    // 0xC5
    op("PUSH", "B", Register, 11, 1),
    // 0xC6
    op("ADI", "", Immediate, 7, 2),
    // 0xC7
    op("RST", "0", Implicit, 11, 1),
    // 0xC8
    conditional("RZ", Implicit, 5, 11, 1),
    // 0xC9
    op("RET", "", Implicit, 10, 1),
    // 0xCA
    op("JZ", "", Direct, 10, 3),
    // 0xCB - Undocumented opcode
    undocumented(),
    // 0xCC
    conditional("CZ", Direct, 11, 17, 3),
    // 0xCD
    op("CALL", "", Direct, 17, 3),
    // 0xCE
    op("ACI", "", Immediate, 7, 2),
    // 0xCF
    op("RST", "1", Implicit, 11, 1),
    // 0xD0
    conditional("RNC", Implicit, 5, 11, 1),
    // 0xD1
    op("POP", "D", Register, 10, 1),
    // 0xD2
    op("JNC", "", Direct, 10, 3),
    // 0xD3 - Serviced by the host's port handler
    port_io("OUT"),
    // 0xD4
    conditional("CNC", Direct, 11, 17, 3),
    // 0xD5
    op("PUSH", "D", Register, 11, 1),
    // 0xD6
    op("SUI", "", Immediate, 7, 2),
    // 0xD7
    op("RST", "2", Implicit, 11, 1),
    // 0xD8
    conditional("RC", Implicit, 5, 11, 1),
    // 0xD9 - Undocumented opcode
    undocumented(),
    // 0xDA
    op("JC", "", Direct, 10, 3),
    // 0xDB - Serviced by the host's port handler
    port_io("IN"),
    // 0xDC
    conditional("CC", Direct, 11, 17, 3),
    // 0xDD - Undocumented opcode
    undocumented(),
    // 0xDE
    op("SBI", "", Immediate, 7, 2),
    // 0xDF
    op("RST", "3", Implicit, 11, 1),
    // 0xE0
    conditional("RPO", Implicit, 5, 11, 1),
    // 0xE1
    op("POP", "H", Register, 10, 1),
    // 0xE2
    op("JPO", "", Direct, 10, 3),
    // 0xE3
    op("XTHL", "", Implicit, 18, 1),
    // 0xE4
    conditional("CPO", Direct, 11, 17, 3),
    // 0xE5
    op("PUSH", "H", Register, 11, 1),
    // 0xE6
    op("ANI", "", Immediate, 7, 2),
    // 0xE7
    op("RST", "4", Implicit, 11, 1),
    // 0xE8
    conditional("RPE", Implicit, 5, 11, 1),
    // 0xE9
    op("PCHL", "", Implicit, 5, 1),
    // 0xEA
    op("JPE", "", Direct, 10, 3),
    // 0xEB
    op("XCHG", "", Implicit, 4, 1),
    // 0xEC
    conditional("CPE", Direct, 11, 17, 3),
    // 0xED - Undocumented opcode
    undocumented(),
    // 0xEE
    op("XRI", "", Immediate, 7, 2),
    // 0xEF
    op("RST", "5", Implicit, 11, 1),
    // 0xF0
    conditional("RP", Implicit, 5, 11, 1),
    // 0xF1
    op("POP", "PSW", Register, 10, 1),
    // 0xF2
    op("JP", "", Direct, 10, 3),
    // 0xF3
    op("DI", "", Implicit, 4, 1),
    // 0xF4
    conditional("CP", Direct, 11, 17, 3),
    // 0xF5
    op("PUSH", "PSW", Register, 11, 1),
    // 0xF6
    op("ORI", "", Immediate, 7, 2),
    // 0xF7
    op("RST", "6", Implicit, 11, 1),
    // 0xF8
    conditional("RM", Implicit, 5, 11, 1),
    // 0xF9
    op("SPHL", "", Implicit, 5, 1),
    // 0xFA
    op("JM", "", Direct, 10, 3),
    // 0xFB
    op("EI", "", Implicit, 4, 1),
    // 0xFC
    conditional("CM", Direct, 11, 17, 3),
    // 0xFD - Undocumented opcode
    undocumented(),
    // 0xFE
    op("CPI", "", Immediate, 7, 2),
    // 0xFF
    op("RST", "7", Implicit, 11, 1),
];
