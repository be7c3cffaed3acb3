//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file and memory around PC and SP, executes
//! one instruction, and checks the engine's bookkeeping.

#![no_main]

use arbitrary::Arbitrary;
use lib8080::{ConditionCodes, ExecutionError, Memory, CPU, OPCODE_TABLE};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    b: u8,
    c: u8,
    d: u8,
    e: u8,
    h: u8,
    l: u8,
    sp: u16,
    pc: u16,
    /// Packed PSW flag byte
    psw: u8,
    interrupts_enabled: bool,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (opcode + operands)
    instruction_bytes: [u8; 3],
    /// Bytes at SP, so POP/RET/XTHL read something interesting
    stack_bytes: [u8; 4],
    /// Bytes at HL, for the M operand
    hl_bytes: [u8; 2],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let state = &input.cpu_state;
    let mut memory = Memory::new();

    let hl = u16::from_be_bytes([state.h, state.l]);
    for (i, &byte) in input.memory.hl_bytes.iter().enumerate() {
        memory.write(hl.wrapping_add(i as u16), byte);
    }
    for (i, &byte) in input.memory.stack_bytes.iter().enumerate() {
        memory.write(state.sp.wrapping_add(i as u16), byte);
    }
    // Instruction bytes last so they win any overlap
    for (i, &byte) in input.memory.instruction_bytes.iter().enumerate() {
        memory.write(state.pc.wrapping_add(i as u16), byte);
    }

    let mut cpu = CPU::with_memory(memory);
    cpu.set_a(state.a);
    cpu.set_b(state.b);
    cpu.set_c(state.c);
    cpu.set_d(state.d);
    cpu.set_e(state.e);
    cpu.set_h(state.h);
    cpu.set_l(state.l);
    cpu.set_sp(state.sp);
    cpu.set_pc(state.pc);
    cpu.set_flags(ConditionCodes::from_psw(state.psw));
    cpu.set_interrupts_enabled(state.interrupts_enabled);

    let opcode = input.memory.instruction_bytes[0];
    let metadata = &OPCODE_TABLE[opcode as usize];

    match cpu.step() {
        Ok(cycles) => {
            assert!(metadata.implemented);
            assert!(cycles == metadata.base_cycles || cycles == metadata.taken_cycles);
            assert_eq!(cpu.cycles(), cycles as u64);
        }
        Err(ExecutionError::UnimplementedInstruction {
            address,
            opcode: reported,
            disassembly,
        }) => {
            assert!(!metadata.implemented);
            assert_eq!(address, state.pc);
            assert_eq!(reported, opcode);
            assert!(!disassembly.is_empty());
            assert_eq!(cpu.pc(), state.pc);
            assert_eq!(cpu.cycles(), 0);
        }
    }

    // Bits 5-7 of the flag byte are never set
    assert_eq!(cpu.psw() & 0xE0, 0);
});
