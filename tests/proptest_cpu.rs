//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to verify that CPU operations maintain
//! fundamental invariants across all possible input combinations.

use lib8080::flags::parity;
use lib8080::{ConditionCodes, CPU, OPCODE_TABLE};
use proptest::prelude::*;

const PROGRAM_START: u16 = 0x1000;

/// Helper function to create a CPU with PC at the test program and the stack
/// at the top of work RAM
fn setup_cpu() -> CPU {
    let mut cpu = CPU::new();
    cpu.set_pc(PROGRAM_START);
    cpu.set_sp(0x2400);
    cpu.set_hl(0x2000);
    cpu
}

fn load_program(cpu: &mut CPU, bytes: &[u8]) {
    cpu.memory_mut().load(PROGRAM_START, bytes).unwrap();
}

/// Get all implemented opcodes from the opcode table
fn implemented_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, m)| m.implemented)
        .map(|(i, _)| i as u8)
        .collect()
}

/// Get opcodes that don't modify PC in special ways (excludes jumps, calls, returns, restarts)
fn non_branching_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, m)| {
            m.implemented
                && !matches!(
                    m.mnemonic,
                    "JMP" | "JNZ" | "JZ" | "JNC" | "JC" | "JPO" | "JPE" | "JP" | "JM"
                        | "CALL" | "CNZ" | "CZ" | "CNC" | "CC" | "CPO" | "CPE" | "CP" | "CM"
                        | "RET" | "RNZ" | "RZ" | "RNC" | "RC" | "RPO" | "RPE" | "RP" | "RM"
                        | "RST" | "PCHL"
                )
        })
        .map(|(i, _)| i as u8)
        .collect()
}

fn any_flags() -> impl Strategy<Value = ConditionCodes> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>())
        .prop_map(|(z, s, p, cy, ac)| ConditionCodes { z, s, p, cy, ac })
}

// ========== PC Advancement Property Tests ==========

proptest! {
    /// Property: For non-branching instructions, PC advances by exactly size_bytes
    #[test]
    fn prop_pc_advances_by_instruction_size(
        opcode in prop::sample::select(non_branching_opcodes()),
        operand1 in 0u8..=255u8,
        operand2 in 0u8..=255u8,
    ) {
        let mut cpu = setup_cpu();
        let metadata = &OPCODE_TABLE[opcode as usize];

        load_program(&mut cpu, &[opcode, operand1, operand2]);

        cpu.step().unwrap();

        prop_assert_eq!(
            cpu.pc(),
            PROGRAM_START + metadata.size_bytes as u16,
            "PC should advance by {} bytes for opcode 0x{:02X} ({})",
            metadata.size_bytes,
            opcode,
            metadata.mnemonic
        );
    }

    /// Property: step() returns the cycles it added to the counter, and never
    /// less than the table's base cost
    #[test]
    fn prop_cycles_match_table(
        opcode in prop::sample::select(implemented_opcodes()),
        operand1 in 0u8..=255u8,
        operand2 in 0u8..=255u8,
        flags in any_flags(),
    ) {
        let mut cpu = setup_cpu();
        let metadata = &OPCODE_TABLE[opcode as usize];
        cpu.set_flags(flags);

        load_program(&mut cpu, &[opcode, operand1, operand2]);

        let cycles = cpu.step().unwrap();

        prop_assert_eq!(cpu.cycles(), cycles as u64);
        prop_assert!(
            cycles == metadata.base_cycles || cycles == metadata.taken_cycles,
            "opcode 0x{:02X} ({}) took {} cycles",
            opcode,
            metadata.mnemonic,
            cycles
        );
    }
}

// ========== Arithmetic Round Trips ==========

proptest! {
    /// Property: INR then DCR restores the register and leaves carry alone
    #[test]
    fn prop_inr_dcr_round_trip(
        reg in 0u8..8,
        value in 0u8..=255u8,
        carry in any::<bool>(),
    ) {
        let mut cpu = setup_cpu();
        let inr = 0x04 | (reg << 3);
        let dcr = 0x05 | (reg << 3);

        // Register 6 is M, the byte at HL
        match reg {
            0 => cpu.set_b(value),
            1 => cpu.set_c(value),
            2 => cpu.set_d(value),
            3 => cpu.set_e(value),
            4 => cpu.set_h(value),
            5 => cpu.set_l(value),
            6 => cpu.memory_mut().write(0x2000, value),
            _ => cpu.set_a(value),
        }
        let address = cpu.hl();
        cpu.set_flag_cy(carry);

        load_program(&mut cpu, &[inr, dcr]);
        cpu.step().unwrap();
        cpu.step().unwrap();

        let restored = match reg {
            0 => cpu.b(),
            1 => cpu.c(),
            2 => cpu.d(),
            3 => cpu.e(),
            4 => cpu.h(),
            5 => cpu.l(),
            6 => cpu.memory().read(address),
            _ => cpu.a(),
        };

        prop_assert_eq!(restored, value);
        prop_assert_eq!(cpu.flag_cy(), carry);
        prop_assert_eq!(cpu.flag_z(), value == 0);
        prop_assert_eq!(cpu.flag_s(), value & 0x80 != 0);
        prop_assert_eq!(cpu.flag_p(), parity(value));
    }

    /// Property: DCR then INR also restores the value
    #[test]
    fn prop_dcr_inr_round_trip(value in 0u8..=255u8, carry in any::<bool>()) {
        let mut cpu = setup_cpu();
        cpu.set_e(value);
        cpu.set_flag_cy(carry);

        // DCR E ; INR E
        load_program(&mut cpu, &[0x1D, 0x1C]);
        cpu.step().unwrap();
        cpu.step().unwrap();

        prop_assert_eq!(cpu.e(), value);
        prop_assert_eq!(cpu.flag_cy(), carry);
        prop_assert_eq!(cpu.flag_z(), value == 0);
    }

    /// Property: ADD b followed by SUB b restores the accumulator
    #[test]
    fn prop_add_sub_round_trip(a in 0u8..=255u8, b in 0u8..=255u8) {
        let mut cpu = setup_cpu();
        cpu.set_a(a);
        cpu.set_b(b);

        // ADD B ; SUB B
        load_program(&mut cpu, &[0x80, 0x90]);
        cpu.step().unwrap();
        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), a);
    }

    /// Property: SUB sets carry exactly when a borrow occurs
    #[test]
    fn prop_sub_carry_is_borrow(a in 0u8..=255u8, b in 0u8..=255u8) {
        let mut cpu = setup_cpu();
        cpu.set_a(a);
        cpu.set_c(b);

        // SUB C
        load_program(&mut cpu, &[0x91]);
        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), a.wrapping_sub(b));
        prop_assert_eq!(cpu.flag_cy(), b > a);
        prop_assert_eq!(cpu.flag_z(), a == b);
    }

    /// Property: CMP matches SUB's flags without changing A
    #[test]
    fn prop_cmp_matches_sub(a in 0u8..=255u8, b in 0u8..=255u8) {
        let mut sub_cpu = setup_cpu();
        sub_cpu.set_a(a);
        sub_cpu.set_b(b);
        load_program(&mut sub_cpu, &[0x90]);
        sub_cpu.step().unwrap();

        let mut cmp_cpu = setup_cpu();
        cmp_cpu.set_a(a);
        cmp_cpu.set_b(b);
        load_program(&mut cmp_cpu, &[0xB8]);
        cmp_cpu.step().unwrap();

        prop_assert_eq!(cmp_cpu.a(), a);
        prop_assert_eq!(cmp_cpu.flags(), sub_cpu.flags());
    }

    /// Property: Parity flag after ORA A reflects the number of set bits
    #[test]
    fn prop_parity_flag(value in 0u8..=255u8) {
        let mut cpu = setup_cpu();
        cpu.set_a(value);

        // ORA A
        load_program(&mut cpu, &[0xB7]);
        cpu.step().unwrap();

        prop_assert_eq!(cpu.flag_p(), value.count_ones() % 2 == 0);
    }
}

// ========== Stack Round Trips ==========

proptest! {
    /// Property: PUSH rp then POP rp restores the pair and SP, for B, D, H and PSW
    #[test]
    fn prop_push_pop_round_trip(
        pair in 0u8..4,
        high in 0u8..=255u8,
        low in 0u8..=255u8,
        flags in any_flags(),
        sp in 0x2100u16..=0x23FF,
    ) {
        let mut cpu = setup_cpu();
        cpu.set_sp(sp);
        cpu.set_flags(flags);
        match pair {
            0 => cpu.set_bc(u16::from_be_bytes([high, low])),
            1 => cpu.set_de(u16::from_be_bytes([high, low])),
            2 => cpu.set_hl(u16::from_be_bytes([high, low])),
            _ => cpu.set_a(high),
        }
        let before = cpu.clone();

        let push = 0xC5 | (pair << 4);
        let pop = 0xC1 | (pair << 4);
        load_program(&mut cpu, &[push, pop]);
        cpu.step().unwrap();
        prop_assert_eq!(cpu.sp(), sp - 2);
        cpu.step().unwrap();

        prop_assert_eq!(cpu.sp(), sp);
        prop_assert_eq!(cpu.a(), before.a());
        prop_assert_eq!(cpu.bc(), before.bc());
        prop_assert_eq!(cpu.de(), before.de());
        prop_assert_eq!(cpu.hl(), before.hl());
        prop_assert_eq!(cpu.flags(), before.flags());
    }

    /// Property: CALL then RET resumes after the CALL with SP unchanged
    #[test]
    fn prop_call_ret_round_trip(
        target in 0x3000u16..=0xFFF0,
        sp in 0x2100u16..=0x2400,
    ) {
        let mut cpu = setup_cpu();
        cpu.set_sp(sp);

        let [lo, hi] = target.to_le_bytes();
        load_program(&mut cpu, &[0xCD, lo, hi]);
        cpu.memory_mut().write(target, 0xC9);

        cpu.step().unwrap();
        prop_assert_eq!(cpu.pc(), target);

        cpu.step().unwrap();
        prop_assert_eq!(cpu.pc(), PROGRAM_START + 3);
        prop_assert_eq!(cpu.sp(), sp);
    }

    /// Property: PSW packing preserves every flag and keeps bits 5-7 clear
    #[test]
    fn prop_psw_round_trip(flags in any_flags()) {
        let psw = flags.to_psw();

        prop_assert_eq!(psw & 0xE0, 0);
        prop_assert_eq!(ConditionCodes::from_psw(psw), flags);
    }
}

// ========== Concrete Scenarios ==========

#[test]
fn test_parity_of_ff_and_01() {
    let mut cpu = CPU::new();

    // ORA A ; MVI A,$01 ; ORA A
    cpu.memory_mut()
        .load(0x0000, &[0xB7, 0x3E, 0x01, 0xB7])
        .unwrap();
    cpu.set_a(0xFF);

    cpu.step().unwrap();
    assert!(cpu.flag_p());

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert!(!cpu.flag_p());
}

#[test]
fn test_xra_b_scenario() {
    let mut cpu = CPU::new();
    cpu.set_a(0xFF);
    cpu.set_b(0xFF);
    cpu.memory_mut().write(0x0000, 0xA8);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_s());
    assert!(cpu.flag_p());
    assert!(!cpu.flag_cy());
    assert_eq!(cpu.pc(), 0x0001);
}

#[test]
fn test_mvi_a_scenario() {
    let mut cpu = CPU::new();
    cpu.memory_mut().write(0x0000, 0x3E);
    cpu.memory_mut().write(0x0001, 0x05);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x05);
    assert_eq!(cpu.pc(), 0x0002);
}

#[test]
fn test_push_b_scenario() {
    let mut cpu = CPU::new();
    cpu.set_sp(0x2000);
    cpu.set_b(0x12);
    cpu.set_c(0x34);
    cpu.memory_mut().write(0x0000, 0xC5);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x1FFF), 0x12);
    assert_eq!(cpu.memory().read(0x1FFE), 0x34);
    assert_eq!(cpu.sp(), 0x1FFE);
}

#[test]
fn test_jnz_not_taken_scenario() {
    let mut cpu = CPU::new();
    cpu.memory_mut().load(0x0000, &[0xC2, 0x00, 0x10]).unwrap();
    cpu.set_flag_z(true);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0003);
}
