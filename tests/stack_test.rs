//! Tests for PUSH, POP, XTHL and SPHL.

use lib8080::{ConditionCodes, CPU};

/// Helper function to create a CPU with the stack at the top of work RAM
fn setup_cpu() -> CPU {
    let mut cpu = CPU::new();
    cpu.set_sp(0x2400);
    cpu
}

fn load_program(cpu: &mut CPU, bytes: &[u8]) {
    cpu.memory_mut().load(0x0000, bytes).unwrap();
}

#[test]
fn test_push_b_layout() {
    let mut cpu = setup_cpu();

    // PUSH B
    load_program(&mut cpu, &[0xC5]);
    cpu.set_sp(0x2000);
    cpu.set_bc(0x1234);

    assert_eq!(cpu.step(), Ok(11));
    assert_eq!(cpu.sp(), 0x1FFE);
    assert_eq!(cpu.memory().read(0x1FFF), 0x12);
    assert_eq!(cpu.memory().read(0x1FFE), 0x34);
}

#[test]
fn test_pop_d() {
    let mut cpu = setup_cpu();

    // POP D
    load_program(&mut cpu, &[0xD1]);
    cpu.memory_mut().write(0x23FE, 0xCD);
    cpu.memory_mut().write(0x23FF, 0xAB);
    cpu.set_sp(0x23FE);

    assert_eq!(cpu.step(), Ok(10));
    assert_eq!(cpu.d(), 0xAB);
    assert_eq!(cpu.e(), 0xCD);
    assert_eq!(cpu.sp(), 0x2400);
}

#[test]
fn test_push_pop_h_round_trip() {
    let mut cpu = setup_cpu();

    // PUSH H ; LXI H,$0000 ; POP H
    load_program(&mut cpu, &[0xE5, 0x21, 0x00, 0x00, 0xE1]);
    cpu.set_hl(0x55AA);

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.hl(), 0x0000);

    cpu.step().unwrap();
    assert_eq!(cpu.hl(), 0x55AA);
    assert_eq!(cpu.sp(), 0x2400);
}

#[test]
fn test_push_psw_layout() {
    let mut cpu = setup_cpu();

    // PUSH PSW
    load_program(&mut cpu, &[0xF5]);
    cpu.set_a(0x42);
    cpu.set_flags(ConditionCodes {
        z: true,
        s: false,
        p: true,
        cy: true,
        ac: false,
    });

    assert_eq!(cpu.step(), Ok(11));
    assert_eq!(cpu.memory().read(0x23FF), 0x42);
    assert_eq!(cpu.memory().read(0x23FE), 0b0000_1101);
}

#[test]
fn test_pop_psw_restores_every_flag() {
    let mut cpu = setup_cpu();

    // POP PSW
    load_program(&mut cpu, &[0xF1]);
    cpu.memory_mut().write(0x23FE, 0b1111_1111);
    cpu.memory_mut().write(0x23FF, 0x99);
    cpu.set_sp(0x23FE);

    assert_eq!(cpu.step(), Ok(10));
    assert_eq!(cpu.a(), 0x99);
    assert!(cpu.flag_z());
    assert!(cpu.flag_s());
    assert!(cpu.flag_p());
    assert!(cpu.flag_cy());
    assert!(cpu.flag_ac());
    // Unused bits are dropped
    assert_eq!(cpu.psw(), 0b0001_1111);
}

#[test]
fn test_push_pop_psw_round_trip() {
    let mut cpu = setup_cpu();

    // PUSH PSW ; XRA A ; POP PSW
    load_program(&mut cpu, &[0xF5, 0xAF, 0xF1]);
    cpu.set_a(0x80);
    cpu.set_flag_s(true);
    cpu.set_flag_cy(true);
    let flags = cpu.flags();

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x00);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x80);
    assert_eq!(cpu.flags(), flags);
}

#[test]
fn test_xthl() {
    let mut cpu = setup_cpu();

    // XTHL
    load_program(&mut cpu, &[0xE3]);
    cpu.set_sp(0x23F0);
    cpu.memory_mut().write(0x23F0, 0xF0);
    cpu.memory_mut().write(0x23F1, 0x0D);
    cpu.set_hl(0x0B3C);

    assert_eq!(cpu.step(), Ok(18));
    assert_eq!(cpu.hl(), 0x0DF0);
    assert_eq!(cpu.memory().read(0x23F0), 0x3C);
    assert_eq!(cpu.memory().read(0x23F1), 0x0B);
    assert_eq!(cpu.sp(), 0x23F0);
}

#[test]
fn test_sphl() {
    let mut cpu = setup_cpu();

    // SPHL
    load_program(&mut cpu, &[0xF9]);
    cpu.set_hl(0x506C);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.sp(), 0x506C);
}
