//! Integration tests for the Space Invaders board.
//!
//! These run small hand-assembled programs instead of the game ROM, which is
//! not redistributable.

use std::fs;
use std::path::PathBuf;

use invaders_emu::{
    Button, InvadersSystem, PortHandler, RomError, RomSet, SoundEvent, SystemConfig,
};
use lib8080::ExecutionError;
use proptest::prelude::*;

fn setup_system(program: &[u8]) -> InvadersSystem {
    let roms = RomSet::from_combined(program).unwrap();
    let mut system = InvadersSystem::new(SystemConfig::default());
    system.load_roms(&roms).unwrap();
    system
}

/// Frame-driven program: counts RST 1 in B and RST 2 in C.
fn interrupt_counter_program() -> Vec<u8> {
    let mut rom = vec![0u8; 0x20];
    // 0x0000: LXI SP,$2400 / EI / JMP $0004
    rom[0x00..0x07].copy_from_slice(&[0x31, 0x00, 0x24, 0xFB, 0xC3, 0x04, 0x00]);
    // 0x0008: INR B / EI / RET
    rom[0x08..0x0B].copy_from_slice(&[0x04, 0xFB, 0xC9]);
    // 0x0010: INR C / EI / RET
    rom[0x10..0x13].copy_from_slice(&[0x0C, 0xFB, 0xC9]);
    rom
}

#[test]
fn test_in_reads_player_one_port() {
    // IN 1
    let mut system = setup_system(&[0xDB, 0x01]);
    system.press(Button::Coin);
    system.press(Button::P1Fire);

    let cycles = system.step().unwrap();

    assert_eq!(cycles, 10);
    assert_eq!(system.cpu().a(), 0x08 | 0x01 | 0x10);
    assert_eq!(system.cpu().pc(), 0x0002);
    assert_eq!(system.cpu().cycles(), 10);
}

#[test]
fn test_in_does_not_touch_flags() {
    // XRA A (sets Z) / IN 0
    let mut system = setup_system(&[0xAF, 0xDB, 0x00]);

    system.step().unwrap();
    system.step().unwrap();

    assert_eq!(system.cpu().a(), 0b0000_1110);
    assert!(system.cpu().flag_z());
}

#[test]
fn test_shift_register_program() {
    let program = [
        0x3E, 0xFF, // MVI A,$FF
        0xD3, 0x04, // OUT 4
        0x3E, 0x00, // MVI A,$00
        0xD3, 0x04, // OUT 4
        0x3E, 0x02, // MVI A,$02
        0xD3, 0x02, // OUT 2
        0xDB, 0x03, // IN 3
    ];
    let mut system = setup_system(&program);

    for _ in 0..7 {
        system.step().unwrap();
    }

    assert_eq!(system.cpu().a(), 0x03);
    assert_eq!(system.ports().shift_register().value(), 0x00FF);
    assert_eq!(system.cpu().pc(), 0x000E);
}

#[test]
fn test_out_sound_latch_produces_events() {
    let program = [
        0x3E, 0x02, // MVI A,$02
        0xD3, 0x03, // OUT 3
        0xD3, 0x03, // OUT 3 (held)
        0x3E, 0x10, // MVI A,$10
        0xD3, 0x05, // OUT 5
    ];
    let mut system = setup_system(&program);

    for _ in 0..5 {
        system.step().unwrap();
    }

    assert_eq!(
        system.take_sound_events(),
        vec![SoundEvent::Shot, SoundEvent::UfoHit]
    );
}

#[test]
fn test_watchdog_writes_are_counted() {
    // OUT 6 / OUT 6
    let mut system = setup_system(&[0xD3, 0x06, 0xD3, 0x06]);

    system.step().unwrap();
    system.step().unwrap();

    assert_eq!(system.ports().watchdog_writes(), 2);
}

#[test]
fn test_step_frame_injects_both_interrupts() {
    let mut system = setup_system(&interrupt_counter_program());

    let cycles = system.step_frame().unwrap();

    assert!(cycles >= 33_333);
    assert_eq!(system.frame_count(), 1);
    // RST 1 handled mid-frame; RST 2 vectored at the end, handler not yet run
    assert_eq!(system.cpu().b(), 1);
    assert_eq!(system.cpu().c(), 0);
    assert_eq!(system.cpu().pc(), 0x0010);

    system.step_frame().unwrap();

    assert_eq!(system.frame_count(), 2);
    assert_eq!(system.cpu().b(), 2);
    assert_eq!(system.cpu().c(), 1);
    assert_eq!(system.cpu().sp(), 0x23FE);
}

#[test]
fn test_interrupts_dropped_while_disabled() {
    // LXI SP,$2400 / JMP $0003
    let mut system = setup_system(&[0x31, 0x00, 0x24, 0xC3, 0x03, 0x00]);

    system.step_frame().unwrap();

    assert_eq!(system.cpu().sp(), 0x2400);
    assert_eq!(system.cpu().pc(), 0x0003);
    assert_eq!(system.frame_count(), 1);
}

#[test]
fn test_halt_released_by_mid_screen_interrupt() {
    let mut rom = vec![0u8; 0x20];
    // LXI SP,$2400 / EI / HLT / JMP $0005
    rom[0x00..0x08].copy_from_slice(&[0x31, 0x00, 0x24, 0xFB, 0x76, 0xC3, 0x05, 0x00]);
    // RST 1: MVI A,$11 / RET (interrupts stay off)
    rom[0x08..0x0B].copy_from_slice(&[0x3E, 0x11, 0xC9]);
    let mut system = setup_system(&rom);

    system.step_frame().unwrap();

    assert_eq!(system.cpu().a(), 0x11);
    assert!(!system.cpu().is_halted());
    assert!(!system.cpu().interrupts_enabled());
    // RST 2 was dropped, so the CPU is still spinning after the HLT
    assert_eq!(system.cpu().pc(), 0x0005);
    assert_eq!(system.cpu().sp(), 0x2400);
}

#[test]
fn test_unimplemented_opcode_stops_frame() {
    // NOP / undocumented 0x08
    let mut system = setup_system(&[0x00, 0x08]);

    let err = system.step_frame().unwrap_err();

    match err {
        ExecutionError::UnimplementedInstruction { address, opcode, .. } => {
            assert_eq!(address, 0x0001);
            assert_eq!(opcode, 0x08);
        }
    }
    assert_eq!(system.frame_count(), 0);
}

#[test]
fn test_vram_writes_show_in_framebuffer() {
    let program = [
        0x21, 0x00, 0x24, // LXI H,$2400
        0x36, 0x81, // MVI M,$81
    ];
    let mut system = setup_system(&program);

    system.step().unwrap();
    system.step().unwrap();

    assert_eq!(system.framebuffer()[0], 0x81);
    assert_eq!(system.screen_pixels().iter().filter(|&&p| p == 1).count(), 2);
}

#[test]
fn test_dip_switches_reach_port2() {
    let config = SystemConfig {
        dip_switches: invaders_emu::DipSwitches {
            lives: 5,
            bonus_at_1000: true,
            coin_info_hidden: false,
        },
        ..SystemConfig::default()
    };
    let roms = RomSet::from_combined(&[0xDB, 0x02]).unwrap();
    let mut system = InvadersSystem::new(config);
    system.load_roms(&roms).unwrap();

    system.step().unwrap();

    assert_eq!(system.cpu().a(), 0b0000_1010);
}

#[derive(Default)]
struct RecordingPorts {
    writes: Vec<(u8, u8)>,
    reads: Vec<u8>,
}

impl PortHandler for RecordingPorts {
    fn input(&mut self, port: u8) -> u8 {
        self.reads.push(port);
        0x5A
    }

    fn output(&mut self, port: u8, value: u8) {
        self.writes.push((port, value));
    }
}

#[test]
fn test_custom_port_handler() {
    let program = [
        0x3E, 0x42, // MVI A,$42
        0xD3, 0x99, // OUT $99
        0xDB, 0x07, // IN 7
    ];
    let mut system = InvadersSystem::with_ports(SystemConfig::default(), RecordingPorts::default());
    system.cpu_mut().memory_mut().load(0x0000, &program).unwrap();

    for _ in 0..3 {
        system.step().unwrap();
    }

    assert_eq!(system.ports().writes, vec![(0x99, 0x42)]);
    assert_eq!(system.ports().reads, vec![0x07]);
    assert_eq!(system.cpu().a(), 0x5A);
}

#[test]
fn test_roms_from_directory() {
    let dir: PathBuf = std::env::temp_dir().join(format!("invaders-emu-roms-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    for (i, name) in ["invaders.h", "invaders.g", "invaders.f", "invaders.e"].iter().enumerate() {
        fs::write(dir.join(name), vec![i as u8 + 1; 0x800]).unwrap();
    }

    let roms = RomSet::from_dir(&dir).unwrap();
    let mut system = InvadersSystem::new(SystemConfig::default());
    system.load_roms(&roms).unwrap();
    fs::remove_dir_all(&dir).unwrap();

    let memory = system.cpu().memory();
    assert_eq!(memory.read(0x0000), 1);
    assert_eq!(memory.read(0x0800), 2);
    assert_eq!(memory.read(0x1000), 3);
    assert_eq!(memory.read(0x1FFF), 4);
    assert_eq!(memory.read(0x2000), 0);
}

#[test]
fn test_oversized_chip_in_directory() {
    let dir: PathBuf =
        std::env::temp_dir().join(format!("invaders-emu-big-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    for name in ["invaders.h", "invaders.g", "invaders.f", "invaders.e"] {
        fs::write(dir.join(name), vec![0; 0x800]).unwrap();
    }
    fs::write(dir.join("invaders.f"), vec![0; 0x801]).unwrap();

    let result = RomSet::from_dir(&dir);
    fs::remove_dir_all(&dir).unwrap();

    match result {
        Err(RomError::TooLarge { name, len }) => {
            assert_eq!(name, "invaders.f");
            assert_eq!(len, 0x801);
        }
        other => panic!("unexpected {:?}", other),
    }
}

proptest! {
    #[test]
    fn prop_shift_register_matches_formula(first: u8, second: u8, offset in 0u8..8) {
        let program = [
            0x3E, first, 0xD3, 0x04, // MVI A,first / OUT 4
            0x3E, second, 0xD3, 0x04, // MVI A,second / OUT 4
            0x3E, offset, 0xD3, 0x02, // MVI A,offset / OUT 2
            0xDB, 0x03, // IN 3
        ];
        let mut system = setup_system(&program);

        for _ in 0..7 {
            system.step().unwrap();
        }

        let value = ((second as u16) << 8) | first as u16;
        prop_assert_eq!(system.cpu().a(), (value >> (8 - offset)) as u8);
    }

    #[test]
    fn prop_frames_take_at_least_the_budget(frames in 1usize..4) {
        let mut system = setup_system(&interrupt_counter_program());

        for _ in 0..frames {
            let cycles = system.step_frame().unwrap();
            prop_assert!(cycles >= 33_333);
            prop_assert!(cycles < 33_333 + 40);
        }
        prop_assert_eq!(system.cpu().b() as usize, frames);
    }
}
