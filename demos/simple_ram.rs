//! Simple RAM example
//!
//! Loads a short program, runs it to completion and inspects the result.
//!
//! This example shows:
//! - Loading a program image into `Memory`
//! - Creating a CPU around it
//! - Stepping instructions and reading back registers, flags and cycles
//! - How the engine reports an instruction it does not execute

use lib8080::{ExecutionError, Memory, CPU};

fn main() {
    println!("lib8080 - Simple RAM Example");
    println!("============================\n");

    // Sum 1..=10 into A, store it at $2000, then hit OUT so the run stops
    let program = [
        0x31, 0x00, 0x24, // 0000: LXI SP,#$2400
        0xAF, // 0003: XRA A
        0x06, 0x0A, // 0004: MVI B,#$0A
        0x80, // 0006: ADD B
        0x05, // 0007: DCR B
        0xC2, 0x06, 0x00, // 0008: JNZ $0006
        0x32, 0x00, 0x20, // 000B: STA $2000
        0xD3, 0x01, // 000E: OUT #$01
    ];

    let mut memory = Memory::new();
    if let Err(err) = memory.load(0x0000, &program) {
        eprintln!("load failed: {}", err);
        return;
    }

    let mut cpu = CPU::with_memory(memory);
    let mut steps = 0;

    let stop = loop {
        match cpu.step() {
            Ok(_) => steps += 1,
            Err(err) => break err,
        }
    };

    println!("Executed {} instructions in {} cycles\n", steps, cpu.cycles());
    println!("CPU State:");
    println!("----------");
    println!("  PC: 0x{:04X}", cpu.pc());
    println!("  SP: 0x{:04X}", cpu.sp());
    println!("  A:  0x{:02X} ({})", cpu.a(), cpu.a());
    println!("  BC: 0x{:04X}", cpu.bc());
    println!("  PSW flags: {:05b} (AC CY P S Z)", cpu.psw());
    println!("  [$2000] = {}\n", cpu.memory().read(0x2000));

    match stop {
        ExecutionError::UnimplementedInstruction { address, .. } => {
            println!("Stopped at 0x{:04X}: {}", address, stop);
            println!("(port I/O belongs to the host system, not the CPU core)");
        }
    }
}
