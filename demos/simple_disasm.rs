//! Basic disassembler usage example

use lib8080::disassembler::{disassemble, format_instruction, DisassemblyOptions};

fn main() {
    // Opening of a typical interrupt handler
    let code = &[
        0xF5, // PUSH PSW
        0xC5, // PUSH B
        0x3E, 0x80, // MVI A,#$80
        0x32, 0x72, 0x20, // STA $2072
        0x21, 0xC0, 0x20, // LXI H,#$20C0
        0x35, // DCR M
        0xCD, 0xCD, 0x17, // CALL $17CD
        0xDB, 0x01, // IN #$01
        0xFB, // EI
        0xC9, // RET
    ];

    let options = DisassemblyOptions { start_address: 0x0010 };

    let instructions = disassemble(code, options);

    println!("Disassembled code:");
    for instr in instructions {
        println!("{:04X}: {}", instr.address, format_instruction(&instr));
    }
}
