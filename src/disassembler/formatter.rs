//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;

/// Format a single instruction as assembly text
///
/// The register operand from the opcode comes first, then any data or
/// address operand: `MVI B,#$05`, `LXI H,#$2400`, `STA $20C0`, `MOV A,M`.
///
/// # Arguments
///
/// * `instr` - The instruction to format
///
/// # Returns
///
/// A string containing the formatted assembly instruction
pub fn format_instruction(instr: &Instruction) -> String {
    // Special case for .byte directive (undocumented or truncated)
    if instr.mnemonic == ".byte" {
        return format!(".byte ${:02X}", instr.opcode);
    }

    let data = format_data(instr);
    let operand = match (instr.operand.is_empty(), data.is_empty()) {
        (true, _) => data,
        (false, true) => instr.operand.to_string(),
        (false, false) => format!("{},{}", instr.operand, data),
    };

    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

/// Format the in-stream operand based on addressing mode
fn format_data(instr: &Instruction) -> String {
    use AddressingMode::*;

    match instr.addressing_mode {
        Implicit | Register | RegisterIndirect => String::new(),
        Immediate => match instr.operand_bytes.first() {
            Some(value) => format!("#${:02X}", value),
            None => "#$??".to_string(),
        },
        ImmediateExtended => match word(instr) {
            Some(value) => format!("#${:04X}", value),
            None => "#$????".to_string(),
        },
        Direct => match word(instr) {
            Some(addr) => format!("${:04X}", addr),
            None => "$????".to_string(),
        },
    }
}

fn word(instr: &Instruction) -> Option<u16> {
    match instr.operand_bytes.as_slice() {
        [lo, hi, ..] => Some(u16::from_le_bytes([*lo, *hi])),
        _ => None,
    }
}
