//! Instruction decoder for the 8080 disassembler

use crate::disassembler::Instruction;
use crate::opcodes::OPCODE_TABLE;

/// Decode a single instruction from a byte slice
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `address` - The memory address of this instruction
///
/// # Returns
///
/// Some(Instruction) if the opcode is documented and all its operand bytes
/// are present, None otherwise
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<Instruction> {
    let (&opcode, rest) = bytes.split_first()?;
    let metadata = &OPCODE_TABLE[opcode as usize];

    // Undocumented encodings have "???" as mnemonic
    if metadata.mnemonic == "???" {
        return None;
    }

    let operand_len = metadata.addressing_mode.operand_bytes() as usize;
    let operand_bytes = rest.get(..operand_len)?.to_vec();

    Some(Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        operand: metadata.operand,
        addressing_mode: metadata.addressing_mode,
        operand_bytes,
        size_bytes: metadata.size_bytes,
        base_cycles: metadata.base_cycles,
    })
}
