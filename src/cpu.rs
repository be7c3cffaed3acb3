//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 8080 processor state and
//! the fetch-decode-execute entry points.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A) and general registers B, C, D, E, H, L
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 16-bit, the stack grows downward
//! - **Condition codes**: Z, S, P, CY, AC
//! - **Interrupt-enable latch**: set by EI, cleared by DI and on acknowledge
//! - **Memory**: 64KB, owned by the CPU
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction, returning the cycles it took
//! - `run_for_cycles()`: Execute until cycle budget exhausted
//! - `generate_interrupt()`: Force a restart between instructions
//!
//! Register pairs BC, DE and HL are not stored separately; they are formed
//! from their two halves, high register in the upper byte.

use tracing::{debug, trace};

use crate::flags::ConditionCodes;
use crate::instructions::{self, Register, RegisterPair};
use crate::memory::Memory;
use crate::ExecutionError;

/// Cycles charged for each step taken while halted.
const HALTED_STEP_CYCLES: u8 = 4;

/// Cycles charged for servicing an interrupt (same as RST).
const INTERRUPT_CYCLES: u8 = 11;

/// 8080 CPU state and execution context.
///
/// # Examples
///
/// ```
/// use lib8080::CPU;
///
/// let cpu = CPU::new();
///
/// assert_eq!(cpu.pc(), 0x0000);
/// assert_eq!(cpu.sp(), 0x0000);
/// assert_eq!(cpu.a(), 0x00);
/// assert!(!cpu.interrupts_enabled());
/// assert_eq!(cpu.cycles(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CPU {
    /// Accumulator register
    pub(crate) a: u8,

    pub(crate) b: u8,
    pub(crate) c: u8,
    pub(crate) d: u8,
    pub(crate) e: u8,
    pub(crate) h: u8,
    pub(crate) l: u8,

    /// Stack pointer (address of the most recently pushed byte)
    pub(crate) sp: u16,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Condition flags
    pub(crate) flags: ConditionCodes,

    /// Interrupt-enable latch, consulted only by `generate_interrupt`
    pub(crate) int_enable: bool,

    /// Set by HLT, cleared when an interrupt is serviced
    pub(crate) halted: bool,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// The 64KB address space
    pub(crate) memory: Memory,
}

impl CPU {
    /// Creates a CPU in its power-on state.
    ///
    /// All registers, flags, PC and SP are zero, interrupts are disabled and
    /// memory is freshly zero-filled.
    pub fn new() -> Self {
        Self::with_memory(Memory::new())
    }

    /// Creates a CPU around a pre-populated memory image.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8080::{Memory, CPU};
    ///
    /// let mut mem = Memory::new();
    /// mem.load(0x0000, &[0x00, 0x00, 0xC3, 0x00, 0x00]).unwrap();
    ///
    /// let cpu = CPU::with_memory(mem);
    /// assert_eq!(cpu.memory().read(0x0002), 0xC3);
    /// ```
    pub fn with_memory(memory: Memory) -> Self {
        Self {
            a: 0x00,
            b: 0x00,
            c: 0x00,
            d: 0x00,
            e: 0x00,
            h: 0x00,
            l: 0x00,
            sp: 0x0000,
            pc: 0x0000,
            flags: ConditionCodes::default(),
            int_enable: false,
            halted: false,
            cycles: 0,
            memory,
        }
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at PC and advance PC by one
    /// 2. Dispatch on the opcode; operand bytes are read from the bytes
    ///    following the opcode and skipped once the instruction is done
    /// 3. Add the instruction's cycle cost to the cycle counter
    ///
    /// While halted, no instruction is fetched and a fixed idle cost is
    /// charged instead.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::UnimplementedInstruction`] for opcodes the
    /// engine does not model (undocumented encodings and `IN`/`OUT`). PC is
    /// left at the offending opcode.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8080::{CPU, ExecutionError};
    ///
    /// let mut cpu = CPU::new();
    /// cpu.memory_mut().write(0x0000, 0x00); // NOP
    /// cpu.memory_mut().write(0x0001, 0xDB); // IN (host's job)
    ///
    /// assert_eq!(cpu.step(), Ok(4));
    ///
    /// match cpu.step() {
    ///     Err(ExecutionError::UnimplementedInstruction { address, opcode, .. }) => {
    ///         assert_eq!(address, 0x0001);
    ///         assert_eq!(opcode, 0xDB);
    ///     }
    ///     other => panic!("unexpected {:?}", other),
    /// }
    /// assert_eq!(cpu.pc(), 0x0001);
    /// ```
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        if self.halted {
            self.cycles += HALTED_STEP_CYCLES as u64;
            return Ok(HALTED_STEP_CYCLES);
        }

        let address = self.pc;
        let opcode = self.memory.read(address);
        self.pc = self.pc.wrapping_add(1);

        match instructions::execute(self, opcode) {
            Ok(cycles) => {
                trace!(
                    pc = address,
                    opcode,
                    a = self.a,
                    sp = self.sp,
                    cycles,
                    "executed"
                );
                self.cycles += cycles as u64;
                Ok(cycles)
            }
            Err(err) => {
                self.pc = address;
                Err(err)
            }
        }
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes instructions until the cycle budget is exhausted or an error occurs.
    /// Returns the actual number of cycles consumed (may be slightly more than budget
    /// due to instruction granularity).
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles + cycle_budget;

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Requests interrupt `vector` (0-7), as the external interrupt controller would.
    ///
    /// If the interrupt-enable latch is set, this performs the equivalent of
    /// `RST vector`: the current PC is pushed, PC becomes `vector * 8`, the
    /// latch is cleared and any HLT is released. Must be called between
    /// instructions.
    ///
    /// Returns `true` if the interrupt was serviced, `false` if interrupts
    /// were disabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8080::CPU;
    ///
    /// let mut cpu = CPU::new();
    /// cpu.set_sp(0x2400);
    /// cpu.set_pc(0x1234);
    ///
    /// // Ignored while interrupts are disabled
    /// assert!(!cpu.generate_interrupt(2));
    ///
    /// cpu.set_interrupts_enabled(true);
    /// assert!(cpu.generate_interrupt(2));
    /// assert_eq!(cpu.pc(), 0x0010);
    /// assert_eq!(cpu.sp(), 0x23FE);
    /// assert!(!cpu.interrupts_enabled());
    /// ```
    pub fn generate_interrupt(&mut self, vector: u8) -> bool {
        if !self.int_enable {
            return false;
        }

        let vector = vector & 0x07;
        debug!(vector, return_to = self.pc, "servicing interrupt");

        self.push_word(self.pc);
        self.pc = (vector as u16) << 3;
        self.int_enable = false;
        self.halted = false;
        self.cycles += INTERRUPT_CYCLES as u64;

        true
    }

    /// Adds cycles for an instruction the host executed on the CPU's behalf
    /// (`IN`/`OUT`), keeping `cycles()` in step with machine time.
    pub fn add_cycles(&mut self, cycles: u8) {
        self.cycles += cycles as u64;
    }

    // ========== Internal Helpers ==========

    /// Reads the 8-bit operand following the opcode (PC already points at it).
    pub(crate) fn operand_byte(&self) -> u8 {
        self.memory.read(self.pc)
    }

    /// Reads the little-endian 16-bit operand following the opcode.
    pub(crate) fn operand_word(&self) -> u16 {
        self.memory.read_word(self.pc)
    }

    /// Moves PC past `count` operand bytes.
    pub(crate) fn skip_operands(&mut self, count: u8) {
        self.pc = self.pc.wrapping_add(count as u16);
    }

    /// Reads an 8-bit register; `M` reads memory at HL.
    pub(crate) fn read_reg(&self, reg: Register) -> u8 {
        match reg {
            Register::B => self.b,
            Register::C => self.c,
            Register::D => self.d,
            Register::E => self.e,
            Register::H => self.h,
            Register::L => self.l,
            Register::M => self.memory.read(self.hl()),
            Register::A => self.a,
        }
    }

    /// Writes an 8-bit register; `M` writes memory at HL.
    pub(crate) fn write_reg(&mut self, reg: Register, value: u8) {
        match reg {
            Register::B => self.b = value,
            Register::C => self.c = value,
            Register::D => self.d = value,
            Register::E => self.e = value,
            Register::H => self.h = value,
            Register::L => self.l = value,
            Register::M => {
                let addr = self.hl();
                self.memory.write(addr, value);
            }
            Register::A => self.a = value,
        }
    }

    pub(crate) fn read_pair(&self, pair: RegisterPair) -> u16 {
        match pair {
            RegisterPair::BC => self.bc(),
            RegisterPair::DE => self.de(),
            RegisterPair::HL => self.hl(),
            RegisterPair::SP => self.sp,
        }
    }

    pub(crate) fn write_pair(&mut self, pair: RegisterPair, value: u16) {
        match pair {
            RegisterPair::BC => self.set_bc(value),
            RegisterPair::DE => self.set_de(value),
            RegisterPair::HL => self.set_hl(value),
            RegisterPair::SP => self.sp = value,
        }
    }

    /// Pushes a word: high byte at SP-1, low byte at SP-2, then SP -= 2.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.memory
            .write(self.sp.wrapping_sub(1), (value >> 8) as u8);
        self.memory
            .write(self.sp.wrapping_sub(2), (value & 0xFF) as u8);
        self.sp = self.sp.wrapping_sub(2);
    }

    /// Pops a word: low byte from SP, high byte from SP+1, then SP += 2.
    pub(crate) fn pop_word(&mut self) -> u16 {
        let value = self.memory.read_word(self.sp);
        self.sp = self.sp.wrapping_add(2);
        value
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    pub fn c(&self) -> u8 {
        self.c
    }

    pub fn d(&self) -> u8 {
        self.d
    }

    pub fn e(&self) -> u8 {
        self.e
    }

    pub fn h(&self) -> u8 {
        self.h
    }

    pub fn l(&self) -> u8 {
        self.l
    }

    /// Returns the BC register pair (B in the high byte).
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    /// Returns the DE register pair (D in the high byte).
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    /// Returns the HL register pair (H in the high byte).
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    pub fn sp(&self) -> u16 {
        self.sp
    }

    /// Returns the condition flags.
    pub fn flags(&self) -> ConditionCodes {
        self.flags
    }

    /// Returns the PSW flag byte as `PUSH PSW` would store it.
    pub fn psw(&self) -> u8 {
        self.flags.to_psw()
    }

    /// Returns true if the interrupt-enable latch is set.
    pub fn interrupts_enabled(&self) -> bool {
        self.int_enable
    }

    /// Returns true if a HLT is waiting for an interrupt.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Returns the total number of CPU cycles executed since initialization.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flags.z
    }

    /// Returns true if the Sign flag is set.
    pub fn flag_s(&self) -> bool {
        self.flags.s
    }

    /// Returns true if the Parity flag is set (even parity).
    pub fn flag_p(&self) -> bool {
        self.flags.p
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_cy(&self) -> bool {
        self.flags.cy
    }

    /// Returns true if the Auxiliary Carry flag is set.
    pub fn flag_ac(&self) -> bool {
        self.flags.ac
    }

    // ========== Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_b(&mut self, value: u8) {
        self.b = value;
    }

    pub fn set_c(&mut self, value: u8) {
        self.c = value;
    }

    pub fn set_d(&mut self, value: u8) {
        self.d = value;
    }

    pub fn set_e(&mut self, value: u8) {
        self.e = value;
    }

    pub fn set_h(&mut self, value: u8) {
        self.h = value;
    }

    pub fn set_l(&mut self, value: u8) {
        self.l = value;
    }

    pub fn set_bc(&mut self, value: u16) {
        [self.b, self.c] = value.to_be_bytes();
    }

    pub fn set_de(&mut self, value: u16) {
        [self.d, self.e] = value.to_be_bytes();
    }

    pub fn set_hl(&mut self, value: u16) {
        [self.h, self.l] = value.to_be_bytes();
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u16) {
        self.sp = value;
    }

    pub fn set_flags(&mut self, flags: ConditionCodes) {
        self.flags = flags;
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.flags.z = value;
    }

    pub fn set_flag_s(&mut self, value: bool) {
        self.flags.s = value;
    }

    pub fn set_flag_p(&mut self, value: bool) {
        self.flags.p = value;
    }

    pub fn set_flag_cy(&mut self, value: bool) {
        self.flags.cy = value;
    }

    pub fn set_flag_ac(&mut self, value: bool) {
        self.flags.ac = value;
    }

    pub fn set_interrupts_enabled(&mut self, enabled: bool) {
        self.int_enable = enabled;
    }

    // ========== Memory Access ==========

    /// Returns a shared reference to the address space.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Returns a mutable reference to the address space.
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}
