//! Board orchestration and frame timing.

use lib8080::{ExecutionError, CPU, OPCODE_IN, OPCODE_OUT, OPCODE_TABLE};
use tracing::{debug, info};

use super::{RomError, RomSet};
use crate::devices::{Button, DipSwitches, InvadersPorts, PortHandler, SoundEvent};

/// CPU clock in Hz.
pub const CLOCK_HZ: u64 = 2_000_000;

/// Display refresh rate in Hz.
pub const FRAME_RATE: u64 = 60;

/// Start of video RAM.
pub const VRAM_START: u16 = 0x2400;

/// One past the end of video RAM.
pub const VRAM_END: u16 = 0x4000;

/// Screen width as viewed in the cabinet (the monitor is rotated).
pub const SCREEN_WIDTH: usize = 224;

/// Screen height as viewed in the cabinet.
pub const SCREEN_HEIGHT: usize = 256;

/// Interrupt raised when the beam reaches the middle of the screen.
const MID_SCREEN_RST: u8 = 1;

/// Interrupt raised at vertical blank.
const VBLANK_RST: u8 = 2;

/// Board configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemConfig {
    /// CPU cycles between vertical blanks.
    pub cycles_per_frame: u64,

    pub dip_switches: DipSwitches,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            cycles_per_frame: CLOCK_HZ / FRAME_RATE,
            dip_switches: DipSwitches::default(),
        }
    }
}

/// The Space Invaders board: an 8080, its memory, and the port hardware.
///
/// `IN` and `OUT` never reach the CPU core; [`step`](Self::step) services them
/// through the [`PortHandler`] and runs everything else on the CPU.
pub struct InvadersSystem<P: PortHandler = InvadersPorts> {
    cpu: CPU,
    ports: P,
    config: SystemConfig,
    frame_count: u64,
}

impl InvadersSystem<InvadersPorts> {
    /// Creates a board with empty memory and the stock port hardware.
    pub fn new(config: SystemConfig) -> Self {
        Self::with_ports(config, InvadersPorts::new(config.dip_switches))
    }

    pub fn press(&mut self, button: Button) {
        self.ports.press(button);
    }

    pub fn release(&mut self, button: Button) {
        self.ports.release(button);
    }

    /// Drains the sound effects started since the last call.
    pub fn take_sound_events(&mut self) -> Vec<SoundEvent> {
        self.ports.take_sound_events()
    }
}

impl<P: PortHandler> InvadersSystem<P> {
    /// Creates a board around a custom port handler.
    pub fn with_ports(config: SystemConfig, ports: P) -> Self {
        Self {
            cpu: CPU::new(),
            ports,
            config,
            frame_count: 0,
        }
    }

    /// Copies the program ROMs into memory.
    pub fn load_roms(&mut self, roms: &RomSet) -> Result<(), RomError> {
        roms.load_into(self.cpu.memory_mut())?;
        info!(
            bytes = roms.len(),
            segments = roms.segments().len(),
            "ROMs loaded"
        );
        Ok(())
    }

    /// Puts the CPU back in its power-on state. Memory is kept, as on the
    /// real board.
    pub fn reset(&mut self) {
        let memory = self.cpu.memory().clone();
        self.cpu = CPU::with_memory(memory);
        self.frame_count = 0;
        debug!("system reset");
    }

    /// Executes one instruction, servicing port I/O on the CPU's behalf.
    ///
    /// Returns the cycles consumed.
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        if self.cpu.is_halted() {
            return self.cpu.step();
        }

        let pc = self.cpu.pc();
        let opcode = self.cpu.memory().read(pc);

        match opcode {
            OPCODE_IN => {
                let port = self.cpu.memory().read(pc.wrapping_add(1));
                let value = self.ports.input(port);
                self.cpu.set_a(value);
            }
            OPCODE_OUT => {
                let port = self.cpu.memory().read(pc.wrapping_add(1));
                self.ports.output(port, self.cpu.a());
            }
            _ => return self.cpu.step(),
        }

        let cycles = OPCODE_TABLE[opcode as usize].base_cycles;
        self.cpu.set_pc(pc.wrapping_add(2));
        self.cpu.add_cycles(cycles);
        Ok(cycles)
    }

    /// Steps until at least `budget` cycles have elapsed.
    ///
    /// Returns the cycles actually consumed, which can overshoot by part of
    /// one instruction.
    pub fn run_cycles(&mut self, budget: u64) -> Result<u64, ExecutionError> {
        let start = self.cpu.cycles();
        let target = start + budget;

        while self.cpu.cycles() < target {
            self.step()?;
        }

        Ok(self.cpu.cycles() - start)
    }

    /// Runs one video frame.
    ///
    /// The first half ends with `RST 1` (mid-screen), the second with `RST 2`
    /// (vertical blank). Either interrupt is dropped if the program has them
    /// disabled. Returns the cycles executed, interrupt overhead included.
    pub fn step_frame(&mut self) -> Result<u64, ExecutionError> {
        let start = self.cpu.cycles();
        let half = self.config.cycles_per_frame / 2;

        self.run_cycles(half)?;
        self.cpu.generate_interrupt(MID_SCREEN_RST);

        let remaining = (start + self.config.cycles_per_frame).saturating_sub(self.cpu.cycles());
        self.run_cycles(remaining)?;
        self.cpu.generate_interrupt(VBLANK_RST);

        self.frame_count += 1;
        Ok(self.cpu.cycles() - start)
    }

    /// Video RAM, 1 bit per pixel.
    ///
    /// Each of the 224 rows holds 32 bytes, least significant bit first. The
    /// monitor is mounted rotated 90 degrees counterclockwise, so these rows
    /// are screen columns.
    pub fn framebuffer(&self) -> &[u8] {
        self.cpu.memory().slice(VRAM_START..VRAM_END)
    }

    /// Video RAM rotated into cabinet orientation, one byte per pixel
    /// (0 or 1), `SCREEN_WIDTH` x `SCREEN_HEIGHT`, row-major from the top left.
    pub fn screen_pixels(&self) -> Vec<u8> {
        let mut pixels = vec![0u8; SCREEN_WIDTH * SCREEN_HEIGHT];

        for (i, &byte) in self.framebuffer().iter().enumerate() {
            let column = i / 32;
            let raw_y = (i % 32) * 8;

            for bit in 0..8 {
                if byte & (1 << bit) != 0 {
                    let row = SCREEN_HEIGHT - 1 - (raw_y + bit);
                    pixels[row * SCREEN_WIDTH + column] = 1;
                }
            }
        }

        pixels
    }

    pub fn cpu(&self) -> &CPU {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut CPU {
        &mut self.cpu
    }

    pub fn ports(&self) -> &P {
        &self.ports
    }

    pub fn ports_mut(&mut self) -> &mut P {
        &mut self.ports
    }

    pub fn config(&self) -> SystemConfig {
        self.config
    }

    /// Frames completed since creation or the last reset.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
