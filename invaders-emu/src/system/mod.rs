//! Board integration, ROM loading and frame timing.
//!
//! [`InvadersSystem`] ties the lib8080 CPU to the port hardware and drives
//! the two video interrupts each frame.

mod invaders_system;
mod rom;

pub use invaders_system::{
    InvadersSystem, SystemConfig, CLOCK_HZ, FRAME_RATE, SCREEN_HEIGHT, SCREEN_WIDTH, VRAM_END,
    VRAM_START,
};
pub use rom::{RomError, RomSegment, RomSet, ROM_CHIP_SIZE, ROM_FILES, ROM_TOTAL_SIZE};
