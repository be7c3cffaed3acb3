//! # Space Invaders Emulator
//!
//! The Taito/Midway Space Invaders arcade board, built on the lib8080 CPU
//! core.
//!
//! ## Architecture
//!
//! The board is an 8080 at 2 MHz with 8 KiB of ROM, 1 KiB of work RAM and
//! 7 KiB of bitmapped video RAM. Everything else is reached through `IN` and
//! `OUT`, which the system intercepts before the CPU sees them:
//!
//! - **Shift register**: a 16-bit barrel shifter used to draw sprites at any
//!   bit offset
//! - **Inputs**: coin slot, start buttons, player controls and DIP switches
//! - **Sound latches**: one bit per sound effect, for an external mixer
//! - **Watchdog**: written every frame by the game, otherwise inert
//!
//! The video hardware raises `RST 1` when the beam reaches mid-screen and
//! `RST 2` at vertical blank; [`InvadersSystem::step_frame`] injects both.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use invaders_emu::{Button, InvadersSystem, RomSet, SystemConfig};
//!
//! let roms = RomSet::from_dir("roms/")?;
//! let mut system = InvadersSystem::new(SystemConfig::default());
//! system.load_roms(&roms)?;
//!
//! system.press(Button::Coin);
//! system.step_frame()?;
//!
//! let vram = system.framebuffer();
//! ```
//!
//! ## Module Organization
//!
//! - `devices`: Port I/O hardware (shift register, inputs, sound, watchdog)
//! - `system`: ROM loading, the board, and frame timing

pub mod devices;
pub mod system;

// WASM bindings (optional, enabled with "wasm" feature)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use devices::{button_for_key, Button, DipSwitches, InvadersPorts, PortHandler, ShiftRegister, SoundEvent};
pub use system::{InvadersSystem, RomError, RomSet, SystemConfig};
