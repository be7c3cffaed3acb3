//! Space Invaders port hardware.
//!
//! - [`ShiftRegister`]: the 16-bit sprite shifter on ports 2, 3 and 4
//! - [`InvadersPorts`]: the full port map (inputs, shifter, sound, watchdog)
//!
//! All devices sit behind [`PortHandler`], the seam through which the system
//! services `IN` and `OUT`.

mod ports;
mod shift_register;

pub use ports::{button_for_key, Button, DipSwitches, InvadersPorts, PortHandler, SoundEvent};
pub use shift_register::ShiftRegister;
