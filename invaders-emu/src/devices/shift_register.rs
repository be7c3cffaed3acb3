//! Dedicated shift register.
//!
//! The 8080 has no barrel shifter, so the board provides one. The game
//! writes bytes to port 4; each write pushes the new byte into the high half
//! and moves the previous high byte down. Port 2 selects a 3-bit offset and
//! port 3 reads back the 8 bits starting `offset` bits below the top.
//!
//! ```text
//!  value:  [ newest byte | previous byte ]
//!  read:          ^^^^^^^^ (offset 0 = newest byte)
//! ```

/// The 16-bit shift register behind ports 2, 3 and 4.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftRegister {
    value: u16,
    offset: u8,
}

impl ShiftRegister {
    /// Creates a cleared shift register.
    pub const fn new() -> Self {
        Self {
            value: 0,
            offset: 0,
        }
    }

    /// Port 4 write: shifts `data` in from the top.
    #[inline]
    pub fn write_data(&mut self, data: u8) {
        self.value = ((data as u16) << 8) | (self.value >> 8);
    }

    /// Port 2 write: sets the read offset from the low 3 bits.
    #[inline]
    pub fn set_offset(&mut self, offset: u8) {
        self.offset = offset & 0x07;
    }

    /// Port 3 read: `(value >> (8 - offset)) & 0xFF`.
    #[inline]
    pub fn result(&self) -> u8 {
        (self.value >> (8 - self.offset)) as u8
    }

    /// Current 16-bit contents.
    pub fn value(&self) -> u16 {
        self.value
    }

    /// Current read offset (0-7).
    pub fn offset(&self) -> u8 {
        self.offset
    }
}
