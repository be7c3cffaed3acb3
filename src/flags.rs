//! # Condition Codes
//!
//! The 8080 keeps five condition bits: Zero, Sign, Parity, Carry and
//! Auxiliary Carry. They are stored as individual booleans and packed into a
//! byte only when `PUSH PSW` / `POP PSW` move them through the stack.
//!
//! ## PSW Flag Byte Layout
//!
//! | Bit | Flag |
//! |-----|------|
//! | 0   | Z    |
//! | 1   | S    |
//! | 2   | P    |
//! | 3   | CY   |
//! | 4   | AC   |
//! | 5-7 | unused, written as 0 |

const FLAG_Z: u8 = 0b0000_0001;
const FLAG_S: u8 = 0b0000_0010;
const FLAG_P: u8 = 0b0000_0100;
const FLAG_CY: u8 = 0b0000_1000;
const FLAG_AC: u8 = 0b0001_0000;

/// Returns true if `value` has an even number of set bits.
///
/// The 8080 sets its Parity flag for even parity, so zero counts as even.
///
/// # Examples
///
/// ```
/// use lib8080::flags::parity;
///
/// assert!(parity(0xFF));
/// assert!(!parity(0x01));
/// assert!(parity(0x00));
/// ```
#[inline]
pub fn parity(value: u8) -> bool {
    value.count_ones() % 2 == 0
}

/// The five 8080 condition flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConditionCodes {
    /// Zero flag (set if result is zero)
    pub z: bool,

    /// Sign flag (set if bit 7 of result is 1)
    pub s: bool,

    /// Parity flag (set if result has even parity)
    pub p: bool,

    /// Carry flag (set on carry out of bit 7, or on borrow for subtraction)
    pub cy: bool,

    /// Auxiliary carry flag (carry out of bit 3)
    pub ac: bool,
}

impl ConditionCodes {
    /// Recomputes Zero, Sign and Parity from the low byte of `result`.
    ///
    /// Carry and Auxiliary Carry are left alone.
    #[inline]
    pub fn set_zsp(&mut self, result: u8) {
        self.z = result == 0;
        self.s = result & 0x80 != 0;
        self.p = parity(result);
    }

    /// Packs the flags into the PSW flag byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8080::ConditionCodes;
    ///
    /// let flags = ConditionCodes { z: true, cy: true, ..Default::default() };
    /// assert_eq!(flags.to_psw(), 0b0000_1001);
    /// ```
    pub fn to_psw(self) -> u8 {
        let mut psw = 0;

        if self.z {
            psw |= FLAG_Z;
        }
        if self.s {
            psw |= FLAG_S;
        }
        if self.p {
            psw |= FLAG_P;
        }
        if self.cy {
            psw |= FLAG_CY;
        }
        if self.ac {
            psw |= FLAG_AC;
        }

        psw
    }

    /// Unpacks a PSW flag byte. Bits 5-7 are ignored.
    pub fn from_psw(psw: u8) -> Self {
        Self {
            z: psw & FLAG_Z != 0,
            s: psw & FLAG_S != 0,
            p: psw & FLAG_P != 0,
            cy: psw & FLAG_CY != 0,
            ac: psw & FLAG_AC != 0,
        }
    }
}
