//! # Memory
//!
//! The 8080 sees a flat 64KB byte-addressable space. [`Memory`] owns that
//! space as a fixed-length buffer and is the single indexing point for every
//! read and write the engine performs.
//!
//! ## Design Principles
//!
//! - Addresses are `u16`, so every index is in range by construction
//! - No bus errors: reads and writes always succeed
//! - No special-casing of regions: ROM, RAM and video RAM are all plain bytes
//!   to the CPU; the board decides what they mean

use std::ops::{Index, IndexMut, Range};

/// Size of the 8080 address space in bytes.
pub const MEMORY_SIZE: usize = 0x10000;

/// Error returned when loading an image into memory fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemoryError {
    /// The image would run past the end of the address space.
    #[error("image of {len} bytes at ${offset:04X} runs past the end of memory")]
    OutOfRange {
        /// Load offset of the image
        offset: u16,
        /// Length of the image in bytes
        len: usize,
    },
}

/// Flat 64KB memory owned by the processor state.
///
/// # Examples
///
/// ```
/// use lib8080::Memory;
///
/// let mut mem = Memory::new();
///
/// mem.write(0x2400, 0xFF);
/// assert_eq!(mem.read(0x2400), 0xFF);
/// assert_eq!(mem[0x2400], 0xFF);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    /// 64KB contiguous memory array
    data: Box<[u8; MEMORY_SIZE]>,
}

impl Memory {
    /// Creates a new memory with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Reads a byte from the specified 16-bit address.
    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    /// Writes a byte to the specified 16-bit address.
    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    /// Reads a little-endian 16-bit word, wrapping at the top of memory.
    pub fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Writes a little-endian 16-bit word, wrapping at the top of memory.
    pub fn write_word(&mut self, addr: u16, value: u16) {
        self.write(addr, (value & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Copies `image` into memory starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfRange`] if the image does not fit below
    /// 0x10000. Memory is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8080::Memory;
    ///
    /// let mut mem = Memory::new();
    /// mem.load(0x0800, &[0xC3, 0x00, 0x00]).unwrap();
    /// assert_eq!(mem.read(0x0800), 0xC3);
    ///
    /// assert!(mem.load(0xFFFF, &[0x00, 0x00]).is_err());
    /// ```
    pub fn load(&mut self, offset: u16, image: &[u8]) -> Result<(), MemoryError> {
        let start = offset as usize;
        let end = start + image.len();
        if end > MEMORY_SIZE {
            return Err(MemoryError::OutOfRange {
                offset,
                len: image.len(),
            });
        }
        self.data[start..end].copy_from_slice(image);
        Ok(())
    }

    /// Returns a read-only view of an address range.
    ///
    /// Used by renderers to read video RAM without copying byte by byte.
    pub fn slice(&self, range: Range<u16>) -> &[u8] {
        &self.data[range.start as usize..range.end as usize]
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .finish_non_exhaustive()
    }
}

impl Index<u16> for Memory {
    type Output = u8;

    fn index(&self, addr: u16) -> &u8 {
        &self.data[addr as usize]
    }
}

impl IndexMut<u16> for Memory {
    fn index_mut(&mut self, addr: u16) -> &mut u8 {
        &mut self.data[addr as usize]
    }
}
