//! ROM image loading.
//!
//! The board carries four 2 KiB EPROMs mapped back to back from 0x0000. MAME
//! ships them as `invaders.h`, `invaders.g`, `invaders.f` and `invaders.e`;
//! other dumps concatenate them into a single 8 KiB file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lib8080::{Memory, MemoryError};
use thiserror::Error;
use tracing::debug;

/// Size of one ROM chip.
pub const ROM_CHIP_SIZE: usize = 0x0800;

/// Size of the full program ROM.
pub const ROM_TOTAL_SIZE: usize = 4 * ROM_CHIP_SIZE;

/// Chip file names and their load addresses.
pub const ROM_FILES: [(&str, u16); 4] = [
    ("invaders.h", 0x0000),
    ("invaders.g", 0x0800),
    ("invaders.f", 0x1000),
    ("invaders.e", 0x1800),
];

/// Errors raised while reading or placing ROM images.
#[derive(Debug, Error)]
pub enum RomError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ROM image {name} is {len} bytes, larger than its slot")]
    TooLarge { name: String, len: usize },

    #[error(transparent)]
    Memory(#[from] MemoryError),
}

/// One ROM image and where it lives in the address space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomSegment {
    pub name: String,
    pub offset: u16,
    pub data: Vec<u8>,
}

/// The program ROMs for one board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RomSet {
    segments: Vec<RomSegment>,
}

impl RomSet {
    /// Reads the four chip images from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, RomError> {
        let dir = dir.as_ref();
        let mut segments = Vec::with_capacity(ROM_FILES.len());

        for (name, offset) in ROM_FILES {
            let path = dir.join(name);
            let data = fs::read(&path).map_err(|source| RomError::Io {
                path: path.clone(),
                source,
            })?;
            segments.push(segment(name, offset, data, ROM_CHIP_SIZE)?);
        }

        Ok(Self { segments })
    }

    /// Splits a concatenated image (up to 8 KiB) into chip-sized segments.
    pub fn from_combined(bytes: &[u8]) -> Result<Self, RomError> {
        if bytes.len() > ROM_TOTAL_SIZE {
            return Err(RomError::TooLarge {
                name: "combined image".to_string(),
                len: bytes.len(),
            });
        }

        let segments = bytes
            .chunks(ROM_CHIP_SIZE)
            .zip(ROM_FILES)
            .map(|(chunk, (name, offset))| RomSegment {
                name: name.to_string(),
                offset,
                data: chunk.to_vec(),
            })
            .collect();

        Ok(Self { segments })
    }

    /// Reads a concatenated image from disk.
    pub fn from_combined_file(path: impl AsRef<Path>) -> Result<Self, RomError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| RomError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_combined(&bytes)
    }

    pub fn segments(&self) -> &[RomSegment] {
        &self.segments
    }

    /// Total bytes across all segments.
    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.data.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies every segment to its load address.
    pub fn load_into(&self, memory: &mut Memory) -> Result<(), RomError> {
        for seg in &self.segments {
            debug!(name = %seg.name, offset = seg.offset, len = seg.data.len(), "loading ROM segment");
            memory.load(seg.offset, &seg.data)?;
        }
        Ok(())
    }
}

fn segment(name: &str, offset: u16, data: Vec<u8>, limit: usize) -> Result<RomSegment, RomError> {
    if data.len() > limit {
        return Err(RomError::TooLarge {
            name: name.to_string(),
            len: data.len(),
        });
    }
    Ok(RomSegment {
        name: name.to_string(),
        offset,
        data,
    })
}
