//! WebAssembly bindings for the Space Invaders emulator.
//!
//! The page owns the canvas, audio and animation loop; this module only
//! exposes the board.

use wasm_bindgen::prelude::*;

use crate::devices::button_for_key;
use crate::system::{InvadersSystem, RomSet, SystemConfig, SCREEN_HEIGHT, SCREEN_WIDTH};

/// WASM wrapper for the Space Invaders board.
#[wasm_bindgen]
pub struct InvadersEmulator {
    system: InvadersSystem,
}

#[wasm_bindgen]
impl InvadersEmulator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            system: InvadersSystem::new(SystemConfig::default()),
        }
    }

    /// Loads a concatenated 8 KiB ROM image and resets the CPU.
    #[wasm_bindgen]
    pub fn load_rom(&mut self, data: &[u8]) -> Result<(), JsValue> {
        let roms = RomSet::from_combined(data).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.system
            .load_roms(&roms)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.system.reset();
        Ok(())
    }

    /// Runs one frame and returns the cycles executed.
    ///
    /// A fatal CPU error is thrown as a JavaScript exception.
    #[wasm_bindgen]
    pub fn step_frame(&mut self) -> Result<f64, JsValue> {
        self.system
            .step_frame()
            .map(|cycles| cycles as f64)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Raw video RAM (7168 bytes, 1 bit per pixel).
    #[wasm_bindgen]
    pub fn framebuffer(&self) -> Vec<u8> {
        self.system.framebuffer().to_vec()
    }

    /// Rotated screen, one byte per pixel.
    #[wasm_bindgen]
    pub fn screen_pixels(&self) -> Vec<u8> {
        self.system.screen_pixels()
    }

    #[wasm_bindgen]
    pub fn screen_width(&self) -> u32 {
        SCREEN_WIDTH as u32
    }

    #[wasm_bindgen]
    pub fn screen_height(&self) -> u32 {
        SCREEN_HEIGHT as u32
    }

    /// Handles a `keydown` event. Returns `true` if the key is mapped.
    #[wasm_bindgen]
    pub fn key_down(&mut self, code: &str) -> bool {
        match button_for_key(code) {
            Some(button) => {
                self.system.press(button);
                true
            }
            None => false,
        }
    }

    /// Handles a `keyup` event. Returns `true` if the key is mapped.
    #[wasm_bindgen]
    pub fn key_up(&mut self, code: &str) -> bool {
        match button_for_key(code) {
            Some(button) => {
                self.system.release(button);
                true
            }
            None => false,
        }
    }

    /// Sound effects started since the last call, as an array of names.
    #[wasm_bindgen]
    pub fn take_sound_events(&mut self) -> js_sys::Array {
        self.system
            .take_sound_events()
            .into_iter()
            .map(|event| JsValue::from_str(event.name()))
            .collect()
    }

    #[wasm_bindgen]
    pub fn frame_count(&self) -> f64 {
        self.system.frame_count() as f64
    }
}

impl Default for InvadersEmulator {
    fn default() -> Self {
        Self::new()
    }
}
