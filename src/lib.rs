use wasm_bindgen::prelude::*;

// ============================================================================
// FOUNTAIN - Droplet pool particle fountain
// ============================================================================

pub mod color;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod sim;

#[cfg(not(target_arch = "wasm32"))]
pub mod assets;

pub use color::Color;
pub use config::FountainConfig;
pub use error::FountainError;
pub use input::{Command, InputEvent};
pub use render::{Canvas, Sprite, Surface};
pub use sim::{Droplet, Fountain};

/// Browser-facing world: the fountain plus the RGBA canvas it draws into.
/// JS reads the frame straight out of wasm memory via `output_ptr`.
#[wasm_bindgen]
pub struct FountainWorld {
    fountain: Fountain,
    canvas: Canvas,
}

#[wasm_bindgen]
impl FountainWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            fountain: Fountain::new(FountainConfig::default(), w, h),
            canvas: Canvas::new(w, h),
        }
    }

    pub fn tick(&mut self) {
        self.fountain.tick(&mut self.canvas);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.fountain.handle(InputEvent::PointerPressed { x, y });
    }

    pub fn pointer_drag(&mut self, x: f32, y: f32) {
        self.fountain.handle(InputEvent::PointerDragged { x, y });
    }

    /// True when the page should save the current frame as a screenshot
    pub fn key_down(&mut self, key: char) -> bool {
        self.fountain.handle(InputEvent::KeyPressed(key)) == Some(Command::SaveScreenshot)
    }

    /// Fountain graphic as raw RGBA; false if the buffer doesn't match w x h
    pub fn set_fountain_image(&mut self, w: u32, h: u32, rgba: Vec<u8>) -> bool {
        match Sprite::from_rgba(w, h, rgba) {
            Ok(sprite) => {
                self.fountain.set_sprite(Some(sprite));
                true
            }
            Err(e) => {
                tracing::warn!("fountain image rejected: {e}");
                false
            }
        }
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.canvas.resize(w, h);
        self.fountain.resize(w, h);
    }

    pub fn screenshot_name(&self) -> String {
        self.fountain.config().screenshot_path.clone()
    }

    pub fn live_count(&self) -> usize { self.fountain.live() }
    pub fn output_ptr(&self) -> *const u8 { self.canvas.ptr() }
    pub fn output_len(&self) -> usize { self.canvas.len() }
    pub fn width(&self) -> u32 { self.canvas.width() }
    pub fn height(&self) -> u32 { self.canvas.height() }
}
