//! Fountain settings.
//!
//! Defaults are the fixed constants the fountain was designed around. A TOML
//! file may restate any subset of them; missing keys keep their default.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{FountainError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FountainConfig {
    /// Number of droplet slots in the pool.
    pub capacity: usize,
    /// Droplets spawned at the start of every frame.
    pub spawn_per_frame: usize,
    /// Droplets older than this are evicted at the end of a frame.
    pub max_age: u32,
    pub background: Color,
    pub start_color: Color,
    pub end_color: Color,
    pub image_path: String,
    pub screenshot_path: String,
}

impl Default for FountainConfig {
    fn default() -> Self {
        Self {
            capacity: 800,
            spawn_per_frame: 10,
            max_age: 80,
            background: Color::rgb(253, 245, 230),
            start_color: Color::rgb(23, 141, 235),
            end_color: Color::rgb(23, 200, 255),
            image_path: "images/fountain.png".into(),
            screenshot_path: "screenshot.png".into(),
        }
    }
}

impl FountainConfig {
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let config: FountainConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let src = std::fs::read_to_string(path)?;
        Self::from_toml_str(&src)
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(FountainError::InvalidConfig("capacity must be at least 1".into()));
        }
        Ok(())
    }
}
