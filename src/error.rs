//! Error types for the host-facing parts of the engine.
//!
//! The simulation itself never fails; these cover image assets,
//! screenshots and configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FountainError {
    /// Fountain image could not be read or decoded.
    #[cfg(not(target_arch = "wasm32"))]
    #[error("failed to load image {path}: {source}")]
    ImageLoad {
        path: String,
        #[source]
        source: image::ImageError,
    },

    /// Canvas could not be written as an image file.
    #[cfg(not(target_arch = "wasm32"))]
    #[error("failed to save image {path}: {source}")]
    ImageSave {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// RGBA buffer length does not match `width * height * 4`.
    #[error("sprite buffer of {len} bytes does not fit {width}x{height} RGBA")]
    SpriteSize { width: u32, height: u32, len: usize },
}

pub type Result<T> = std::result::Result<T, FountainError>;
