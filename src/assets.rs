// assets.rs - Image files on the native side
//
// Loading goes through the `image` crate and always ends up as RGBA8;
// saving writes the canvas as-is, format picked from the file extension.

use std::path::Path;

use image::RgbaImage;
use tracing::info;

use crate::error::{FountainError, Result};
use crate::render::{Canvas, Sprite, Surface};

pub fn load_sprite(path: impl AsRef<Path>) -> Result<Sprite> {
    let path = path.as_ref();
    let img = image::open(path)
        .map_err(|source| FountainError::ImageLoad { path: path.display().to_string(), source })?
        .to_rgba8();

    let (w, h) = img.dimensions();
    info!(path = %path.display(), w, h, "loaded sprite");
    Sprite::from_rgba(w, h, img.into_raw())
}

pub fn save_png(canvas: &Canvas, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let (w, h) = (canvas.width(), canvas.height());

    // Canvas buffer is always w * h * 4
    let img = RgbaImage::from_raw(w, h, canvas.pixels().to_vec())
        .ok_or(FountainError::SpriteSize { width: w, height: h, len: canvas.len() })?;

    img.save(path)
        .map_err(|source| FountainError::ImageSave { path: path.display().to_string(), source })?;
    info!(path = %path.display(), "saved screenshot");
    Ok(())
}
