//! Blocking image decode for worker threads and `slint::Image` construction.

use crate::error::{AppError, Result};
use slint::{Rgb8Pixel, SharedPixelBuffer};
use std::path::Path;

/// Decodes an image to RGB8. Runs on a rayon worker, never the UI thread.
pub fn load_image_blocking(path: &Path) -> Result<(Vec<u8>, u32, u32)> {
    let img = image::ImageReader::open(path)
        .map_err(|e| AppError::ImageLoad(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| AppError::ImageLoad(e.to_string()))?
        .decode()?;

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok((rgb.into_raw(), width, height))
}

/// Wraps decoded RGB8 data in a `slint::Image`. UI thread only.
pub fn create_slint_image(data: Vec<u8>, width: u32, height: u32) -> slint::Image {
    let buffer = SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(&data, width, height);
    slint::Image::from_rgb8(buffer)
}
