//! Grayscale ASCII rendering of images for the terminal.

use image::imageops::FilterType;

use crate::error::{LabelError, Result};

/// Characters from darkest to lightest
pub const ASCII_RAMP: [char; 11] = ['@', '#', '$', '%', '?', '*', '+', ';', ':', ',', '.'];

/// Map one luma value onto the ramp
pub fn luma_to_char(luma: u8) -> char {
    ASCII_RAMP[usize::from(luma / 25)]
}

/// Render row-major luma pixels, `width` per row, one line per row
pub fn ascii_from_luma(pixels: &[u8], width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let mut out = String::with_capacity(pixels.len() + pixels.len() / width + 1);
    for row in pixels.chunks(width) {
        out.extend(row.iter().copied().map(luma_to_char));
        out.push('\n');
    }
    out
}

/// Decode an encoded image and render it `width` columns wide.
///
/// Height keeps the source aspect ratio (`width * h / w`), at least one row.
pub fn ascii_art(bytes: &[u8], width: u32) -> Result<String> {
    if width == 0 {
        return Err(LabelError::Render("width must be > 0".to_string()));
    }

    let image = image::load_from_memory(bytes).map_err(|e| LabelError::Render(format!("Failed to decode image: {}", e)))?;
    if image.width() == 0 {
        return Err(LabelError::Render("image has zero width".to_string()));
    }

    let height = (u64::from(width) * u64::from(image.height()) / u64::from(image.width())).max(1);
    let height = u32::try_from(height).map_err(|_| LabelError::Render("image too tall to render".to_string()))?;

    let gray = image.grayscale().resize_exact(width, height, FilterType::Triangle).to_luma8();
    Ok(ascii_from_luma(gray.as_raw(), width as usize))
}
