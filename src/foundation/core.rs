use crate::foundation::error::{LamellaError, LamellaResult};

pub use kurbo::{Point, Vec2};

/// Output dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Signed placement of a foreground image relative to a background.
///
/// `(0, 0)` aligns the top-left pixels of both images; negative components
/// shift the foreground above or left of the background origin.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub struct PixelOffset {
    /// Horizontal offset in pixels.
    pub x: i32,
    /// Vertical offset in pixels.
    pub y: i32,
}

impl PixelOffset {
    /// Build an offset from its components.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Straight (non-premultiplied) RGBA8 pixels, tightly packed, row-major.
///
/// Alpha blending happens in normalized [0, 1] space; storage stays 8-bit.
/// The `data.len() == width * height * 4` invariant is established by the
/// constructors and re-checked by buffer-consuming operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRgba {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, 4 per pixel.
    pub data: Vec<u8>,
}

impl ImageRgba {
    /// Allocate a fully transparent image.
    pub fn new(width: u32, height: u32) -> LamellaResult<Self> {
        let len = checked_byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Wrap an existing RGBA8 buffer, validating its length.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> LamellaResult<Self> {
        let len = checked_byte_len(width, height)?;
        if data.len() != len {
            return Err(LamellaError::validation(
                "ImageRgba buffer length must equal width * height * 4",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Set every pixel to `rgba`.
    pub fn fill(&mut self, rgba: [u8; 4]) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Read the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(idx..idx + 4).map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Write the pixel at `(x, y)`; out-of-bounds writes are silently skipped.
    pub fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        if let Some(px) = self.data.get_mut(idx..idx + 4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Bytes per row.
    pub(crate) fn stride(&self) -> usize {
        (self.width as usize) * 4
    }

    pub(crate) fn check_buffer(&self, what: &str) -> LamellaResult<()> {
        let len = checked_byte_len(self.width, self.height)?;
        if self.data.len() != len {
            return Err(LamellaError::validation(format!(
                "{what} buffer length does not match declared width * height * 4"
            )));
        }
        Ok(())
    }
}

fn checked_byte_len(width: u32, height: u32) -> LamellaResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| LamellaError::validation("image byte size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
