use std::io::Cursor;

use tracing::trace;

use crate::error::VizResult;
use crate::geometry::IntPoint;

/// Fixed-size mutable raster surface with one 32-bit ARGB color per
/// pixel. Owned exclusively by the rendering call that allocated it and
/// discarded after encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pixmap {
    width: i32,
    height: i32,
    pixels: Vec<u32>,
}

/// Alpha bits of an ARGB color. OR-ing this in makes a pixel opaque.
const OPAQUE: u32 = 0xff00_0000;

impl Pixmap {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
        }
    }

    pub fn with_size(size: IntPoint) -> Self {
        Self::new(size.x, size.y)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> IntPoint {
        IntPoint::new(self.width, self.height)
    }

    pub fn get(&self, x: i32, y: i32) -> u32 {
        self.pixels[self.offset(x, y)]
    }

    pub fn set(&mut self, x: i32, y: i32, color: u32) {
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
    }

    pub fn set_point(&mut self, at: IntPoint, color: u32) {
        self.set(at.x, at.y, color);
    }

    pub fn fill(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Opaque neutral gray from a single brightness scalar in 0..=255,
    /// for heatmap-style rendering.
    pub fn gray(brightness: u32) -> u32 {
        OPAQUE | (brightness << 16) | (brightness << 8) | brightness
    }

    /// PNG encoding. Preserves the alpha channel bit-exactly.
    pub fn png(&self) -> VizResult<Vec<u8>> {
        let mut rgba = Vec::with_capacity(self.pixels.len() * 4);
        for &argb in &self.pixels {
            rgba.extend_from_slice(&[
                (argb >> 16) as u8,
                (argb >> 8) as u8,
                argb as u8,
                (argb >> 24) as u8,
            ]);
        }
        let image = image::RgbaImage::from_raw(self.width as u32, self.height as u32, rgba)
            .expect("pixel buffer length matches dimensions");
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        trace!(width = self.width, height = self.height, "encoded png");
        Ok(bytes)
    }

    /// JPEG encoding. The target codec has no alpha channel, so every
    /// pixel is first forced fully opaque. Lossy by design.
    pub fn jpeg(&self) -> VizResult<Vec<u8>> {
        let mut rgb = Vec::with_capacity(self.pixels.len() * 3);
        for &argb in &self.pixels {
            let opaque = argb | OPAQUE;
            rgb.extend_from_slice(&[(opaque >> 16) as u8, (opaque >> 8) as u8, opaque as u8]);
        }
        let image = image::RgbImage::from_raw(self.width as u32, self.height as u32, rgb)
            .expect("pixel buffer length matches dimensions");
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Jpeg)?;
        trace!(width = self.width, height = self.height, "encoded jpeg");
        Ok(bytes)
    }

    fn offset(&self, x: i32, y: i32) -> usize {
        assert!(x >= 0 && x < self.width && y >= 0 && y < self.height);
        (self.width * y + x) as usize
    }
}
