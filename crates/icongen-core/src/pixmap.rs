//! RGBA pixel buffer structures

use crate::{IconError, IconResult};

/// A single pixel, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// A rectangular RGBA pixel buffer, row-major
///
/// The buffer length is always exactly `width * height`; both constructors
/// enforce this, so downstream consumers can index rows without bounds
/// surprises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<Rgba>,
}

impl Pixmap {
    /// Create a fully transparent pixmap
    pub fn new(width: u32, height: u32) -> IconResult<Self> {
        if width == 0 || height == 0 {
            return Err(IconError::InvalidDimensions { width, height });
        }

        let data = vec![Rgba::TRANSPARENT; width as usize * height as usize];
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap an existing pixel vector, validating its length
    pub fn from_pixels(width: u32, height: u32, data: Vec<Rgba>) -> IconResult<Self> {
        if width == 0 || height == 0 {
            return Err(IconError::InvalidDimensions { width, height });
        }

        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(IconError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        self.data[(y * self.width + x) as usize]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgba) {
        self.data[(y * self.width + x) as usize] = pixel;
    }

    /// All pixels, row-major
    pub fn pixels(&self) -> &[Rgba] {
        &self.data
    }

    /// One row of pixels
    pub fn row(&self, y: u32) -> &[Rgba] {
        let start = (y * self.width) as usize;
        &self.data[start..start + self.width as usize]
    }
}
