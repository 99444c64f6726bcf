//! Analytic icon rasterizer
//!
//! Renders the icon by evaluating two antialiased masks at every pixel
//! center: a rounded-square background and a three-bar glyph. The RGB of a
//! covered pixel interpolates between the background and foreground colors
//! by glyph coverage; the alpha channel carries the background coverage.

pub mod glyph;
pub mod mask;

pub use glyph::{Bar, Glyph};
pub use mask::RoundedSquare;

use icongen_core::consts::{BACKGROUND_COLOR, FOREGROUND_COLOR};
use icongen_core::{IconResult, Pixmap, Rgba};

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn mix_channel(background: u8, foreground: u8, t: f32) -> u8 {
    lerp(background as f32, foreground as f32, t).round() as u8
}

/// Render one icon as an RGBA pixmap of the given square size
pub fn render_icon(size: u32) -> IconResult<Pixmap> {
    let mut pixmap = Pixmap::new(size, size)?;
    let square = RoundedSquare::for_size(size);
    let glyph = Glyph::for_size(size);

    for y in 0..size {
        for x in 0..size {
            let (cx, cy) = (x as f32 + 0.5, y as f32 + 0.5);

            let background = square.coverage(cx, cy);
            if background <= 0.0 {
                // Pixmap starts out transparent black
                continue;
            }

            let foreground = glyph.coverage(cx, cy);
            pixmap.set_pixel(
                x,
                y,
                Rgba::new(
                    mix_channel(BACKGROUND_COLOR[0], FOREGROUND_COLOR[0], foreground),
                    mix_channel(BACKGROUND_COLOR[1], FOREGROUND_COLOR[1], foreground),
                    mix_channel(BACKGROUND_COLOR[2], FOREGROUND_COLOR[2], foreground),
                    (background * 255.0).round() as u8,
                ),
            );
        }
    }

    Ok(pixmap)
}
