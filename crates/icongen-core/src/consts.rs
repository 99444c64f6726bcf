//! Tuning constants for icon geometry and colors
//!
//! The antialiasing values are empirically tuned; the rasterizer depends on
//! these exact numbers for its pixel output, so treat them as part of the
//! icon's visual identity rather than free parameters.

/// Icon sizes generated by the driver, in pixels, in output order
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Background fill, RGB (#1a73e8)
pub const BACKGROUND_COLOR: [u8; 3] = [26, 115, 232];

/// Glyph fill, RGB (white)
pub const FOREGROUND_COLOR: [u8; 3] = [255, 255, 255];

/// Corner radius of the rounded-square background, as a fraction of size
pub const CORNER_RADIUS_FRAC: f32 = 0.22;

/// Left edge of the glyph bars, as a fraction of size
pub const GLYPH_LEFT_FRAC: f32 = 0.22;

/// Top edge of the first glyph bar, as a fraction of size
pub const BAR_TOP_FRAC: f32 = 0.28;

/// Thickness of each glyph bar, as a fraction of size
pub const BAR_THICKNESS_FRAC: f32 = 0.13;

/// Vertical gap between glyph bars, as a fraction of size
pub const BAR_GAP_FRAC: f32 = 0.115;

/// Width of the two full-length glyph bars, as a fraction of size
pub const BAR_WIDTH_FRAC: f32 = 0.56;

/// Width of the third bar relative to the full-length bars
pub const SHORT_BAR_SCALE: f32 = 0.65;

/// Soft-edge feather distance for the glyph bars, in pixels
pub const EDGE_FEATHER: f32 = 0.8;
