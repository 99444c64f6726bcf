//! Three-bar glyph mask
//!
//! The glyph is a stylised letter built from three horizontal bars: two
//! full-width bars and a shorter third one, stacked with a fixed gap.

use icongen_core::consts::{
    BAR_GAP_FRAC, BAR_THICKNESS_FRAC, BAR_TOP_FRAC, BAR_WIDTH_FRAC, EDGE_FEATHER, GLYPH_LEFT_FRAC,
    SHORT_BAR_SCALE,
};

/// Soft-edge ramp: distance inside the nearer edge mapped to [0, 1]
fn soft_edge(d: f32) -> f32 {
    (d / EDGE_FEATHER + 0.5).clamp(0.0, 1.0)
}

/// One horizontal bar with feathered edges
#[derive(Debug, Clone, Copy)]
pub struct Bar {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bar {
    /// Coverage in [0, 1]: the product of the vertical and horizontal ramps
    pub fn coverage(&self, cx: f32, cy: f32) -> f32 {
        let dy = (cy - self.top).min(self.top + self.height - cy);
        let dx = (cx - self.left).min(self.left + self.width - cx);
        soft_edge(dy) * soft_edge(dx)
    }
}

/// The full glyph: three bars laid out for a given icon size
#[derive(Debug, Clone, Copy)]
pub struct Glyph {
    bars: [Bar; 3],
}

impl Glyph {
    pub fn for_size(size: u32) -> Self {
        let s = size as f32;
        let left = s * GLYPH_LEFT_FRAC;
        let thickness = s * BAR_THICKNESS_FRAC;
        let gap = s * BAR_GAP_FRAC;
        let width = s * BAR_WIDTH_FRAC;
        let top = s * BAR_TOP_FRAC;
        let step = thickness + gap;

        Self {
            bars: [
                Bar {
                    left,
                    top,
                    width,
                    height: thickness,
                },
                Bar {
                    left,
                    top: top + step,
                    width,
                    height: thickness,
                },
                Bar {
                    left,
                    top: top + 2.0 * step,
                    width: width * SHORT_BAR_SCALE,
                    height: thickness,
                },
            ],
        }
    }

    pub fn bars(&self) -> &[Bar; 3] {
        &self.bars
    }

    /// Coverage in [0, 1]: the maximum over the three bars
    pub fn coverage(&self, cx: f32, cy: f32) -> f32 {
        self.bars
            .iter()
            .map(|bar| bar.coverage(cx, cy))
            .fold(0.0, f32::max)
    }
}
