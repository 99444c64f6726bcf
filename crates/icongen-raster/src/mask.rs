//! Rounded-square background mask

use icongen_core::consts::CORNER_RADIUS_FRAC;

/// Antialiased rounded square filling the icon's bounding box
#[derive(Debug, Clone, Copy)]
pub struct RoundedSquare {
    size: f32,
    radius: f32,
}

impl RoundedSquare {
    pub fn for_size(size: u32) -> Self {
        let size = size as f32;
        Self {
            size,
            radius: size * CORNER_RADIUS_FRAC,
        }
    }

    /// Signed distance from a point to the rounded boundary
    ///
    /// Negative inside, positive outside. Along the straight edges both axis
    /// excesses clamp to zero and the distance is simply `-radius` plus the
    /// overshoot; in the corner regions the excesses combine by Euclidean
    /// norm, which traces the quarter-circle arcs.
    pub fn distance(&self, cx: f32, cy: f32) -> f32 {
        let rx = (self.radius - cx).max(cx - (self.size - self.radius)).max(0.0);
        let ry = (self.radius - cy).max(cy - (self.size - self.radius)).max(0.0);
        rx.hypot(ry) - self.radius
    }

    /// Coverage in [0, 1], with a ~1 px antialiased band at the boundary
    pub fn coverage(&self, cx: f32, cy: f32) -> f32 {
        (0.5 - self.distance(cx, cy)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_is_fully_covered() {
        let square = RoundedSquare::for_size(128);
        assert_eq!(square.coverage(64.5, 64.5), 1.0);
        assert!(square.distance(64.5, 64.5) < 0.0);
    }

    #[test]
    fn test_extreme_corners_are_outside() {
        for size in [16u32, 32, 48, 128] {
            let square = RoundedSquare::for_size(size);
            let far = size as f32 - 0.5;
            for (cx, cy) in [(0.5, 0.5), (far, 0.5), (0.5, far), (far, far)] {
                assert_eq!(
                    square.coverage(cx, cy),
                    0.0,
                    "corner ({cx}, {cy}) at size {size} should be uncovered"
                );
            }
        }
    }

    #[test]
    fn test_boundary_has_half_coverage() {
        let square = RoundedSquare::for_size(128);
        // A point exactly on the top edge, away from the corners, sits at
        // signed distance zero and lands mid-ramp
        assert_eq!(square.distance(64.5, 0.0), 0.0);
        assert_eq!(square.coverage(64.5, 0.0), 0.5);
    }
}
