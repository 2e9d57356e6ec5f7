// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::anchor::Anchor;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The live crop region, defined by two corner points in container pixels.
///
/// Corners are not required to be ordered (`x1 <= x2`) mid-drag: a dragged
/// edge may be ahead of the other corner until the flip handling swaps them.
/// `width()`/`height()` are always absolute and never negative.
///
/// Every transform returns a fresh value; the owner replaces its copy
/// wholesale. Nothing hands out mutable references to a live rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Rectangle from an origin corner and a size.
    pub fn from_size(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(x, y, x + w, y + h)
    }

    pub fn width(&self) -> f64 {
        (self.x2 - self.x1).abs()
    }

    pub fn height(&self) -> f64 {
        (self.y2 - self.y1).abs()
    }

    pub fn min_x(&self) -> f64 {
        self.x1.min(self.x2)
    }

    pub fn min_y(&self) -> f64 {
        self.y1.min(self.y2)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x()
            && p.x <= self.min_x() + self.width()
            && p.y >= self.min_y()
            && p.y <= self.min_y() + self.height()
    }

    /// Maps a normalized anchor to absolute coordinates.
    ///
    /// Uses the signed corner difference, so the result is *not* symmetric
    /// under a corner swap. Flip handling must mirror the anchor when it
    /// swaps corners to keep this mapping consistent.
    pub fn absolute_point(&self, anchor: Anchor) -> Point {
        Point {
            x: self.x1 + anchor.x * (self.x2 - self.x1),
            y: self.y1 + anchor.y * (self.y2 - self.y1),
        }
    }

    /// Translates both corners by the same delta. `None` leaves that axis
    /// unchanged. No constraints are applied here; callers re-constrain.
    pub fn moved_by(&self, dx: Option<f64>, dy: Option<f64>) -> Self {
        let dx = dx.unwrap_or(0.0);
        let dy = dy.unwrap_or(0.0);
        Self {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
        }
    }

    /// Recomputes both corners so the rectangle has the given size while
    /// `anchor` keeps its absolute position.
    pub fn resized(&self, w: f64, h: f64, anchor: Anchor) -> Self {
        let fixed = self.absolute_point(anchor);
        let x1 = fixed.x - w * anchor.x;
        let y1 = fixed.y - h * anchor.y;
        Self {
            x1,
            y1,
            x2: x1 + w,
            y2: y1 + h,
        }
    }

    /// Uniform scale about `anchor`.
    pub fn scaled(&self, factor: f64, anchor: Anchor) -> Self {
        self.resized(self.width() * factor, self.height() * factor, anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn size_is_never_negative() {
        let r = Rect::new(100.0, 80.0, 20.0, 10.0);
        assert!(r.width() > 0.0);
        assert!(r.height() > 0.0);
        assert_eq!(r.width(), 80.0);
        assert_eq!(r.height(), 70.0);
    }

    #[test]
    fn resized_preserves_anchor_point() {
        let r = Rect::new(10.0, 20.0, 110.0, 70.0);
        for anchor in [
            Anchor::TOP_LEFT,
            Anchor::CENTER,
            Anchor::BOTTOM_RIGHT,
            Anchor::new(0.25, 0.75),
        ] {
            let before = r.absolute_point(anchor);
            let out = r.resized(37.0, 91.0, anchor);
            let after = out.absolute_point(anchor);
            assert!((before.x - after.x).abs() < TOL);
            assert!((before.y - after.y).abs() < TOL);
            assert!((out.width() - 37.0).abs() < TOL);
            assert!((out.height() - 91.0).abs() < TOL);
        }
    }

    #[test]
    fn scaled_matches_resized() {
        let r = Rect::new(0.0, 0.0, 40.0, 80.0);
        let a = r.scaled(0.5, Anchor::CENTER);
        let b = r.resized(20.0, 40.0, Anchor::CENTER);
        assert_eq!(a, b);
    }

    #[test]
    fn moved_by_none_leaves_axis_alone() {
        let r = Rect::new(5.0, 5.0, 15.0, 25.0);
        let out = r.moved_by(Some(10.0), None);
        assert_eq!(out, Rect::new(15.0, 5.0, 25.0, 25.0));
        let out = r.moved_by(None, Some(-5.0));
        assert_eq!(out, Rect::new(5.0, 0.0, 15.0, 20.0));
    }

    #[test]
    fn absolute_point_is_signed() {
        // Swapped corners: the anchor mapping runs backwards on purpose.
        let r = Rect::new(100.0, 0.0, 0.0, 50.0);
        let p = r.absolute_point(Anchor::new(0.25, 0.5));
        assert_eq!(p.x, 75.0);
        assert_eq!(p.y, 25.0);
    }
}
