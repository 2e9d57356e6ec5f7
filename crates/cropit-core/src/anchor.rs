// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

/// A point inside a rectangle's bounding box as a pair of ratios in
/// `[0,1] x [0,1]`. `[0,0]` is the top-left corner, `[0.5,0.5]` the center.
///
/// Constraint operations keep the anchor's absolute position fixed while
/// reshaping the rectangle around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    pub const TOP_LEFT: Anchor = Anchor { x: 0.0, y: 0.0 };
    pub const CENTER: Anchor = Anchor { x: 0.5, y: 0.5 };
    pub const BOTTOM_RIGHT: Anchor = Anchor { x: 1.0, y: 1.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Diametrically opposite point. A handle's anchor is the opposite of
    /// the handle's own position.
    pub fn opposite(self) -> Self {
        Self {
            x: 1.0 - self.x,
            y: 1.0 - self.y,
        }
    }

    /// Mirror on the x axis only, used when a drag crosses its anchor.
    pub fn flip_x(self) -> Self {
        Self {
            x: 1.0 - self.x,
            y: self.y,
        }
    }

    /// Mirror on the y axis only.
    pub fn flip_y(self) -> Self {
        Self {
            x: self.x,
            y: 1.0 - self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_mirrors_both_axes() {
        assert_eq!(Anchor::TOP_LEFT.opposite(), Anchor::BOTTOM_RIGHT);
        assert_eq!(Anchor::new(0.0, 0.5).opposite(), Anchor::new(1.0, 0.5));
        assert_eq!(Anchor::CENTER.opposite(), Anchor::CENTER);
    }

    #[test]
    fn single_axis_flips() {
        let a = Anchor::new(0.0, 1.0);
        assert_eq!(a.flip_x(), Anchor::new(1.0, 1.0));
        assert_eq!(a.flip_y(), Anchor::new(0.0, 0.0));
        assert_eq!(a.flip_x().flip_x(), a);
    }
}
