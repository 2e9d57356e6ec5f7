// Author: Dustin Pilgrim
// License: MIT

use cropit_core::{Anchor, Point, Rect};

/// Grab radius around a handle point. Circular so the grab feels "round".
pub const GRAB_RADIUS: f64 = 14.0;

/// One of the eight fixed control points around the rectangle's border.
///
/// `constraints` marks which edges the handle may move, in
/// `[top, right, bottom, left]` order. The cursor label is only used for
/// styling by the embedding layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub position: Anchor,
    pub constraints: [bool; 4],
    pub cursor: &'static str,
}

impl Handle {
    pub fn top(&self) -> bool {
        self.constraints[0]
    }

    pub fn right(&self) -> bool {
        self.constraints[1]
    }

    pub fn bottom(&self) -> bool {
        self.constraints[2]
    }

    pub fn left(&self) -> bool {
        self.constraints[3]
    }

    /// Corner handles move both axes; edge handles only one.
    pub fn multi_axis(&self) -> bool {
        (self.left() || self.right()) && (self.top() || self.bottom())
    }
}

/// Corners clockwise from top-left, interleaved with edge midpoints.
pub const HANDLES: [Handle; 8] = [
    Handle {
        position: Anchor::new(0.0, 0.0),
        constraints: [true, false, false, true],
        cursor: "nw-resize",
    },
    Handle {
        position: Anchor::new(0.5, 0.0),
        constraints: [true, false, false, false],
        cursor: "n-resize",
    },
    Handle {
        position: Anchor::new(1.0, 0.0),
        constraints: [true, true, false, false],
        cursor: "ne-resize",
    },
    Handle {
        position: Anchor::new(1.0, 0.5),
        constraints: [false, true, false, false],
        cursor: "e-resize",
    },
    Handle {
        position: Anchor::new(1.0, 1.0),
        constraints: [false, true, true, false],
        cursor: "se-resize",
    },
    Handle {
        position: Anchor::new(0.5, 1.0),
        constraints: [false, false, true, false],
        cursor: "s-resize",
    },
    Handle {
        position: Anchor::new(0.0, 1.0),
        constraints: [false, false, true, true],
        cursor: "sw-resize",
    },
    Handle {
        position: Anchor::new(0.0, 0.5),
        constraints: [false, false, false, true],
        cursor: "w-resize",
    },
];

/// The handle a fresh overlay-drawn region is driven by: dragging away from
/// the seed point grows the rectangle down-right, flips handle the rest.
pub const CREATE_HANDLE: &Handle = &HANDLES[4];

fn dist2(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Nearest handle within the grab radius, if any.
pub fn hit_test(rect: &Rect, p: Point) -> Option<&'static Handle> {
    let mut best: Option<(f64, &'static Handle)> = None;

    for handle in &HANDLES {
        let d = dist2(p, rect.absolute_point(handle.position));
        if best.is_none_or(|(bd, _)| d < bd) {
            best = Some((d, handle));
        }
    }

    match best {
        Some((d, handle)) if d <= GRAB_RADIUS * GRAB_RADIUS => Some(handle),
        _ => None,
    }
}
