// Author: Dustin Pilgrim
// License: MIT

use cropit_core::{Anchor, Point, Rect};

use crate::handles::Handle;

/// Transient state of the single active pointer gesture.
///
/// Exactly one session exists at a time; a second pointer-down while one is
/// active is rejected, and a move without a session is rejected. Illegal
/// combinations are unrepresentable rather than ad-hoc fields on the engine.
#[derive(Debug, Clone, Copy)]
pub enum Session {
    Idle,

    /// Handle-driven resize. Also drives the overlay "draw a new region"
    /// gesture, which seeds a 1x1 rectangle and resizes that with the
    /// bottom-right handle.
    Resizing {
        handle: &'static Handle,

        /// Diametrically opposite the grabbed handle, as rectangle ratios.
        anchor: Anchor,

        /// Absolute coordinates of the anchor, captured at drag start.
        /// Flips re-derive against this, never against the live rectangle.
        anchor_abs: Point,

        /// Rectangle to restore when an overlay-created region turns out to
        /// be a click without a drag. `None` for plain handle grabs.
        saved: Option<Rect>,

        /// Whether any move event landed in this session.
        moved: bool,
    },

    /// Whole-region translation.
    Dragging {
        /// Pointer offset from the rectangle's first corner at drag start.
        offset: Point,
    },
}

impl Session {
    pub fn is_active(&self) -> bool {
        !matches!(self, Session::Idle)
    }
}
