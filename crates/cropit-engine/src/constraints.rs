// Author: Dustin Pilgrim
// License: MIT
//
// Pure geometry normalization. Callers apply these in a fixed priority
// order: ratio -> size -> boundary. Ratio is the strongest user-facing
// guarantee, size bounds come second, boundary containment is a last-resort
// correction.

use cropit_core::{Anchor, Rect};

const EPS: f64 = 1e-9;

/// Which dimension is authoritative when enforcing an aspect ratio.
/// The ratio is height/width: `Width` derives height as `width * ratio`,
/// `Height` derives width as `height / ratio`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioAxis {
    Width,
    Height,
}

/// Recompute the non-authoritative dimension from `ratio`, anchored at
/// `anchor`. Idempotent: applying it to its own output changes nothing.
pub fn constrain_to_ratio(rect: &Rect, ratio: f64, anchor: Anchor, axis: RatioAxis) -> Rect {
    match axis {
        RatioAxis::Width => rect.resized(rect.width(), rect.width() * ratio, anchor),
        RatioAxis::Height => rect.resized(rect.height() / ratio, rect.height(), anchor),
    }
}

/// Clamp width/height into their bounds, anchored at `anchor`.
///
/// `None` means unbounded. Min is applied before max, so max wins when the
/// bounds are mutually exclusive. With a ratio, a clamped dimension drives a
/// recompute of the other, which is then re-checked against its own bound:
/// the bounds always win over the ratio.
pub fn constrain_to_size(
    rect: &Rect,
    max_w: Option<f64>,
    max_h: Option<f64>,
    min_w: Option<f64>,
    min_h: Option<f64>,
    anchor: Anchor,
    ratio: Option<f64>,
) -> Rect {
    let mut w = rect.width();
    let mut h = rect.height();

    let cw = clamp_dim(w, min_w, max_w);
    if (cw - w).abs() > EPS {
        w = cw;
        if let Some(r) = ratio {
            h = w * r;
        }
    }

    let ch = clamp_dim(h, min_h, max_h);
    if (ch - h).abs() > EPS {
        h = ch;
        if let Some(r) = ratio {
            w = clamp_dim(h / r, min_w, max_w);
        }
    }

    rect.resized(w, h, anchor)
}

/// Keep every edge inside `[0,bw] x [0,bh]`, anchored at `anchor`.
///
/// Available room is measured from the anchor's absolute point toward the
/// side(s) the rectangle can grow into. An oversized rectangle is uniformly
/// scaled down about the anchor, one overflowing axis at a time
/// (shrink-from-anchor). The anchor point is preserved whenever it lies
/// inside the boundary; when it does not, containment still wins and the
/// result is translated back inside.
pub fn constrain_to_boundary(rect: &Rect, bw: f64, bh: f64, anchor: Anchor) -> Rect {
    let fixed = rect.absolute_point(anchor);

    let max_w = room_along(anchor.x, fixed.x, bw);
    let max_h = room_along(anchor.y, fixed.y, bh);

    let mut out = *rect;
    if out.width() > max_w + EPS && out.width() > 0.0 {
        out = out.scaled(max_w / out.width(), anchor);
    }
    if out.height() > max_h + EPS && out.height() > 0.0 {
        out = out.scaled(max_h / out.height(), anchor);
    }

    // Room never exceeds the bound, so a positional clamp finishes the job
    // when the anchor point sits outside the boundary. For an in-bounds
    // anchor the scaled rect is already contained and nothing moves.
    let x = out.min_x().clamp(0.0, (bw - out.width()).max(0.0));
    let y = out.min_y().clamp(0.0, (bh - out.height()).max(0.0));
    out.moved_by(Some(x - out.min_x()), Some(y - out.min_y()))
}

fn clamp_dim(v: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let v = match min {
        Some(m) => v.max(m),
        None => v,
    };
    match max {
        Some(m) => v.min(m),
        None => v,
    }
}

/// Room available on one axis given the anchor ratio: an anchor at 0 grows
/// toward the far edge, at 1 toward the near edge, and a fractional anchor
/// is limited by whichever side runs out first. An anchor point outside
/// the bound yields zero room on its overrun side, never a negative one,
/// and room is capped at the bound itself.
fn room_along(anchor: f64, fixed: f64, bound: f64) -> f64 {
    let near = fixed.max(0.0);
    let far = (bound - fixed).max(0.0);
    let room = if anchor <= 0.0 + EPS {
        far
    } else if anchor >= 1.0 - EPS {
        near
    } else {
        (near / anchor).min(far / (1.0 - anchor))
    };
    room.min(bound)
}
