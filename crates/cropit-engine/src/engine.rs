// Author: Dustin Pilgrim
// License: MIT
//
// Event-driven interaction coordinator. Raw pointer events come in, the
// session machine picks a gesture, the constraint engine normalizes the
// candidate rectangle (ratio -> size -> boundary), and the live rectangle
// is replaced wholesale.

use std::mem;
use std::sync::mpsc;

use eventline::{debug, info};

use cropit_core::{Anchor, ConfigError, ContainerInfo, CropValue, Point, Rect, ReturnMode};

use crate::constraints::{self, RatioAxis};
use crate::events::{CropEvent, EventBus};
use crate::handles::{self, CREATE_HANDLE, Handle};
use crate::options::{CropOptions, ResolvedOptions};
use crate::session::Session;

/// Normalized pointer event phase, unified across mouse and touch upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// Rounded position/size handed to the render sink. The engine only marks
/// a frame pending; the host drains it once per paint, so a burst of moves
/// inside one frame collapses to the last rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderFrame {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

pub struct Engine {
    options: CropOptions,
    resolved: ResolvedOptions,
    container: ContainerInfo,

    rect: Rect,
    session: Session,
    events: EventBus,
    pending_render: bool,
}

impl Engine {
    /// Build an engine with an initial normalized rectangle: start size,
    /// constrained about the center, centered in the container.
    pub fn new(options: CropOptions, container: ContainerInfo) -> Result<Self, ConfigError> {
        let resolved = options.resolve(&container)?;
        let rect = initial_rect(&resolved, &container);

        info!(
            "crop engine ready: container {}x{}, region {}x{} at ({}, {})",
            container.width,
            container.height,
            rect.width(),
            rect.height(),
            rect.min_x(),
            rect.min_y()
        );

        Ok(Self {
            options,
            resolved,
            container,
            rect,
            session: Session::Idle,
            events: EventBus::new(),
            pending_render: true,
        })
    }

    /// Snapshot of the live rectangle. Callers never get a mutable handle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn options(&self) -> &CropOptions {
        &self.options
    }

    pub fn container(&self) -> &ContainerInfo {
        &self.container
    }

    pub fn is_interacting(&self) -> bool {
        self.session.is_active()
    }

    pub fn subscribe(&mut self) -> mpsc::Receiver<CropEvent> {
        self.events.subscribe()
    }

    /// Replace the configuration. On error the previous options stay live.
    pub fn set_options(&mut self, options: CropOptions) -> Result<(), ConfigError> {
        let resolved = options.resolve(&self.container)?;
        self.options = options;
        self.resolved = resolved;
        self.renormalize();
        info!("options replaced, region renormalized");
        Ok(())
    }

    /// The container moved or was re-laid out. Percent-based options are
    /// re-resolved against the new size and the rectangle re-constrained.
    pub fn set_container(&mut self, container: ContainerInfo) -> Result<(), ConfigError> {
        let resolved = self.options.resolve(&container)?;
        self.container = container;
        self.resolved = resolved;
        self.renormalize();
        Ok(())
    }

    /// Rebuild the initial rectangle and discard any active session.
    pub fn reset(&mut self) {
        self.session = Session::Idle;
        self.rect = initial_rect(&self.resolved, &self.container);
        self.pending_render = true;
        let value = self.value(None);
        self.events.emit(CropEvent::Initialized { value });
        debug!("engine reset");
    }

    /// Advance the state machine with one pointer event (absolute
    /// coordinates). Returns the live rectangle after the step, or `None`
    /// when the event is not a defined input for the current state.
    pub fn apply_pointer(&mut self, phase: PointerPhase, point: Point) -> Option<Rect> {
        match (phase, self.session.is_active()) {
            (PointerPhase::Down, false) => self.pointer_down(point),
            (PointerPhase::Move, true) => self.pointer_move(point),
            (PointerPhase::Up, true) => self.pointer_up(),
            // down mid-session, move/up with no session: not a defined input
            _ => None,
        }
    }

    /// Project the live rectangle into the requested return mode, or the
    /// configured one when not specified.
    pub fn value(&self, mode: Option<ReturnMode>) -> CropValue {
        let mode = mode.unwrap_or(self.resolved.return_mode);
        let (x, y) = (self.rect.min_x(), self.rect.min_y());
        let (w, h) = (self.rect.width(), self.rect.height());

        match mode {
            ReturnMode::Raw => CropValue::new(x.round(), y.round(), w.round(), h.round()),
            ReturnMode::Ratio => {
                let (cw, ch) = (self.container.width, self.container.height);
                CropValue::new(
                    round3(x / cw),
                    round3(y / ch),
                    round3(w / cw),
                    round3(h / ch),
                )
            }
            ReturnMode::Real => {
                let (fx, fy) = (self.container.scale_x(), self.container.scale_y());
                CropValue::new(
                    (x * fx).round(),
                    (y * fy).round(),
                    (w * fx).round(),
                    (h * fy).round(),
                )
            }
        }
    }

    /// Pending rounded frame for the render sink, if a repaint is due.
    /// Clears the pending flag: last write before the drain wins.
    pub fn take_render_frame(&mut self) -> Option<RenderFrame> {
        if !mem::take(&mut self.pending_render) {
            return None;
        }
        Some(RenderFrame {
            x: self.rect.min_x().round() as i32,
            y: self.rect.min_y().round() as i32,
            w: self.rect.width().round() as i32,
            h: self.rect.height().round() as i32,
        })
    }

    // -------------------- transitions --------------------

    fn pointer_down(&mut self, point: Point) -> Option<Rect> {
        let local = self.container.to_local(point);

        if let Some(handle) = handles::hit_test(&self.rect, local) {
            debug!("resize start: {}", handle.cursor);
            self.start_resize(handle, None);
            self.emit(CropEvent::SelectStart { value: self.value(None) });
        } else if self.rect.contains(local) {
            debug!("region drag start");
            self.session = Session::Dragging {
                offset: Point::new(local.x - self.rect.min_x(), local.y - self.rect.min_y()),
            };
            self.emit(CropEvent::SelectStart { value: self.value(None) });
        } else {
            // Draw a fresh region: seed a 1x1 rectangle at the pointer and
            // let the resize machine take it from here. SelectStart waits
            // for the first move so a bare click can be undone silently.
            debug!("overlay create start at ({}, {})", local.x, local.y);
            let saved = self.rect;
            let local = self.container.clamp_local(local);
            self.rect = Rect::from_size(local.x, local.y, 1.0, 1.0);
            self.start_resize(CREATE_HANDLE, Some(saved));
            self.pending_render = true;
        }

        Some(self.rect)
    }

    fn start_resize(&mut self, handle: &'static Handle, saved: Option<Rect>) {
        let anchor = handle.position.opposite();
        self.session = Session::Resizing {
            handle,
            anchor,
            anchor_abs: self.rect.absolute_point(anchor),
            saved,
            moved: false,
        };
    }

    fn pointer_move(&mut self, point: Point) -> Option<Rect> {
        let local = self.container.clamp_local(self.container.to_local(point));

        match self.session {
            Session::Resizing {
                handle,
                anchor,
                anchor_abs,
                saved,
                moved,
            } => {
                self.rect = self.resize_step(handle, anchor, anchor_abs, local);
                self.pending_render = true;

                if !moved {
                    self.session = Session::Resizing {
                        handle,
                        anchor,
                        anchor_abs,
                        saved,
                        moved: true,
                    };
                    // deferred start for overlay-created sessions
                    if saved.is_some() {
                        self.emit(CropEvent::SelectStart { value: self.value(None) });
                    }
                }

                self.emit(CropEvent::SelectMove { value: self.value(None) });
                Some(self.rect)
            }

            Session::Dragging { offset } => {
                let w = self.rect.width();
                let h = self.rect.height();

                // Per-edge positional clamp only: a region drag never
                // resizes, unlike the resize path's boundary constraint.
                let x = (local.x - offset.x).clamp(0.0, (self.container.width - w).max(0.0));
                let y = (local.y - offset.y).clamp(0.0, (self.container.height - h).max(0.0));

                self.rect = self
                    .rect
                    .moved_by(Some(x - self.rect.min_x()), Some(y - self.rect.min_y()));
                self.pending_render = true;

                self.emit(CropEvent::SelectMove { value: self.value(None) });
                Some(self.rect)
            }

            Session::Idle => None,
        }
    }

    fn pointer_up(&mut self) -> Option<Rect> {
        match mem::replace(&mut self.session, Session::Idle) {
            // Overlay click without a drag: put the old rectangle back and
            // say nothing.
            Session::Resizing {
                saved: Some(previous),
                moved: false,
                ..
            } => {
                debug!("overlay create abandoned, restoring previous region");
                self.rect = previous;
                self.pending_render = true;
                Some(self.rect)
            }

            Session::Resizing { .. } | Session::Dragging { .. } => {
                debug!("gesture end");
                self.emit(CropEvent::SelectEnd { value: self.value(None) });
                Some(self.rect)
            }

            Session::Idle => None,
        }
    }

    /// One resize step: pin/move edges, handle flips, then normalize.
    fn resize_step(
        &self,
        handle: &'static Handle,
        anchor: Anchor,
        anchor_abs: Point,
        local: Point,
    ) -> Rect {
        let (ox, oy) = (anchor_abs.x, anchor_abs.y);

        // Edges the handle may not move stay pinned at the captured anchor
        // coordinate on movable axes, and at the live edges otherwise.
        let x_movable = handle.left() || handle.right();
        let y_movable = handle.top() || handle.bottom();

        let mut x1 = if x_movable { ox } else { self.rect.x1 };
        let mut x2 = if x_movable { ox } else { self.rect.x2 };
        let mut y1 = if y_movable { oy } else { self.rect.y1 };
        let mut y2 = if y_movable { oy } else { self.rect.y2 };

        if handle.left() {
            x1 = local.x;
        }
        if handle.right() {
            x2 = local.x;
        }
        if handle.top() {
            y1 = local.y;
        }
        if handle.bottom() {
            y2 = local.y;
        }

        // Flip: the dragged edge crossed the anchor. Swap the axis values
        // and mirror the anchor ratio so absolute_point stays correct.
        let mut anchor = anchor;
        let flipped_x = if handle.left() {
            local.x > ox
        } else if handle.right() {
            local.x < ox
        } else {
            false
        };
        let flipped_y = if handle.top() {
            local.y > oy
        } else if handle.bottom() {
            local.y < oy
        } else {
            false
        };

        if flipped_x {
            mem::swap(&mut x1, &mut x2);
            anchor = anchor.flip_x();
        }
        if flipped_y {
            mem::swap(&mut y1, &mut y2);
            anchor = anchor.flip_y();
        }

        let mut rect = Rect::new(x1, y1, x2, y2);

        if let Some(ratio) = self.resolved.aspect_ratio {
            let axis = if handle.multi_axis() {
                // Compare the pointer against the ratio line through the
                // anchor: a steeper drag is limited by width, a flatter one
                // by height, so the region never outruns the pointer.
                let steep = (local.y - oy).abs() > ratio * (local.x - ox).abs();
                if steep { RatioAxis::Width } else { RatioAxis::Height }
            } else if y_movable {
                RatioAxis::Height
            } else {
                RatioAxis::Width
            };
            rect = constraints::constrain_to_ratio(&rect, ratio, anchor, axis);
        }

        let lim = &self.resolved.limits;
        rect = constraints::constrain_to_size(
            &rect,
            lim.max_width,
            lim.max_height,
            lim.min_width,
            lim.min_height,
            anchor,
            self.resolved.aspect_ratio,
        );

        constraints::constrain_to_boundary(
            &rect,
            self.container.width,
            self.container.height,
            anchor,
        )
    }

    /// Re-apply the full constraint order about the center. Used after
    /// option or container changes, never during a gesture step.
    fn renormalize(&mut self) {
        self.session = Session::Idle;

        let mut rect = self.rect;

        // A shrunken container can strand the rect and its center anchor
        // outside the new bounds; pull the center back in before measuring
        // room from it.
        let span_w = rect.width().min(self.container.width);
        let span_h = rect.height().min(self.container.height);
        let cx = (rect.min_x() + rect.width() / 2.0)
            .clamp(span_w / 2.0, self.container.width - span_w / 2.0);
        let cy = (rect.min_y() + rect.height() / 2.0)
            .clamp(span_h / 2.0, self.container.height - span_h / 2.0);
        rect = rect.moved_by(
            Some(cx - (rect.min_x() + rect.width() / 2.0)),
            Some(cy - (rect.min_y() + rect.height() / 2.0)),
        );

        if let Some(ratio) = self.resolved.aspect_ratio {
            rect = constraints::constrain_to_ratio(&rect, ratio, Anchor::CENTER, RatioAxis::Width);
        }
        let lim = &self.resolved.limits;
        rect = constraints::constrain_to_size(
            &rect,
            lim.max_width,
            lim.max_height,
            lim.min_width,
            lim.min_height,
            Anchor::CENTER,
            self.resolved.aspect_ratio,
        );
        rect = constraints::constrain_to_boundary(
            &rect,
            self.container.width,
            self.container.height,
            Anchor::CENTER,
        );

        self.rect = rect;
        self.pending_render = true;
        let value = self.value(None);
        self.events.emit(CropEvent::Initialized { value });
    }

    fn emit(&mut self, event: CropEvent) {
        self.events.emit(event);
    }
}

/// Start-size rectangle constrained about the center, then centered.
fn initial_rect(resolved: &ResolvedOptions, container: &ContainerInfo) -> Rect {
    let mut rect = Rect::from_size(0.0, 0.0, resolved.start_width, resolved.start_height);

    if let Some(ratio) = resolved.aspect_ratio {
        rect = constraints::constrain_to_ratio(&rect, ratio, Anchor::CENTER, RatioAxis::Width);
    }
    let lim = &resolved.limits;
    rect = constraints::constrain_to_size(
        &rect,
        lim.max_width,
        lim.max_height,
        lim.min_width,
        lim.min_height,
        Anchor::CENTER,
        resolved.aspect_ratio,
    );
    // Center before the boundary pass so the centered anchor sees the whole
    // container as available room.
    rect = rect.moved_by(
        Some((container.width - rect.width()) / 2.0 - rect.min_x()),
        Some((container.height - rect.height()) / 2.0 - rect.min_y()),
    );

    constraints::constrain_to_boundary(&rect, container.width, container.height, Anchor::CENTER)
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
