// Author: Dustin Pilgrim
// License: MIT
//
// Full gesture runs through the public engine API: pointer down/move/up,
// event observation, value projection.

use cropit_core::{ContainerInfo, Point, ReturnMode};
use cropit_engine::{CropEvent, CropOptions, Engine, PointerPhase, SizeSpec};

const TOL: f64 = 1e-6;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < TOL
}

fn engine_200(options: CropOptions) -> Engine {
    Engine::new(options, ContainerInfo::new(0.0, 0.0, 200.0, 200.0)).unwrap()
}

fn centered_100(mut options: CropOptions) -> (Engine, CropOptions) {
    options.start_size = SizeSpec::px(100.0, 100.0);
    (engine_200(options), options)
}

fn down(engine: &mut Engine, x: f64, y: f64) {
    engine.apply_pointer(PointerPhase::Down, Point::new(x, y)).unwrap();
}

fn mv(engine: &mut Engine, x: f64, y: f64) {
    engine.apply_pointer(PointerPhase::Move, Point::new(x, y)).unwrap();
}

fn up(engine: &mut Engine) {
    engine.apply_pointer(PointerPhase::Up, Point::new(0.0, 0.0)).unwrap();
}

#[test]
fn start_rect_is_centered_and_sized() {
    let (engine, _) = centered_100(CropOptions::default());
    let r = engine.rect();
    assert!(close(r.min_x(), 50.0));
    assert!(close(r.min_y(), 50.0));
    assert!(close(r.width(), 100.0));
    assert!(close(r.height(), 100.0));
}

#[test]
fn square_ratio_corner_drag_is_limited_by_the_short_axis() {
    // ratio 1 region at (50,50)..(150,150); dragging the se handle 150 right
    // and 80 down of its anchor must produce min(150,80) = 80x80 with the
    // top-left corner pinned.
    let mut options = CropOptions::default();
    options.aspect_ratio = Some(1.0);
    let (mut engine, _) = centered_100(options);

    down(&mut engine, 150.0, 150.0);
    mv(&mut engine, 200.0, 130.0);

    let r = engine.rect();
    assert!(close(r.width(), 80.0));
    assert!(close(r.height(), 80.0));
    assert!(close(r.min_x(), 50.0));
    assert!(close(r.min_y(), 50.0));

    up(&mut engine);
    assert!(!engine.is_interacting());
}

#[test]
fn square_ratio_steep_drag_is_limited_by_width() {
    let mut options = CropOptions::default();
    options.aspect_ratio = Some(1.0);
    let (mut engine, _) = centered_100(options);

    down(&mut engine, 150.0, 150.0);
    mv(&mut engine, 130.0, 200.0);

    let r = engine.rect();
    assert!(close(r.width(), 80.0));
    assert!(close(r.height(), 80.0));
    assert!(close(r.min_x(), 50.0));
    assert!(close(r.min_y(), 50.0));
}

#[test]
fn min_size_inflates_a_tiny_drag() {
    let mut options = CropOptions::default();
    options.min_size = Some(SizeSpec::px(50.0, 50.0));
    let (mut engine, _) = centered_100(options);

    // drag the se handle towards the anchor to a 10x10 candidate
    down(&mut engine, 150.0, 150.0);
    mv(&mut engine, 60.0, 60.0);

    let r = engine.rect();
    assert!(close(r.width(), 50.0));
    assert!(close(r.height(), 50.0));
    // anchored at the opposite (top-left) corner
    assert!(close(r.min_x(), 50.0));
    assert!(close(r.min_y(), 50.0));
}

#[test]
fn edge_handle_moves_one_axis_only() {
    let (mut engine, _) = centered_100(CropOptions::default());

    // e handle sits at (150, 100)
    down(&mut engine, 150.0, 100.0);
    mv(&mut engine, 180.0, 40.0);

    let r = engine.rect();
    assert!(close(r.width(), 130.0));
    assert!(close(r.height(), 100.0));
    assert!(close(r.min_y(), 50.0));
}

#[test]
fn flip_keeps_anchor_point_and_positive_size() {
    let (mut engine, _) = centered_100(CropOptions::default());

    // e handle at (150, 100); its anchor is the left edge midpoint (50, 100)
    down(&mut engine, 150.0, 100.0);
    mv(&mut engine, 20.0, 100.0);

    let r = engine.rect();
    assert!(r.width() > 0.0);
    assert!(close(r.width(), 30.0));
    assert!(close(r.height(), 100.0));
    // dragged edge ended left of the anchor, rect hangs off its left side
    assert!(close(r.min_x(), 20.0));
    assert!(close(r.min_x() + r.width(), 50.0));

    // dragging back across restores the un-flipped side
    mv(&mut engine, 90.0, 100.0);
    let r = engine.rect();
    assert!(close(r.min_x(), 50.0));
    assert!(close(r.width(), 40.0));
}

#[test]
fn region_drag_translates_without_resizing() {
    let (mut engine, _) = centered_100(CropOptions::default());

    down(&mut engine, 100.0, 100.0); // center of the region
    mv(&mut engine, 130.0, 90.0);

    let r = engine.rect();
    assert!(close(r.width(), 100.0));
    assert!(close(r.height(), 100.0));
    assert!(close(r.min_x(), 80.0));
    assert!(close(r.min_y(), 40.0));
}

#[test]
fn region_drag_clamps_position_at_the_boundary() {
    let (mut engine, _) = centered_100(CropOptions::default());

    down(&mut engine, 100.0, 100.0);
    mv(&mut engine, 500.0, -500.0);

    // only the position is corrected, never the size
    let r = engine.rect();
    assert!(close(r.width(), 100.0));
    assert!(close(r.height(), 100.0));
    assert!(close(r.min_x(), 100.0));
    assert!(close(r.min_y(), 0.0));
}

#[test]
fn overlay_click_without_drag_restores_previous_region() {
    let mut options = CropOptions::default();
    options.start_size = SizeSpec::px(50.0, 50.0);
    let mut engine = engine_200(options);
    let before = engine.rect();
    let events = engine.subscribe();

    down(&mut engine, 40.0, 40.0);
    up(&mut engine);

    assert_eq!(engine.rect(), before);
    assert_eq!(events.try_iter().count(), 0, "no notifications on a bare click");
}

#[test]
fn overlay_drag_draws_a_new_region() {
    let mut options = CropOptions::default();
    options.start_size = SizeSpec::px(50.0, 50.0);
    let mut engine = engine_200(options);
    let events = engine.subscribe();

    down(&mut engine, 20.0, 30.0);
    mv(&mut engine, 60.0, 90.0);
    up(&mut engine);

    let r = engine.rect();
    assert!(close(r.min_x(), 20.0));
    assert!(close(r.min_y(), 30.0));
    assert!(close(r.width(), 40.0));
    assert!(close(r.height(), 60.0));

    let kinds: Vec<_> = events.try_iter().collect();
    assert!(matches!(kinds[0], CropEvent::SelectStart { .. }));
    assert!(matches!(kinds[1], CropEvent::SelectMove { .. }));
    assert!(matches!(kinds.last().unwrap(), CropEvent::SelectEnd { .. }));
}

#[test]
fn resize_emits_start_move_end() {
    let (mut engine, _) = centered_100(CropOptions::default());
    let events = engine.subscribe();

    down(&mut engine, 150.0, 150.0);
    mv(&mut engine, 160.0, 160.0);
    mv(&mut engine, 170.0, 170.0);
    up(&mut engine);

    let kinds: Vec<_> = events.try_iter().collect();
    assert_eq!(kinds.len(), 4);
    assert!(matches!(kinds[0], CropEvent::SelectStart { .. }));
    assert!(matches!(kinds[1], CropEvent::SelectMove { .. }));
    assert!(matches!(kinds[2], CropEvent::SelectMove { .. }));
    assert!(matches!(kinds[3], CropEvent::SelectEnd { .. }));
}

#[test]
fn undefined_inputs_are_rejected() {
    let (mut engine, _) = centered_100(CropOptions::default());

    // move and up with no session
    assert!(engine.apply_pointer(PointerPhase::Move, Point::new(10.0, 10.0)).is_none());
    assert!(engine.apply_pointer(PointerPhase::Up, Point::new(10.0, 10.0)).is_none());

    // second down mid-session
    down(&mut engine, 100.0, 100.0);
    assert!(engine.apply_pointer(PointerPhase::Down, Point::new(60.0, 60.0)).is_none());
    up(&mut engine);
}

#[test]
fn value_projection_modes() {
    // region (10,10)..(60,60) inside a 100x100 container shown at 1:4
    let mut options = CropOptions::default();
    options.start_size = SizeSpec::px(50.0, 50.0);
    let container = ContainerInfo::new(0.0, 0.0, 100.0, 100.0).with_natural_size(400.0, 400.0);
    let mut engine = Engine::new(options, container).unwrap();

    // drag the region from its center (50,50) up-left to land at (10,10)
    down(&mut engine, 50.0, 50.0);
    mv(&mut engine, 35.0, 35.0);
    up(&mut engine);

    let raw = engine.value(Some(ReturnMode::Raw));
    assert_eq!((raw.x, raw.y, raw.width, raw.height), (10.0, 10.0, 50.0, 50.0));

    let ratio = engine.value(Some(ReturnMode::Ratio));
    assert_eq!(
        (ratio.x, ratio.y, ratio.width, ratio.height),
        (0.1, 0.1, 0.5, 0.5)
    );

    let real = engine.value(Some(ReturnMode::Real));
    assert_eq!(
        (real.x, real.y, real.width, real.height),
        (40.0, 40.0, 200.0, 200.0)
    );

    // default falls back to the configured return mode (real)
    assert_eq!(engine.value(None), real);
}

#[test]
fn pointer_is_clamped_to_the_container_during_resize() {
    let (mut engine, _) = centered_100(CropOptions::default());

    down(&mut engine, 150.0, 150.0);
    mv(&mut engine, 1000.0, 1000.0);

    let r = engine.rect();
    assert!(close(r.min_x() + r.width(), 200.0));
    assert!(close(r.min_y() + r.height(), 200.0));
}

#[test]
fn render_frames_collapse_to_the_last_move() {
    let (mut engine, _) = centered_100(CropOptions::default());
    // initial frame is pending after construction
    assert!(engine.take_render_frame().is_some());
    assert!(engine.take_render_frame().is_none());

    down(&mut engine, 150.0, 150.0);
    mv(&mut engine, 160.0, 160.0);
    mv(&mut engine, 170.0, 175.0);

    let frame = engine.take_render_frame().unwrap();
    assert_eq!((frame.x, frame.y, frame.w, frame.h), (50, 50, 120, 125));
    assert!(engine.take_render_frame().is_none());
    up(&mut engine);
}

#[test]
fn invalid_set_options_keeps_the_previous_configuration() {
    let (mut engine, options) = centered_100(CropOptions::default());

    let mut bad = options;
    bad.aspect_ratio = Some(-2.0);
    assert!(engine.set_options(bad).is_err());
    assert_eq!(engine.options().aspect_ratio, None);

    let mut good = options;
    good.aspect_ratio = Some(1.0);
    assert!(engine.set_options(good).is_ok());
    let r = engine.rect();
    assert!(close(r.width(), r.height()));
}

#[test]
fn reset_rebuilds_the_initial_region_and_notifies() {
    let (mut engine, _) = centered_100(CropOptions::default());
    let initial = engine.rect();
    let events = engine.subscribe();

    down(&mut engine, 150.0, 150.0);
    mv(&mut engine, 180.0, 190.0);
    engine.reset();

    assert_eq!(engine.rect(), initial);
    assert!(!engine.is_interacting());
    let kinds: Vec<_> = events.try_iter().collect();
    assert!(matches!(kinds.last().unwrap(), CropEvent::Initialized { .. }));
}

#[test]
fn container_shrink_reflows_and_contains_the_region() {
    let container = ContainerInfo::new(0.0, 0.0, 800.0, 600.0);
    let mut engine = Engine::new(CropOptions::default(), container).unwrap();
    // default start size is the full container
    assert!(close(engine.rect().width(), 800.0));

    engine.set_container(ContainerInfo::new(0.0, 0.0, 100.0, 100.0)).unwrap();
    let r = engine.rect();
    assert!(r.min_x() >= -TOL && r.min_x() + r.width() <= 100.0 + TOL);
    assert!(r.min_y() >= -TOL && r.min_y() + r.height() <= 100.0 + TOL);
    // uniform shrink about the pulled-back center keeps the shape
    assert!(close(r.width(), 100.0));
    assert!(close(r.height(), 75.0));

    // percent options re-resolve against the new container size
    engine.reset();
    let r = engine.rect();
    assert!(close(r.min_x(), 0.0));
    assert!(close(r.min_y(), 0.0));
    assert!(close(r.width(), 100.0));
    assert!(close(r.height(), 100.0));

    // growing the container leaves an already-contained region alone
    engine.set_container(ContainerInfo::new(0.0, 0.0, 400.0, 300.0)).unwrap();
    let r = engine.rect();
    assert!(close(r.min_x(), 0.0));
    assert!(close(r.min_y(), 0.0));
    assert!(close(r.width(), 100.0));
    assert!(close(r.height(), 100.0));
}
