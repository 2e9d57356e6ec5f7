// Author: Dustin Pilgrim
// License: MIT

use eventline::{debug, info};

use cropit_core::{ContainerInfo, CropValue, Point, ReturnMode};
use cropit_engine::{CropEvent, Engine, PointerPhase};

use crate::config::CropitConfig;

pub struct SimulateArgs {
    pub container: String,
    pub media: Option<String>,
    pub ratio: Option<f64>,
    pub min_size: Option<String>,
    pub max_size: Option<String>,
    pub start_size: Option<String>,
    pub mode: Option<ReturnMode>,
    pub steps: Vec<String>,
}

pub fn run(cfg: &CropitConfig, args: SimulateArgs) -> Result<(), String> {
    let (cw, ch) = parse_wh(&args.container)?;
    let mut container = ContainerInfo::new(0.0, 0.0, cw, ch);
    if let Some(media) = &args.media {
        let (nw, nh) = parse_wh(media)?;
        container = container.with_natural_size(nw, nh);
    }

    // config file defaults, overridden by flags
    let mut options = cfg.to_options();
    if let Some(ratio) = args.ratio {
        options.aspect_ratio = Some(ratio);
    }
    if let Some(s) = &args.min_size {
        options.min_size = Some(s.parse().map_err(|e| format!("--min-size: {e}"))?);
    }
    if let Some(s) = &args.max_size {
        options.max_size = Some(s.parse().map_err(|e| format!("--max-size: {e}"))?);
    }
    if let Some(s) = &args.start_size {
        options.start_size = s.parse().map_err(|e| format!("--start-size: {e}"))?;
    }
    if let Some(mode) = args.mode {
        options.return_mode = mode;
    }

    let mut engine = Engine::new(options, container).map_err(|e| e.to_string())?;
    let events = engine.subscribe();

    info!("simulating {} steps", args.steps.len());
    println!("initial:  {}", fmt_value(engine.value(None)));

    for (i, step) in args.steps.iter().enumerate() {
        let (phase, point) = parse_step(step)?;
        debug!("step {i}: {phase:?} at ({}, {})", point.x, point.y);

        let applied = engine.apply_pointer(phase, point);
        if applied.is_none() {
            println!("step {i}:  {step} (ignored)");
        }

        for event in events.try_iter() {
            println!("event:    {}", fmt_event(&event));
        }

        // the render sink would drain this once per frame
        if let Some(frame) = engine.take_render_frame() {
            println!(
                "render:   x={} y={} w={} h={}",
                frame.x, frame.y, frame.w, frame.h
            );
        }
    }

    println!("raw:      {}", fmt_value(engine.value(Some(ReturnMode::Raw))));
    println!("ratio:    {}", fmt_value(engine.value(Some(ReturnMode::Ratio))));
    println!("real:     {}", fmt_value(engine.value(Some(ReturnMode::Real))));

    Ok(())
}

pub fn parse_wh(s: &str) -> Result<(f64, f64), String> {
    let bad = || format!("expected WxH, got \"{s}\"");

    let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(bad)?;
    let w: f64 = w.trim().parse().map_err(|_| bad())?;
    let h: f64 = h.trim().parse().map_err(|_| bad())?;

    if !w.is_finite() || !h.is_finite() || w <= 0.0 || h <= 0.0 {
        return Err(bad());
    }
    Ok((w, h))
}

fn parse_step(s: &str) -> Result<(PointerPhase, Point), String> {
    let t = s.trim();

    if t.eq_ignore_ascii_case("up") {
        return Ok((PointerPhase::Up, Point::new(0.0, 0.0)));
    }

    let bad = || format!("expected down:X,Y move:X,Y or up, got \"{s}\"");

    let (kind, coords) = t.split_once(':').ok_or_else(bad)?;
    let phase = match kind.trim().to_lowercase().as_str() {
        "down" => PointerPhase::Down,
        "move" => PointerPhase::Move,
        _ => return Err(bad()),
    };

    let (x, y) = coords.split_once(',').ok_or_else(bad)?;
    let x: f64 = x.trim().parse().map_err(|_| bad())?;
    let y: f64 = y.trim().parse().map_err(|_| bad())?;

    Ok((phase, Point::new(x, y)))
}

fn fmt_value(v: CropValue) -> String {
    format!("x={} y={} w={} h={}", v.x, v.y, v.width, v.height)
}

fn fmt_event(event: &CropEvent) -> String {
    match event {
        CropEvent::Initialized { value } => format!("initialized {}", fmt_value(*value)),
        CropEvent::SelectStart { value } => format!("select-start {}", fmt_value(*value)),
        CropEvent::SelectMove { value } => format!("select-move {}", fmt_value(*value)),
        CropEvent::SelectEnd { value } => format!("select-end {}", fmt_value(*value)),
    }
}
