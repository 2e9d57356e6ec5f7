// Author: Dustin Pilgrim
// License: MIT

pub mod constraints;
pub mod engine;
pub mod events;
pub mod handles;
pub mod options;
pub mod session;

pub use constraints::RatioAxis;
pub use engine::{Engine, PointerPhase, RenderFrame};
pub use events::{CropEvent, EventBus};
pub use handles::{HANDLES, Handle};
pub use options::{CropOptions, SizeLimits, SizeSpec, Unit};
pub use session::Session;
