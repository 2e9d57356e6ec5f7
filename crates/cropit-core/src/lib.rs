// Author: Dustin Pilgrim
// License: MIT

pub mod anchor;
pub mod container;
pub mod error;
pub mod mode;
pub mod rect;
pub mod value;

pub use anchor::Anchor;
pub use container::ContainerInfo;
pub use error::ConfigError;
pub use mode::ReturnMode;
pub use rect::{Point, Rect};
pub use value::CropValue;
