// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

/// Snapshot of the crop region reported to callers, in the units of the
/// return mode it was projected with. Callers never see the live rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropValue {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropValue {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
