// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::rect::Point;

/// Geometry of the display container hosting the crop region.
///
/// Supplied by the embedding layer; the engine never measures the screen
/// itself. Pointer events arrive in absolute (page) coordinates and are
/// converted to container-local space through this.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContainerInfo {
    /// Position of the container in the pointer event coordinate space.
    pub x: f64,
    pub y: f64,

    /// Rendered size on screen.
    pub width: f64,
    pub height: f64,

    /// Natural size of the displayed media (source pixels). Equal to the
    /// rendered size when the media is shown 1:1.
    pub natural_width: f64,
    pub natural_height: f64,
}

impl ContainerInfo {
    /// Container rendered 1:1 (natural size == rendered size).
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            natural_width: width,
            natural_height: height,
        }
    }

    pub fn with_natural_size(mut self, width: f64, height: f64) -> Self {
        self.natural_width = width;
        self.natural_height = height;
        self
    }

    /// Absolute pointer coordinates -> container-local coordinates.
    pub fn to_local(&self, p: Point) -> Point {
        Point::new(p.x - self.x, p.y - self.y)
    }

    /// Clamp a local point into the container bounds.
    pub fn clamp_local(&self, p: Point) -> Point {
        Point::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }

    /// Per-axis scale from rendered pixels to source-media pixels.
    pub fn scale_x(&self) -> f64 {
        self.natural_width / self.width
    }

    pub fn scale_y(&self) -> f64 {
        self.natural_height / self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_conversion_and_clamp() {
        let c = ContainerInfo::new(100.0, 50.0, 400.0, 300.0);
        let local = c.to_local(Point::new(150.0, 80.0));
        assert_eq!(local, Point::new(50.0, 30.0));

        let clamped = c.clamp_local(Point::new(-20.0, 350.0));
        assert_eq!(clamped, Point::new(0.0, 300.0));
    }

    #[test]
    fn media_scale_factors() {
        let c = ContainerInfo::new(0.0, 0.0, 400.0, 300.0).with_natural_size(1600.0, 900.0);
        assert_eq!(c.scale_x(), 4.0);
        assert_eq!(c.scale_y(), 3.0);
    }
}
