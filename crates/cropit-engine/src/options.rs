// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::str::FromStr;

use cropit_core::{ConfigError, ContainerInfo, ReturnMode};

/// Unit a size option was written in. Percentages are relative to the
/// rendered container and are converted to pixels exactly once, when the
/// options are resolved against a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    Percent,
}

/// A width/height pair with the unit it was specified in, e.g. `"80x60%"`,
/// `"200x150px"` or `"200x150"` (bare numbers are pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSpec {
    pub width: f64,
    pub height: f64,
    pub unit: Unit,
}

impl SizeSpec {
    pub const fn px(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            unit: Unit::Px,
        }
    }

    pub const fn percent(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            unit: Unit::Percent,
        }
    }

    /// One-time unit conversion against the current container size.
    pub fn to_pixels(&self, container: &ContainerInfo) -> (f64, f64) {
        match self.unit {
            Unit::Px => (self.width, self.height),
            Unit::Percent => (
                container.width * self.width / 100.0,
                container.height * self.height / 100.0,
            ),
        }
    }
}

impl FromStr for SizeSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ConfigError::InvalidSize(s.to_string());
        let t = s.trim();

        let (body, unit) = if let Some(b) = t.strip_suffix('%') {
            (b, Unit::Percent)
        } else if let Some(b) = t.strip_suffix("px") {
            (b, Unit::Px)
        } else {
            (t, Unit::Px)
        };

        let (w, h) = body.split_once(['x', 'X']).ok_or_else(bad)?;
        let width: f64 = w.trim().parse().map_err(|_| bad())?;
        let height: f64 = h.trim().parse().map_err(|_| bad())?;

        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(bad());
        }

        Ok(SizeSpec {
            width,
            height,
            unit,
        })
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.unit {
            Unit::Px => "px",
            Unit::Percent => "%",
        };
        write!(f, "{}x{}{}", self.width, self.height, suffix)
    }
}

/// Pixel bounds after unit conversion. `None` is unbounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeLimits {
    pub min_width: Option<f64>,
    pub min_height: Option<f64>,
    pub max_width: Option<f64>,
    pub max_height: Option<f64>,
}

/// User-facing configuration of a crop engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropOptions {
    /// Fixed aspect ratio as height/width. `None` leaves both axes free.
    pub aspect_ratio: Option<f64>,

    pub min_size: Option<SizeSpec>,
    pub max_size: Option<SizeSpec>,

    /// Size of the initial region, centered in the container.
    pub start_size: SizeSpec,

    pub return_mode: ReturnMode,
}

impl Default for CropOptions {
    fn default() -> Self {
        Self {
            aspect_ratio: None,
            min_size: None,
            max_size: None,
            start_size: SizeSpec::percent(100.0, 100.0),
            return_mode: ReturnMode::default(),
        }
    }
}

impl CropOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ratio) = self.aspect_ratio
            && (!ratio.is_finite() || ratio <= 0.0)
        {
            return Err(ConfigError::InvalidAspectRatio(ratio));
        }
        Ok(())
    }

    /// Validate and convert to pixel-space values for one container.
    /// Min-over-max conflicts are deliberately left in: the constraint
    /// engine resolves them (max wins), they are not configuration errors.
    pub fn resolve(&self, container: &ContainerInfo) -> Result<ResolvedOptions, ConfigError> {
        self.validate()?;

        if container.width <= 0.0 || container.height <= 0.0 {
            return Err(ConfigError::EmptyContainer {
                width: container.width,
                height: container.height,
            });
        }

        let mut limits = SizeLimits::default();
        if let Some(min) = self.min_size {
            let (w, h) = min.to_pixels(container);
            limits.min_width = Some(w);
            limits.min_height = Some(h);
        }
        if let Some(max) = self.max_size {
            let (w, h) = max.to_pixels(container);
            limits.max_width = Some(w);
            limits.max_height = Some(h);
        }

        let (start_width, start_height) = self.start_size.to_pixels(container);

        Ok(ResolvedOptions {
            aspect_ratio: self.aspect_ratio,
            limits,
            start_width,
            start_height,
            return_mode: self.return_mode,
        })
    }
}

/// Options after validation and unit conversion; what the engine actually
/// computes with.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedOptions {
    pub aspect_ratio: Option<f64>,
    pub limits: SizeLimits,
    pub start_width: f64,
    pub start_height: f64,
    pub return_mode: ReturnMode,
}
