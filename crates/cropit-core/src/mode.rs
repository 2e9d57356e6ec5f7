// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[cfg(feature = "clap")]
use clap::ValueEnum;

/// Coordinate system in which a crop value is reported.
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReturnMode {
    /// Integer pixels in the container's own (rendered) space.
    Raw,

    /// Fractions of the rendered container size, stable under re-layout.
    Ratio,

    /// True source-media pixels regardless of on-screen scaling.
    #[default]
    Real,
}

impl fmt::Display for ReturnMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReturnMode::Raw => "raw",
            ReturnMode::Ratio => "ratio",
            ReturnMode::Real => "real",
        };
        write!(f, "{s}")
    }
}

impl FromStr for ReturnMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "raw" => Ok(ReturnMode::Raw),
            "ratio" => Ok(ReturnMode::Ratio),
            "real" => Ok(ReturnMode::Real),
            other => Err(ConfigError::UnknownReturnMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        assert_eq!("raw".parse::<ReturnMode>().unwrap(), ReturnMode::Raw);
        assert_eq!(" Ratio ".parse::<ReturnMode>().unwrap(), ReturnMode::Ratio);
        assert_eq!("REAL".parse::<ReturnMode>().unwrap(), ReturnMode::Real);
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = "pixels".parse::<ReturnMode>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownReturnMode(s) if s == "pixels"));
    }
}
