// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

/// Rejected configuration input. Reported synchronously at configuration
/// time; a live instance keeps its previous valid configuration.
///
/// Mutually-exclusive geometry (min over max, ratio fighting a bound) is
/// *not* an error: the constraint engine resolves those deterministically.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown return mode \"{0}\" (expected raw|ratio|real)")]
    UnknownReturnMode(String),

    #[error("invalid size \"{0}\" (expected WxH with optional % or px suffix)")]
    InvalidSize(String),

    #[error("aspect ratio must be a positive finite number, got {0}")]
    InvalidAspectRatio(f64),

    #[error("container has no area ({width}x{height})")]
    EmptyContainer { width: f64, height: f64 },
}
