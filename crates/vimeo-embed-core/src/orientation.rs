//! Screen orientation service seam
//!
//! Screen orientation is a process-wide setting owned by the platform.
//! The bridge mutates it unconditionally on fullscreen transitions with
//! no ownership negotiation; concurrent players each restricting
//! orientation independently is an accepted limitation. A multi-instance
//! arbiter would sit behind this trait.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Physical screen orientations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    PortraitUp,
    PortraitDown,
    LandscapeLeft,
    LandscapeRight,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::PortraitUp => write!(f, "portrait_up"),
            Orientation::PortraitDown => write!(f, "portrait_down"),
            Orientation::LandscapeLeft => write!(f, "landscape_left"),
            Orientation::LandscapeRight => write!(f, "landscape_right"),
        }
    }
}

/// Orientations requested while the player presents fullscreen
pub const FULLSCREEN_ORIENTATIONS: [Orientation; 2] =
    [Orientation::LandscapeRight, Orientation::LandscapeLeft];

/// Orientations restored when fullscreen presentation ends
pub const INLINE_ORIENTATIONS: [Orientation; 2] =
    [Orientation::PortraitUp, Orientation::PortraitDown];

/// Platform service that restricts the allowed screen orientations.
///
/// Requests are best-effort: the bridge logs a declined request and never
/// surfaces it to the host.
pub trait OrientationService: Send + Sync {
    /// Restrict the allowed orientations to exactly `orientations`
    fn set_allowed(&self, orientations: &[Orientation]) -> Result<()>;
}

/// Accepts every request and only logs it. For hosts and tests without a
/// platform orientation service.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullOrientationService;

impl OrientationService for NullOrientationService {
    fn set_allowed(&self, orientations: &[Orientation]) -> Result<()> {
        debug!(?orientations, "Orientation request accepted (null service)");
        Ok(())
    }
}
