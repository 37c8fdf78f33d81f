//! Generation settings and the limits shared by the brush parameter sets.

use serde::{Deserialize, Serialize};

use crate::math::GridPrecision;

// =============================================================================
// GRID
// =============================================================================

/// Decimal places map coordinates snap to unless configured otherwise.
pub const DEFAULT_GRID_DECIMALS: u32 = 0;

// =============================================================================
// COLOURS
// =============================================================================

/// HSV saturation of generated brush colours.
pub const BRUSH_COLOR_SATURATION: f64 = 0.55;

/// HSV value of generated brush colours. Kept high so wireframes stay readable
/// on the dark 2D viewport background.
pub const BRUSH_COLOR_VALUE: f64 = 0.95;

// =============================================================================
// PARAMETER LIMITS
// =============================================================================

/// Fewest sides a ring can have and still enclose an area.
pub const MIN_SIDES: f64 = 3.0;
pub const MAX_SIDES: f64 = 64.0;
pub const DEFAULT_SIDES: f64 = 8.0;

pub const MIN_WALL_WIDTH: f64 = 1.0;
pub const MAX_WALL_WIDTH: f64 = 1024.0;
pub const DEFAULT_WALL_WIDTH: f64 = 16.0;

/// Smallest arc an arch may span, in degrees.
pub const MIN_ARC: f64 = 1.0;
/// Arcs may wind around up to four times.
pub const MAX_ARC: f64 = 360.0 * 4.0;

/// Start angles are whole degrees in `[0, 359]`.
pub const MAX_START_ANGLE: f64 = 359.0;

/// Total rise (or drop) of an arch across all its segments.
pub const MAX_ARCH_HEIGHT: f64 = 1024.0;

/// Tilt is given as a slope percentage; 200% is a little over 63 degrees.
pub const MAX_TILT_PERCENT: f64 = 200.0;

// =============================================================================
// SETTINGS
// =============================================================================

/// Host-provided settings for a brush session.
///
/// Every field has a default, so a partial settings file deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Decimal places generated coordinates snap to.
    pub grid_decimals: u32,
    /// Seed for brush colours. `None` picks a fresh seed per session.
    pub color_seed: Option<u64>,
}

impl BrushConfig {
    /// The grid precision described by these settings.
    #[must_use]
    pub fn grid(&self) -> GridPrecision {
        GridPrecision::new(self.grid_decimals)
    }
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            grid_decimals: DEFAULT_GRID_DECIMALS,
            color_seed: None,
        }
    }
}
