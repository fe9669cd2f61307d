//! Length units and canvas sizes.

use serde::{Deserialize, Serialize};

/// A length in English Metric Units, the native OOXML unit.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Emu(pub i64);

impl Emu {
    /// EMU per inch.
    pub const PER_INCH: i64 = 914_400;

    /// EMU per typographic point.
    pub const PER_POINT: i64 = 12_700;

    /// Convert inches to EMU, rounding to the nearest unit.
    pub fn from_inches(inches: f64) -> Self {
        Emu((inches * Self::PER_INCH as f64).round() as i64)
    }

    /// Convert points to EMU, rounding to the nearest unit.
    pub fn from_points(points: f64) -> Self {
        Emu((points * Self::PER_POINT as f64).round() as i64)
    }

    /// Length in inches.
    pub fn inches(self) -> f64 {
        self.0 as f64 / Self::PER_INCH as f64
    }

    /// Raw EMU value.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Emu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Width and height of the slide canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSize {
    /// Canvas width
    pub width: Emu,
    /// Canvas height
    pub height: Emu,
}

impl SlideSize {
    /// 4:3 canvas (10in x 7.5in), the size of a blank presentation.
    pub const STANDARD: SlideSize = SlideSize {
        width: Emu(9_144_000),
        height: Emu(6_858_000),
    };

    /// 16:9 canvas (13.33in x 7.5in).
    pub const WIDESCREEN: SlideSize = SlideSize {
        width: Emu(12_188_952),
        height: Emu(6_858_000),
    };

    /// Create a canvas size from inch dimensions.
    pub fn from_inches(width: f64, height: f64) -> Self {
        Self {
            width: Emu::from_inches(width),
            height: Emu::from_inches(height),
        }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width.0 as f64 / self.height.0 as f64
    }
}

impl Default for SlideSize {
    fn default() -> Self {
        Self::STANDARD
    }
}
