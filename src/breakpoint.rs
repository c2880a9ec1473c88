//! Viewport-width tiers and the breakpoint table that maps widths to them.

use std::ops::{Range, RangeFrom, RangeTo};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A named bucket of viewport widths sharing identical layout rules.
///
/// Tiers are totally ordered by increasing minimum width; `Ord` follows
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Narrow,
    Medium,
    Wide,
    UltraWide,
}

impl Tier {
    /// All tiers, in ascending width order.
    pub const ALL: [Tier; 4] = [Tier::Narrow, Tier::Medium, Tier::Wide, Tier::UltraWide];
}

/// Width breakpoints in pixels.
///
/// Ranges are half-open so every non-negative width falls in exactly one
/// tier; lower bounds are inclusive (width == threshold maps to the new
/// tier, not the old one).
pub struct BreakpointTable {
    narrow: RangeTo<f64>,
    medium: Range<f64>,
    wide: Range<f64>,
    ultra_wide: RangeFrom<f64>,
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self {
            narrow: ..768.0,
            medium: 768.0..1280.0,
            wide: 1280.0..1536.0,
            ultra_wide: 1536.0..,
        }
    }
}

impl BreakpointTable {
    /// Map a viewport width to its tier.
    ///
    /// Total and monotonic over all finite non-negative widths; a negative
    /// or non-finite width is an input error.
    pub fn tier_for(&self, width: f64) -> Result<Tier> {
        if !width.is_finite() || width < 0.0 {
            return Err(Error::InvalidWidth(width));
        }
        if self.narrow.contains(&width) {
            return Ok(Tier::Narrow);
        }
        if self.medium.contains(&width) {
            return Ok(Tier::Medium);
        }
        if self.wide.contains(&width) {
            return Ok(Tier::Wide);
        }
        if self.ultra_wide.contains(&width) {
            return Ok(Tier::UltraWide);
        }
        // Unreachable while the ranges above stay contiguous
        Err(Error::InvalidWidth(width))
    }
}

/// Map a viewport width to its tier using the default breakpoint table.
pub fn tier_for(width: f64) -> Result<Tier> {
    BreakpointTable::default().tier_for(width)
}
