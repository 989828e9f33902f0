//! RGB colors and the three-anchor return/risk gradient

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lerp;
use crate::error::{AnalyticsError, Result};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(AnalyticsError::InvalidColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| AnalyticsError::InvalidColor(hex.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Per-channel linear blend towards `other`, each channel rounded to the nearest integer
    pub fn blend(&self, other: &Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| lerp(a as f64, b as f64, t).round().clamp(0.0, 255.0) as u8;
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Two-segment gradient across "poor" / "neutral" / "good" anchors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorGradient {
    pub poor: Rgb,
    pub neutral: Rgb,
    pub good: Rgb,
}

impl ColorGradient {
    /// Red #ef4444
    pub const POOR: Rgb = Rgb::new(0xef, 0x44, 0x44);
    /// Amber #f59e0b
    pub const NEUTRAL: Rgb = Rgb::new(0xf5, 0x9e, 0x0b);
    /// Green #16a34a
    pub const GOOD: Rgb = Rgb::new(0x16, 0xa3, 0x4a);

    pub fn new(poor: Rgb, neutral: Rgb, good: Rgb) -> Self {
        Self { poor, neutral, good }
    }

    /// Color for a normalized position `t`.
    ///
    /// `t <= 0.5` blends poor→neutral with `t / 0.5`, above that neutral→good
    /// with `(t - 0.5) / 0.5`. Out-of-range input is clamped, NaN maps to poor.
    pub fn color_at(&self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        if t <= 0.5 {
            self.poor.blend(&self.neutral, t / 0.5)
        } else {
            self.neutral.blend(&self.good, (t - 0.5) / 0.5)
        }
    }
}

impl Default for ColorGradient {
    fn default() -> Self {
        Self::new(Self::POOR, Self::NEUTRAL, Self::GOOD)
    }
}
