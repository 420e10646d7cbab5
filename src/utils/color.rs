//! Body colors.
//!
//! Bodies carry a color as a presentation hint. The physics core never looks
//! at it except to blend two colors when bodies merge, so it is stored as a
//! structured HSL value rather than text. Text is only parsed where scenes
//! are authored.
//!
//! # Accepted encodings
//!
//! - `hsl(210, 70%, 50%)`, comma separated
//! - `hsl(210 70% 50%)`, space separated
//! - `#3498db`, hex, as used by hand-picked palette entries
//!
//! Anything else is kept verbatim as [`BodyColor::Opaque`]. Blending never
//! fails: when either side is opaque the first operand wins unchanged.
//!
//! # Usage
//!
//! ```rust
//! use gravitas::utils::color::BodyColor;
//!
//! let red = BodyColor::from("hsl(0, 100%, 50%)");
//! let blue = BodyColor::from("hsl(240 100% 50%)");
//!
//! // A light body barely shifts the hue of a heavy one
//! let merged = red.blend(90.0, &blue, 10.0);
//! assert!(merged.as_hsla().is_some());
//! ```

use bevy::color::{Hsla, Mix, Srgba};
use rand::Rng;
use std::fmt;

const HUE_DEGREES: f32 = 360.0;
const PERCENT: f32 = 100.0;

/// Presentation color attached to a body.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyColor {
    /// Structured hue/saturation/lightness value
    Hsl(Hsla),
    /// Text that did not parse as a known color encoding
    Opaque(String),
}

impl BodyColor {
    /// Build an HSL color from a hue in degrees and percentages.
    #[must_use]
    pub fn hsl(hue: f32, saturation_percent: f32, lightness_percent: f32) -> Self {
        Self::Hsl(Hsla::hsl(
            hue.rem_euclid(HUE_DEGREES),
            (saturation_percent / PERCENT).clamp(0.0, 1.0),
            (lightness_percent / PERCENT).clamp(0.0, 1.0),
        ))
    }

    /// Parse color text, keeping unknown encodings as opaque text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        parse_hsl(text)
            .or_else(|| parse_hex(text))
            .map(Self::Hsl)
            .unwrap_or_else(|| Self::Opaque(text.to_string()))
    }

    /// Random hue with fixed saturation and lightness.
    ///
    /// An empty or reversed range yields `hue_range.start`.
    pub fn random_hue(
        rng: &mut impl Rng,
        hue_range: std::ops::Range<f32>,
        saturation_percent: f32,
        lightness_percent: f32,
    ) -> Self {
        let hue = if hue_range.is_empty() {
            hue_range.start
        } else {
            rng.random_range(hue_range)
        };
        Self::hsl(hue, saturation_percent, lightness_percent)
    }

    #[must_use]
    pub fn as_hsla(&self) -> Option<Hsla> {
        match self {
            Self::Hsl(hsla) => Some(*hsla),
            Self::Opaque(_) => None,
        }
    }

    /// Mass-weighted blend of two colors.
    ///
    /// The other color contributes `other_mass / (own_mass + other_mass)`
    /// of each channel; hue travels the shorter way around the color wheel.
    /// If either color is opaque, or the total mass is not a positive finite
    /// number, `self` is returned unchanged.
    #[must_use]
    pub fn blend(&self, own_mass: f64, other: &BodyColor, other_mass: f64) -> BodyColor {
        let total_mass = own_mass + other_mass;
        match (self, other) {
            (Self::Hsl(own), Self::Hsl(theirs)) if total_mass.is_finite() && total_mass > 0.0 => {
                let factor = (other_mass / total_mass) as f32;
                Self::Hsl(own.mix(theirs, factor))
            }
            _ => self.clone(),
        }
    }
}

impl Default for BodyColor {
    fn default() -> Self {
        Self::hsl(0.0, 0.0, 100.0)
    }
}

impl From<&str> for BodyColor {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<Hsla> for BodyColor {
    fn from(hsla: Hsla) -> Self {
        Self::Hsl(hsla)
    }
}

impl fmt::Display for BodyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hsl(hsla) => write!(
                f,
                "hsl({}, {}%, {}%)",
                round_hundredths(hsla.hue),
                round_hundredths(hsla.saturation * PERCENT),
                round_hundredths(hsla.lightness * PERCENT)
            ),
            Self::Opaque(text) => f.write_str(text),
        }
    }
}

fn round_hundredths(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

fn parse_hsl(text: &str) -> Option<Hsla> {
    let text = text.trim().to_ascii_lowercase();
    let inner = text.strip_prefix("hsl(")?.strip_suffix(')')?;

    let channels: Vec<&str> = if inner.contains(',') {
        inner.split(',').map(str::trim).collect()
    } else {
        inner.split_whitespace().collect()
    };
    let [hue, saturation, lightness] = channels.as_slice() else {
        return None;
    };

    let hue: f32 = hue.trim_end_matches("deg").parse().ok()?;
    let saturation: f32 = saturation.strip_suffix('%')?.parse().ok()?;
    let lightness: f32 = lightness.strip_suffix('%')?.parse().ok()?;

    if !(hue.is_finite() && saturation.is_finite() && lightness.is_finite()) {
        return None;
    }

    BodyColor::hsl(hue, saturation, lightness).as_hsla()
}

fn parse_hex(text: &str) -> Option<Hsla> {
    let digits = text.trim().strip_prefix('#')?;
    Srgba::hex(digits).ok().map(Hsla::from)
}
