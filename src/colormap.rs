//! The four palettes.

use std::{fmt, str::FromStr};
use rgb::RGB;
use thiserror::Error;
use crate::{ColorRange, RGBColor, math::{interpolate, jet_base}};

/// Palette mapping a scalar normalized to \[0, 1\] to a color.
///
/// Values outside \[0, 1\] are not rejected: [`ColorMap::Gray`] passes
/// them through while the other palettes saturate or fade to black
/// according to their formulas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMap {
    /// `(v, v, v)`.
    Gray,
    /// Dark blue, blue, cyan, yellow, red, dark red.
    #[default]
    Jet,
    /// Green to yellow, with a constant blue of 0.4.
    Summer,
    /// Blue to green.
    Winter,
}

/// Error returned when parsing an unknown palette name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorMapError {
    #[error("unknown colormap “{0}” (expected gray, jet, summer or winter)")]
    Unknown(String),
}

impl ColorMap {
    /// Every palette, ordered by [`code`](ColorMap::code).
    pub const ALL: [ColorMap; 4] =
        [ColorMap::Gray, ColorMap::Jet, ColorMap::Summer, ColorMap::Winter];

    /// The palette selected when nothing (or nothing valid) was asked
    /// for.
    pub const DEFAULT: ColorMap = ColorMap::Jet;

    /// Returns the color corresponding to `value`.
    pub fn color(self, value: f64) -> RGB<f64> {
        use ColorMap::*;
        match self {
            Gray => RGB { r: value, g: value, b: value },
            Jet => RGB { r: jet_base(value * 2. - 1.5),
                         g: jet_base(value * 2. - 1.),
                         b: jet_base(value * 2. - 0.5) },
            Summer => RGB { r: interpolate(value, 0., 0., 1., 1.),
                            g: interpolate(value, 0.5, 0., 1., 1.),
                            b: 0.4 },
            Winter => RGB { r: 0.,
                            g: interpolate(value, 0., 0., 1., 1.),
                            b: interpolate(value, 1., 0., 0.5, 1.) },
        }
    }

    /// Numeric option code: Gray = 0, Jet = 1, Summer = 2, Winter = 3.
    pub fn code(self) -> i32 {
        match self {
            ColorMap::Gray => 0,
            ColorMap::Jet => 1,
            ColorMap::Summer => 2,
            ColorMap::Winter => 3,
        }
    }

    /// Palette with the given option code, if any.
    pub fn try_from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ColorMap::Gray),
            1 => Some(ColorMap::Jet),
            2 => Some(ColorMap::Summer),
            3 => Some(ColorMap::Winter),
            _ => None,
        }
    }

    /// Palette with the given option code.  Unknown codes select
    /// [`ColorMap::DEFAULT`].
    pub fn from_code(code: i32) -> Self {
        Self::try_from_code(code).unwrap_or(Self::DEFAULT)
    }

    /// Lowercase name, as accepted by [`str::parse`].
    pub fn name(self) -> &'static str {
        match self {
            ColorMap::Gray => "gray",
            ColorMap::Jet => "jet",
            ColorMap::Summer => "summer",
            ColorMap::Winter => "winter",
        }
    }
}

impl fmt::Display for ColorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMap {
    type Err = ParseColorMapError;

    /// Case insensitive; "grey" is accepted for [`ColorMap::Gray`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gray" | "grey" => Ok(ColorMap::Gray),
            "jet" => Ok(ColorMap::Jet),
            "summer" => Ok(ColorMap::Summer),
            "winter" => Ok(ColorMap::Winter),
            _ => Err(ParseColorMapError::Unknown(s.to_string())),
        }
    }
}

impl<Color: RGBColor> ColorRange<Color> for ColorMap {
    #[inline]
    fn rgb(&self, t: f64) -> Color { Color::from_unit(self.color(t)) }
}
