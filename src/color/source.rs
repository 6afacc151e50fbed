//! Construction inputs for [`ColorValue`] and the string classification step.

use super::error::ColorParseError;
use super::functional::{self, ColorFunction};
use super::hex;
use super::syntax::normalize_commas;
use super::value::ColorValue;

/// Anything that can hand over red, green, blue and an optional alpha.
///
/// Values go through the same 0–1 heuristic as [`ColorValue::new`].
pub trait RgbaChannels {
    fn rgba(&self) -> (f64, f64, f64, Option<f64>);
}

impl RgbaChannels for (f64, f64, f64) {
    fn rgba(&self) -> (f64, f64, f64, Option<f64>) {
        (self.0, self.1, self.2, None)
    }
}

impl RgbaChannels for (f64, f64, f64, f64) {
    fn rgba(&self) -> (f64, f64, f64, Option<f64>) {
        (self.0, self.1, self.2, Some(self.3))
    }
}

impl RgbaChannels for [f64; 3] {
    fn rgba(&self) -> (f64, f64, f64, Option<f64>) {
        (self[0], self[1], self[2], None)
    }
}

impl RgbaChannels for [f64; 4] {
    fn rgba(&self) -> (f64, f64, f64, Option<f64>) {
        (self[0], self[1], self[2], Some(self[3]))
    }
}

impl RgbaChannels for [u8; 4] {
    fn rgba(&self) -> (f64, f64, f64, Option<f64>) {
        (
            f64::from(self[0]),
            f64::from(self[1]),
            f64::from(self[2]),
            Some(f64::from(self[3])),
        )
    }
}

/// The ways a color can be built, chosen explicitly or by [`ColorSource::classify`].
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSource {
    /// Bare channel numbers, subject to the 0–1 heuristic.
    Channels {
        red: f64,
        green: f64,
        blue: f64,
        alpha: Option<f64>,
    },
    /// `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `0xrrggbb`.
    Hex(String),
    /// `rgb()`, `hsl()`, `hsv()` and their alpha variants, commas already folded.
    Functional(String),
    /// Copy of an existing color, channels taken verbatim.
    Existing(ColorValue),
}

impl ColorSource {
    /// Decide which syntax a color string uses.
    pub fn classify(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if trimmed.contains('#') || trimmed.starts_with("0x") || trimmed.starts_with("0X") {
            log::debug!(target: "ColorParser::Classify", "`{}` -> hex", trimmed);
            return Ok(ColorSource::Hex(trimmed.to_string()));
        }

        let normalized = normalize_commas(trimmed);
        if let Some((function, _)) = functional::split_function(&normalized) {
            log::debug!(target: "ColorParser::Classify", "`{}` -> {:?}", normalized, function);
            return Ok(ColorSource::Functional(normalized));
        }

        log::debug!(target: "ColorParser::Classify", "`{}` -> unrecognized", trimmed);
        Err(ColorParseError::UnrecognizedSyntax(trimmed.to_string()))
    }

    /// Function family of a [`ColorSource::Functional`] source.
    pub fn function(&self) -> Option<ColorFunction> {
        match self {
            ColorSource::Functional(s) => functional::split_function(s).map(|(f, _)| f),
            _ => None,
        }
    }
}

impl From<ColorValue> for ColorSource {
    fn from(color: ColorValue) -> Self {
        ColorSource::Existing(color)
    }
}

impl ColorValue {
    pub fn from_source(source: ColorSource) -> Result<Self, ColorParseError> {
        match source {
            ColorSource::Channels {
                red,
                green,
                blue,
                alpha,
            } => Ok(ColorValue::from_channels(red, green, blue, alpha)),
            ColorSource::Hex(s) => hex::parse_hex(&s),
            ColorSource::Functional(s) => functional::parse_functional(&s),
            ColorSource::Existing(color) => Ok(color),
        }
    }

    /// Build from any [`RgbaChannels`] value (tuples, arrays, your own structs).
    pub fn from_rgba<T: RgbaChannels + ?Sized>(channels: &T) -> Self {
        let (red, green, blue, alpha) = channels.rgba();
        ColorValue::from_channels(red, green, blue, alpha)
    }
}
