use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};
use std::str::FromStr;

use super::error::ColorParseError;
use super::source::ColorSource;

/// An sRGB color with four channels on a nominal 0–255 scale.
///
/// Channels are plain `f64`s and are never clamped: parsing, the 0–1
/// heuristic and arithmetic can all leave values outside `0..=255` or
/// fractional. Clamp before handing them to anything that expects bytes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorValue {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Default for ColorValue {
    fn default() -> Self {
        ColorValue::from_raw(0.0, 0.0, 0.0, 255.0) // 不透明な黒
    }
}

/// JS-style ToInt32: truncate, then wrap modulo 2^32.
fn to_int32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    value.trunc().rem_euclid(4_294_967_296.0) as u32 as i32
}

/// `-0` prints as `0` in CSS output.
fn css_number(value: f64) -> f64 {
    value + 0.0
}

impl ColorValue {
    pub const BLACK: ColorValue = ColorValue::from_raw(0.0, 0.0, 0.0, 255.0);
    pub const WHITE: ColorValue = ColorValue::from_raw(255.0, 255.0, 255.0, 255.0);

    /// Store the channels exactly as given.
    pub const fn from_raw(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque color from bare channel numbers.
    ///
    /// If the sum is positive and every channel is `<= 1`, the input is taken
    /// as a normalized 0–1 triple and scaled by 255. This is ambiguous at the
    /// boundary: `new(1.0, 1.0, 1.0)` is white, not an almost-black `rgb(1 1 1)`.
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self::from_channels(red, green, blue, None)
    }

    /// Like [`ColorValue::new`] with an explicit alpha. The 0–1 heuristic only
    /// applies when alpha is `<= 1` as well, and then scales alpha too.
    pub fn with_alpha(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self::from_channels(red, green, blue, Some(alpha))
    }

    pub(crate) fn from_channels(red: f64, green: f64, blue: f64, alpha: Option<f64>) -> Self {
        let normalized = red + green + blue > 0.0
            && red <= 1.0
            && green <= 1.0
            && blue <= 1.0
            && alpha.is_none_or(|a| a <= 1.0);

        let (red, green, blue, alpha) = if normalized {
            (red * 255.0, green * 255.0, blue * 255.0, alpha.map(|a| a * 255.0))
        } else {
            (red, green, blue, alpha)
        };

        Self::from_raw(red, green, blue, alpha.unwrap_or(255.0))
    }

    /// Parse any supported syntax: hex (`#abc`, `0xaabbcc`) or functional
    /// (`rgb()`, `rgba()`, `hsl()`, `hsla()`, `hsv()`, `hsva()`).
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let source = ColorSource::classify(input)?;
        Self::from_source(source)
    }

    /// Perceptual luminance on a 0–1 scale (ITU-R BT.601 weights).
    pub fn luma(&self) -> f64 {
        (self.red * 0.299 + self.green * 0.587 + self.blue * 0.114) / 255.0
    }

    /// `0xRRGGBB` packed into an integer.
    ///
    /// Red and green are truncated to 32-bit integers and shifted with
    /// wrap-around, then added to the raw blue and floored. Out-of-range
    /// channels give whatever that arithmetic gives; nothing is masked here.
    pub fn packed_value(&self) -> i64 {
        let red = to_int32(self.red).wrapping_shl(16);
        let green = to_int32(self.green).wrapping_shl(8);
        (f64::from(red) + f64::from(green) + self.blue).floor() as i64
    }

    /// `#rrggbb` from the low 24 bits of [`packed_value`](Self::packed_value).
    pub fn hex(&self) -> String {
        format!("#{:06x}", self.packed_value() & 0xFF_FFFF)
    }

    /// `#rrggbbaa`, alpha floored and taken modulo 256.
    pub fn hex_with_alpha(&self) -> String {
        format!("{}{:02x}", self.hex(), (self.alpha.floor() as i64) & 0xFF)
    }

    /// `rgb(R G B)` with the raw channel values.
    pub fn rgb_string(&self) -> String {
        format!(
            "rgb({} {} {})",
            css_number(self.red),
            css_number(self.green),
            css_number(self.blue)
        )
    }

    /// `rgb(P% P% P%)`, each channel as a percentage of 255.
    pub fn rgb_percent_string(&self) -> String {
        let percent = |channel: f64| css_number(100.0 * channel / 255.0);
        format!(
            "rgb({}% {}% {}%)",
            percent(self.red),
            percent(self.green),
            percent(self.blue)
        )
    }

    /// `channel * mult + add` on red, green and blue. Alpha is left alone.
    pub fn scale_offset(self, mult: f64, add: f64) -> Self {
        Self {
            red: self.red * mult + add,
            green: self.green * mult + add,
            blue: self.blue * mult + add,
            alpha: self.alpha,
        }
    }
}

impl Add<f64> for ColorValue {
    type Output = ColorValue;

    fn add(self, x: f64) -> ColorValue {
        self.scale_offset(1.0, x)
    }
}

impl Sub<f64> for ColorValue {
    type Output = ColorValue;

    fn sub(self, x: f64) -> ColorValue {
        self.scale_offset(1.0, -x)
    }
}

impl Mul<f64> for ColorValue {
    type Output = ColorValue;

    fn mul(self, x: f64) -> ColorValue {
        self.scale_offset(x, 0.0)
    }
}

impl Div<f64> for ColorValue {
    type Output = ColorValue;

    fn div(self, x: f64) -> ColorValue {
        self.scale_offset(1.0 / x, 0.0)
    }
}

impl AddAssign<f64> for ColorValue {
    fn add_assign(&mut self, x: f64) {
        *self = *self + x;
    }
}

impl SubAssign<f64> for ColorValue {
    fn sub_assign(&mut self, x: f64) {
        *self = *self - x;
    }
}

impl MulAssign<f64> for ColorValue {
    fn mul_assign(&mut self, x: f64) {
        *self = *self * x;
    }
}

impl DivAssign<f64> for ColorValue {
    fn div_assign(&mut self, x: f64) {
        *self = *self / x;
    }
}

impl FromStr for ColorValue {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorValue::parse(s)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha == 255.0 {
            write!(f, "{}", self.hex())
        } else {
            write!(f, "{}", self.hex_with_alpha())
        }
    }
}
