//! Hue-based color models and their conversion to 8-bit RGB.

/// Round half up, the way browsers round channel values (`-2.5 -> -2`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Map a 0–100 percentage onto the 0–255 channel range.
pub fn percent_to_byte(percent: f64) -> f64 {
    percent * 255.0 / 100.0
}

/// Hue in degrees, saturation and lightness in 0–1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    /// From CSS-style percentages (`hsl(120 50% 25%)` -> `Hsl::from_percentages(120, 50, 25)`).
    pub fn from_percentages(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation: saturation / 100.0,
            lightness: lightness / 100.0,
        }
    }

    /// Reshape an `hsv()`/`hsb()` triple into the HSL form used for conversion.
    ///
    /// Saturation and value stay on their 0–100 scale and the hue is scaled by
    /// another 360, then truncated to whole degrees, exactly as legacy canvas
    /// code did. Results are therefore far outside the usual gamut for
    /// anything but grays; callers that want textbook HSV should convert
    /// themselves. A zero denominator is reported
    /// as a gray (saturation 0).
    pub fn from_legacy_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let shape = (2.0 - saturation) * value;
        let denominator = if shape < 1.0 { shape } else { 2.0 - shape };

        let saturation = if denominator == 0.0 {
            log::warn!(
                target: "ColorParser::Functional",
                "hsv reshape has a zero denominator (s={}, v={}), treating as gray",
                saturation,
                value
            );
            0.0
        } else {
            saturation * value / denominator
        };

        Self {
            hue: (hue * 360.0).trunc(),
            saturation,
            lightness: shape / 2.0,
        }
    }

    /// Zero saturation, the gray case that skips the chroma conversion.
    pub fn is_achromatic(&self) -> bool {
        self.saturation == 0.0
    }

    /// Chroma/sector conversion (CSS Color 3), channels rounded to whole numbers.
    pub fn to_rgb(&self) -> [f64; 3] {
        let h = self.hue.rem_euclid(360.0);
        let s = self.saturation;
        let l = self.lightness;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match (h / 60.0).floor() as i32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        [
            round_half_up((r + m) * 255.0),
            round_half_up((g + m) * 255.0),
            round_half_up((b + m) * 255.0),
        ]
    }
}
