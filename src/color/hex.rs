//! Hex color strings: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `0xrrggbb`.

use super::error::ColorParseError;
use super::value::ColorValue;

/// Digits with every `#` and `0x` marker removed, lower-cased.
fn strip_markers(input: &str) -> String {
    input
        .trim()
        .replace('#', "")
        .replace("0x", "")
        .replace("0X", "")
        .to_ascii_lowercase()
}

/// Expand a digit string to exactly eight digits (`rrggbbaa`).
fn expand(digits: &str) -> String {
    let d: Vec<char> = digits.chars().collect();
    match d.len() {
        3 => format!("{0}{0}{1}{1}{2}{2}ff", d[0], d[1], d[2]),
        4 => format!("{0}{0}{1}{1}{2}{2}{3}{3}", d[0], d[1], d[2], d[3]),
        6 => format!("{digits}ff"),
        8 => digits.to_string(),
        n if n < 6 => {
            log::warn!(target: "ColorParser::Hex", "short hex `{}`, left-padding with zeros", digits);
            format!("{digits:0>6}ff")
        }
        7 => {
            log::warn!(target: "ColorParser::Hex", "7-digit hex `{}`, ignoring the last digit", digits);
            format!("{}ff", &digits[..6])
        }
        _ => {
            log::warn!(target: "ColorParser::Hex", "long hex `{}`, using the first 8 digits", digits);
            digits[..8].to_string()
        }
    }
}

/// Parse hex syntax into a color. Malformed lengths are padded rather than rejected.
pub fn parse_hex(input: &str) -> Result<ColorValue, ColorParseError> {
    let digits = strip_markers(input);

    if digits.is_empty() {
        return Err(ColorParseError::MalformedColorSyntax(input.to_string()));
    }
    if let Some(digit) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHexDigit {
            input: input.to_string(),
            digit,
        });
    }

    let expanded = expand(&digits);
    log::debug!(target: "ColorParser::Hex", "`{}` expanded to {}", input, expanded);

    let byte = |i: usize| -> Result<f64, ColorParseError> {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .map(f64::from)
            .map_err(|_| ColorParseError::MalformedColorSyntax(input.to_string()))
    };

    Ok(ColorValue::from_raw(byte(0)?, byte(2)?, byte(4)?, byte(6)?))
}
