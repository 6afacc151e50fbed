//! `rgb()`, `hsl()` and `hsv()` notation, legacy (comma) and modern (space) forms.

use std::f64::consts::PI;

use super::error::ColorParseError;
use super::model::{Hsl, percent_to_byte, round_half_up};
use super::syntax::{Component, ComponentLexer, normalize_commas};
use super::value::ColorValue;

/// Function families that can appear before the parenthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFunction {
    Rgb, // rgb, rgba
    Hsl, // hsl, hsla
    Hsv, // hsv, hsva, hsb, hsba
}

impl ColorFunction {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "rgb" | "rgba" => Some(ColorFunction::Rgb),
            "hsl" | "hsla" => Some(ColorFunction::Hsl),
            "hsv" | "hsva" | "hsb" | "hsba" => Some(ColorFunction::Hsv),
            _ => None,
        }
    }
}

/// Split `name(body)` into the function family and its body.
pub fn split_function(input: &str) -> Option<(ColorFunction, &str)> {
    let input = input.trim();
    let open = input.find('(')?;
    let body = input[open + 1..].strip_suffix(')')?;
    let function = ColorFunction::from_name(input[..open].trim_end())?;
    Some((function, body))
}

/// Parse a functional color string into channels.
pub fn parse_functional(input: &str) -> Result<ColorValue, ColorParseError> {
    let normalized = normalize_commas(input);
    let (function, body) = split_function(&normalized)
        .ok_or_else(|| ColorParseError::UnrecognizedSyntax(input.to_string()))?;

    let mut components = ComponentLexer::new(body).collect::<Result<Vec<_>, _>>()?;

    if components.is_empty() {
        return Err(ColorParseError::MalformedColorSyntax(input.to_string()));
    }
    if components.len() > 4 {
        return Err(ColorParseError::TooManyComponents {
            input: input.to_string(),
            count: components.len(),
        });
    }

    // missing trailing alpha is opaque, missing leading channels are zero
    if components.len() < 4 {
        components.push(Component::Percentage(100.0));
        while components.len() < 4 {
            components.insert(0, Component::Number(0.0));
        }
    }

    log::debug!(
        target: "ColorParser::Functional",
        "{:?} components: {:?}",
        function,
        components
    );

    match function {
        ColorFunction::Rgb => rgb_channels(&components),
        ColorFunction::Hsl | ColorFunction::Hsv => hue_channels(function, &components),
    }
}

fn rgb_channels(components: &[Component]) -> Result<ColorValue, ColorParseError> {
    let mut channels = [0.0; 4];
    for (channel, component) in channels.iter_mut().zip(components) {
        let value = match component {
            Component::Number(v) => *v,
            Component::Percentage(p) => percent_to_byte(*p),
            Component::Dimension(_, unit) => {
                return Err(ColorParseError::UnexpectedUnit {
                    component: component.to_string(),
                    unit: unit.clone(),
                });
            }
        };
        *channel = round_half_up(value);
    }

    let [red, green, blue, alpha] = channels;
    Ok(ColorValue::from_raw(red, green, blue, alpha))
}

/// Hue in degrees. Only the integer part of the number is used for
/// `deg`, `rad` and `turn`; `0.5turn` is therefore 0 degrees.
///
/// Unitless and `%` hues stay fractional for `hsv()`, which scales the hue
/// again and truncates afterwards.
fn hue_degrees(function: ColorFunction, component: &Component) -> Result<f64, ColorParseError> {
    let fractional = function == ColorFunction::Hsv;
    match component {
        Component::Number(v) if fractional => Ok(*v),
        Component::Number(_) => Ok(component.integer()),
        Component::Percentage(p) if fractional => Ok(p * 3.6),
        Component::Percentage(p) => Ok((p * 3.6).trunc()),
        Component::Dimension(_, unit) => match unit.as_str() {
            "deg" => Ok(component.integer()),
            "rad" => Ok(round_half_up(component.integer() * (180.0 / PI))),
            "turn" => Ok(round_half_up(component.integer() * 360.0)),
            _ => Err(ColorParseError::UnexpectedUnit {
                component: component.to_string(),
                unit: unit.clone(),
            }),
        },
    }
}

fn hue_channels(
    function: ColorFunction,
    components: &[Component],
) -> Result<ColorValue, ColorParseError> {
    let hue = hue_degrees(function, &components[0])?;
    let saturation = components[1].plain_or_percent()?;
    let lightness = components[2].plain_or_percent()?;
    let alpha = components[3].plain_or_percent()?;

    let hsl = match function {
        ColorFunction::Hsv => Hsl::from_legacy_hsv(hue, saturation, lightness),
        _ => Hsl::from_percentages(hue, saturation, lightness),
    };

    // grays carry the raw lightness/value number on every channel
    if hsl.is_achromatic() {
        return Ok(ColorValue::from_raw(lightness, lightness, lightness, 255.0));
    }

    let [red, green, blue] = hsl.to_rgb();
    Ok(ColorValue::from_raw(
        red,
        green,
        blue,
        percent_to_byte(alpha.trunc()),
    ))
}
