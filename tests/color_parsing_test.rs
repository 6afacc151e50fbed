use canvas_color::color::Hsl;
use canvas_color::{ColorParseError, ColorValue};

fn channels(input: &str) -> [f64; 4] {
    let c = ColorValue::parse(input).unwrap_or_else(|e| panic!("`{input}`: {e}"));
    [c.red, c.green, c.blue, c.alpha]
}

#[test]
fn hex_six_digits_round_trip() {
    for s in ["#000000", "#ffffff", "#0a141e", "#7f00ff", "#c0ffee"] {
        assert_eq!(ColorValue::parse(s).unwrap().hex(), s);
    }
    // upper-case input comes back lower-cased
    assert_eq!(ColorValue::parse("#C0FFEE").unwrap().hex(), "#c0ffee");
}

#[test]
fn hex_short_form_expands() {
    let c = ColorValue::parse("#abc").unwrap();
    assert_eq!(c.hex(), "#aabbcc");
    assert_eq!(c.alpha, 255.0);
}

#[test]
fn hex_with_alpha_round_trip() {
    assert_eq!(
        ColorValue::parse("#aabbccdd").unwrap().hex_with_alpha(),
        "#aabbccdd"
    );
    assert_eq!(ColorValue::parse("#abcd").unwrap().hex_with_alpha(), "#aabbccdd");
}

#[test]
fn hex_zero_x_prefix() {
    assert_eq!(channels("0x336699"), [51.0, 102.0, 153.0, 255.0]);
}

#[test]
fn rgb_space_separated() {
    assert_eq!(channels("rgb(10 20 30)"), [10.0, 20.0, 30.0, 255.0]);
}

#[test]
fn rgb_percentages_are_scaled() {
    let [r, g, b, a] = channels("rgb(50% 0% 100%)");
    assert!(r == 127.0 || r == 128.0, "red was {r}");
    assert_eq!(g, 0.0);
    assert_eq!(b, 255.0);
    assert_eq!(a, 255.0);
}

#[test]
fn rgb_legacy_commas_match_modern_syntax() {
    assert_eq!(channels("rgb(10, 20, 30)"), channels("rgb(10 20 30)"));
    assert_eq!(channels("rgba(10,20,30,50%)"), channels("rgba(10 20 30 50%)"));
}

#[test]
fn rgba_alpha_forms() {
    // percentage alpha is mapped to 0–255
    assert_eq!(channels("rgba(1, 2, 3, 50%)"), [1.0, 2.0, 3.0, 128.0]);
    // bare alpha is already on the channel scale
    assert_eq!(channels("rgba(1 2 3 64)"), [1.0, 2.0, 3.0, 64.0]);
    // modern slash separator
    assert_eq!(channels("rgb(1 2 3 / 0%)"), [1.0, 2.0, 3.0, 0.0]);
}

#[test]
fn rgb_channels_are_rounded_but_not_clamped() {
    assert_eq!(channels("rgb(10.4 10.5 300)"), [10.0, 11.0, 300.0, 255.0]);
    assert_eq!(channels("rgb(-20 0 0)"), [-20.0, 0.0, 0.0, 255.0]);
}

#[test]
fn missing_components_are_padded() {
    // trailing alpha defaults to opaque, leading channels to zero
    assert_eq!(channels("rgb(10 20)"), [0.0, 10.0, 20.0, 255.0]);
    assert_eq!(channels("rgb(10)"), [0.0, 0.0, 10.0, 255.0]);
}

#[test]
fn function_names_are_case_insensitive() {
    assert_eq!(channels("RGB(10 20 30)"), [10.0, 20.0, 30.0, 255.0]);
    assert_eq!(channels("HSL(0 100% 50%)"), channels("hsl(0 100% 50%)"));
}

#[test]
fn hsl_primaries() {
    assert_eq!(channels("hsl(0 100% 50%)"), [255.0, 0.0, 0.0, 255.0]);
    assert_eq!(channels("hsl(120, 100%, 50%)"), [0.0, 255.0, 0.0, 255.0]);
    assert_eq!(channels("hsl(240deg 100% 50%)"), [0.0, 0.0, 255.0, 255.0]);
}

#[test]
fn hsl_gray_uses_raw_lightness() {
    let [r, g, b, a] = channels("hsl(0 0% 50%)");
    assert_eq!(r, g);
    assert_eq!(g, b);
    assert_eq!(r, 50.0);
    assert_eq!(a, 255.0);
}

#[test]
fn hsla_alpha_is_not_rounded() {
    assert_eq!(channels("hsla(120, 100%, 50%, 50%)"), [0.0, 255.0, 0.0, 127.5]);
}

#[test]
fn hsl_hue_units() {
    // 50% of a full turn
    assert_eq!(channels("hsl(50% 100% 50%)"), [0.0, 255.0, 255.0, 255.0]);
    // 3rad = 172deg
    assert_eq!(channels("hsl(3rad 100% 50%)"), [0.0, 255.0, 221.0, 255.0]);
    assert_eq!(channels("hsl(1turn 100% 50%)"), channels("hsl(0 100% 50%)"));
    // only the integer part of a turn counts
    assert_eq!(channels("hsl(0.5turn 100% 50%)"), channels("hsl(0 100% 50%)"));
}

#[test]
fn hsl_hue_wraps() {
    assert_eq!(channels("hsl(480 100% 50%)"), channels("hsl(120 100% 50%)"));
    assert_eq!(channels("hsl(-120 100% 50%)"), channels("hsl(240 100% 50%)"));
}

#[test]
fn hsv_gray() {
    assert_eq!(channels("hsv(0 0% 50%)"), [50.0, 50.0, 50.0, 255.0]);
    assert_eq!(channels("hsb(200, 0%, 75%)"), [75.0, 75.0, 75.0, 255.0]);
}

#[test]
fn hsv_zero_value_is_gray_not_nan() {
    let [r, g, b, a] = channels("hsva(0 100% 0% 100%)");
    assert_eq!([r, g, b, a], [0.0, 0.0, 0.0, 255.0]);
}

#[test]
fn hsv_keeps_legacy_unclamped_shape() {
    // saturated hsv() reproduces the historical arithmetic, far out of gamut
    let [r, g, b, _] = channels("hsv(0 100% 100%)");
    assert!(r > 255.0);
    assert!(g < 0.0);
    assert_eq!(g, b);
}

#[test]
fn hsv_fractional_hue_is_truncated_after_scaling() {
    // 0.5 * 360 = 180 degrees, not trunc(0.5) * 360 = 0
    let reshaped = Hsl::from_legacy_hsv(0.0, 50.0, 50.0);
    let [r, g, b] = Hsl { hue: 180.0, ..reshaped }.to_rgb();
    assert_eq!(channels("hsv(0.5 50% 50%)"), [r, g, b, 255.0]);
    assert_ne!(channels("hsv(0.5 50% 50%)"), channels("hsv(0 50% 50%)"));

    // 1.1% -> 3.96 * 360 = 1425.6 -> 1425 -> 345 degrees
    let [r, g, b] = Hsl { hue: 345.0, ..reshaped }.to_rgb();
    assert_eq!(channels("hsv(1.1% 50% 50%)"), [r, g, b, 255.0]);
    assert_ne!(channels("hsv(1.1% 50% 50%)"), channels("hsv(0 50% 50%)"));
}

#[test]
fn unrecognized_syntax_is_an_error() {
    assert_eq!(
        ColorValue::parse("red"),
        Err(ColorParseError::UnrecognizedSyntax("red".into()))
    );
    assert_eq!(ColorValue::parse(""), Err(ColorParseError::Empty));
    assert!(matches!(
        "cmyk(0 0 0 0)".parse::<ColorValue>(),
        Err(ColorParseError::UnrecognizedSyntax(_))
    ));
}

#[test]
fn malformed_functional_syntax_is_an_error() {
    assert_eq!(
        ColorValue::parse("rgb()"),
        Err(ColorParseError::MalformedColorSyntax("rgb()".into()))
    );
    assert_eq!(
        ColorValue::parse("rgb(1 2 3 4 5)"),
        Err(ColorParseError::TooManyComponents {
            input: "rgb(1 2 3 4 5)".into(),
            count: 5
        })
    );
    assert_eq!(
        ColorValue::parse("rgb(1 two 3)"),
        Err(ColorParseError::InvalidComponent("two".into()))
    );
}

#[test]
fn unexpected_units_are_errors() {
    assert!(matches!(
        ColorValue::parse("rgb(10px 0 0)"),
        Err(ColorParseError::UnexpectedUnit { ref unit, .. }) if unit == "px"
    ));
    assert!(matches!(
        ColorValue::parse("hsl(100grad 50% 50%)"),
        Err(ColorParseError::UnexpectedUnit { ref unit, .. }) if unit == "grad"
    ));
}

#[test]
fn invalid_hex_is_an_error() {
    assert!(matches!(
        ColorValue::parse("#zzzzzz"),
        Err(ColorParseError::InvalidHexDigit { digit: 'z', .. })
    ));
}
