//! Parsing and arithmetic for CSS-style canvas colors.
//!
//! ```
//! use canvas_color::ColorValue;
//!
//! let c: ColorValue = "rgb(10, 20, 30)".parse().unwrap();
//! assert_eq!(c.hex(), "#0a141e");
//! assert_eq!(((c + 5.0) * 2.0).rgb_string(), "rgb(30 50 70)");
//! ```

pub mod color;

pub use color::{ColorParseError, ColorSource, ColorValue, RgbaChannels};
