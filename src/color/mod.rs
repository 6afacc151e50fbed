pub mod error;
pub mod functional;
pub mod hex;
pub mod model;
pub mod source;
pub mod syntax;
pub mod value;

pub use error::ColorParseError;
pub use functional::ColorFunction;
pub use model::Hsl;
pub use source::{ColorSource, RgbaChannels};
pub use syntax::{Component, ComponentLexer};
pub use value::ColorValue;
