/// Reasons a color string can be rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorParseError {
    // Classification
    Empty,
    UnrecognizedSyntax(String),

    // Hex
    InvalidHexDigit { input: String, digit: char },

    // Functional notation
    MalformedColorSyntax(String),
    TooManyComponents { input: String, count: usize },
    InvalidComponent(String),
    UnexpectedUnit { component: String, unit: String },
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ColorParseError::*;
        match self {
            Empty => write!(f, "empty color string"),
            UnrecognizedSyntax(input) => write!(f, "unrecognized color syntax: `{input}`"),

            InvalidHexDigit { input, digit } => {
                write!(f, "invalid hex digit '{digit}' in `{input}`")
            }

            MalformedColorSyntax(input) => write!(f, "malformed color syntax: `{input}`"),
            TooManyComponents { input, count } => {
                write!(f, "expected at most 4 components, found {count} in `{input}`")
            }
            InvalidComponent(component) => write!(f, "invalid color component `{component}`"),
            UnexpectedUnit { component, unit } => {
                write!(f, "unexpected unit `{unit}` in component `{component}`")
            }
        }
    }
}

impl std::error::Error for ColorParseError {}
