//! Lexing of functional color notation: `rgb(10 20 30)`, `hsl(120deg 50% 50%)`...

use std::fmt;

use super::error::ColorParseError;

/// One whitespace-delimited component inside a color function.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Number(f64),            // 10, 0.5, -3
    Percentage(f64),        // 50%
    Dimension(f64, String), // 120deg, 2rad, 1turn
}

impl Component {
    /// The numeric part, ignoring any unit.
    pub fn value(&self) -> f64 {
        match *self {
            Component::Number(v) | Component::Percentage(v) | Component::Dimension(v, _) => v,
        }
    }

    /// Integer part of the numeric value (the leading integer of the source text).
    pub fn integer(&self) -> f64 {
        self.value().trunc()
    }

    /// Value of a component that may carry a `%` but no other unit.
    pub fn plain_or_percent(&self) -> Result<f64, ColorParseError> {
        match self {
            Component::Number(v) | Component::Percentage(v) => Ok(*v),
            Component::Dimension(_, unit) => Err(ColorParseError::UnexpectedUnit {
                component: self.to_string(),
                unit: unit.clone(),
            }),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Number(v) => write!(f, "{}", v),
            Component::Percentage(v) => write!(f, "{}%", v),
            Component::Dimension(v, unit) => write!(f, "{}{}", v, unit),
        }
    }
}

/// Turn legacy comma separators into single spaces: `rgb(1, 2,3)` -> `rgb(1 2 3)`.
pub fn normalize_commas(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.trim().chars().peekable();

    while let Some(c) = chars.next() {
        if c == ',' {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            out.push(' ');
        } else {
            out.push(c);
        }
    }

    out
}

#[derive(Debug, PartialEq, Clone, Copy)]
enum LexerState {
    Data,
    Number,
    Unit,
    Invalid,
}

/// Splits the body of a color function into [`Component`]s.
///
/// Components are separated by whitespace; a lone `/` (the modern alpha
/// separator) counts as whitespace too.
pub struct ComponentLexer<'a> {
    input: &'a str,
    pos: usize,
    start: usize,
    number: String,
    unit: String,
    state: LexerState,
    emitted: Option<Result<Component, ColorParseError>>,
}

impl<'a> ComponentLexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            number: String::new(),
            unit: String::new(),
            state: LexerState::Data,
            emitted: None,
        }
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.input[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn is_separator(c: char) -> bool {
        c.is_whitespace() || c == '/'
    }

    fn state_data(&mut self, c: char) {
        if Self::is_separator(c) {
            return;
        }

        self.start = self.pos - c.len_utf8();
        if c.is_ascii_digit() || matches!(c, '.' | '+' | '-') {
            self.number.push(c);
            self.state = LexerState::Number;
        } else {
            self.state = LexerState::Invalid;
        }
    }

    fn state_number(&mut self, c: char, end: usize) {
        if c.is_ascii_digit() || c == '.' {
            self.number.push(c);
            return;
        }

        // exponent: only when a digit (optionally signed) follows
        if matches!(c, 'e' | 'E') {
            let rest = &self.input[self.pos..];
            let signed_digit = rest.starts_with(&['+', '-'][..])
                && rest[1..].starts_with(|d: char| d.is_ascii_digit());
            if rest.starts_with(|d: char| d.is_ascii_digit()) || signed_digit {
                self.number.push(c);
                if signed_digit {
                    if let Some(sign) = self.next_char() {
                        self.number.push(sign);
                    }
                }
                return;
            }
        }

        if Self::is_separator(c) {
            self.emit_word(end);
        } else {
            self.unit.push(c);
            self.state = LexerState::Unit;
        }
    }

    fn state_unit(&mut self, c: char, end: usize) {
        if Self::is_separator(c) {
            self.emit_word(end);
        } else {
            self.unit.push(c);
        }
    }

    fn state_invalid(&mut self, c: char, end: usize) {
        if Self::is_separator(c) {
            self.emit_invalid(end);
        }
    }

    fn emit_invalid(&mut self, end: usize) {
        let word = self.input[self.start..end].to_string();
        self.reset();
        self.emitted = Some(Err(ColorParseError::InvalidComponent(word)));
    }

    /// Finish the component spanning `start..end`.
    fn emit_word(&mut self, end: usize) {
        let word = &self.input[self.start..end];

        let component = match self.number.parse::<f64>() {
            Ok(value) => match self.unit.as_str() {
                "" => Ok(Component::Number(value)),
                "%" => Ok(Component::Percentage(value)),
                unit => Ok(Component::Dimension(value, unit.to_ascii_lowercase())),
            },
            Err(_) => Err(ColorParseError::InvalidComponent(word.to_string())),
        };

        self.reset();
        self.emitted = Some(component);
    }

    fn reset(&mut self) {
        self.number.clear();
        self.unit.clear();
        self.state = LexerState::Data;
    }
}

impl Iterator for ComponentLexer<'_> {
    type Item = Result<Component, ColorParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(c) = self.next_char() {
            let end = self.pos - c.len_utf8();

            match self.state {
                LexerState::Data => self.state_data(c),
                LexerState::Number => self.state_number(c, end),
                LexerState::Unit => self.state_unit(c, end),
                LexerState::Invalid => self.state_invalid(c, end),
            }

            if let Some(item) = self.emitted.take() {
                log::debug!(target: "ColorParser::Lexer", "Lexed component: {:?}", item);
                return Some(item);
            }
        }

        // end of input flushes a pending component
        let end = self.input.len();
        match self.state {
            LexerState::Data => {}
            LexerState::Number | LexerState::Unit => self.emit_word(end),
            LexerState::Invalid => self.emit_invalid(end),
        }

        let item = self.emitted.take();
        if let Some(ref item) = item {
            log::debug!(target: "ColorParser::Lexer", "Lexed component: {:?}", item);
        }
        item
    }
}
