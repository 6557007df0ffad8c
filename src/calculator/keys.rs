//! Keypad keys and parsing of textual key sequences.
//!
//! Every key on the keypad is one of three closed types: a [`Digit`], an
//! [`Operator`] or a [`FunctionKey`]. Renderers that work with text (the CLI,
//! scripts) turn input into keys with [`parse_key_sequence`].

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::KeyError;

lazy_static! {
    /// One key token. Multi-character keys come first so `+/-` is not read
    /// as three keys and `AC` is not read as `A` followed by `C`.
    static ref KEY_TOKEN: Regex = Regex::new(r"(?i)\+/-|ac|\S").unwrap();
}

/// A single decimal digit, 0 through 9.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// All digits, indexed by value.
    pub const ALL: [Digit; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = KeyError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(KeyError::InvalidDigit(c))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

impl Operator {
    /// ASCII symbol, used in expressions and logs.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Remainder => '%',
        }
    }

    /// Label printed on the keypad.
    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Remainder => "%",
        }
    }
}

impl FromStr for Operator {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" | "x" | "X" | "×" => Ok(Self::Multiply),
            "/" | "÷" => Ok(Self::Divide),
            "%" => Ok(Self::Remainder),
            other => Err(KeyError::UnknownKey(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Keys that act on the calculator as a whole rather than on an operand pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FunctionKey {
    /// Reset everything (`AC`).
    Clear,
    /// Toggle the sign of the entry (`+/-`).
    Negative,
    /// Decimal point.
    Dot,
    Equal,
}

impl FunctionKey {
    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "AC",
            Self::Negative => "+/-",
            Self::Dot => ".",
            Self::Equal => "=",
        }
    }
}

impl FromStr for FunctionKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "." => Ok(Self::Dot),
            "=" => Ok(Self::Equal),
            "+/-" | "±" => Ok(Self::Negative),
            s if s.eq_ignore_ascii_case("n") => Ok(Self::Negative),
            s if s.eq_ignore_ascii_case("ac") || s.eq_ignore_ascii_case("c") => Ok(Self::Clear),
            other => Err(KeyError::UnknownKey(other.to_string())),
        }
    }
}

impl fmt::Display for FunctionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Any key on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Digit(Digit),
    Operator(Operator),
    Function(FunctionKey),
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Ok(digit) = Digit::try_from(c)
        {
            return Ok(Self::Digit(digit));
        }

        s.parse::<Operator>()
            .map(Self::Operator)
            .or_else(|_| s.parse::<FunctionKey>().map(Self::Function))
            .map_err(|_| KeyError::UnknownKey(s.to_string()))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => d.fmt(f),
            Self::Operator(op) => f.write_str(op.label()),
            Self::Function(func) => func.fmt(f),
        }
    }
}

/// Parse a line of text into keys, skipping whitespace.
///
/// Fails on the first token that is not a known key.
pub fn parse_key_sequence(input: &str) -> Result<Vec<Key>, KeyError> {
    KEY_TOKEN
        .find_iter(input)
        .map(|token| token.as_str().parse::<Key>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> Key {
        Key::Digit(Digit::new(d).unwrap())
    }

    #[test]
    fn test_digits() {
        assert_eq!(Digit::new(7).map(Digit::as_char), Some('7'));
        assert!(Digit::new(10).is_none());
        assert_eq!(Digit::try_from('0').map(Digit::value), Ok(0));
        assert_eq!(Digit::try_from('a'), Err(KeyError::InvalidDigit('a')));
    }

    #[test]
    fn test_simple_sequence() {
        let keys = parse_key_sequence("5+3=").unwrap();
        assert_eq!(
            keys,
            vec![
                digit(5),
                Key::Operator(Operator::Add),
                digit(3),
                Key::Function(FunctionKey::Equal),
            ]
        );
    }

    #[test]
    fn test_whitespace_ignored() {
        let spaced = parse_key_sequence(" 1 2 . 5 \t* 4 ").unwrap();
        let packed = parse_key_sequence("12.5*4").unwrap();
        assert_eq!(spaced, packed);
        assert_eq!(spaced.len(), 6);
    }

    #[test]
    fn test_operator_aliases() {
        for (token, op) in [
            ("x", Operator::Multiply),
            ("X", Operator::Multiply),
            ("×", Operator::Multiply),
            ("÷", Operator::Divide),
            ("%", Operator::Remainder),
            ("-", Operator::Subtract),
        ] {
            assert_eq!(token.parse::<Key>(), Ok(Key::Operator(op)), "token {token}");
        }
    }

    #[test]
    fn test_multi_character_keys_win() {
        let keys = parse_key_sequence("4+/-").unwrap();
        assert_eq!(keys, vec![digit(4), Key::Function(FunctionKey::Negative)]);

        let keys = parse_key_sequence("9 AC 1 ac").unwrap();
        assert_eq!(
            keys,
            vec![
                digit(9),
                Key::Function(FunctionKey::Clear),
                digit(1),
                Key::Function(FunctionKey::Clear),
            ]
        );
    }

    #[test]
    fn test_function_aliases() {
        assert_eq!("c".parse::<Key>(), Ok(Key::Function(FunctionKey::Clear)));
        assert_eq!("N".parse::<Key>(), Ok(Key::Function(FunctionKey::Negative)));
        assert_eq!("±".parse::<Key>(), Ok(Key::Function(FunctionKey::Negative)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert_eq!(
            parse_key_sequence("5 + q"),
            Err(KeyError::UnknownKey("q".to_string()))
        );
        assert_eq!(
            "(".parse::<Key>(),
            Err(KeyError::UnknownKey("(".to_string()))
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_key_sequence("   ").unwrap().is_empty());
    }

    #[test]
    fn test_display_uses_keypad_labels() {
        assert_eq!(Key::Operator(Operator::Divide).to_string(), "÷");
        assert_eq!(Operator::Divide.to_string(), "/");
        assert_eq!(Key::Function(FunctionKey::Clear).to_string(), "AC");
        assert_eq!(digit(3).to_string(), "3");
    }
}
