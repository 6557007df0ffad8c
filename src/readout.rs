//! Readout: what a renderer shows for the current calculator state.

use serde::Serialize;

use crate::calculator::Operator;

/// How large the display text should be drawn.
///
/// Long entries are drawn smaller so they fit on one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplaySize {
    Large,
    Medium,
    Small,
}

impl DisplaySize {
    pub fn for_text(text: &str) -> Self {
        match text.chars().count() {
            n if n > 12 => Self::Small,
            n if n > 8 => Self::Medium,
            _ => Self::Large,
        }
    }
}

/// Snapshot of the calculator for rendering.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Readout {
    /// The display text, exactly as the calculator holds it.
    pub display: String,
    /// Operator key to highlight.
    pub highlight: Option<Operator>,
    pub size: DisplaySize,
    /// The display shows infinity, NaN or something that is not a number.
    pub is_error: bool,
    /// Expression of the last evaluation, e.g. `5 + 3`.
    pub expression: Option<String>,
}

impl Readout {
    pub fn new(display: &str, highlight: Option<Operator>, expression: Option<&str>) -> Self {
        Self {
            display: display.to_string(),
            highlight,
            size: DisplaySize::for_text(display),
            is_error: !display.parse::<f64>().is_ok_and(f64::is_finite),
            expression: expression.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_classes() {
        assert_eq!(DisplaySize::for_text("12345678"), DisplaySize::Large);
        assert_eq!(DisplaySize::for_text("123456789"), DisplaySize::Medium);
        assert_eq!(DisplaySize::for_text("123456789012"), DisplaySize::Medium);
        assert_eq!(DisplaySize::for_text("1234567890123"), DisplaySize::Small);
    }

    #[test]
    fn test_error_detection() {
        assert!(!Readout::new("8.0", None, None).is_error);
        assert!(!Readout::new("-0", None, None).is_error);
        assert!(!Readout::new("3.", None, None).is_error);
        assert!(Readout::new("Infinity", None, None).is_error);
        assert!(Readout::new("NaN", None, None).is_error);
        assert!(Readout::new("Infinity.", None, None).is_error);
    }

    #[test]
    fn test_json_shape() {
        let readout = Readout::new("8.0", Some(Operator::Add), Some("5 + 3"));
        let json = serde_json::to_value(&readout).unwrap();
        assert_eq!(json["display"], "8.0");
        assert_eq!(json["highlight"], "add");
        assert_eq!(json["size"], "large");
        assert_eq!(json["is_error"], false);
        assert_eq!(json["expression"], "5 + 3");
    }
}
