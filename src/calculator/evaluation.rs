//! Operator application and result formatting.
//!
//! Operands arrive as the text the user typed. Evaluation parses them as
//! `f64`, applies the operator with plain IEEE arithmetic and formats the
//! result back into text the state machine can keep typing onto.

use clap::ValueEnum;
use serde::Deserialize;

use super::keys::Operator;

/// How results are turned back into display text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResultFormat {
    /// Shortest round-trip digits, always with a fractional part (`8.0`),
    /// scientific notation outside `[1e-3, 1e7)` (`1.0E7`).
    #[default]
    Canonical,
    /// Shortest round-trip digits without exponent or forced fraction
    /// (`8`, `0.30000000000000004`).
    Compact,
}

/// Result of evaluating a pending operation.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcResult {
    /// The operation produced a finite number.
    Success {
        /// The evaluated expression, e.g. `5 + 3`.
        expression: String,
        value: f64,
        /// Formatted for the display.
        text: String,
    },
    /// The operation produced infinity or NaN (division by zero and friends).
    Error {
        expression: String,
        value: f64,
        /// `Infinity`, `-Infinity` or `NaN`.
        text: String,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Self::Success { value, .. } | Self::Error { value, .. } => *value,
        }
    }

    /// Get the display text of the result.
    pub fn text(&self) -> &str {
        match self {
            Self::Success { text, .. } | Self::Error { text, .. } => text,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the clipboard string (only for successful results).
    pub fn clipboard(&self) -> Option<&str> {
        match self {
            Self::Success { text, .. } => Some(text),
            Self::Error { .. } => None,
        }
    }
}

impl Operator {
    /// Apply the operator. `%` is the truncated remainder, so the result
    /// takes the sign of `lhs`.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
            Self::Remainder => lhs % rhs,
        }
    }
}

/// Evaluate `first op second`.
///
/// Returns `None` if either operand is not a number.
pub fn evaluate(
    first: &str,
    op: Operator,
    second: &str,
    format: ResultFormat,
) -> Option<CalcResult> {
    let expression = format!("{first} {op} {second}");

    let (Ok(lhs), Ok(rhs)) = (first.parse::<f64>(), second.parse::<f64>()) else {
        return None;
    };

    let value = op.apply(lhs, rhs);
    let text = format_result(value, format);

    Some(if value.is_finite() {
        CalcResult::Success {
            expression,
            value,
            text,
        }
    } else {
        CalcResult::Error {
            expression,
            value,
            text,
        }
    })
}

/// Format a result for the display.
pub fn format_result(value: f64, format: ResultFormat) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }

    match format {
        ResultFormat::Canonical => format_canonical(value),
        ResultFormat::Compact => format_compact(value),
    }
}

fn format_canonical(value: f64) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let magnitude = value.abs();

    if magnitude == 0.0 {
        return format!("{sign}0.0");
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. `1.2345e3`.
    let scientific = format!("{:e}", magnitude);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|&c| c != '.').collect();

    let body = if (1e-3..1e7).contains(&magnitude) {
        if exponent >= 0 {
            let int_len = exponent as usize + 1;
            if digits.len() > int_len {
                format!("{}.{}", &digits[..int_len], &digits[int_len..])
            } else {
                format!("{}{}.0", digits, "0".repeat(int_len - digits.len()))
            }
        } else {
            format!("0.{}{}", "0".repeat((-exponent - 1) as usize), digits)
        }
    } else {
        let (lead, rest) = digits.split_at(1);
        let rest = if rest.is_empty() { "0" } else { rest };
        format!("{lead}.{rest}E{exponent}")
    };

    format!("{sign}{body}")
}

fn format_compact(value: f64) -> String {
    // Display never uses an exponent and keeps every significant digit, so
    // the text chains back into the next operation unchanged.
    format!("{value}")
}

/// Insert thousand separators into the integral part of a plain decimal.
///
/// Scientific notation and non-numeric text come back unchanged.
pub fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, rest) = match unsigned.find('.') {
        Some(pos) => unsigned.split_at(pos),
        None => (unsigned, ""),
    };

    if int_part.is_empty()
        || !int_part.chars().all(|c| c.is_ascii_digit())
        || rest.contains(['e', 'E'])
    {
        return text.to_string();
    }

    let mut result = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    let grouped: String = result.chars().rev().collect();
    format!("{sign}{grouped}{rest}")
}
