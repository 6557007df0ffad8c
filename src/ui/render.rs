//! Plain-text rendering of the calculator.
//!
//! Renders the readout as a display panel (last expression above, value
//! right-aligned below) and the keypad grid with the active operator
//! bracketed.

use crate::calculator::{Digit, FunctionKey, Key, Operator, group_thousands};
use crate::readout::Readout;

const CELL_WIDTH: usize = 6;

/// Keypad layout, top row first. `None` cells are spanned by the wide `0`.
const KEYPAD: [[Option<Key>; 4]; 5] = {
    use FunctionKey::*;
    use Operator::*;
    [
        [
            Some(Key::Function(Clear)),
            Some(Key::Function(Negative)),
            Some(Key::Operator(Remainder)),
            Some(Key::Operator(Divide)),
        ],
        [digit(7), digit(8), digit(9), Some(Key::Operator(Multiply))],
        [digit(4), digit(5), digit(6), Some(Key::Operator(Subtract))],
        [digit(1), digit(2), digit(3), Some(Key::Operator(Add))],
        [
            digit(0),
            None,
            Some(Key::Function(Dot)),
            Some(Key::Function(Equal)),
        ],
    ]
};

const fn digit(value: u8) -> Option<Key> {
    Some(Key::Digit(Digit::ALL[value as usize]))
}

/// Render the display panel.
///
/// The first line holds the last evaluated expression (blank if none), the
/// second the display right-aligned to `width`. Error results are prefixed
/// with `!`.
pub fn render_display(readout: &Readout, width: usize, group: bool) -> String {
    let expression = readout.expression.as_deref().unwrap_or("");

    let value = if group {
        group_thousands(&readout.display)
    } else {
        readout.display.clone()
    };
    let value = if readout.is_error {
        format!("! {value}")
    } else {
        value
    };

    format!("{expression:>width$}\n{value:>width$}")
}

/// Render the keypad grid, bracketing the highlighted operator.
pub fn render_keypad(highlight: Option<Operator>) -> String {
    KEYPAD
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Some(key) => render_key(*key, highlight),
                    None => " ".repeat(CELL_WIDTH),
                })
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_key(key: Key, highlight: Option<Operator>) -> String {
    let label = match key {
        Key::Operator(op) if highlight == Some(op) => format!("[{key}]"),
        _ => format!(" {key} "),
    };
    format!("{label:<width$}", width = CELL_WIDTH)
}
