//! The keypad state machine.
//!
//! The display is the single source of truth for whatever is being typed:
//! digit, sign and decimal point keys all edit the display and then copy it
//! into the operand currently being entered. Operators and `=` evaluate the
//! pending operation without operator precedence.

use tracing::{debug, warn};

use super::evaluation::{CalcResult, ResultFormat, evaluate};
use super::keys::{Digit, FunctionKey, Key, Operator};
use crate::readout::Readout;

const INITIAL_DISPLAY: &str = "0";
const NEGATIVE_ZERO: &str = "-0";

/// A four-function calculator driven by key presses.
#[derive(Clone, Debug)]
pub struct Calculator {
    display: String,
    first_operand: String,
    second_operand: String,
    operator: Option<Operator>,
    highlight: Option<Operator>,
    last_result: Option<CalcResult>,
    format: ResultFormat,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_format(ResultFormat::default())
    }

    /// Create a calculator that formats results with `format`.
    pub fn with_format(format: ResultFormat) -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            first_operand: String::new(),
            second_operand: String::new(),
            operator: None,
            highlight: None,
            last_result: None,
            format,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Operand typed before the operator; empty if not set.
    pub fn first_operand(&self) -> &str {
        &self.first_operand
    }

    /// Operand typed after the operator; empty if not set.
    pub fn second_operand(&self) -> &str {
        &self.second_operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Operator key the renderer should highlight, if any.
    pub fn active_highlight(&self) -> Option<Operator> {
        self.highlight
    }

    pub fn last_result(&self) -> Option<&CalcResult> {
        self.last_result.as_ref()
    }

    /// Snapshot of everything a renderer needs.
    pub fn readout(&self) -> Readout {
        Readout::new(
            &self.display,
            self.highlight,
            self.last_result.as_ref().map(CalcResult::expression),
        )
    }

    /// Dispatch a key to its handler.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(digit) => self.enter_digit(digit),
            Key::Operator(op) => self.enter_operator(op),
            Key::Function(func) => self.enter_function(func),
        }
    }

    pub fn enter_digit(&mut self, digit: Digit) {
        let d = digit.as_char();

        if self.operator.is_none() {
            let updated = if self.display == INITIAL_DISPLAY {
                d.to_string()
            } else {
                append_digit(&self.display, d)
            };
            self.first_operand.clone_from(&updated);
            self.display = updated;
        } else {
            let updated = if self.second_operand.is_empty() {
                d.to_string()
            } else {
                append_digit(&self.display, d)
            };
            self.second_operand.clone_from(&updated);
            self.display = updated;
        }

        debug!(digit = %d, display = %self.display, "Digit entered");
    }

    /// Record `op` as the pending operator, first evaluating the previous
    /// operation if both of its operands are present.
    pub fn enter_operator(&mut self, op: Operator) {
        if !self.first_operand.is_empty() && !self.second_operand.is_empty() {
            self.evaluate();
        }

        self.operator = Some(op);
        self.highlight = Some(op);

        debug!(operator = %op, display = %self.display, "Operator entered");
    }

    pub fn enter_function(&mut self, func: FunctionKey) {
        match func {
            FunctionKey::Clear => self.clear(),
            FunctionKey::Negative => self.toggle_sign(),
            FunctionKey::Dot => self.insert_dot(),
            FunctionKey::Equal => {
                self.evaluate();
                self.highlight = None;
            }
        }

        debug!(function = %func, display = %self.display, "Function entered");
    }

    fn clear(&mut self) {
        *self = Self::with_format(self.format);
    }

    fn toggle_sign(&mut self) {
        if self.starting_second_operand() {
            self.display = NEGATIVE_ZERO.to_string();
        } else if let Some(unsigned) = self.display.strip_prefix('-') {
            self.display = unsigned.to_string();
        } else {
            self.display.insert(0, '-');
        }
        self.sync_active_operand();
    }

    fn insert_dot(&mut self) {
        if self.starting_second_operand() {
            self.display = format!("{INITIAL_DISPLAY}.");
        } else if !self.display.contains('.') {
            self.display.push('.');
        } else {
            return;
        }
        self.sync_active_operand();
    }

    /// An operator is pending but nothing has been typed after it yet, so the
    /// display still shows the first operand or the last result.
    ///
    /// In this state Negative and Dot start a fresh second operand (`-0`,
    /// `0.`) instead of toggling the sign of or appending a point to the
    /// shown value, which belongs to the first operand.
    fn starting_second_operand(&self) -> bool {
        self.operator.is_some() && self.second_operand.is_empty()
    }

    fn sync_active_operand(&mut self) {
        if self.operator.is_none() {
            self.first_operand.clone_from(&self.display);
        } else {
            self.second_operand.clone_from(&self.display);
        }
    }

    fn evaluate(&mut self) {
        let Some(op) = self.operator else {
            return;
        };
        if self.first_operand.is_empty() || self.second_operand.is_empty() {
            return;
        }

        let Some(result) = evaluate(&self.first_operand, op, &self.second_operand, self.format)
        else {
            warn!(
                first = %self.first_operand,
                operator = %op,
                second = %self.second_operand,
                "Operand is not a number, skipping evaluation"
            );
            return;
        };

        debug!(
            expression = result.expression(),
            result = result.text(),
            value = result.value(),
            success = result.is_success(),
            "Evaluated"
        );

        self.display = result.text().to_string();
        self.first_operand = result.text().to_string();
        self.second_operand.clear();
        self.operator = None;
        self.last_result = Some(result);
    }
}

/// Append a digit to an entry, replacing a bare negative zero.
fn append_digit(entry: &str, d: char) -> String {
    if entry == NEGATIVE_ZERO {
        format!("-{d}")
    } else {
        format!("{entry}{d}")
    }
}
