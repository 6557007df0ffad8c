//! Calculator module: the keypad state machine and its building blocks.
//!
//! This module provides functionality to:
//! - Parse key presses from text
//! - Drive the four-function state machine
//! - Evaluate and format results
//! - Copy results to the clipboard

mod clipboard;
mod evaluation;
mod keys;
mod machine;

pub use clipboard::copy_to_clipboard;
pub use evaluation::{CalcResult, ResultFormat, evaluate, format_result, group_thousands};
pub use keys::{Digit, FunctionKey, Key, Operator, parse_key_sequence};
pub use machine::Calculator;
