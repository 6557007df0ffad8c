//! padcalc: a four-function keypad calculator.
//!
//! The [`calculator::Calculator`] state machine takes digit, operator and
//! function key presses and keeps a display string. Renderers poll
//! [`Calculator::readout`](calculator::Calculator::readout) for what to draw.

pub mod calculator;
pub mod config;
pub mod error;
pub mod readout;
pub mod ui;

pub use calculator::{Calculator, Key, parse_key_sequence};
pub use readout::Readout;
