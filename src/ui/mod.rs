pub mod render;

pub use render::{render_display, render_keypad};
