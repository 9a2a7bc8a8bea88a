//! ANSI color helpers for terminal output.
//!
//! Coloring is skipped when `NO_COLOR` is set to a non-empty value.

use ansi_term::Colour;
use chrono::Duration;
use std::env;

pub const DAY: Colour = Colour::Blue;
pub const TIME: Colour = Colour::Yellow;
pub const DURATION: Colour = Colour::Cyan;
pub const RUNNING: Colour = Colour::Purple;
pub const UNDEFINED: Colour = Colour::Fixed(8);

pub fn colors_enabled() -> bool {
    !env::var("NO_COLOR").is_ok_and(|v| !v.is_empty())
}

pub fn paint(colour: Colour, text: &str) -> String {
    if colors_enabled() {
        colour.paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Delta color:
/// \>0 → green
/// \<0 → red
/// 0 → plain
pub fn color_for_delta(value: Duration) -> Option<Colour> {
    if value > Duration::zero() {
        Some(Colour::Green)
    } else if value < Duration::zero() {
        Some(Colour::Red)
    } else {
        None
    }
}

pub fn paint_delta(value: Duration, text: &str) -> String {
    match color_for_delta(value) {
        Some(c) => paint(c, text),
        None => text.to_string(),
    }
}
