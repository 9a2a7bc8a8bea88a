use crate::utils::colors::colors_enabled;
use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_GREEN: &str = "\x1b[32m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_OK: &str = "✅";
const ICON_ERR: &str = "❌";

fn prefix(color: &str, icon: &str) -> String {
    if colors_enabled() {
        format!("{}{}{} {}", color, BOLD, icon, RESET)
    } else {
        format!("{} ", icon)
    }
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}", prefix(FG_GREEN, ICON_OK), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}", prefix(FG_RED, ICON_ERR), msg);
}
