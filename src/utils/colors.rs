/// ANSI color helper utilities for terminal output.
use crate::models::record::CellState;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

pub fn color_for_state(state: CellState) -> &'static str {
    match state {
        CellState::Pending => GREY,
        CellState::Success => GREEN,
        CellState::Fail => RED,
    }
}

/// Rate color:
/// \>=80 → green
/// \>=50 → yellow
/// else → red
pub fn color_for_rate(rate: u32) -> &'static str {
    if rate >= 80 {
        GREEN
    } else if rate >= 50 {
        YELLOW
    } else {
        RED
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Grey out zero counters, leave the rest untouched.
pub fn colorize_count(value: u32, color: &str) -> String {
    if value == 0 {
        format!("{GREY}{value}{RESET}")
    } else {
        format!("{color}{value}{RESET}")
    }
}
