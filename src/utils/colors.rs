/// ANSI color helper utilities for terminal output.
use crate::models::grid::Weekday;

pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const BLUE: &str = "\x1b[34m";

/// Weekend highlighting: Saturday → blue, Sunday → red, other days
/// render in the default color.
pub fn weekday_color(w: Weekday) -> &'static str {
    match w {
        Weekday::Sa => BLUE,
        Weekday::Su => RED,
        _ => RESET,
    }
}
