//! Terminal renderer for the timeline grid.

use crate::config::Config;
use crate::models::grid::{CellState, GridModel};
use crate::utils::colors::{RESET, weekday_color};
use crate::utils::formatting::pad_display;

const NAME_COL_HEADER: &str = "User Name";

/// Cell glyphs, two characters each.
const GLYPH_OCCUPIED: &str = "**";
const GLYPH_OPEN_ENDED: &str = "??";
const GLYPH_EMPTY: &str = "  ";

/// Renders the grid as an ANSI-colored table: a day-of-month header, a
/// weekday sub-header, then one row per usage interval with a separator
/// line at every equipment boundary.
pub fn render(grid: &GridModel, cfg: &Config) -> String {
    let width = cfg.name_col_width;
    let mut out = String::new();

    // day-of-month header
    out.push_str(&pad_display(NAME_COL_HEADER, width));
    out.push_str("| ");
    for day in &grid.days {
        let color = weekday_color(day.weekday);
        out.push_str(&format!("{color}{}{RESET} ", day.day_of_month));
    }
    out.push('\n');

    // weekday sub-header
    out.push_str(&pad_display("", width));
    out.push_str("| ");
    for day in &grid.days {
        let color = weekday_color(day.weekday);
        out.push_str(&format!("{color}{}{RESET} ", day.weekday.abbrev()));
    }
    out.push('\n');

    let separator = separator_line(width, grid.days.len(), &cfg.separator_char);

    for row in &grid.rows {
        if row.group_start {
            out.push_str(&separator);
            out.push('\n');
        }

        out.push_str(&pad_display(&row.label, width));
        out.push_str("| ");
        for (cell, day) in row.cells.iter().zip(&grid.days) {
            let glyph = match cell {
                CellState::Occupied => GLYPH_OCCUPIED,
                CellState::OpenEnded => GLYPH_OPEN_ENDED,
                CellState::Empty => GLYPH_EMPTY,
            };
            let color = weekday_color(day.weekday);
            out.push_str(&format!("{color}{glyph}{RESET} "));
        }
        out.push('\n');
    }

    out
}

fn separator_line(name_width: usize, day_count: usize, sep_char: &str) -> String {
    let sep = if sep_char.is_empty() { "-" } else { sep_char };
    format!("{}+-{}", sep.repeat(name_width), sep.repeat(3 * day_count))
}
