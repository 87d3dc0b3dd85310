//! Output model of the timeline layout engine.

use chrono::{Datelike, NaiveDate};

/// Two-letter weekday labels, week starting Sunday (index 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Su,
    Mo,
    Tu,
    We,
    Th,
    Fr,
    Sa,
}

impl Weekday {
    pub fn from_date(d: NaiveDate) -> Self {
        match d.weekday().num_days_from_sunday() {
            0 => Weekday::Su,
            1 => Weekday::Mo,
            2 => Weekday::Tu,
            3 => Weekday::We,
            4 => Weekday::Th,
            5 => Weekday::Fr,
            _ => Weekday::Sa,
        }
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            Weekday::Su => "Su",
            Weekday::Mo => "Mo",
            Weekday::Tu => "Tu",
            Weekday::We => "We",
            Weekday::Th => "Th",
            Weekday::Fr => "Fr",
            Weekday::Sa => "Sa",
        }
    }
}

/// Occupancy state of a single day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Occupied,
    OpenEnded,
    Empty,
}

/// One calendar-day column of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayColumn {
    pub day_of_month: String, // two digits, zero-padded
    pub weekday: Weekday,
}

/// One usage interval laid out against the day columns.
/// `cells` always has the same length as `GridModel::days`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub group_key: String,
    pub label: String,
    pub group_start: bool, // a separator precedes this row
    pub cells: Vec<CellState>,
}

/// The computed timeline grid. Recomputed from scratch on every call,
/// no caching or incremental update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridModel {
    pub days: Vec<DayColumn>,
    pub rows: Vec<GridRow>,
}
