//! Timeline layout engine: turns an unordered set of usage records into
//! a deterministic, grouped, date-indexed grid.

use crate::models::grid::{CellState, DayColumn, GridModel, GridRow, Weekday};
use crate::models::record::UsageRecord;
use chrono::{Datelike, NaiveDate};

/// Sorts records by equipment id, then begin date, then end date.
/// An open-ended end (`None`) orders before any real end date. The sort
/// is stable, so fully-equal records keep their input order and rows of
/// the same equipment stay contiguous.
pub fn sort_records(records: &mut [UsageRecord]) {
    records.sort_by(|a, b| {
        a.equipment_id
            .cmp(&b.equipment_id)
            .then(a.begin_date.cmp(&b.begin_date))
            .then(a.end_date.cmp(&b.end_date))
    });
}

/// Smallest begin date and largest effective end date over all records.
/// An open-ended record contributes its own begin date, so an unknown
/// end never widens the visible range.
pub fn date_period(records: &[UsageRecord]) -> Option<(NaiveDate, NaiveDate)> {
    let first = records.first()?;
    let mut min_date = first.begin_date;
    let mut max_date = first.effective_end();

    for r in records {
        if r.begin_date < min_date {
            min_date = r.begin_date;
        }
        let end = r.effective_end();
        if end > max_date {
            max_date = end;
        }
    }

    Some((min_date, max_date))
}

/// One column per calendar day from `min_date` to `max_date` inclusive.
pub fn day_columns(min_date: NaiveDate, max_date: NaiveDate) -> Vec<DayColumn> {
    days_between(min_date, max_date)
        .map(|d| DayColumn {
            day_of_month: format!("{:02}", d.day()),
            weekday: Weekday::from_date(d),
        })
        .collect()
}

/// Inclusive calendar-day iterator. Steps by calendar succession rather
/// than fixed 24h increments; yields nothing when `max_date < min_date`.
fn days_between(min_date: NaiveDate, max_date: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let mut next = Some(min_date);
    std::iter::from_fn(move || {
        let d = next?;
        if d > max_date {
            return None;
        }
        next = d.succ_opt();
        Some(d)
    })
}

fn cell_state(record: &UsageRecord, day: NaiveDate) -> CellState {
    if day < record.begin_date {
        return CellState::Empty;
    }
    match record.end_date {
        None => CellState::OpenEnded,
        Some(end) if day <= end => CellState::Occupied,
        Some(_) => CellState::Empty,
    }
}

/// Computes the full timeline grid for an unordered set of records.
///
/// Pure and deterministic: identical input (order included) always
/// yields an identical grid. Empty input yields an empty grid. Records
/// with an inverted date span are not rejected; they simply lay out with
/// an empty occupied span.
pub fn compute_grid(records: &[UsageRecord]) -> GridModel {
    let mut sorted = records.to_vec();
    sort_records(&mut sorted);

    let Some((min_date, max_date)) = date_period(&sorted) else {
        return GridModel::default();
    };

    let days = day_columns(min_date, max_date);

    let mut rows = Vec::with_capacity(sorted.len());
    let mut prev_id: Option<&str> = None;
    for record in &sorted {
        let group_start = prev_id != Some(record.equipment_id.as_str());
        let cells = days_between(min_date, max_date)
            .map(|d| cell_state(record, d))
            .collect();
        rows.push(GridRow {
            group_key: record.equipment_id.clone(),
            label: record.user.clone(),
            group_start,
            cells,
        });
        prev_id = Some(record.equipment_id.as_str());
    }

    GridModel { days, rows }
}
