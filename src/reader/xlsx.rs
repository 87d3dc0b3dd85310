use crate::errors::{AppError, AppResult};
use crate::models::record::UsageRecord;
use calamine::{Data, DataType, Reader, Xlsx, open_workbook};
use chrono::NaiveDate;
use std::path::Path;

use super::Options;

/// 0-based index of the first data row in the workbook layout.
const FIRST_DATA_ROW: usize = 7;

/// Reads usage records from an XLSX workbook.
///
/// Sheet selection: the one named in the options, otherwise the first
/// sheet after sorting names descending. A row is a record iff column B
/// holds an equipment id. Columns: B equipment id, C user, D begin date,
/// E end date, F target user, G purpose, H notes.
pub(crate) fn from_excel(path: &Path, options: &Options) -> AppResult<Vec<UsageRecord>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let sheet = match &options.sheet {
        Some(name) if !name.is_empty() => name.clone(),
        _ => {
            let names = workbook.sheet_names().to_owned();
            pick_default_sheet(&names)
                .ok_or_else(|| AppError::NoSheets(path.display().to_string()))?
        }
    };

    let range = workbook.worksheet_range(&sheet)?;

    // the range is anchored at the first used cell, not at A1
    let (start_row, start_col) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let mut records = Vec::new();
    for (i, row) in range.rows().enumerate() {
        let sheet_row = start_row + i;
        if sheet_row < FIRST_DATA_ROW {
            continue;
        }

        let equipment_id = cell_string(row, start_col, 1);
        if equipment_id.is_empty() {
            continue;
        }

        let begin_date = cell_date(row, start_col, 3).ok_or_else(|| {
            AppError::InvalidDate(format!("{}: begin date on row {}", sheet, sheet_row + 1))
        })?;
        let end_date = cell_date(row, start_col, 4);

        records.push(UsageRecord {
            no: sheet_row + 1,
            equipment_id,
            user: cell_string(row, start_col, 2),
            begin_date,
            end_date,
            target_user: cell_string(row, start_col, 5),
            purpose: cell_string(row, start_col, 6),
            notes: cell_string(row, start_col, 7),
        });
    }

    Ok(records)
}

/// Sheet names of a workbook, sorted descending.
pub fn sheet_list(path: &Path) -> AppResult<Vec<String>> {
    let workbook: Xlsx<_> = open_workbook(path)?;

    let mut names = workbook.sheet_names().to_owned();
    if names.is_empty() {
        return Err(AppError::NoSheets(path.display().to_string()));
    }

    names.sort_by(|a, b| b.cmp(a));
    Ok(names)
}

fn pick_default_sheet(names: &[String]) -> Option<String> {
    names.iter().max().cloned()
}

/// Looks up a cell by absolute sheet column, compensating for the
/// range's start offset.
fn cell<'a>(row: &'a [Data], start_col: usize, col: usize) -> Option<&'a Data> {
    col.checked_sub(start_col).and_then(|i| row.get(i))
}

fn cell_string(row: &[Data], start_col: usize, col: usize) -> String {
    cell(row, start_col, col)
        .and_then(|c| c.as_string())
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Dates arrive either as native date cells or as `MM-DD-YY` strings.
/// Empty or unreadable cells yield None (open-ended when in column E).
fn cell_date(row: &[Data], start_col: usize, col: usize) -> Option<NaiveDate> {
    let cell = cell(row, start_col, col)?;
    if let Data::String(s) = cell {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        return NaiveDate::parse_from_str(s, "%m-%d-%y").ok();
    }
    cell.as_date()
}
