use crate::errors::{AppError, AppResult};
use crate::models::record::UsageRecord;
use crate::utils::date::parse_date_flexible;
use std::path::Path;

/// Reads usage records from a CSV file.
/// Expected layout: header row `id,user_name,begin_date,end_date`, one
/// record per following row. An empty end date means the equipment has
/// not been returned yet (open-ended interval).
pub(crate) fn from_csv(path: &Path) -> AppResult<Vec<UsageRecord>> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        let equipment_id = row.get(0).unwrap_or("").trim();
        let user = row.get(1).unwrap_or("").trim();
        let begin_raw = row.get(2).unwrap_or("").trim();
        let end_raw = row.get(3).unwrap_or("").trim();

        let begin_date = parse_date_flexible(begin_raw)
            .ok_or_else(|| AppError::InvalidDate(begin_raw.to_string()))?;
        // the end date is lenient: empty or unreadable → open-ended
        let end_date = parse_date_flexible(end_raw);

        records.push(UsageRecord::new(
            i + 1,
            equipment_id,
            user,
            begin_date,
            end_date,
        ));
    }

    Ok(records)
}
