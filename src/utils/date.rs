use chrono::NaiveDate;

/// Accepted input layouts; chrono also takes one-digit months and days.
const LAYOUTS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Parses a calendar date, accepting dashed or slashed layouts.
/// Empty or unrecognized input yields None.
pub fn parse_date_flexible(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(s, layout).ok())
}
