// src/export/model.rs

use crate::models::record::UsageRecord;
use chrono::NaiveDate;
use serde::Serialize;

/// The open-ended end date as it appears on the wire.
pub(crate) const OPEN_END_SENTINEL: &str = "0001-01-01T00:00:00Z";

/// Flat record layout for export.
/// Dates are RFC-3339 timestamps at midnight UTC; an open-ended interval
/// carries the epoch-zero sentinel so downstream consumers can tell it
/// apart from any real date.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    #[serde(rename = "No")]
    pub no: usize,
    #[serde(rename = "EquipmentID")]
    pub equipment_id: String,
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "BeginDate")]
    pub begin_date: String,
    #[serde(rename = "EndDate")]
    pub end_date: String,
    #[serde(rename = "TargetUser")]
    pub target_user: String,
    #[serde(rename = "Purpose")]
    pub purpose: String,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl RecordExport {
    pub fn from_record(r: &UsageRecord) -> Self {
        Self {
            no: r.no,
            equipment_id: r.equipment_id.clone(),
            user: r.user.clone(),
            begin_date: wire_date(r.begin_date),
            end_date: r
                .end_date
                .map(wire_date)
                .unwrap_or_else(|| OPEN_END_SENTINEL.to_string()),
            target_user: r.target_user.clone(),
            purpose: r.purpose.clone(),
            notes: r.notes.clone(),
        }
    }
}

fn wire_date(d: NaiveDate) -> String {
    format!("{}T00:00:00Z", d.format("%Y-%m-%d"))
}

/// Headers for CSV / XLSX.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "No",
        "EquipmentID",
        "User",
        "BeginDate",
        "EndDate",
        "TargetUser",
        "Purpose",
        "Notes",
    ]
}

/// Convert a record into a row of display strings (for XLSX).
pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.no.to_string(),
        r.equipment_id.clone(),
        r.user.clone(),
        r.begin_date.clone(),
        r.end_date.clone(),
        r.target_user.clone(),
        r.purpose.clone(),
        r.notes.clone(),
    ]
}
