// src/export/logic.rs

use crate::core::layout::sort_records;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::export::xlsx::export_xlsx;
use crate::models::record::UsageRecord;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Exports records to `file` in the requested format.
    ///
    /// Records are sorted into display order first, so every consumer
    /// sees the same grouping the rendered timeline does.
    pub fn export(
        records: &[UsageRecord],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        let mut sorted = records.to_vec();
        sort_records(&mut sorted);
        let rows: Vec<RecordExport> = sorted.iter().map(RecordExport::from_record).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(())
    }
}
