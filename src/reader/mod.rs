//! Record readers: CSV and XLSX sources, extension dispatch and
//! directory discovery.

mod csv;
mod xlsx;

pub use xlsx::sheet_list;

use crate::errors::{AppError, AppResult};
use crate::models::record::UsageRecord;
use crate::ui::messages::warning;
use std::fs;
use std::path::{Path, PathBuf};

/// Reader options. `sheet` selects a specific workbook sheet; when unset
/// the sheet whose name sorts last is used.
#[derive(Debug, Default, Clone)]
pub struct Options {
    pub sheet: Option<String>,
}

/// Reads usage records from a single file, dispatching on extension.
pub fn read_record(file: &Path, options: &Options) -> AppResult<Vec<UsageRecord>> {
    let ext = file
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let records = match ext.as_str() {
        "csv" => csv::from_csv(file)?,
        "xlsx" => xlsx::from_excel(file, options)?,
        _ => return Err(AppError::UnsupportedExtension(ext)),
    };

    if records.is_empty() {
        return Err(AppError::NoRecords(file.display().to_string()));
    }
    Ok(records)
}

/// Reads every data file under `dir`, warning and continuing when a
/// single file fails to parse.
pub fn read_all_records(dir: &Path) -> AppResult<Vec<UsageRecord>> {
    let mut all = Vec::new();

    for file in list_data_files(dir)? {
        match read_record(&dir.join(&file), &Options::default()) {
            Ok(mut records) => all.append(&mut records),
            Err(e) => warning(format!("Skipping {}: {}", file.display(), e)),
        }
    }

    Ok(all)
}

/// Relative paths of all `.csv` / `.xlsx` files under `dir`, recursively,
/// in sorted order.
pub fn list_data_files(dir: &Path) -> AppResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk(dir, dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk(root: &Path, dir: &Path, files: &mut Vec<PathBuf>) -> AppResult<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk(root, &path, files)?;
            continue;
        }
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase());
        if matches!(ext.as_deref(), Some("csv") | Some("xlsx"))
            && let Ok(rel) = path.strip_prefix(root)
        {
            files.push(rel.to_path_buf());
        }
    }
    Ok(())
}
