use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::reader::{self, Options};
use crate::ui::messages::warning;
use crate::utils::path::{expand_tilde, resolve_in_dir};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        source,
        sheet,
        force,
    } = cmd
    {
        let dir = expand_tilde(&cfg.records_dir);

        let records = match source {
            Some(src) => {
                let options = Options {
                    sheet: sheet.clone(),
                };
                reader::read_record(&resolve_in_dir(&dir, src), &options)?
            }
            None => reader::read_all_records(&dir)?,
        };

        if records.is_empty() {
            warning("No records found for export.");
            return Ok(());
        }

        ExportLogic::export(&records, format.clone(), file, *force)?;
    }
    Ok(())
}
