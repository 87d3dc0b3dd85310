use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::layout::compute_grid;
use crate::errors::AppResult;
use crate::reader::{self, Options};
use crate::ui::gantt;
use crate::ui::messages::warning;
use crate::utils::path::{expand_tilde, resolve_in_dir};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { file, sheet } = cmd {
        let dir = expand_tilde(&cfg.records_dir);

        let records = match file {
            Some(f) => {
                let options = Options {
                    sheet: sheet.clone(),
                };
                reader::read_record(&resolve_in_dir(&dir, f), &options)?
            }
            None => reader::read_all_records(&dir)?,
        };

        if records.is_empty() {
            warning("No usage records found.");
            return Ok(());
        }

        let grid = compute_grid(&records);
        print!("{}", gantt::render(&grid, cfg));
    }
    Ok(())
}
