use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::reader;
use crate::utils::path::{expand_tilde, resolve_in_dir};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sheets { file } = cmd {
        let dir = expand_tilde(&cfg.records_dir);
        let sheets = reader::sheet_list(&resolve_in_dir(&dir, file))?;

        for s in sheets {
            println!("{}", s);
        }
    }
    Ok(())
}
