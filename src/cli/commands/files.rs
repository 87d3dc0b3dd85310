use crate::config::Config;
use crate::errors::AppResult;
use crate::reader;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let dir = expand_tilde(&cfg.records_dir);
    let files = reader::list_data_files(&dir)?;

    if files.is_empty() {
        warning(format!("No data files under {}", dir.display()));
        return Ok(());
    }

    for f in files {
        println!("{}", f.display());
    }
    Ok(())
}
