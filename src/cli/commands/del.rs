use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::DietStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut store = DietStore::open(&cfg.database)?;
        store.delete_by_id(*id)?;
        store.close()?;

        success(format!("Record {} deleted.", id));
    }

    Ok(())
}
