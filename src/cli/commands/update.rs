use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::DietStore;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update {
        id,
        name,
        date,
        slots,
    } = cmd
    {
        let record = slots.to_record(*id, name, date);

        let mut store = DietStore::open(&cfg.database)?;
        let updated = store.update_by_id(&record)?;
        store.close()?;

        match updated {
            Some(r) => success(format!("Record {} updated ({} on {})", r.id, r.person, r.date)),
            None => warning(format!("{} not found", id)),
        }
    }

    Ok(())
}
