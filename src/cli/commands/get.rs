use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::DietStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::table::records_table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Get { id, json } = cmd {
        let store = DietStore::open(&cfg.database)?;
        let record = store.read_by_id(*id)?;
        store.close()?;

        match record {
            Some(r) if *json => println!("{}", serde_json::to_string_pretty(&r)?),
            Some(r) => print!("{}", records_table(&[r]).render()),
            None => warning(format!("{} not found", id)),
        }
    }

    Ok(())
}
