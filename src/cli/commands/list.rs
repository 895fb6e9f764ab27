use crate::api::response::DietResponse;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::DietStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::today;
use crate::utils::table::records_table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { days, json } = cmd {
        let window = days.unwrap_or(cfg.window_days);

        let store = DietStore::open(&cfg.database)?;
        let records = store.read_range(window)?;
        store.close()?;

        if *json {
            let body = DietResponse::new(records);
            println!("{}", serde_json::to_string_pretty(&body)?);
            return Ok(());
        }

        if records.is_empty() {
            info(format!(
                "No records from {} over the next {} day(s).",
                today(),
                window
            ));
            return Ok(());
        }

        print!("{}", records_table(&records).render());
    }

    Ok(())
}
