use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::DietStore;
use crate::errors::{AppError, AppResult};
use crate::models::record::DietRequest;
use crate::ui::messages::success;
use std::fs;
use std::io::{self, Read};

/// Read a `{"data": [...]}` document from a file, or stdin for "-".
fn read_request(path: &str) -> AppResult<DietRequest> {
    let content = if path == "-" {
        let mut s = String::new();
        io::stdin().read_to_string(&mut s)?;
        s
    } else {
        fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&content)?)
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        date,
        slots,
        file,
    } = cmd
    {
        let records = match (file, name, date) {
            (Some(path), _, _) => read_request(path)?.data,
            (None, Some(name), Some(date)) => vec![slots.to_record(0, name, date)],
            _ => {
                return Err(AppError::Config(
                    "add needs NAME and DATE, or --file".to_string(),
                ));
            }
        };

        let mut store = DietStore::open(&cfg.database)?;
        store.create_batch(&records)?;
        store.close()?;

        success(format!("Created {} record(s)", records.len()));
    }

    Ok(())
}
