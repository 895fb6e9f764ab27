use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::store::DietStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let path = cfg.init_all(cli.test)?;
    if !cli.test {
        info(format!("Config file : {}", path.display()));
    }

    // open runs the migrations; nothing else to do with the handle
    DietStore::open(&cfg.database)?.close()?;

    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
