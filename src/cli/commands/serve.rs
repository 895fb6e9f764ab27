use crate::api;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::DietStore;
use crate::errors::AppResult;

/// Handle the `serve` command: port from --port, then DIETLOG_PORT, then config.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { port } = cmd {
        let mut cfg = cfg.clone();
        cfg.apply_env_overrides()?;
        if let Some(p) = port {
            cfg.port = *p;
        }

        let store = DietStore::open(&cfg.database)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(api::serve(store, &cfg))?;
    }

    Ok(())
}
