use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        let mut store = open_store(cfg)?;
        let (n_habits, n_records) = (store.habits().len(), store.records().len());

        if !*yes
            && !ask_confirmation(&format!(
                "Delete ALL {} habits and {} records? This action is irreversible.",
                n_habits, n_records
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        store.reset_all()?;

        ttlog_quiet(
            store.storage().conn(),
            "reset",
            "all",
            &format!("Removed {} habits and {} records", n_habits, n_records),
        );

        success("All habits and records have been deleted.");
    }

    Ok(())
}
