use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;

        if let Some(path) = ExportLogic::export(&store, &cfg.storage_version, *format, file, *force)? {
            ttlog_quiet(
                store.storage().conn(),
                "export",
                &path.to_string_lossy(),
                &format!(
                    "Exported {} habits / {} records as {}",
                    store.habits().len(),
                    store.records().len(),
                    format.as_str()
                ),
            );
        }
    }

    Ok(())
}
