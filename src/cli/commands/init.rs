use crate::cli::parser::Cli;
use crate::config::{CURRENT_STORAGE_VERSION, Config};
use crate::core::store::HabitStore;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::storage::SqliteSlots;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database with all pending migrations
///  - the storage version marker
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rHabits…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let version = if cli.test {
        CURRENT_STORAGE_VERSION.to_string()
    } else {
        Config::load()?.storage_version
    };

    let slots = SqliteSlots::open(&db_path)?;
    let store = HabitStore::open(slots, &version)?;

    println!("✅ Database initialized at {}", &db_path);

    ttlog_quiet(
        store.storage().conn(),
        "init",
        "Database initialized",
        &format!("Database initialized at {} (storage version {})", &db_path, version),
    );

    println!("🎉 rHabits initialization completed!");
    Ok(())
}
