use crate::core::store::HabitStore;
use crate::storage::SqliteSlots;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::{day_key, days_between};
use std::fs;

pub fn print_db_info(store: &HabitStore<SqliteSlots>) {
    let db_path = store.storage().path();
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) COLLECTIONS
    //
    let good = store.habits().iter().filter(|h| h.kind.is_good()).count();
    let bad = store.habits().len() - good;
    println!(
        "{}• Habits:{} {}{}{} ({} good, {} bad)",
        CYAN,
        RESET,
        GREEN,
        store.habits().len(),
        RESET,
        good,
        bad
    );
    println!(
        "{}• Records:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        store.records().len(),
        RESET
    );

    //
    // 3) DATE RANGE
    //
    let first = store.records().iter().map(|r| r.date).min();
    let last = store.records().iter().map(|r| r.date).max();

    let fmt = |d: Option<chrono::NaiveDate>| d.map(day_key).unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    //
    // 4) AVERAGE RECORDS/DAY
    //
    if let (Some(f), Some(l)) = (first, last) {
        let days = days_between(f, l).max(0) + 1;
        let avg = store.records().len() as f64 / days as f64;
        println!("{}• Average records/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
}
