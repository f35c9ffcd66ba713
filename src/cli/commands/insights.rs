use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::{critical_bad_habits, total_stats, trend, trend_series, weekly_buckets};
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{GREEN, MAGENTA, RED, color_for_rate, paint};
use crate::utils::date::today;
use crate::utils::table::{Column, Table, pad_left};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Insights { days } = cmd {
        let store = open_store(cfg)?;
        let today = today();
        let n = days.unwrap_or(cfg.trend_days) as usize;

        //
        // Daily trend
        //
        header(format!("Last {} days", n), &cfg.separator_char);
        let series = trend_series(store.habits(), store.records(), n, today);

        let max = series.iter().map(|d| d.total()).max().unwrap_or(0).max(1);
        for d in &series {
            let ok = (d.successes() as usize * 20) / max as usize;
            let ko = (d.fail as usize * 20) / max as usize;
            println!(
                "{}  {}{} {}/{}",
                d.date.format("%m-%d"),
                paint(&"█".repeat(ok), GREEN),
                paint(&"█".repeat(ko), RED),
                d.successes(),
                d.fail
            );
        }

        let successes: Vec<f64> = series.iter().map(|d| f64::from(d.successes())).collect();
        println!("Trend: {}", trend(&successes).arrow());

        //
        // Weekly buckets
        //
        println!();
        header("Weekly totals (oldest first)", &cfg.separator_char);
        let mut table = Table::new(vec![
            Column::new("WEEK", 4),
            Column::new("OK", 4),
            Column::new("FAIL", 4),
        ]);
        for w in weekly_buckets(store.habits(), store.records(), today) {
            table.add_row(vec![
                w.label,
                pad_left(&w.success.to_string(), 4),
                pad_left(&w.fail.to_string(), 4),
            ]);
        }
        print!("{}", table.render(&cfg.separator_char));

        let totals = total_stats(store.habits(), store.records(), cfg.window_days, today);
        println!(
            "\nConsistency ({} days): {}",
            cfg.window_days,
            paint(&format!("{}%", totals.consistency), color_for_rate(totals.consistency))
        );

        //
        // Bad habits to watch
        //
        println!();
        header("Bad habits to watch", &cfg.separator_char);
        let critical = critical_bad_habits(store.habits(), store.records(), cfg.window_days, today);
        if critical.is_empty() {
            if store.habits().iter().any(|h| h.kind.is_bad()) {
                success("No bad habit slipped in this period.");
            } else {
                info("No bad habits tracked.");
            }
        } else {
            for (h, fails) in critical {
                println!("{} {}  {}", h.icon, h.name, paint(&format!("{} fails", fails), MAGENTA));
            }
        }
    }

    Ok(())
}
