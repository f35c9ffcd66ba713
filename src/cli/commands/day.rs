use crate::cli::commands::{open_store, parse_day_arg, parse_kind_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::filter_habits;
use crate::core::stats::{day_progress, day_stats, goal_progress, streak};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREEN, RED, YELLOW, color_for_state, colorize_count, paint};
use crate::utils::date::display_date;
use crate::utils::formatting::{format_time_compact, format_value, italic};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date, kind, search } = cmd {
        let store = open_store(cfg)?;
        let day = parse_day_arg(date.as_ref())?;
        let kind = parse_kind_arg(kind.as_ref())?;

        let habits = filter_habits(store.habits(), kind, search.as_deref());

        header(display_date(day), &cfg.separator_char);

        if habits.is_empty() {
            info("No habits found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("", 2),
            Column::new("", 2),
            Column::new("HABIT", 14),
            Column::new("TYPE", 4),
            Column::new("STREAK", 6),
            Column::new("MEASURED", 8),
            Column::new("NOTE", 4),
        ]);

        for h in &habits {
            let record = store.get_record(&h.id, day);
            let state = store.cell_state(&h.id, day);

            let measured = match record.and_then(|r| r.measurement.value()) {
                Some(v) => {
                    let mut s = format!("{} {}", format_value(v), h.tracking.unit_label());
                    if let Some(goal) = h.tracking.goal() {
                        s.push_str(&format!(" ({}%)", goal_progress(v, goal)));
                    }
                    if let Some(secs) = record.and_then(|r| r.measurement.seconds()) {
                        s.push_str(&format!(" ⏱ {}", format_time_compact(secs)));
                        if let Some(goal) = h.tracking.time_goal() {
                            s.push_str(&format!(" ({}%)", goal_progress(secs as f64, goal as f64)));
                        }
                    }
                    s.trim_end().to_string()
                }
                None => String::new(),
            };

            table.add_row(vec![
                paint(state.symbol(), color_for_state(state)),
                h.icon.clone(),
                h.name.clone(),
                h.kind.as_str().to_string(),
                streak(&h.id, store.records(), day).to_string(),
                measured,
                record
                    .and_then(|r| r.note.as_deref())
                    .map(italic)
                    .unwrap_or_default(),
            ]);
        }

        print!("{}", table.render(&cfg.separator_char));

        let progress = day_progress(&habits, store.records(), day);
        println!(
            "\nDone {}  Failed {}  Pending {}",
            colorize_count(progress.completed, GREEN),
            colorize_count(progress.failed, RED),
            colorize_count(progress.pending, YELLOW),
        );

        let counts = day_stats(day, store.habits(), store.records());
        println!(
            "Good done {}  Bad avoided {}  Fails {}",
            colorize_count(counts.good_success, GREEN),
            colorize_count(counts.bad_avoided, GREEN),
            colorize_count(counts.fail, RED),
        );
    }

    Ok(())
}
