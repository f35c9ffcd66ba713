use crate::cli::commands::{Store, open_store, resolve_habit};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::{
    MeasurementSummary, WEEK_BUCKETS, habit_heatmap, habit_summary, measurement_summary, total_stats,
};
use crate::errors::AppResult;
use crate::models::habit::Habit;
use crate::ui::messages::{header, info};
use crate::utils::colors::{CYAN, GREEN, RED, color_for_rate, color_for_state, paint};
use crate::utils::date::today;
use crate::utils::formatting::{
    bold, describe_tracking, format_pace, format_time_compact, format_time_display, format_value,
};
use crate::utils::table::{Column, Table, pad_left};

const HEATMAP_DAYS: usize = 30;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { habit, days } = cmd {
        let store = open_store(cfg)?;
        let window = days.unwrap_or(cfg.window_days);

        match habit {
            Some(query) => {
                let habit = resolve_habit(&store, query)?;
                print_habit_detail(&store, cfg, &habit, window);
            }
            None => print_overview(&store, cfg, window),
        }
    }

    Ok(())
}

fn print_overview(store: &Store, cfg: &Config, window: u32) {
    let today = today();
    let totals = total_stats(store.habits(), store.records(), window, today);

    header(format!("Statistics (last {} days)", window), &cfg.separator_char);
    println!(
        "Active streaks: {}   Successes: {}   Fails: {}   Consistency: {}",
        paint(&totals.total_streaks.to_string(), CYAN),
        paint(&totals.total_success.to_string(), GREEN),
        paint(&totals.total_fails.to_string(), RED),
        paint(
            &format!("{}%", totals.consistency),
            color_for_rate(totals.consistency)
        ),
    );

    if store.habits().is_empty() {
        info("No habits yet. Add one with `rhabits habit add <name>`.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("", 2),
        Column::new("HABIT", 14),
        Column::new("TYPE", 4),
        Column::new("STREAK", 6),
        Column::new("BEST", 4),
        Column::new("RATE", 4),
        Column::new("OK", 3),
        Column::new("FAIL", 4),
    ]);

    for h in store.habits() {
        let s = habit_summary(h, store.records(), window, today);
        table.add_row(vec![
            h.icon.clone(),
            h.name.clone(),
            h.kind.as_str().to_string(),
            pad_left(&s.streak.to_string(), 6),
            pad_left(&s.longest_streak.to_string(), 4),
            paint(&pad_left(&format!("{}%", s.success_rate), 4), color_for_rate(s.success_rate)),
            pad_left(&s.success_count.to_string(), 3),
            pad_left(&s.fail_count.to_string(), 4),
        ]);
    }

    println!();
    print!("{}", table.render(&cfg.separator_char));
}

fn print_habit_detail(store: &Store, cfg: &Config, habit: &Habit, window: u32) {
    let today = today();
    let s = habit_summary(habit, store.records(), window, today);

    header(format!("{} {}", habit.icon, bold(&habit.name)), &cfg.separator_char);
    println!("Type:      {}", habit.kind.as_str());
    println!("Measure:   {}", describe_tracking(&habit.tracking));
    if !habit.tags.is_empty() {
        println!("Tags:      {}", habit.tags.join(", "));
    }
    if let Some(note) = &habit.note {
        println!("Note:      {}", note);
    }
    println!("Streak:    {} (best {})", s.streak, s.longest_streak);
    println!(
        "Rate:      {} over the last {} days ({} ok / {} fail)",
        paint(&format!("{}%", s.success_rate), color_for_rate(s.success_rate)),
        window,
        s.success_count,
        s.fail_count
    );
    println!("Records:   {}", s.total_records);

    let cells: String = habit_heatmap(&habit.id, store.records(), HEATMAP_DAYS, today)
        .iter()
        .map(|(_, state)| paint(state.symbol(), color_for_state(*state)))
        .collect();
    println!("\nLast {} days: {}", HEATMAP_DAYS, cells);

    if let Some(m) = measurement_summary(habit, store.records(), today) {
        print_measurement(habit, &m, &cfg.separator_char);
    }
}

fn print_measurement(habit: &Habit, m: &MeasurementSummary, sep: &str) {
    let label = habit.tracking.unit_label();

    println!();
    if m.values.is_empty() {
        info("No measured values yet.");
        return;
    }

    println!(
        "Total {} {}   Average {} {}   Best {} {}   Trend {}",
        format_value(m.total),
        label,
        format_value(m.average),
        label,
        format_value(m.best),
        label,
        m.trend.arrow()
    );

    if habit.tracking.tracks_time() && !m.time_values.is_empty() {
        println!(
            "Time {}   Average {}   Trend {}",
            format_time_display(m.total_time),
            format_time_display(m.avg_time.round() as u64),
            m.time_trend.arrow()
        );

        let is_distance = habit.tracking.unit().is_some_and(|u| u.is_distance());
        if is_distance && m.avg_pace > 0.0 {
            println!(
                "Pace {} /{}   Best {} /{}   Trend {}",
                format_pace(m.avg_pace),
                label,
                format_pace(m.best_pace),
                label,
                m.pace_trend.arrow()
            );
        }
    }

    let mut table = Table::new(vec![
        Column::new("WEEK", 8),
        Column::new("VALUE", 8),
        Column::new("TIME", 6),
    ]);
    for (i, (start, end)) in WEEK_BUCKETS.iter().enumerate() {
        table.add_row(vec![
            format!("-{}..-{}d", end - 1, start),
            format!("{} {}", format_value(m.weekly[i]), label),
            if m.weekly_time[i] > 0 {
                format_time_compact(m.weekly_time[i])
            } else {
                "-".to_string()
            },
        ]);
    }
    println!();
    print!("{}", table.render(sep));
}
