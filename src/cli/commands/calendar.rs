use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::day_stats_for;
use crate::errors::{AppError, AppResult};
use crate::models::day_data::DayData;
use crate::ui::messages::header;
use crate::utils::colors::{GREEN, GREY, RED, YELLOW, paint};
use crate::utils::date::{calendar_grid, is_same_month, month_title, parse_month, today, weekday_short};
use crate::utils::table::pad_left;
use chrono::{Datelike, NaiveDate};

/// Visible width of one day cell: `dd ss/ff`.
const CELL_WIDTH: usize = 9;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month } = cmd {
        let anchor = match month {
            Some(m) => parse_month(m).ok_or_else(|| AppError::InvalidMonth(m.to_string()))?,
            None => today(),
        };

        let store = open_store(cfg)?;
        let grid = calendar_grid(anchor);
        let data = day_stats_for(&grid, store.habits(), store.records());

        header(month_title(anchor), &cfg.separator_char);

        let head: String = (0..7).map(|i| pad_left(weekday_short(i), CELL_WIDTH)).collect();
        println!("{}", head);

        for week in data.chunks(7) {
            let line: String = week.iter().map(|d| render_cell(d, anchor)).collect();
            println!("{}", line);
        }

        println!(
            "\n{} successes / {} fails, {} outside the month",
            paint("ok", GREEN),
            paint("fail", RED),
            paint("grey", GREY)
        );
    }

    Ok(())
}

fn render_cell(d: &DayData, anchor: NaiveDate) -> String {
    let counts = if d.is_empty() {
        "  ".to_string()
    } else {
        format!("{}/{}", d.successes(), d.fail)
    };
    let text = pad_left(&format!("{:>2} {}", d.date.day(), counts), CELL_WIDTH);

    if !is_same_month(d.date, anchor) {
        paint(&text, GREY)
    } else if d.date == today() {
        paint(&text, YELLOW)
    } else if d.fail > 0 && d.fail >= d.successes() {
        paint(&text, RED)
    } else if d.successes() > 0 {
        paint(&text, GREEN)
    } else {
        text
    }
}
