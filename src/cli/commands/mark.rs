use crate::cli::commands::{open_store, parse_day_arg, resolve_habit};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::{goal_progress, streak};
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::models::record::{HabitRecord, RecordStatus};
use crate::ui::messages::{info, success, warning};
use crate::utils::date::{day_key, today};
use crate::utils::formatting::{format_time_display, format_value, progress_bar};
use crate::utils::time::{parse_optional_duration, parse_value};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Mark {
            habit,
            date,
            fail,
            flip,
            value,
            time,
            note,
        } => {
            let mut store = open_store(cfg)?;
            let habit = resolve_habit(&store, habit)?;
            let day = parse_day_arg(date.as_ref())?;

            if day > today() {
                warning(format!("{} is in the future.", day_key(day)));
            }

            if *flip {
                let Some(existing) = store.get_record(&habit.id, day).cloned() else {
                    info(format!(
                        "'{}' has no record on {}, nothing to flip.",
                        habit.name,
                        day_key(day)
                    ));
                    return Ok(());
                };

                let status = existing.status.flipped();
                let mut record = HabitRecord { status, ..existing };
                if let Some(n) = note.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
                    record.note = Some(n.to_string());
                }
                store.upsert_record(record)?;

                ttlog_quiet(
                    store.storage().conn(),
                    "flip",
                    &habit.id,
                    &format!("{} flipped to {} on {}", habit.name, status.as_str(), day_key(day)),
                );

                success(format!(
                    "{} {}: now {} on {}.",
                    habit.icon,
                    habit.name,
                    status.as_str(),
                    day_key(day)
                ));
                return Ok(());
            }

            let status = if *fail {
                RecordStatus::Fail
            } else {
                RecordStatus::Success
            };

            let mut record = HabitRecord::new(&habit.id, day, status)
                .with_note(note.as_deref().map(str::trim).filter(|n| !n.is_empty()).map(String::from));

            if value.is_some() || time.is_some() {
                if !habit.tracking.is_measurable() {
                    return Err(AppError::InvalidValue(format!(
                        "'{}' is not a measurable habit",
                        habit.name
                    )));
                }
                if time.is_some() && !habit.tracking.tracks_time() {
                    return Err(AppError::InvalidTime(format!(
                        "'{}' does not track time",
                        habit.name
                    )));
                }

                let Some(v) = value.as_deref().map(parse_value).transpose()? else {
                    return Err(AppError::InvalidValue(format!(
                        "--time on '{}' needs a --value as well",
                        habit.name
                    )));
                };
                let secs = parse_optional_duration(time.as_ref())?;
                record = record.with_measurement(v, secs);
            }

            let measured = record.measurement;
            store.upsert_record(record)?;

            ttlog_quiet(
                store.storage().conn(),
                "mark",
                &habit.id,
                &format!("{} {} on {}", habit.name, status.as_str(), day_key(day)),
            );

            success(format!(
                "{} {}: {} on {}.",
                habit.icon,
                habit.name,
                status.as_str(),
                day_key(day)
            ));

            if let Some(v) = measured.value() {
                let label = habit.tracking.unit_label();
                let mut line = format!("   {} {}", format_value(v), label);
                if let Some(goal) = habit.tracking.goal() {
                    let pct = goal_progress(v, goal);
                    line.push_str(&format!("  {} {}%", progress_bar(pct, 10), pct));
                }
                if let Some(secs) = measured.seconds() {
                    line.push_str(&format!("  ⏱ {}", format_time_display(secs)));
                    if let Some(goal) = habit.tracking.time_goal() {
                        line.push_str(&format!(" ({}%)", goal_progress(secs as f64, goal as f64)));
                    }
                }
                println!("{}", line);
            }

            let current = streak(&habit.id, store.records(), today());
            if current > 1 {
                info(format!("Current streak: {} days", current));
            }
        }

        Commands::Unmark { habit, date } => {
            let mut store = open_store(cfg)?;
            let habit = resolve_habit(&store, habit)?;
            let day = parse_day_arg(date.as_ref())?;

            if !store.delete_record(&habit.id, day)? {
                info(format!(
                    "'{}' has no record on {}, nothing to remove.",
                    habit.name,
                    day_key(day)
                ));
                return Ok(());
            }

            ttlog_quiet(
                store.storage().conn(),
                "unmark",
                &habit.id,
                &format!("{} back to pending on {}", habit.name, day_key(day)),
            );

            success(format!("{} {}: pending on {}.", habit.icon, habit.name, day_key(day)));
        }

        _ => {}
    }

    Ok(())
}
