use crate::cli::commands::{Store, open_store, parse_kind_arg, resolve_habit};
use crate::cli::parser::{Commands, HabitAction};
use crate::config::Config;
use crate::core::filter::filter_habits;
use crate::core::stats::streak;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::models::habit::{Habit, HabitPatch, TimeTracking, Tracking};
use crate::models::habit_type::HabitType;
use crate::models::unit::MeasurementUnit;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::date::today;
use crate::utils::formatting::{bold, describe_tracking, italic};
use crate::utils::table::{Column, Table};
use crate::utils::time::{parse_optional_duration, parse_value};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Habit { action } = cmd {
        let mut store = open_store(cfg)?;

        match action {
            HabitAction::Add { .. } => add(&mut store, action)?,
            HabitAction::Edit { .. } => edit(&mut store, action)?,
            HabitAction::Del { habit, yes } => delete(&mut store, habit, *yes)?,
            HabitAction::List { kind, search } => {
                list(&store, cfg, kind.as_ref(), search.as_deref())?
            }
        }
    }

    Ok(())
}

fn clean_name(name: &str) -> AppResult<String> {
    let n = name.trim();
    if n.is_empty() {
        return Err(AppError::EmptyName);
    }
    Ok(n.to_string())
}

fn clean_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

fn clean_note(note: &str) -> Option<String> {
    let n = note.trim();
    (!n.is_empty()).then(|| n.to_string())
}

fn parse_unit(code: &str) -> AppResult<MeasurementUnit> {
    MeasurementUnit::from_code(code).ok_or_else(|| AppError::InvalidUnit(code.to_string()))
}

fn parse_goal(goal: Option<&String>) -> AppResult<Option<f64>> {
    goal.map(|g| parse_value(g)).transpose()
}

fn add(store: &mut Store, action: &HabitAction) -> AppResult<()> {
    let HabitAction::Add {
        name,
        bad,
        icon,
        note,
        tags,
        unit,
        label,
        goal,
        track_time,
        time_goal,
    } = action
    else {
        return Ok(());
    };

    //
    // 1. Validate input
    //
    let name = clean_name(name)?;
    let kind = if *bad { HabitType::Bad } else { HabitType::Good };

    let tracking = match unit {
        Some(code) => Tracking::Measurable {
            unit: parse_unit(code)?,
            label: label.as_deref().and_then(clean_note),
            goal: parse_goal(goal.as_ref())?,
            time: if *track_time {
                Some(TimeTracking {
                    goal_seconds: parse_optional_duration(time_goal.as_ref())?,
                })
            } else {
                None
            },
        },
        None => Tracking::Simple,
    };

    //
    // 2. Build and store
    //
    let mut habit = Habit::new(&name, kind, icon);
    habit.note = note.as_deref().and_then(clean_note);
    habit.tags = clean_tags(tags);
    habit.tracking = tracking;

    let id = habit.id.clone();
    let short = habit.short_id().to_string();
    store.add_habit(habit)?;

    ttlog_quiet(
        store.storage().conn(),
        "habit_add",
        &id,
        &format!("Added {} habit '{}'", kind.as_str(), name),
    );

    success(format!("Habit '{}' added ({} habit, id {}).", name, kind.as_str(), short));
    Ok(())
}

/// New tracking for an edit, or `None` when no measurement flag was given.
#[allow(clippy::too_many_arguments)]
fn edited_tracking(
    current: &Tracking,
    unit: Option<&String>,
    label: Option<&String>,
    goal: Option<&String>,
    track_time: bool,
    no_track_time: bool,
    time_goal: Option<&String>,
    not_measurable: bool,
) -> AppResult<Option<Tracking>> {
    if not_measurable {
        return Ok(Some(Tracking::Simple));
    }
    if unit.is_none() && label.is_none() && goal.is_none() && !track_time && !no_track_time && time_goal.is_none() {
        return Ok(None);
    }

    let (cur_unit, cur_label, cur_goal, cur_time) = match current {
        Tracking::Measurable {
            unit,
            label,
            goal,
            time,
        } => (Some(*unit), label.clone(), *goal, *time),
        Tracking::Simple => (None, None, None, None),
    };

    let unit = match unit {
        Some(code) => parse_unit(code)?,
        None => cur_unit.ok_or_else(|| {
            AppError::InvalidUnit("--unit is required to make a habit measurable".into())
        })?,
    };

    let label = match label {
        Some(l) => clean_note(l),
        None => cur_label,
    };

    let goal = match goal {
        Some(g) if g.trim().is_empty() => None,
        Some(g) => Some(parse_value(g)?),
        None => cur_goal,
    };

    let time = if no_track_time {
        None
    } else if track_time || time_goal.is_some() {
        let goal_seconds = match time_goal {
            Some(_) => parse_optional_duration(time_goal)?,
            None => cur_time.and_then(|t| t.goal_seconds),
        };
        Some(TimeTracking { goal_seconds })
    } else {
        cur_time
    };

    Ok(Some(Tracking::Measurable {
        unit,
        label,
        goal,
        time,
    }))
}

fn edit(store: &mut Store, action: &HabitAction) -> AppResult<()> {
    let HabitAction::Edit {
        habit,
        name,
        good,
        bad,
        icon,
        note,
        tags,
        clear_tags,
        unit,
        label,
        goal,
        track_time,
        no_track_time,
        time_goal,
        not_measurable,
    } = action
    else {
        return Ok(());
    };

    let current = resolve_habit(store, habit)?;

    let patch = HabitPatch {
        name: name.as_deref().map(clean_name).transpose()?,
        kind: if *good {
            Some(HabitType::Good)
        } else if *bad {
            Some(HabitType::Bad)
        } else {
            None
        },
        icon: icon.clone(),
        note: note.as_deref().map(clean_note),
        tags: if *clear_tags {
            Some(Vec::new())
        } else if !tags.is_empty() {
            Some(clean_tags(tags))
        } else {
            None
        },
        tracking: edited_tracking(
            &current.tracking,
            unit.as_ref(),
            label.as_ref(),
            goal.as_ref(),
            *track_time,
            *no_track_time,
            time_goal.as_ref(),
            *not_measurable,
        )?,
    };

    if patch.is_empty() {
        info("Nothing to change.");
        return Ok(());
    }

    store.update_habit(&current.id, patch)?;

    let updated = store
        .get_habit(&current.id)
        .map(|h| h.name.clone())
        .unwrap_or_else(|| current.name.clone());

    ttlog_quiet(
        store.storage().conn(),
        "habit_edit",
        &current.id,
        &format!("Edited habit '{}'", updated),
    );

    success(format!("Habit '{}' updated.", updated));
    Ok(())
}

fn delete(store: &mut Store, query: &str, yes: bool) -> AppResult<()> {
    let habit = resolve_habit(store, query)?;
    let n_records = store.records_for(&habit.id).count();

    if !yes
        && !ask_confirmation(&format!(
            "Delete habit '{}' and its {} record(s)? This action is irreversible.",
            habit.name, n_records
        ))
    {
        info("Operation cancelled.");
        return Ok(());
    }

    store.delete_habit(&habit.id)?;

    ttlog_quiet(
        store.storage().conn(),
        "habit_del",
        &habit.id,
        &format!("Deleted habit '{}' with {} records", habit.name, n_records),
    );

    success(format!(
        "Habit '{}' and {} record(s) have been deleted.",
        habit.name, n_records
    ));
    Ok(())
}

fn list(store: &Store, cfg: &Config, kind: Option<&String>, search: Option<&str>) -> AppResult<()> {
    let kind = parse_kind_arg(kind)?;
    let habits = filter_habits(store.habits(), kind, search);

    if habits.is_empty() {
        info("No habits found.");
        return Ok(());
    }

    let today = today();
    let mut table = Table::new(vec![
        Column::new("ID", 8),
        Column::new("", 2),
        Column::new("NAME", 12),
        Column::new("TYPE", 4),
        Column::new("MEASURE", 7),
        Column::new("TAGS", 4),
        Column::new("STREAK", 6),
    ]);

    for h in &habits {
        table.add_row(vec![
            h.short_id().to_string(),
            h.icon.clone(),
            bold(&h.name),
            h.kind.as_str().to_string(),
            describe_tracking(&h.tracking),
            h.tags.join(", "),
            streak(&h.id, store.records(), today).to_string(),
        ]);
    }

    print!("{}", table.render(&cfg.separator_char));

    for h in habits.iter().filter(|h| h.note.is_some()) {
        if let Some(note) = &h.note {
            println!("  {} {}: {}", h.icon, h.name, italic(note));
        }
    }

    Ok(())
}
