//! Habit statistics engine.
//!
//! Every function here is pure: the same habits, records and `today` give the
//! same result, and inputs are never mutated. Numbers are recomputed on each
//! call instead of being maintained incrementally.

use crate::models::day_data::DayData;
use crate::models::habit::Habit;
use crate::models::habit_type::HabitType;
use crate::models::record::{CellState, HabitRecord, RecordStatus};
use crate::utils::date::{days_between, in_window, last_n_days};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

fn success_dates(habit_id: &str, records: &[HabitRecord]) -> Vec<NaiveDate> {
    records
        .iter()
        .filter(|r| r.habit_id == habit_id && r.status.is_success())
        .map(|r| r.date)
        .collect()
}

fn percent(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(part) * 100.0 / f64::from(total)).round() as u32
}

fn window_records<'a>(
    habit_id: &'a str,
    records: &'a [HabitRecord],
    window_days: u32,
    today: NaiveDate,
) -> impl Iterator<Item = &'a HabitRecord> + 'a {
    records
        .iter()
        .filter(move |r| r.habit_id == habit_id && in_window(r.date, window_days, today))
}

/// Current streak, anchored at `today`.
///
/// Counts consecutive success days going backward from today. Without a
/// success today the streak is 0, even after an unbroken run ending yesterday.
pub fn streak(habit_id: &str, records: &[HabitRecord], today: NaiveDate) -> u32 {
    let days: HashSet<NaiveDate> = success_dates(habit_id, records).into_iter().collect();

    let mut count = 0;
    let mut day = today;
    while days.contains(&day) {
        count += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    count
}

/// Longest run of calendar-consecutive success days.
pub fn longest_streak(habit_id: &str, records: &[HabitRecord]) -> u32 {
    let mut dates = success_dates(habit_id, records);
    if dates.is_empty() {
        return 0;
    }
    dates.sort_unstable();
    dates.dedup();

    let mut best = 1;
    let mut run = 1;
    for pair in dates.windows(2) {
        if days_between(pair[0], pair[1]) == 1 {
            run += 1;
            best = best.max(run);
        } else {
            run = 1;
        }
    }
    best
}

/// Percentage of successes among the records of the trailing window.
/// Days without a record do not count against the rate.
pub fn success_rate(habit_id: &str, records: &[HabitRecord], window_days: u32, today: NaiveDate) -> u32 {
    let (success, total) = window_records(habit_id, records, window_days, today)
        .fold((0, 0), |(s, t), r| (s + u32::from(r.status.is_success()), t + 1));
    percent(success, total)
}

pub fn fail_count(habit_id: &str, records: &[HabitRecord], window_days: u32, today: NaiveDate) -> u32 {
    window_records(habit_id, records, window_days, today)
        .filter(|r| r.status.is_fail())
        .count() as u32
}

pub fn success_count(habit_id: &str, records: &[HabitRecord], window_days: u32, today: NaiveDate) -> u32 {
    window_records(habit_id, records, window_days, today)
        .filter(|r| r.status.is_success())
        .count() as u32
}

fn habit_types(habits: &[Habit]) -> HashMap<&str, HabitType> {
    habits.iter().map(|h| (h.id.as_str(), h.kind)).collect()
}

fn tally(data: &mut DayData, kind: HabitType, status: RecordStatus) {
    match (status, kind) {
        (RecordStatus::Success, HabitType::Good) => data.good_success += 1,
        (RecordStatus::Success, HabitType::Bad) => data.bad_avoided += 1,
        (RecordStatus::Fail, _) => data.fail += 1,
    }
}

/// Per-day counts. Records of deleted habits are skipped.
pub fn day_stats(date: NaiveDate, habits: &[Habit], records: &[HabitRecord]) -> DayData {
    let types = habit_types(habits);
    let mut data = DayData::empty(date);

    for r in records.iter().filter(|r| r.date == date) {
        if let Some(kind) = types.get(r.habit_id.as_str()) {
            tally(&mut data, *kind, r.status);
        }
    }
    data
}

/// `day_stats` for every day in `days`, indexing the records once.
pub fn day_stats_for(days: &[NaiveDate], habits: &[Habit], records: &[HabitRecord]) -> Vec<DayData> {
    let types = habit_types(habits);
    let mut by_day: HashMap<NaiveDate, DayData> =
        days.iter().map(|d| (*d, DayData::empty(*d))).collect();

    for r in records {
        if let (Some(data), Some(kind)) = (by_day.get_mut(&r.date), types.get(r.habit_id.as_str())) {
            tally(data, *kind, r.status);
        }
    }

    days.iter()
        .map(|d| by_day.get(d).copied().unwrap_or_else(|| DayData::empty(*d)))
        .collect()
}

/// KPI tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TotalStats {
    pub total_streaks: u32,
    pub total_success: u32,
    pub total_fails: u32,
    pub consistency: u32,
}

pub fn total_stats(habits: &[Habit], records: &[HabitRecord], window_days: u32, today: NaiveDate) -> TotalStats {
    let known: HashSet<&str> = habits.iter().map(|h| h.id.as_str()).collect();

    let (total_success, total_fails) = records
        .iter()
        .filter(|r| known.contains(r.habit_id.as_str()) && in_window(r.date, window_days, today))
        .fold((0, 0), |(s, f), r| match r.status {
            RecordStatus::Success => (s + 1, f),
            RecordStatus::Fail => (s, f + 1),
        });

    let total_streaks = habits.iter().map(|h| streak(&h.id, records, today)).sum();

    TotalStats {
        total_streaks,
        total_success,
        total_fails,
        consistency: percent(total_success, total_success + total_fails),
    }
}

/// Numbers shown for one habit in the detail view and the stats table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HabitSummary {
    pub streak: u32,
    pub longest_streak: u32,
    pub success_rate: u32,
    pub fail_count: u32,
    pub success_count: u32,
    pub total_records: u32,
}

pub fn habit_summary(habit: &Habit, records: &[HabitRecord], window_days: u32, today: NaiveDate) -> HabitSummary {
    let id = habit.id.as_str();
    HabitSummary {
        streak: streak(id, records, today),
        longest_streak: longest_streak(id, records),
        success_rate: success_rate(id, records, window_days, today),
        fail_count: fail_count(id, records, window_days, today),
        success_count: success_count(id, records, window_days, today),
        total_records: records.iter().filter(|r| r.habit_id == id).count() as u32,
    }
}

/// Cell state of one habit for each of the last `days` days, oldest first.
pub fn habit_heatmap(
    habit_id: &str,
    records: &[HabitRecord],
    days: usize,
    today: NaiveDate,
) -> Vec<(NaiveDate, CellState)> {
    let by_day: HashMap<NaiveDate, &HabitRecord> = records
        .iter()
        .filter(|r| r.habit_id == habit_id)
        .map(|r| (r.date, r))
        .collect();

    last_n_days(days, today)
        .into_iter()
        .map(|d| (d, CellState::of(by_day.get(&d).copied())))
        .collect()
}

/// Completion counters of the day view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DayProgress {
    pub pending: u32,
    pub completed: u32,
    pub failed: u32,
}

pub fn day_progress(habits: &[Habit], records: &[HabitRecord], date: NaiveDate) -> DayProgress {
    let states: HashMap<&str, RecordStatus> = records
        .iter()
        .filter(|r| r.date == date)
        .map(|r| (r.habit_id.as_str(), r.status))
        .collect();

    habits.iter().fold(DayProgress::default(), |mut p, h| {
        match states.get(h.id.as_str()) {
            None => p.pending += 1,
            Some(RecordStatus::Success) => p.completed += 1,
            Some(RecordStatus::Fail) => p.failed += 1,
        }
        p
    })
}

/// Progress toward a goal, capped at 100 %.
pub fn goal_progress(value: f64, goal: f64) -> u32 {
    if goal <= 0.0 || value <= 0.0 {
        return 0;
    }
    (value / goal * 100.0).min(100.0).round() as u32
}

// ---------------------------
// Trends and insights
// ---------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Stable => "→",
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Compare the average of the last 7 values with the 7 before them.
/// A change beyond ±5 % is a trend.
pub fn trend(values: &[f64]) -> Trend {
    let n = values.len();
    if n < 2 {
        return Trend::Stable;
    }
    let recent = &values[n.saturating_sub(7)..];
    let older = &values[n.saturating_sub(14)..n.saturating_sub(7)];
    if older.is_empty() {
        return Trend::Stable;
    }

    let recent_avg = mean(recent);
    let older_avg = mean(older);

    if older_avg == 0.0 {
        return match recent_avg.partial_cmp(&0.0) {
            Some(std::cmp::Ordering::Greater) => Trend::Up,
            Some(std::cmp::Ordering::Less) => Trend::Down,
            _ => Trend::Stable,
        };
    }

    let diff = (recent_avg - older_avg) / older_avg * 100.0;
    if diff > 5.0 {
        Trend::Up
    } else if diff < -5.0 {
        Trend::Down
    } else {
        Trend::Stable
    }
}

/// Days-ago ranges `[start, end)` of the four weekly buckets, oldest first:
/// index 0 is T1 (21..27 days ago), index 3 is T4 (the last 7 days).
pub const WEEK_BUCKETS: [(i64, i64); 4] = [(21, 28), (14, 21), (7, 14), (0, 7)];

fn bucket_of(date: NaiveDate, today: NaiveDate) -> Option<usize> {
    let ago = days_between(date, today);
    WEEK_BUCKETS.iter().position(|(s, e)| ago >= *s && ago < *e)
}

/// Aggregates of a measurable habit's values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementSummary {
    pub dates: Vec<NaiveDate>,
    pub values: Vec<f64>,
    pub time_values: Vec<u64>,
    pub total: f64,
    pub average: f64,
    pub best: f64,
    pub total_time: u64,
    pub avg_time: f64,
    /// Seconds per unit.
    pub avg_pace: f64,
    pub best_pace: f64,
    pub weekly: [f64; 4],
    pub weekly_time: [u64; 4],
    pub trend: Trend,
    pub time_trend: Trend,
    pub pace_trend: Trend,
}

/// `None` for habits that are not measurable.
pub fn measurement_summary(habit: &Habit, records: &[HabitRecord], today: NaiveDate) -> Option<MeasurementSummary> {
    if !habit.tracking.is_measurable() {
        return None;
    }

    let mut measured: Vec<(NaiveDate, f64, Option<u64>)> = records
        .iter()
        .filter(|r| r.habit_id == habit.id)
        .filter_map(|r| r.measurement.value().map(|v| (r.date, v, r.measurement.seconds())))
        .collect();
    measured.sort_by_key(|(d, _, _)| *d);

    let dates: Vec<NaiveDate> = measured.iter().map(|(d, _, _)| *d).collect();
    let values: Vec<f64> = measured.iter().map(|(_, v, _)| *v).collect();
    let time_values: Vec<u64> = measured.iter().filter_map(|(_, _, s)| *s).collect();

    let total: f64 = values.iter().sum();
    let average = if values.is_empty() { 0.0 } else { total / values.len() as f64 };
    let best = values.iter().copied().fold(0.0, f64::max);

    let total_time = time_values.iter().fold(0u64, |acc, s| acc.saturating_add(*s));
    let avg_time = if time_values.is_empty() {
        0.0
    } else {
        total_time as f64 / time_values.len() as f64
    };

    let paces: Vec<f64> = measured
        .iter()
        .filter_map(|(_, v, s)| match s {
            Some(secs) if *v > 0.0 && *secs > 0 => Some(*secs as f64 / v),
            _ => None,
        })
        .collect();
    let avg_pace = if paces.is_empty() { 0.0 } else { mean(&paces) };
    let best_pace = if paces.is_empty() {
        0.0
    } else {
        paces.iter().copied().fold(f64::INFINITY, f64::min)
    };

    let mut weekly = [0.0; 4];
    let mut weekly_time = [0u64; 4];
    for (d, v, s) in &measured {
        if let Some(i) = bucket_of(*d, today) {
            weekly[i] += v;
            weekly_time[i] = weekly_time[i].saturating_add(s.unwrap_or(0));
        }
    }

    let time_as_f64: Vec<f64> = time_values.iter().map(|s| *s as f64).collect();
    let pace_trend = if paces.len() >= 2 {
        // Lower pace is better, so the sign is inverted.
        trend(&paces.iter().map(|p| -p).collect::<Vec<_>>())
    } else {
        Trend::Stable
    };

    Some(MeasurementSummary {
        trend: trend(&values),
        time_trend: trend(&time_as_f64),
        pace_trend,
        dates,
        values,
        time_values,
        total,
        average,
        best,
        total_time,
        avg_time,
        avg_pace,
        best_pace,
        weekly,
        weekly_time,
    })
}

/// Day-by-day success/fail totals over the last `days` days.
pub fn trend_series(habits: &[Habit], records: &[HabitRecord], days: usize, today: NaiveDate) -> Vec<DayData> {
    day_stats_for(&last_n_days(days, today), habits, records)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekBucket {
    pub label: String,
    pub success: u32,
    pub fail: u32,
}

/// The last 28 days split into four 7-day buckets, oldest first (T1..T4).
pub fn weekly_buckets(habits: &[Habit], records: &[HabitRecord], today: NaiveDate) -> Vec<WeekBucket> {
    let series = trend_series(habits, records, 28, today);

    series
        .chunks(7)
        .enumerate()
        .map(|(i, week)| WeekBucket {
            label: format!("T{}", i + 1),
            success: week.iter().map(DayData::successes).sum(),
            fail: week.iter().map(|d| d.fail).sum(),
        })
        .collect()
}

/// Bad habits failed most often in the window: top three, most fails first.
pub fn critical_bad_habits<'a>(
    habits: &'a [Habit],
    records: &[HabitRecord],
    window_days: u32,
    today: NaiveDate,
) -> Vec<(&'a Habit, u32)> {
    let mut out: Vec<(&Habit, u32)> = habits
        .iter()
        .filter(|h| h.kind.is_bad())
        .map(|h| (h, fail_count(&h.id, records, window_days, today)))
        .filter(|(_, fails)| *fails > 0)
        .collect();

    out.sort_by(|a, b| b.1.cmp(&a.1));
    out.truncate(3);
    out
}
