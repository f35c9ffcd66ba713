use chrono::{Days, NaiveDate};
use rhabits::core::stats::{
    Trend, critical_bad_habits, day_progress, day_stats, goal_progress, habit_heatmap, habit_summary,
    longest_streak, measurement_summary, streak, success_rate, total_stats, trend, trend_series,
    weekly_buckets,
};
use rhabits::models::habit::{TimeTracking, Tracking};
use rhabits::models::habit_type::HabitType;
use rhabits::models::record::{CellState, HabitRecord};
use rhabits::models::unit::MeasurementUnit;

mod common;
use common::{day, habit};

fn today() -> NaiveDate {
    day("2025-03-15")
}

fn ago(n: u64) -> NaiveDate {
    today().checked_sub_days(Days::new(n)).unwrap()
}

fn successes(id: &str, days_ago: impl IntoIterator<Item = u64>) -> Vec<HabitRecord> {
    days_ago.into_iter().map(|n| HabitRecord::success(id, ago(n))).collect()
}

// ---------------------------
// Streaks
// ---------------------------

#[test]
fn test_no_successes_means_zero_streaks() {
    let records = vec![HabitRecord::fail("h1", ago(0)), HabitRecord::fail("h1", ago(1))];

    assert_eq!(streak("h1", &records, today()), 0);
    assert_eq!(longest_streak("h1", &records), 0);
    assert_eq!(streak("h1", &[], today()), 0);
}

#[test]
fn test_streak_is_anchored_at_today() {
    let records = successes("h1", [1, 2]);

    assert_eq!(streak("h1", &records, today()), 0);
    assert_eq!(longest_streak("h1", &records), 2);
}

#[test]
fn test_single_success_is_a_streak_of_one() {
    let records = successes("h1", [5]);
    assert_eq!(longest_streak("h1", &records), 1);
    assert_eq!(streak("h1", &records, today()), 0);

    let records = successes("h1", [0]);
    assert_eq!(streak("h1", &records, today()), 1);
    assert_eq!(longest_streak("h1", &records), 1);
}

#[test]
fn test_streak_counts_consecutive_days() {
    let mut records = successes("h1", 0..7);
    assert_eq!(streak("h1", &records, today()), 7);

    records.push(HabitRecord::success("h1", ago(7)));
    assert_eq!(streak("h1", &records, today()), 8);
}

#[test]
fn test_gap_caps_the_streak() {
    // today .. today-3, gap at today-4, then today-5 .. today-9
    let mut days: Vec<u64> = (0..4).collect();
    days.extend(5..10);
    let records = successes("h1", days);

    assert_eq!(streak("h1", &records, today()), 4);
    assert_eq!(longest_streak("h1", &records), 5);
}

#[test]
fn test_fail_breaks_the_streak() {
    let mut records = successes("h1", [0, 2, 3]);
    records.push(HabitRecord::fail("h1", ago(1)));

    assert_eq!(streak("h1", &records, today()), 1);
}

#[test]
fn test_longest_is_never_below_current() {
    let scenarios = [
        successes("h1", 0..3),
        successes("h1", [0, 1, 5, 6, 7, 8]),
        successes("h1", [3, 4]),
        successes("h1", [0, 10, 11, 12, 13, 14, 15]),
    ];

    for records in &scenarios {
        assert!(longest_streak("h1", records) >= streak("h1", records, today()));
    }
}

#[test]
fn test_streak_ignores_other_habits() {
    let mut records = successes("h1", 0..3);
    records.extend(successes("h2", 0..10));

    assert_eq!(streak("h1", &records, today()), 3);
    assert_eq!(longest_streak("h2", &records), 10);
}

// ---------------------------
// Rates and windows
// ---------------------------

#[test]
fn test_success_rate_bounds() {
    assert_eq!(success_rate("h1", &[], 30, today()), 0);

    let all_ok = successes("h1", [0, 3, 9]);
    assert_eq!(success_rate("h1", &all_ok, 30, today()), 100);
}

#[test]
fn test_success_rate_only_counts_window() {
    let mut records = successes("h1", [0, 1, 2]);
    records.push(HabitRecord::fail("h1", ago(3)));
    // outside a 30 day window
    records.push(HabitRecord::fail("h1", ago(30)));
    records.push(HabitRecord::fail("h1", ago(45)));

    assert_eq!(success_rate("h1", &records, 30, today()), 75);
    assert_eq!(success_rate("h1", &records, 3, today()), 100);
}

#[test]
fn test_future_records_are_outside_the_window() {
    let future = today().checked_add_days(Days::new(2)).unwrap();
    let records = vec![HabitRecord::fail("h1", future), HabitRecord::success("h1", today())];

    assert_eq!(success_rate("h1", &records, 30, today()), 100);
}

#[test]
fn test_habit_summary_numbers() {
    let h = habit("h1", HabitType::Good);
    let mut records = successes("h1", [0, 1, 2, 10, 11, 12, 13]);
    records.push(HabitRecord::fail("h1", ago(5)));

    let s = habit_summary(&h, &records, 30, today());
    assert_eq!(s.streak, 3);
    assert_eq!(s.longest_streak, 4);
    assert_eq!(s.success_count, 7);
    assert_eq!(s.fail_count, 1);
    assert_eq!(s.success_rate, 88);
    assert_eq!(s.total_records, 8);
}

// ---------------------------
// Day aggregates
// ---------------------------

#[test]
fn test_day_stats_partition() {
    let d = day("2025-01-10");
    let habits = vec![
        habit("g1", HabitType::Good),
        habit("b1", HabitType::Bad),
        habit("b2", HabitType::Bad),
    ];
    let records = vec![
        HabitRecord::success("g1", d),
        HabitRecord::success("b1", d),
        HabitRecord::fail("b2", d),
        HabitRecord::fail("g1", day("2025-01-11")),
    ];

    let stats = day_stats(d, &habits, &records);
    assert_eq!(stats.good_success, 1);
    assert_eq!(stats.bad_avoided, 1);
    assert_eq!(stats.fail, 1);
}

#[test]
fn test_orphan_records_are_excluded() {
    let d = today();
    let habits = vec![habit("g1", HabitType::Good)];
    let records = vec![
        HabitRecord::success("g1", d),
        HabitRecord::fail("ghost", d),
        HabitRecord::success("ghost", ago(1)),
    ];

    let stats = day_stats(d, &habits, &records);
    assert_eq!(stats.total(), 1);

    let totals = total_stats(&habits, &records, 30, today());
    assert_eq!(totals.total_success, 1);
    assert_eq!(totals.total_fails, 0);
    assert_eq!(totals.consistency, 100);
}

#[test]
fn test_total_stats() {
    let habits = vec![habit("g1", HabitType::Good), habit("b1", HabitType::Bad)];
    let mut records = successes("g1", 0..3);
    records.extend(successes("b1", [0]));
    records.push(HabitRecord::fail("b1", ago(1)));

    let totals = total_stats(&habits, &records, 30, today());
    assert_eq!(totals.total_streaks, 4);
    assert_eq!(totals.total_success, 4);
    assert_eq!(totals.total_fails, 1);
    assert_eq!(totals.consistency, 80);

    let empty = total_stats(&[], &[], 30, today());
    assert_eq!(empty.consistency, 0);
}

#[test]
fn test_day_progress() {
    let habits = vec![
        habit("a", HabitType::Good),
        habit("b", HabitType::Good),
        habit("c", HabitType::Bad),
    ];
    let records = vec![HabitRecord::success("a", today()), HabitRecord::fail("c", today())];

    let p = day_progress(&habits, &records, today());
    assert_eq!((p.completed, p.failed, p.pending), (1, 1, 1));
}

#[test]
fn test_heatmap_is_oldest_first() {
    let records = vec![HabitRecord::success("h1", today()), HabitRecord::fail("h1", ago(2))];

    let cells = habit_heatmap("h1", &records, 3, today());
    assert_eq!(
        cells,
        vec![
            (ago(2), CellState::Fail),
            (ago(1), CellState::Pending),
            (today(), CellState::Success),
        ]
    );
}

#[test]
fn test_goal_progress_is_capped() {
    assert_eq!(goal_progress(5.0, 10.0), 50);
    assert_eq!(goal_progress(15.0, 10.0), 100);
    assert_eq!(goal_progress(5.0, 0.0), 0);
}

// ---------------------------
// Trends and insights
// ---------------------------

#[test]
fn test_trend_direction() {
    let up: Vec<f64> = [1.0; 7].iter().chain([2.0; 7].iter()).copied().collect();
    let down: Vec<f64> = [2.0; 7].iter().chain([1.0; 7].iter()).copied().collect();
    let flat = vec![3.0; 14];

    assert_eq!(trend(&up), Trend::Up);
    assert_eq!(trend(&down), Trend::Down);
    assert_eq!(trend(&flat), Trend::Stable);
    assert_eq!(trend(&[1.0]), Trend::Stable);
}

#[test]
fn test_trend_from_zero_baseline() {
    let mut values = vec![0.0; 7];
    values.extend([1.0; 7]);
    assert_eq!(trend(&values), Trend::Up);

    assert_eq!(trend(&[0.0; 14]), Trend::Stable);
}

#[test]
fn test_trend_series_and_weekly_buckets() {
    let habits = vec![habit("g1", HabitType::Good), habit("b1", HabitType::Bad)];
    let mut records = successes("g1", [0, 1, 8]);
    records.push(HabitRecord::fail("b1", ago(27)));
    records.push(HabitRecord::fail("b1", ago(28)));

    let series = trend_series(&habits, &records, 14, today());
    assert_eq!(series.len(), 14);
    assert_eq!(series.first().map(|d| d.date), Some(ago(13)));
    assert_eq!(series.last().map(|d| d.successes()), Some(1));

    let weeks = weekly_buckets(&habits, &records, today());
    let labels: Vec<&str> = weeks.iter().map(|w| w.label.as_str()).collect();
    assert_eq!(labels, ["T1", "T2", "T3", "T4"]);
    assert_eq!((weeks[0].success, weeks[0].fail), (0, 1));
    assert_eq!(weeks[2].success, 1);
    assert_eq!(weeks[3].success, 2);
}

#[test]
fn test_critical_bad_habits_top_three() {
    let habits = vec![
        habit("b1", HabitType::Bad),
        habit("b2", HabitType::Bad),
        habit("b3", HabitType::Bad),
        habit("b4", HabitType::Bad),
        habit("g1", HabitType::Good),
    ];
    let mut records = Vec::new();
    for (id, fails) in [("b1", 1), ("b2", 4), ("b3", 2), ("b4", 3), ("g1", 9)] {
        records.extend((0..fails).map(|n| HabitRecord::fail(id, ago(n))));
    }

    let critical = critical_bad_habits(&habits, &records, 30, today());
    let ids: Vec<(&str, u32)> = critical.iter().map(|(h, n)| (h.id.as_str(), *n)).collect();
    assert_eq!(ids, [("b2", 4), ("b4", 3), ("b3", 2)]);
}

// ---------------------------
// Measurements
// ---------------------------

#[test]
fn test_measurement_summary_for_simple_habit_is_none() {
    let h = habit("h1", HabitType::Good);
    assert!(measurement_summary(&h, &[], today()).is_none());
}

#[test]
fn test_measurement_summary() {
    let mut h = habit("run", HabitType::Good);
    h.tracking = Tracking::Measurable {
        unit: MeasurementUnit::Km,
        label: None,
        goal: Some(5.0),
        time: Some(TimeTracking { goal_seconds: None }),
    };

    let records = vec![
        HabitRecord::success("run", ago(0)).with_measurement(5.0, Some(1500)),
        HabitRecord::success("run", ago(1)).with_measurement(10.0, Some(3600)),
        HabitRecord::success("run", ago(9)).with_measurement(3.0, None),
        // no value: ignored
        HabitRecord::success("run", ago(2)),
    ];

    let m = measurement_summary(&h, &records, today()).unwrap();
    assert_eq!(m.values, vec![3.0, 10.0, 5.0]);
    assert_eq!(m.total, 18.0);
    assert_eq!(m.average, 6.0);
    assert_eq!(m.best, 10.0);
    assert_eq!(m.total_time, 5100);
    assert_eq!(m.avg_time, 2550.0);
    // 300 s/km and 360 s/km
    assert_eq!(m.best_pace, 300.0);
    assert_eq!(m.avg_pace, 330.0);
    assert_eq!(m.weekly, [0.0, 0.0, 3.0, 15.0]);
    assert_eq!(m.weekly_time, [0, 0, 0, 5100]);
}

#[test]
fn test_measurement_summary_saturates_huge_times() {
    let mut h = habit("run", HabitType::Good);
    h.tracking = Tracking::Measurable {
        unit: MeasurementUnit::Km,
        label: None,
        goal: None,
        time: Some(TimeTracking { goal_seconds: None }),
    };

    let records = vec![
        HabitRecord::success("run", ago(0)).with_measurement(1.0, Some(u64::MAX)),
        HabitRecord::success("run", ago(1)).with_measurement(1.0, Some(u64::MAX)),
    ];

    let m = measurement_summary(&h, &records, today()).unwrap();
    assert_eq!(m.total_time, u64::MAX);
    assert_eq!(m.weekly_time[3], u64::MAX);
}
