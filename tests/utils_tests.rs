use chrono::{Datelike, Weekday};
use rhabits::models::habit::{TimeTracking, Tracking};
use rhabits::models::habit_type::HabitType;
use rhabits::models::unit::MeasurementUnit;
use rhabits::utils::date::{
    calendar_grid, day_key, in_window, is_same_month, last_n_days, parse_date, parse_month, window_start,
};
use rhabits::utils::formatting::{describe_tracking, format_pace, format_value, progress_bar};
use rhabits::utils::table::{Column, Table, pad_right, visible_width};
use rhabits::utils::time::{MAX_DURATION_SECS, parse_duration, parse_optional_duration, parse_value};
use rhabits::utils::{format_time_compact, format_time_display};

mod common;
use common::{day, habit};

#[test]
fn test_day_key_sorts_chronologically() {
    let mut keys = vec![
        day_key(day("2025-10-02")),
        day_key(day("2024-12-31")),
        day_key(day("2025-01-09")),
    ];
    keys.sort();
    assert_eq!(keys, ["2024-12-31", "2025-01-09", "2025-10-02"]);
}

#[test]
fn test_parse_date_and_month() {
    assert_eq!(parse_date(" 2025-02-28 "), Some(day("2025-02-28")));
    assert_eq!(parse_date("2025-02-30"), None);
    assert_eq!(parse_month("2025-02"), Some(day("2025-02-01")));
    assert_eq!(parse_month("2025-13"), None);
}

#[test]
fn test_calendar_grid_is_monday_first_full_weeks() {
    for anchor in ["2025-02-10", "2025-06-15", "2024-09-01", "2026-03-31"] {
        let anchor = day(anchor);
        let grid = calendar_grid(anchor);

        assert_eq!(grid.len() % 7, 0);
        assert_eq!(grid.first().map(|d| d.weekday()), Some(Weekday::Mon));
        assert_eq!(grid.last().map(|d| d.weekday()), Some(Weekday::Sun));
        assert!(grid.contains(&anchor.with_day(1).unwrap()));
        assert!(grid.windows(2).all(|w| w[0].succ_opt() == Some(w[1])));
    }
}

#[test]
fn test_calendar_grid_of_month_starting_on_monday() {
    // September 2025 starts on a Monday and ends on a Tuesday
    let grid = calendar_grid(day("2025-09-17"));

    assert_eq!(grid.first(), Some(&day("2025-09-01")));
    assert_eq!(grid.last(), Some(&day("2025-10-05")));
    assert_eq!(grid.iter().filter(|d| is_same_month(**d, day("2025-09-01"))).count(), 30);
}

#[test]
fn test_last_n_days_and_window() {
    let today = day("2025-03-01");
    let days = last_n_days(3, today);
    assert_eq!(days, [day("2025-02-27"), day("2025-02-28"), day("2025-03-01")]);
    assert!(last_n_days(0, today).is_empty());

    assert_eq!(window_start(30, today), day("2025-01-31"));
    assert!(in_window(day("2025-01-31"), 30, today));
    assert!(!in_window(day("2025-01-30"), 30, today));
    assert!(!in_window(day("2025-03-02"), 30, today));
    assert!(!in_window(today, 0, today));
}

#[test]
fn test_parse_duration_forms() {
    assert_eq!(parse_duration("1:02:03"), Some(3723));
    assert_eq!(parse_duration("25:30"), Some(1530));
    assert_eq!(parse_duration("90"), Some(90));
    assert_eq!(parse_duration("1:75"), None);
    assert_eq!(parse_duration("abc"), None);

    // overflowing or absurd input is rejected, not wrapped
    assert_eq!(parse_duration("9999999999999999:00:00"), None);
    assert_eq!(parse_duration("999999999999999999:00"), None);
    assert_eq!(parse_duration("18446744073709551615"), None);
    assert_eq!(parse_duration(&MAX_DURATION_SECS.to_string()), Some(MAX_DURATION_SECS));

    assert_eq!(parse_optional_duration(Some(&"0:00".to_string())).unwrap(), None);
    assert_eq!(parse_optional_duration(None).unwrap(), None);
    assert!(parse_optional_duration(Some(&"x".to_string())).is_err());
}

#[test]
fn test_parse_value_rejects_bad_input() {
    assert_eq!(parse_value("5,5").unwrap(), 5.5);
    assert_eq!(parse_value(" 12 ").unwrap(), 12.0);
    assert!(parse_value("-1").is_err());
    assert!(parse_value("ten").is_err());
    assert!(parse_value("NaN").is_err());
}

#[test]
fn test_time_and_value_formatting() {
    assert_eq!(format_time_display(3723), "1h 2m 3s");
    assert_eq!(format_time_display(59), "59s");
    assert_eq!(format_time_compact(3723), "1h 2m");
    assert_eq!(format_pace(330.0), "5:30");
    assert_eq!(format_value(5.0), "5");
    assert_eq!(format_value(5.26), "5.3");
    assert_eq!(progress_bar(50, 10), "[#####-----]");
    assert_eq!(progress_bar(250, 4), "[####]");
}

#[test]
fn test_describe_tracking() {
    assert_eq!(describe_tracking(&Tracking::Simple), "-");

    let run = Tracking::Measurable {
        unit: MeasurementUnit::Km,
        label: None,
        goal: Some(5.0),
        time: Some(TimeTracking {
            goal_seconds: Some(1800),
        }),
    };
    assert_eq!(describe_tracking(&run), "km (goal 5) + time (goal 30m 0s)");

    let custom = Tracking::Measurable {
        unit: MeasurementUnit::Custom,
        label: Some("cups".into()),
        goal: None,
        time: None,
    };
    assert_eq!(describe_tracking(&custom), "cups");
}

#[test]
fn test_table_width_ignores_ansi_and_counts_wide_glyphs() {
    assert_eq!(visible_width("\x1b[32mok\x1b[0m"), 2);
    assert_eq!(visible_width("🚬"), 2);
    assert_eq!(pad_right("ab", 4), "ab  ");

    let mut table = Table::new(vec![Column::new("A", 1), Column::new("B", 1)]);
    table.add_row(vec!["long cell".into(), "x".into()]);
    let out = table.render("=");

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("A         B"));
    assert_eq!(lines[1], "=".repeat(12));
}

#[test]
fn test_short_id_cuts_on_char_boundaries() {
    let mut h = habit("0123456789abcdef", HabitType::Good);
    assert_eq!(h.short_id(), "01234567");

    h.id = "héllo-wörld-ütf8".into();
    assert_eq!(h.short_id(), "héllo-wö");

    h.id = "äbc".into();
    assert_eq!(h.short_id(), "äbc");
}
