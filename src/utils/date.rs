//! Calendar and window helpers shared by the statistics engine and the views.

use chrono::{Datelike, Days, Months, NaiveDate};

const WEEKDAYS_SHORT: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Canonical sortable form of a calendar day (`YYYY-MM-DD`).
/// Lexicographic order of keys equals chronological order.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `YYYY-MM` → first day of that month.
pub fn parse_month(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&(s.trim().to_string() + "-01"), "%Y-%m-%d").ok()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(date)
}

/// Every day of the month grid around `anchor`, Monday first, padded with
/// the days of the adjacent months needed to complete full weeks.
pub fn calendar_grid(anchor: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(anchor);
    let last = last_of_month(anchor);

    let lead = u64::from(first.weekday().num_days_from_monday());
    let trail = 6 - u64::from(last.weekday().num_days_from_monday());

    let start = first.checked_sub_days(Days::new(lead)).unwrap_or(first);
    let end = last.checked_add_days(Days::new(trail)).unwrap_or(last);

    start.iter_days().take_while(|d| *d <= end).collect()
}

/// The `n` calendar days ending at and including `end`, oldest first.
pub fn last_n_days(n: usize, end: NaiveDate) -> Vec<NaiveDate> {
    (0..n as u64)
        .rev()
        .filter_map(|i| end.checked_sub_days(Days::new(i)))
        .collect()
}

/// First day of the trailing `window_days` window ending at `today`.
/// A zero-length window starts after today, so it contains nothing.
pub fn window_start(window_days: u32, today: NaiveDate) -> NaiveDate {
    if window_days == 0 {
        return today.succ_opt().unwrap_or(today);
    }
    today
        .checked_sub_days(Days::new(u64::from(window_days) - 1))
        .unwrap_or(NaiveDate::MIN)
}

pub fn in_window(date: NaiveDate, window_days: u32, today: NaiveDate) -> bool {
    date >= window_start(window_days, today) && date <= today
}

pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Whole days from `from` to `to` (positive when `to` is later).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

pub fn month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Monday-first short weekday label (0 = Monday).
pub fn weekday_short(index: usize) -> &'static str {
    WEEKDAYS_SHORT.get(index).copied().unwrap_or("")
}

pub fn display_date(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}
