//! Formatting utilities used for CLI and export outputs.

use crate::models::habit::Tracking;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// `1h 2m 3s`, `2m 3s` or `3s`.
pub fn format_time_display(total_seconds: u64) -> String {
    let h = total_seconds / 3600;
    let m = (total_seconds % 3600) / 60;
    let s = total_seconds % 60;
    if h > 0 {
        format!("{}h {}m {}s", h, m, s)
    } else if m > 0 {
        format!("{}m {}s", m, s)
    } else {
        format!("{}s", s)
    }
}

/// `1h 2m` or `2m`, used in stats where seconds are noise.
pub fn format_time_compact(total_seconds: u64) -> String {
    let h = total_seconds / 3600;
    let m = (total_seconds % 3600) / 60;
    if h > 0 {
        format!("{}h {}m", h, m)
    } else {
        format!("{}m", m)
    }
}

/// Seconds per unit → `m:ss`.
pub fn format_pace(seconds_per_unit: f64) -> String {
    let total = seconds_per_unit.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Measurement value without a useless trailing `.0`.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.1}", v)
    }
}

/// Fixed-width bar, e.g. `[#####-----]` for 50 %.
pub fn progress_bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// One-line description of a habit's measurement setup.
pub fn describe_tracking(tracking: &Tracking) -> String {
    match tracking {
        Tracking::Simple => "-".to_string(),
        Tracking::Measurable { unit, goal, time, .. } => {
            let label = tracking.unit_label();
            let mut out = if label.is_empty() {
                unit.code().to_string()
            } else {
                label
            };
            if let Some(g) = goal {
                out.push_str(&format!(" (goal {})", format_value(*g)));
            }
            if let Some(t) = time {
                match t.goal_seconds {
                    Some(secs) => out.push_str(&format!(" + time (goal {})", format_time_display(secs))),
                    None => out.push_str(" + time"),
                }
            }
            out
        }
    }
}
