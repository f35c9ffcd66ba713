//! Time input parsing: elapsed durations typed as H:M:S, M:S or plain seconds.

use crate::errors::{AppError, AppResult};

/// Longest accepted duration: one year.
pub const MAX_DURATION_SECS: u64 = 366 * 24 * 3600;

/// Parse an elapsed duration into seconds.
///
/// Accepted forms: `1:02:03`, `2:03`, `123`. Minutes and seconds after the
/// first field must be below 60. Durations above `MAX_DURATION_SECS` are rejected.
pub fn parse_duration(s: &str) -> Option<u64> {
    let parts: Vec<&str> = s.trim().split(':').collect();
    let nums: Option<Vec<u64>> = parts.iter().map(|p| p.trim().parse::<u64>().ok()).collect();
    let nums = nums?;

    let secs = match nums.as_slice() {
        [secs] => Some(*secs),
        [m, s] if *s < 60 => m.checked_mul(60)?.checked_add(*s),
        [h, m, s] if *m < 60 && *s < 60 => h.checked_mul(3600)?.checked_add(m * 60 + s),
        _ => None,
    }?;

    (secs <= MAX_DURATION_SECS).then_some(secs)
}

/// Parse an optional duration; zero is treated as "no time recorded".
pub fn parse_optional_duration(input: Option<&String>) -> AppResult<Option<u64>> {
    match input {
        Some(s) => {
            let secs = parse_duration(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
            Ok((secs > 0).then_some(secs))
        }
        None => Ok(None),
    }
}

/// Parse a measurement value (accepts a decimal comma too).
pub fn parse_value(s: &str) -> AppResult<f64> {
    let v: f64 = s
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| AppError::InvalidValue(s.to_string()))?;

    if !v.is_finite() || v < 0.0 {
        return Err(AppError::InvalidValue(s.to_string()));
    }
    Ok(v)
}
