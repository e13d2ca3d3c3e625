//! ISO 8601 duration parsing and formatting.
//!
//! Converts between ISO 8601 duration strings (`P3DT2H30M`, `-PT90S`,
//! `PT1.500S`) and [`chrono::TimeDelta`]. Years and months use fixed
//! 365-day and 30-day factors; weeks are 7 days.

use chrono::TimeDelta;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;
const SECONDS_PER_MONTH: i64 = 30 * SECONDS_PER_DAY;
const SECONDS_PER_YEAR: i64 = 365 * SECONDS_PER_DAY;

/// Error type for ISO 8601 duration parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationParseError {
    pub message: String,
}

impl std::fmt::Display for DurationParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DurationParseError {}

fn invalid(input: &str) -> DurationParseError {
    DurationParseError {
        message: format!("Invalid ISO 8601 duration: {}", input),
    }
}

fn overflow(input: &str) -> DurationParseError {
    DurationParseError {
        message: format!("Duration out of range: {}", input),
    }
}

/// Parses an ISO 8601 duration string into a [`TimeDelta`].
///
/// Accepts an optional leading sign, the date designators Y/M/W/D and
/// the time designators H/M/S after `T`. A fractional component is
/// accepted only on seconds and is kept to millisecond precision.
pub fn parse_duration(input: &str) -> Result<TimeDelta, DurationParseError> {
    let (negative, rest) = match input.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    let body = rest.strip_prefix('P').ok_or_else(|| invalid(input))?;
    if body.is_empty() {
        return Err(invalid(input));
    }

    let mut seconds: i64 = 0;
    let mut millis: i64 = 0;
    let mut in_time = false;
    let mut saw_component = false;
    let mut number = String::new();

    for c in body.chars() {
        match c {
            '0'..='9' | '.' => number.push(c),
            'T' if !in_time && number.is_empty() => in_time = true,
            _ => {
                if number.is_empty() {
                    return Err(invalid(input));
                }
                let factor = match (c, in_time) {
                    ('Y', false) => SECONDS_PER_YEAR,
                    ('M', false) => SECONDS_PER_MONTH,
                    ('W', false) => SECONDS_PER_WEEK,
                    ('D', false) => SECONDS_PER_DAY,
                    ('H', true) => SECONDS_PER_HOUR,
                    ('M', true) => SECONDS_PER_MINUTE,
                    ('S', true) => 1,
                    _ => return Err(invalid(input)),
                };

                if let Some((int_part, frac_part)) = number.split_once('.') {
                    // Fractions are only meaningful on the seconds field.
                    if c != 'S' {
                        return Err(invalid(input));
                    }
                    let whole: i64 = int_part.parse().map_err(|_| invalid(input))?;
                    millis = millis
                        .checked_add(parse_fractional_millis(frac_part, input)?)
                        .ok_or_else(|| overflow(input))?;
                    seconds = whole
                        .checked_mul(factor)
                        .and_then(|s| seconds.checked_add(s))
                        .ok_or_else(|| overflow(input))?;
                } else {
                    let value: i64 = number.parse().map_err(|_| invalid(input))?;
                    seconds = value
                        .checked_mul(factor)
                        .and_then(|s| seconds.checked_add(s))
                        .ok_or_else(|| overflow(input))?;
                }

                saw_component = true;
                number.clear();
            }
        }
    }

    // Trailing digits with no designator, or a bare "PT".
    if !number.is_empty() || !saw_component {
        return Err(invalid(input));
    }

    let total_millis = seconds
        .checked_mul(1000)
        .and_then(|ms| ms.checked_add(millis))
        .ok_or_else(|| overflow(input))?;
    let signed = if negative { -total_millis } else { total_millis };

    TimeDelta::try_milliseconds(signed).ok_or_else(|| overflow(input))
}

fn parse_fractional_millis(frac: &str, input: &str) -> Result<i64, DurationParseError> {
    if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(input));
    }
    // Keep the first three fractional digits (millisecond precision).
    let mut digits: String = frac.chars().take(3).collect();
    while digits.len() < 3 {
        digits.push('0');
    }
    digits.parse().map_err(|_| invalid(input))
}

/// Formats a [`TimeDelta`] as an ISO 8601 duration string.
///
/// Emits days, hours, minutes and seconds (`P1DT2H3M4S`); sub-second
/// precision is emitted as fractional seconds. The zero duration
/// formats as `PT0S`.
pub fn format_duration(duration: TimeDelta) -> String {
    let total_millis = duration.num_milliseconds();
    if total_millis == 0 {
        return "PT0S".to_string();
    }

    let sign = if total_millis < 0 { "-" } else { "" };
    let abs = total_millis.unsigned_abs();

    let millis = abs % 1000;
    let total_seconds = abs / 1000;
    let days = total_seconds / SECONDS_PER_DAY as u64;
    let hours = (total_seconds % SECONDS_PER_DAY as u64) / SECONDS_PER_HOUR as u64;
    let minutes = (total_seconds % SECONDS_PER_HOUR as u64) / SECONDS_PER_MINUTE as u64;
    let seconds = total_seconds % SECONDS_PER_MINUTE as u64;

    let mut out = format!("{}P", sign);
    if days > 0 {
        out.push_str(&format!("{}D", days));
    }

    if hours > 0 || minutes > 0 || seconds > 0 || millis > 0 {
        out.push('T');
        if hours > 0 {
            out.push_str(&format!("{}H", hours));
        }
        if minutes > 0 {
            out.push_str(&format!("{}M", minutes));
        }
        if millis > 0 {
            let frac = format!("{:03}", millis);
            let frac = frac.trim_end_matches('0');
            out.push_str(&format!("{}.{}S", seconds, frac));
        } else if seconds > 0 {
            out.push_str(&format!("{}S", seconds));
        }
    }

    out
}
