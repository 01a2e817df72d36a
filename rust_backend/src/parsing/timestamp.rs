use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Date-time layouts accepted in weigh-in sheets, most specific first.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Date-only layouts. Slash dates are read month-first, then day-first.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %B %Y",
];

/// Parse a calendar date or date-time.
///
/// Offsets in RFC 3339 input are normalised to UTC. Bare numbers such as
/// `"10"` or `"20250101"` are rejected so that day-index columns fall
/// through to numeric handling.
///
/// # Arguments
/// * `input` - Raw cell text
///
/// # Returns
/// * `Some(NaiveDateTime)` if any supported layout matches
/// * `None` otherwise
pub fn parse_calendar(input: &str) -> Option<NaiveDateTime> {
    let s = input.trim();
    if s.is_empty() || !s.chars().any(|c| matches!(c, '-' | '/' | ' ' | ',')) {
        return None;
    }
    if parse_number(s).is_some() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Parse a finite number from cell text. `NaN` and infinities are rejected.
pub fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Elapsed time from `from` to `to` in fractional days.
pub fn elapsed_days(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_milliseconds() as f64 / MILLIS_PER_DAY
}
