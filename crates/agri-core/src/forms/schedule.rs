//! Minimum value for the demo scheduling field

use chrono::{Local, NaiveDateTime};

/// Format used by `<input type="datetime-local">`
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// `min` attribute for a scheduling input rendered at `now`
pub fn min_datetime(now: NaiveDateTime) -> String {
    now.format(DATETIME_LOCAL_FORMAT).to_string()
}

/// Shown when a past time slips past the widget
pub const PAST_SCHEDULE_MESSAGE: &str = "Please choose a date and time in the future";

pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// `min` attribute computed from the current local time
pub fn local_min_datetime() -> String {
    min_datetime(local_now())
}

/// Parse a widget value; browsers may include seconds
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, DATETIME_LOCAL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Whether `value` is an acceptable choice at `now`. The comparison is at
/// minute precision, matching the widget.
pub fn is_at_or_after_min(value: &str, now: NaiveDateTime) -> bool {
    let Some(chosen) = parse_datetime_local(value) else {
        return false;
    };
    let floor = NaiveDateTime::parse_from_str(&min_datetime(now), DATETIME_LOCAL_FORMAT)
        .unwrap_or(now);
    chosen >= floor
}

/// Check an optional scheduling value. Blank is accepted; anything else must
/// parse and not be earlier than the widget minimum.
pub fn check_schedule(value: &str, now: NaiveDateTime) -> Option<&'static str> {
    if value.trim().is_empty() || is_at_or_after_min(value, now) {
        None
    } else {
        Some(PAST_SCHEDULE_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 10)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_min_datetime_format() {
        assert_eq!(min_datetime(at(9, 5, 59)), "2025-12-10T09:05");
    }

    #[test]
    fn test_earlier_values_rejected() {
        let now = at(14, 30, 20);
        assert!(!is_at_or_after_min("2025-12-10T14:29", now));
        assert!(is_at_or_after_min("2025-12-10T14:30", now));
        assert!(is_at_or_after_min("2025-12-11T08:00", now));
    }

    #[test]
    fn test_unparseable_value_rejected() {
        assert!(!is_at_or_after_min("tomorrow", at(8, 0, 0)));
        assert!(!is_at_or_after_min("", at(8, 0, 0)));
    }

    #[test]
    fn test_seconds_are_accepted() {
        assert_eq!(
            parse_datetime_local("2025-12-10T09:05:30"),
            Some(at(9, 5, 30))
        );
    }

    #[test]
    fn test_check_schedule() {
        let now = at(10, 0, 0);
        assert_eq!(check_schedule("", now), None);
        assert_eq!(check_schedule("2025-12-10T10:00", now), None);
        assert_eq!(check_schedule("2025-12-09T18:00", now), Some(PAST_SCHEDULE_MESSAGE));
        assert_eq!(check_schedule("soon", now), Some(PAST_SCHEDULE_MESSAGE));
    }

    #[test]
    fn test_local_min_is_well_formed() {
        let min = local_min_datetime();
        assert!(parse_datetime_local(&min).is_some());
    }
}
