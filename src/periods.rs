//! Whole-period durations between instants
//!
//! A period is a fixed 30-day month, not a calendar month.

use chrono::{DateTime, Utc};

/// Days in one period
pub const DAYS_PER_PERIOD: i64 = 30;

const NANOS_PER_HOUR: f64 = 3_600_000_000_000.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Number of whole periods from `from` to `to`
///
/// `floor(hours(to - from) / 24 / 30)`. Negative when `to` precedes `from`,
/// rounding toward negative infinity.
pub fn periods_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let elapsed = to - from;
    // Nanosecond counts overflow past roughly 292 years
    let hours = match elapsed.num_nanoseconds() {
        Some(nanos) => nanos as f64 / NANOS_PER_HOUR,
        None => elapsed.num_milliseconds() as f64 / MILLIS_PER_HOUR,
    };
    (hours / 24.0 / DAYS_PER_PERIOD as f64).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_whole_periods() {
        assert_eq!(periods_between(instant(2023, 1, 1), instant(2023, 1, 31)), 1);
        assert_eq!(periods_between(instant(2023, 1, 1), instant(2023, 1, 30)), 0);
        // 181 days
        assert_eq!(periods_between(instant(2023, 1, 1), instant(2023, 7, 1)), 6);
        // 365 days
        assert_eq!(periods_between(instant(2023, 1, 1), instant(2024, 1, 1)), 12);
    }

    #[test]
    fn test_same_instant() {
        let t = instant(2024, 2, 29);
        assert_eq!(periods_between(t, t), 0);
    }

    #[test]
    fn test_sub_millisecond_negative_duration() {
        let t = instant(2023, 1, 1);
        assert_eq!(periods_between(t, t - chrono::Duration::nanoseconds(1)), -1);
        assert_eq!(periods_between(t, t + chrono::Duration::nanoseconds(1)), 0);
    }

    #[test]
    fn test_centuries_apart() {
        assert_eq!(periods_between(instant(1700, 1, 1), instant(2100, 1, 1)), 4869);
    }

    #[test]
    fn test_negative_durations_floor_down() {
        // -1 day floors to -1 period
        assert_eq!(periods_between(instant(2023, 1, 2), instant(2023, 1, 1)), -1);
        // -181 days
        assert_eq!(periods_between(instant(2023, 7, 1), instant(2023, 1, 1)), -7);
    }
}
