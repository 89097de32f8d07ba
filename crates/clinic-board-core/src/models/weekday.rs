//! Weekday names as shown on the schedule.

use chrono::{Datelike, Local, Weekday};

/// Day names indexed by days from Sunday.
pub const DAY_NAMES: [&str; 7] = [
    "Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu",
];

/// Display name of a weekday.
pub fn day_name(day: Weekday) -> &'static str {
    DAY_NAMES[day.num_days_from_sunday() as usize]
}

/// Parse a display name back into a weekday (case-insensitive).
pub fn parse_day_name(name: &str) -> Option<Weekday> {
    let name = name.trim();
    DAY_NAMES
        .iter()
        .position(|d| d.eq_ignore_ascii_case(name))
        .map(|idx| (0..idx).fold(Weekday::Sun, |day, _| day.succ()))
}

/// Today's weekday on the local clock. Never cached.
pub fn today() -> Weekday {
    Local::now().weekday()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_name_table() {
        assert_eq!(day_name(Weekday::Sun), "Minggu");
        assert_eq!(day_name(Weekday::Mon), "Senin");
        assert_eq!(day_name(Weekday::Wed), "Rabu");
        assert_eq!(day_name(Weekday::Sat), "Sabtu");
    }

    #[test]
    fn test_parse_day_name() {
        assert_eq!(parse_day_name("Senin"), Some(Weekday::Mon));
        assert_eq!(parse_day_name(" jumat "), Some(Weekday::Fri));
        assert_eq!(parse_day_name("Minggu"), Some(Weekday::Sun));
        assert_eq!(parse_day_name("Monday"), None);
    }

    #[test]
    fn test_parse_round_trips_every_day() {
        for name in DAY_NAMES {
            let day = parse_day_name(name).unwrap();
            assert_eq!(day_name(day), name);
        }
    }

    #[test]
    fn test_calendar_date() {
        // 2024-01-01 was a Monday
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(day_name(date.weekday()), "Senin");
    }
}
